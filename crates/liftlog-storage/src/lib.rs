//! # liftlog-storage
//!
//! why: read the workout log and hand computed series to the renderer using standard rust fs apis
//! relations: builds liftlog-core's WorkoutLog, used by liftlog-cli
//! what: LogSource trait, FileLogSource, InMemoryLogSource, write_series

use liftlog_core::{LoadError, MetricSeries, WorkoutLog};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default location of the log, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "./log.json";

/// errors raised while reading a log or writing series
#[derive(Debug, Error)]
pub enum StorageError {
    /// the file could not be read or written
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// the file was read but its contents are not a valid log
    #[error("could not load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// series could not be encoded
    #[error("could not encode series: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// trait for anything a workout log can be loaded from
///
/// this abstraction allows the same pipeline to work with:
/// - a json file on disk (normal runs)
/// - an in-memory document (testing)
pub trait LogSource {
    /// human readable origin, used in error messages and logs
    fn describe(&self) -> String;

    /// load and validate the whole log; nothing is returned on partial failure
    fn load(&self) -> Result<WorkoutLog, StorageError>;
}

// -- file source implementation --

/// file-based log source using std::fs
pub struct FileLogSource {
    /// path to the json log file
    path: PathBuf,
}

impl FileLogSource {
    /// create a source reading from the given path; the file is not touched until load
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileLogSource {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl LogSource for FileLogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<WorkoutLog, StorageError> {
        let bytes = fs::read(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read log file");

        WorkoutLog::from_json_slice(&bytes).map_err(|source| StorageError::Load {
            path: self.path.clone(),
            source,
        })
    }
}

// -- in-memory source implementation --

/// in-memory log source for testing
#[derive(Default)]
pub struct InMemoryLogSource {
    json: String,
}

impl InMemoryLogSource {
    /// create a source over the given json document
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl LogSource for InMemoryLogSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<WorkoutLog, StorageError> {
        WorkoutLog::from_json_str(&self.json).map_err(|source| StorageError::Load {
            path: PathBuf::from(self.describe()),
            source,
        })
    }
}

// -- series output --

/// encode series as pretty json, the handoff format for the renderer
pub fn series_to_json(series: &[MetricSeries]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(series)?)
}

/// write series to `path`
///
/// atomic write: write to a temp file beside the target then rename, so a
/// renderer watching the file never sees half a document
pub fn write_series(path: &Path, series: &[MetricSeries]) -> Result<(), StorageError> {
    let json = series_to_json(series)?;

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = File::create(&temp_path).map_err(|e| StorageError::io(&temp_path, e))?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| StorageError::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

    debug!(path = %path.display(), charts = series.len(), "wrote series");
    Ok(())
}
