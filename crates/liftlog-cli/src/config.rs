use std::path::PathBuf;

use liftlog_core::{ChartRequest, RequestError};
use liftlog_storage::DEFAULT_LOG_PATH;

use crate::cli::Cli;

/// What a single run should do, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// print the exercise names in the log
    List,
    /// chart the requested exercises
    Chart(ChartRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub log_path: PathBuf,
    pub output: Option<PathBuf>,
    pub mode: Mode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            output: None,
            mode: Mode::List,
        }
    }
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, RequestError> {
        let mode = if cli.list {
            Mode::List
        } else {
            let names = cli.exercises.as_deref().unwrap_or_default();
            Mode::Chart(ChartRequest::from_list(names, cli.month)?)
        };

        Ok(Self {
            log_path: cli.log.clone(),
            output: cli.output.clone(),
            mode,
        })
    }
}
