use std::path::PathBuf;

use clap::Parser;

/// Chart how lifts progress across a personal workout log.
#[derive(Debug, Parser)]
#[command(name = "liftlog", version)]
pub struct Cli {
    /// Comma-separated exercise names, e.g. "bench,squat"
    pub exercises: Option<String>,

    /// Only use sessions from this month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Workout log to read
    #[arg(long, default_value = liftlog_storage::DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Write series json here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the exercise names found in the log and exit
    #[arg(long, conflicts_with = "exercises")]
    pub list: bool,

    /// Show debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short)]
    pub quiet: bool,
}
