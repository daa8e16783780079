use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use liftlog_core::{build_charts, RequestError};
use liftlog_storage::{series_to_json, write_series, FileLogSource, LogSource};

mod cli;
mod config;

use config::{Mode, RunConfig};

fn main() {
    if let Err(error) = run() {
        eprintln!("liftlog error: {error:#}");
        let code = if error.is::<RequestError>() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = RunConfig::from_cli(&cli).map_err(|error| match error {
        RequestError::NoExercises => anyhow::Error::new(error)
            .context("missing exercise name to inspect, use `liftlog --list` to see which can be used"),
        other => anyhow::Error::new(other),
    })?;

    let stdout = io::stdout();
    execute(&config, &mut stdout.lock())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LIFTLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Load the log and either list its exercises or emit chart series
fn execute(config: &RunConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let source = FileLogSource::new(&config.log_path);
    let log = source
        .load()
        .with_context(|| format!("could not use workout log {}", source.describe()))?;

    match &config.mode {
        Mode::List => {
            for name in log.exercise_names() {
                writeln!(out, "{name}")?;
            }
        }
        Mode::Chart(request) => {
            let charts = build_charts(&log, request)?;
            for chart in charts.iter().filter(|c| c.is_empty()) {
                tracing::warn!(exercise = %chart.exercise, "no sets recorded for exercise");
            }

            match &config.output {
                Some(path) => write_series(path, &charts)?,
                None => writeln!(out, "{}", series_to_json(&charts)?)?,
            }
        }
    }

    Ok(())
}
