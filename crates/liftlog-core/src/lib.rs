//! # liftlog-core
//!
//! why: turn a personal workout log into per-exercise progress series
//! relations: fed by liftlog-storage, driven by liftlog-cli, series handed to an external renderer
//! what: date codec, reps evaluator, log model, history extraction, series building

pub mod date;
pub mod error;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod reps;
pub mod series;

pub use date::LogDate;
pub use error::{DateFormatError, LoadError, RequestError};
pub use history::{extract, ExerciseHistory};
pub use model::{Session, SetGroup, SetRecord, WorkoutLog};
pub use pipeline::{build_charts, ChartRequest};
pub use reps::{evaluate, RepsShape, DEFAULT_TOTAL_REPS};
pub use series::{MetricSeries, SeriesPoint, SeriesStats};
