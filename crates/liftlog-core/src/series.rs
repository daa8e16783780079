//! # series
//!
//! why: a chart needs flat, aligned numeric series rather than grouped sets
//! relations: consumes history.rs and reps.rs, output handed to the renderer via liftlog-storage
//! what: MetricSeries, SeriesPoint, SeriesStats

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::history::ExerciseHistory;
use crate::reps::evaluate;

/// Chart-ready series for one exercise
///
/// `labels`, `weight`, `reps` and `volume` always have the same length and
/// index `i` in each refers to the same set. Points are in ascending date
/// order; a date label repeats once per set done that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub exercise: String,
    pub labels: Vec<String>,
    pub weight: Vec<f64>,
    pub reps: Vec<u32>,
    pub volume: Vec<f64>,
    /// Distinct session dates behind the points
    pub date_count: usize,
    /// Min, max and average marks for the weight line; `None` when there are no points
    pub weight_stats: Option<SeriesStats>,
    pub volume_stats: Option<SeriesStats>,
}

/// One aligned data point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint<'a> {
    pub label: &'a str,
    pub weight: f64,
    pub reps: u32,
    pub volume: f64,
}

/// Summary of one numeric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SeriesStats {
    fn of(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max, sum) = values
            .iter()
            .fold((first, first, 0.0), |(min, max, sum), &v| (min.min(v), max.max(v), sum + v));
        Some(Self {
            min,
            max,
            average: sum / values.len() as f64,
        })
    }
}

impl MetricSeries {
    pub fn build(exercise: impl Into<String>, history: &ExerciseHistory) -> Self {
        let capacity = history.set_count();
        let mut series = Self {
            exercise: exercise.into(),
            labels: Vec::with_capacity(capacity),
            weight: Vec::with_capacity(capacity),
            reps: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
            date_count: history.date_count(),
            weight_stats: None,
            volume_stats: None,
        };

        for (date, records) in history.iter_sorted() {
            let label = date.format();
            for record in records {
                let total_reps = evaluate(&record.reps);
                series.labels.push(label.clone());
                series.weight.push(record.weight);
                series.reps.push(total_reps);
                series.volume.push(record.weight * f64::from(total_reps));
            }
        }

        series.weight_stats = SeriesStats::of(&series.weight);
        series.volume_stats = SeriesStats::of(&series.volume);

        debug!(
            exercise = %series.exercise,
            points = series.len(),
            dates = series.date_count,
            "built metric series"
        );
        series
    }

    /// Number of points (sets)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = SeriesPoint<'_>> {
        self.labels
            .iter()
            .zip(&self.weight)
            .zip(&self.reps)
            .zip(&self.volume)
            .map(|(((label, &weight), &reps), &volume)| SeriesPoint {
                label,
                weight,
                reps,
                volume,
            })
    }
}
