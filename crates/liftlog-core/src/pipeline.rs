//! # pipeline
//!
//! why: one entry point from a loaded log to the series of every requested exercise
//! relations: composes model.rs, history.rs and series.rs; called by liftlog-cli
//! what: ChartRequest, build_charts()

use crate::error::RequestError;
use crate::history::{extract, ExerciseHistory};
use crate::model::WorkoutLog;
use crate::series::MetricSeries;

/// Which exercises to chart, optionally limited to one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub exercises: Vec<String>,
    pub month: Option<u32>,
}

impl ChartRequest {
    /// Build a request from a comma-separated name list such as `"bench,squat"`
    pub fn from_list(list: &str, month: Option<u32>) -> Result<Self, RequestError> {
        let mut exercises: Vec<String> = Vec::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !exercises.iter().any(|e| e == name) {
                exercises.push(name.to_string());
            }
        }

        if exercises.is_empty() {
            return Err(RequestError::NoExercises);
        }
        Ok(Self { exercises, month })
    }
}

/// Series for every requested exercise, in request order
pub fn build_charts(
    log: &WorkoutLog,
    request: &ChartRequest,
) -> Result<Vec<MetricSeries>, RequestError> {
    if request.exercises.is_empty() {
        return Err(RequestError::NoExercises);
    }

    let filtered;
    let log = match request.month {
        Some(month) => {
            filtered = log.in_month(month)?;
            &filtered
        }
        None => log,
    };

    let histories = extract(log, &request.exercises);
    let empty = ExerciseHistory::new();
    Ok(request
        .exercises
        .iter()
        .map(|name| MetricSeries::build(name.as_str(), histories.get(name).unwrap_or(&empty)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateFormatError;

    #[test]
    fn splits_and_trims_names() {
        let request = ChartRequest::from_list(" bench , squat,,bench ", None).unwrap();
        assert_eq!(request.exercises, vec!["bench", "squat"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(ChartRequest::from_list("", None), Err(RequestError::NoExercises));
        assert_eq!(ChartRequest::from_list(" , ", None), Err(RequestError::NoExercises));
    }

    #[test]
    fn invalid_month_is_rejected() {
        let request = ChartRequest::from_list("bench", Some(0)).unwrap();
        assert_eq!(
            build_charts(&WorkoutLog::default(), &request),
            Err(RequestError::Month(DateFormatError::Month(0)))
        );
    }
}
