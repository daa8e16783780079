//! # history
//!
//! why: collect every set of an exercise across the log, grouped by day
//! relations: reads model.rs, feeds series.rs
//! what: ExerciseHistory, extract()

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::date::LogDate;
use crate::model::{SetRecord, WorkoutLog};

/// All sets of one exercise, keyed by session date
///
/// Dates are stored unordered; use [`ExerciseHistory::sorted_dates`] or
/// [`ExerciseHistory::iter_sorted`] when order matters. Sets within a date keep
/// their log order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseHistory {
    by_date: HashMap<LogDate, Vec<SetRecord>>,
}

impl ExerciseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a set performed on `date`
    pub fn push(&mut self, date: LogDate, record: SetRecord) {
        self.by_date.entry(date).or_default().push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Number of distinct dates
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    /// Number of set records across all dates
    pub fn set_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn sets_on(&self, date: &LogDate) -> &[SetRecord] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Distinct dates in ascending (month, day) order
    pub fn sorted_dates(&self) -> Vec<LogDate> {
        let mut dates: Vec<LogDate> = self.by_date.keys().copied().collect();
        dates.sort();
        dates
    }

    /// (date, sets) pairs in ascending date order
    pub fn iter_sorted(&self) -> impl Iterator<Item = (LogDate, &[SetRecord])> + '_ {
        self.sorted_dates()
            .into_iter()
            .map(move |date| (date, self.sets_on(&date)))
    }
}

/// Build a history for each requested exercise name.
///
/// Names match exactly (case-sensitive). Every requested name gets an entry,
/// empty when the log never mentions it; duplicate names collapse.
pub fn extract<I, S>(log: &WorkoutLog, names: I) -> BTreeMap<String, ExerciseHistory>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut histories: BTreeMap<String, ExerciseHistory> = names
        .into_iter()
        .map(|name| (name.as_ref().to_string(), ExerciseHistory::new()))
        .collect();

    for session in log.sessions() {
        for record in session.records() {
            if let Some(history) = histories.get_mut(&record.exercise_name) {
                history.push(session.date, record.clone());
            }
        }
    }

    for (name, history) in &histories {
        debug!(
            exercise = %name,
            dates = history.date_count(),
            sets = history.set_count(),
            "extracted exercise history"
        );
    }

    histories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Session, SetGroup};

    fn group(label: &str, record: SetRecord) -> SetGroup {
        SetGroup::from([(label.to_string(), record)])
    }

    fn date(day: u32, month: u32) -> LogDate {
        LogDate::new(day, month).unwrap()
    }

    fn sample_log() -> WorkoutLog {
        WorkoutLog::new(vec![
            Session::new(
                date(12, 1),
                vec![
                    group("1", SetRecord::new("bench", 65.0, "5-8")),
                    group("2", SetRecord::new("row", 50.0, "3*10")),
                ],
            ),
            Session::new(
                date(5, 1),
                vec![
                    group("1", SetRecord::new("bench", 60.0, "3*8")),
                    group("2", SetRecord::new("bench", 50.0, "1*12").with_drop_set(true)),
                ],
            ),
        ])
    }

    #[test]
    fn groups_sets_by_session_date() {
        let histories = extract(&sample_log(), ["bench"]);
        let bench = &histories["bench"];
        assert_eq!(bench.date_count(), 2);
        assert_eq!(bench.set_count(), 3);
        assert_eq!(bench.sets_on(&date(5, 1)).len(), 2);
        assert_eq!(bench.sets_on(&date(5, 1))[1].weight, 50.0);
    }

    #[test]
    fn unknown_name_yields_empty_history() {
        let histories = extract(&sample_log(), ["deadlift"]);
        assert!(histories["deadlift"].is_empty());
        assert!(histories["deadlift"].sets_on(&date(5, 1)).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let histories = extract(&sample_log(), ["Bench"]);
        assert!(histories["Bench"].is_empty());
    }

    #[test]
    fn sorted_dates_ascend() {
        let histories = extract(&sample_log(), ["bench", "row"]);
        assert_eq!(histories["bench"].sorted_dates(), vec![date(5, 1), date(12, 1)]);
        assert_eq!(histories["row"].sorted_dates(), vec![date(12, 1)]);
    }
}
