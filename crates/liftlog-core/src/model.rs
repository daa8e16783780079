//! # model
//!
//! why: hold the whole workout log in memory, validated once at load
//! relations: built from json by liftlog-storage, read by history.rs and pipeline.rs
//! what: SetRecord, SetGroup, Session, WorkoutLog, all-or-nothing json loading

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::date::{check_month, LogDate};
use crate::error::{DateFormatError, LoadError};
use crate::reps::evaluate;

/// One performed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub exercise_name: String,
    /// Kilograms
    pub weight: f64,
    /// Free-form reps expression, see [`crate::reps`]
    pub reps: String,
    #[serde(default)]
    pub drop_set: bool,
}

impl SetRecord {
    pub fn new(exercise_name: impl Into<String>, weight: f64, reps: impl Into<String>) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            weight,
            reps: reps.into(),
            drop_set: false,
        }
    }

    pub fn with_drop_set(mut self, drop_set: bool) -> Self {
        self.drop_set = drop_set;
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.exercise_name.is_empty() {
            return Err("exercise_name is empty".to_string());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(format!("weight {} is not a non-negative number", self.weight));
        }
        // volume must stay representable in the json handed to the renderer
        let volume = self.weight * f64::from(evaluate(&self.reps));
        if !volume.is_finite() {
            return Err(format!(
                "weight {} times reps '{}' overflows the volume",
                self.weight, self.reps
            ));
        }
        Ok(())
    }
}

/// Sets recorded under one entry of a session's `sets` array, keyed by label.
/// The label is bookkeeping from the log author and carries no meaning here.
/// Entries keep the order they appear in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetGroup {
    entries: Vec<(String, SetRecord)>,
}

impl SetGroup {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SetRecord)> {
        self.entries
            .iter()
            .map(|(label, record)| (label.as_str(), record))
    }

    pub fn records(&self) -> impl Iterator<Item = &SetRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, SetRecord)> for SetGroup {
    fn from_iter<T: IntoIterator<Item = (L, SetRecord)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, record)| (label.into(), record))
                .collect(),
        }
    }
}

impl<L: Into<String>, const N: usize> From<[(L, SetRecord); N]> for SetGroup {
    fn from(entries: [(L, SetRecord); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for SetGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, record) in &self.entries {
            map.serialize_entry(label, record)?;
        }
        map.end()
    }
}

struct SetGroupVisitor;

impl<'de> Visitor<'de> for SetGroupVisitor {
    type Value = SetGroup;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping labels to set details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SetGroup, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, record)) = access.next_entry::<String, SetRecord>()? {
            entries.push((label, record));
        }
        Ok(SetGroup { entries })
    }
}

impl<'de> Deserialize<'de> for SetGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SetGroupVisitor)
    }
}

/// One workout occasion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub date: LogDate,
    pub sets: Vec<SetGroup>,
}

impl Session {
    pub fn new(date: LogDate, sets: Vec<SetGroup>) -> Self {
        Self { date, sets }
    }

    /// Every set of the session, group by group
    pub fn records(&self) -> impl Iterator<Item = &SetRecord> {
        self.sets.iter().flat_map(SetGroup::records)
    }
}

/// The full log, sessions kept in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutLog {
    sessions: Vec<Session>,
}

// -- document shape --

#[derive(Deserialize)]
struct Document {
    workout: WorkoutSection,
}

#[derive(Deserialize)]
struct WorkoutSection {
    sessions: Vec<RawSession>,
}

#[derive(Deserialize)]
struct RawSession {
    date: String,
    sets: Vec<SetGroup>,
}

impl WorkoutLog {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Load a log from its json text
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: Document = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a log from raw json bytes
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let document: Document = serde_json::from_slice(bytes)?;
        Self::from_document(document)
    }

    fn from_document(document: Document) -> Result<Self, LoadError> {
        let mut sessions = Vec::with_capacity(document.workout.sessions.len());

        for (index, raw) in document.workout.sessions.into_iter().enumerate() {
            let date = LogDate::parse(&raw.date).map_err(|source| LoadError::Date {
                session: index,
                token: raw.date.clone(),
                source,
            })?;

            for group in &raw.sets {
                for (label, record) in group.iter() {
                    record.validate().map_err(|reason| LoadError::InvalidSet {
                        session: index,
                        label: label.to_string(),
                        reason,
                    })?;
                }
            }

            sessions.push(Session::new(date, raw.sets));
        }

        let log = Self { sessions };
        debug!(
            sessions = log.len(),
            sets = log.set_count(),
            "loaded workout log"
        );
        Ok(log)
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Number of set records across all sessions
    pub fn set_count(&self) -> usize {
        self.sessions.iter().map(|s| s.records().count()).sum()
    }

    /// Distinct exercise names, sorted
    pub fn exercise_names(&self) -> BTreeSet<String> {
        self.sessions
            .iter()
            .flat_map(Session::records)
            .map(|record| record.exercise_name.clone())
            .collect()
    }

    /// A new log holding only the sessions dated in `month`
    pub fn in_month(&self, month: u32) -> Result<Self, DateFormatError> {
        check_month(month)?;
        let sessions = self
            .sessions
            .iter()
            .filter(|session| session.date.month() == month)
            .cloned()
            .collect();
        Ok(Self { sessions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SESSIONS: &str = r#"{
        "workout": {
            "sessions": [
                {
                    "date": "12/01",
                    "sets": [
                        { "a": { "exercise_name": "bench", "weight": 65, "reps": "5-8", "drop_set": false } }
                    ]
                },
                {
                    "date": "05/01",
                    "sets": [
                        { "a": { "exercise_name": "bench", "weight": 60, "reps": "3*8", "drop_set": false } },
                        { "b": { "exercise_name": "squat", "weight": 100.5, "reps": "5*5", "drop_set": true } }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn loads_sessions_in_file_order() {
        let log = WorkoutLog::from_json_str(TWO_SESSIONS).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.sessions()[0].date.format(), "12/01");
        assert_eq!(log.sessions()[1].date.format(), "05/01");
        assert_eq!(log.set_count(), 3);
    }

    #[test]
    fn record_fields_are_decoded() {
        let log = WorkoutLog::from_json_str(TWO_SESSIONS).unwrap();
        let squat = log.sessions()[1].records().nth(1).unwrap();
        assert_eq!(squat.exercise_name, "squat");
        assert_eq!(squat.weight, 100.5);
        assert_eq!(squat.reps, "5*5");
        assert!(squat.drop_set);
    }

    #[test]
    fn lists_distinct_exercise_names() {
        let log = WorkoutLog::from_json_str(TWO_SESSIONS).unwrap();
        let names: Vec<_> = log.exercise_names().into_iter().collect();
        assert_eq!(names, vec!["bench", "squat"]);
    }

    #[test]
    fn wrong_field_type_is_schema_error() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[{"a":{"exercise_name":"x","weight":"heavy","reps":"3*8","drop_set":false}}]}]}}"#;
        assert!(matches!(WorkoutLog::from_json_str(json), Err(LoadError::Schema(_))));
    }

    #[test]
    fn bad_date_is_reported_with_session_index() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[]},{"date":"2024-01-02","sets":[]}]}}"#;
        match WorkoutLog::from_json_str(json) {
            Err(LoadError::Date { session, token, .. }) => {
                assert_eq!(session, 1);
                assert_eq!(token, "2024-01-02");
            }
            other => panic!("expected date error, got {other:?}"),
        }
    }

    #[test]
    fn negative_weight_is_rejected() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[{"a":{"exercise_name":"x","weight":-5,"reps":"3*8","drop_set":false}}]}]}}"#;
        assert!(matches!(
            WorkoutLog::from_json_str(json),
            Err(LoadError::InvalidSet { session: 0, .. })
        ));
    }

    #[test]
    fn sets_keep_document_order_within_a_group() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[
            {"z":{"exercise_name":"x","weight":1,"reps":"1*1"},
             "a":{"exercise_name":"x","weight":2,"reps":"1*1"},
             "10":{"exercise_name":"x","weight":3,"reps":"1*1"},
             "2":{"exercise_name":"x","weight":4,"reps":"1*1"}}
        ]}]}}"#;
        let log = WorkoutLog::from_json_str(json).unwrap();
        let weights: Vec<f64> = log.sessions()[0].records().map(|r| r.weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0, 4.0]);

        let labels: Vec<&str> = log.sessions()[0].sets[0].iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["z", "a", "10", "2"]);
    }

    #[test]
    fn set_group_must_be_an_object() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[["a"]]}]}}"#;
        assert!(matches!(WorkoutLog::from_json_str(json), Err(LoadError::Schema(_))));
    }

    #[test]
    fn overflowing_volume_is_rejected() {
        let json = r#"{"workout":{"sessions":[{"date":"01/01","sets":[{"a":{"exercise_name":"x","weight":1e308,"reps":"3*8","drop_set":false}}]}]}}"#;
        match WorkoutLog::from_json_str(json) {
            Err(LoadError::InvalidSet { label, reason, .. }) => {
                assert_eq!(label, "a");
                assert!(reason.contains("overflows"));
            }
            other => panic!("expected invalid set, got {other:?}"),
        }
    }

    #[test]
    fn month_filter_keeps_matching_sessions() {
        let log = WorkoutLog::new(vec![
            Session::new(LogDate::new(3, 1).unwrap(), vec![]),
            Session::new(LogDate::new(3, 2).unwrap(), vec![]),
            Session::new(LogDate::new(9, 1).unwrap(), vec![]),
        ]);
        let january = log.in_month(1).unwrap();
        assert_eq!(january.len(), 2);
        assert!(january.sessions().iter().all(|s| s.date.month() == 1));
        assert_eq!(log.in_month(13), Err(DateFormatError::Month(13)));
    }
}
