//! # error
//!
//! why: give every way a log can be rejected its own typed error
//! relations: raised by date.rs, model.rs and pipeline.rs, wrapped by liftlog-storage
//! what: DateFormatError, LoadError, RequestError

use thiserror::Error;

/// A date token that is not a valid `DD/MM` pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("date '{0}' is not of the form DD/MM")]
    Shape(String),
    #[error("month {0} is outside 1..=12")]
    Month(u32),
    #[error("day {day} does not exist in month {month}")]
    Day { day: u32, month: u32 },
}

/// Reasons a log document fails to load. Loading is all-or-nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document does not have the expected nested shape, or a field has the wrong type
    #[error("log document does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// A session carries a malformed date token
    #[error("session {session} has an invalid date '{token}'")]
    Date {
        session: usize,
        token: String,
        #[source]
        source: DateFormatError,
    },

    /// A set detail violates the record invariants
    #[error("session {session}, set '{label}': {reason}")]
    InvalidSet {
        session: usize,
        label: String,
        reason: String,
    },
}

/// Usage problems with a chart request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("no exercise name given")]
    NoExercises,
    #[error("month filter rejected: {0}")]
    Month(#[from] DateFormatError),
}
