//! # date
//!
//! why: session dates are stored as year-less `DD/MM` tokens and must sort and group
//! relations: used by model.rs for session dates, history.rs as the grouping key, series.rs for labels
//! what: LogDate value type, DD/MM parsing and formatting, (month, day) ordering

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateFormatError;

/// Days per month. No year is recorded, so February admits the 29th.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar day without a year
///
/// Ordering is by month, then day. Logs that cross a new year therefore sort
/// December after January; there is no year field to do better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogDate {
    // field order drives the derived Ord
    month: u32,
    day: u32,
}

impl LogDate {
    /// Build a date from numeric parts, checking month range and day-of-month
    pub fn new(day: u32, month: u32) -> Result<Self, DateFormatError> {
        check_month(month)?;
        let max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if day == 0 || day > max_day {
            return Err(DateFormatError::Day { day, month });
        }
        Ok(Self { month, day })
    }

    /// Parse a `DD/MM` token. Each field is one or two ASCII digits.
    pub fn parse(token: &str) -> Result<Self, DateFormatError> {
        let shape = || DateFormatError::Shape(token.to_string());

        let (day, month) = token.split_once('/').ok_or_else(shape)?;
        let day = parse_field(day).ok_or_else(shape)?;
        let month = parse_field(month).ok_or_else(shape)?;

        Self::new(day, month)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-padded `DD/MM` label, the inverse of [`LogDate::parse`]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

/// Reject months outside 1..=12
pub(crate) fn check_month(month: u32) -> Result<(), DateFormatError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(DateFormatError::Month(month))
    }
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

impl FromStr for LogDate {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LogDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token).map_err(de::Error::custom)
    }
}
