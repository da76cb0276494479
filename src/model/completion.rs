//! Completion records: one progress observation per habit per day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{format_date, parse_date};
use crate::error::JustmeError;

/// Progress on a habit for a single calendar date.
///
/// For checkbox habits a value of 1 means done. For counter and timer habits
/// the value is the day's running total. A missing record and a record with
/// value 0 mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Owning habit.
    pub habit_id: String,
    /// Calendar date, `yyyy-MM-dd`.
    pub date: String,
    /// Logged value.
    pub value: u32,
    /// Last write time.
    pub timestamp: DateTime<Utc>,
}

impl CompletionRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(habit_id: impl Into<String>, date: NaiveDate, value: u32) -> Self {
        Self {
            habit_id: habit_id.into(),
            date: format_date(date),
            value,
            timestamp: Utc::now(),
        }
    }

    /// The record's date, if it is well formed.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::MalformedDate` for a bad date string.
    pub fn parsed_date(&self) -> Result<NaiveDate, JustmeError> {
        parse_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_formats_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let record = CompletionRecord::new("h1", date, 4);
        assert_eq!(record.date, "2024-03-07");
        assert_eq!(record.parsed_date().unwrap(), date);
    }

    #[test]
    fn test_parsed_date_malformed() {
        let mut record =
            CompletionRecord::new("h1", NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(), 1);
        record.date = "03/07/2024".to_string();
        assert!(record.parsed_date().is_err());
    }
}
