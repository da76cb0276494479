//! Calendar date helpers.
//!
//! Every date that crosses a module boundary is a zero-padded `yyyy-MM-dd`
//! string, so lexicographic order equals chronological order. This module owns
//! the conversion between those strings and [`NaiveDate`], the Monday week
//! start rule, and the clock that tells the rest of the crate what "today" is.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};

use crate::error::JustmeError;

/// The on-disk and on-wire date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date string.
///
/// Only the fixed-width form is accepted; `2024-1-5` is rejected even though
/// chrono would parse it, because it would break string ordering.
///
/// # Errors
///
/// Returns `JustmeError::MalformedDate` if the string is not a valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate, JustmeError> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(JustmeError::MalformedDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| JustmeError::MalformedDate(input.to_string()))
}

/// Format a date as `yyyy-MM-dd`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The Monday on or before `date`.
///
/// Weeks always start on Monday regardless of locale.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven dates of the week starting at `start`, Monday first.
#[must_use]
pub fn week_dates(start: NaiveDate) -> [NaiveDate; 7] {
    let mut dates = [start; 7];
    for (offset, slot) in (0_i64..).zip(dates.iter_mut()) {
        *slot = start + Duration::days(offset);
    }
    dates
}

/// Calendar date of `instant` in the local time zone.
///
/// Timestamps are stored in UTC but "today" comes from the local clock, so
/// both sides must be compared as local dates.
#[must_use]
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Whole days between creation and `today`, counting the creation day as 1.
#[must_use]
pub fn days_since_creation(created_at: DateTime<Utc>, today: NaiveDate) -> i64 {
    (today - local_date(created_at)).num_days() + 1
}

/// Source of the current date.
pub trait Clock {
    /// Today's calendar date.
    fn today(&self) -> NaiveDate;

    /// Start of the current week (Monday, midnight).
    fn current_week_start(&self) -> NaiveDate {
        week_start(self.today())
    }
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
