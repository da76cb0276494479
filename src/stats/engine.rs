//! Habit statistics and streak engine.
//!
//! Pure functions over a habit, its completion history and "today". Nothing
//! here touches storage or the system clock; every result is re-derivable from
//! the inputs.
//!
//! All success checks go through [`success_threshold`] so that streaks, weekly
//! grids and success rates agree on what "done" means.
//!
//! History is tolerant of bad input: records with malformed dates or a
//! different habit id are ignored, and if two records share a date the later
//! one in the slice wins.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{days_since_creation, parse_date, week_dates};
use crate::model::{CompletionRecord, Habit, TrackingType};

/// Days examined before today when walking a streak backwards.
pub const STREAK_LOOKBACK_DAYS: i64 = 30;

/// Longest streak the engine can report: today plus the lookback window.
pub const MAX_STREAK: u32 = 31;

/// Status of a single day for a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Target reached.
    Completed,
    /// Some progress, target not reached (counter and timer only).
    Partial,
    /// Past day without progress.
    NotCompleted,
    /// Today, nothing logged yet.
    TodayPending,
    /// After today.
    FutureDay,
}

impl DayStatus {
    /// Whether the day counts as a success.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Logged values for one habit, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyValues {
    values: BTreeMap<NaiveDate, u32>,
}

impl DailyValues {
    /// Index the records that belong to `habit_id`.
    #[must_use]
    pub fn for_habit(habit_id: &str, records: &[CompletionRecord]) -> Self {
        let mut values = BTreeMap::new();

        for record in records.iter().filter(|r| r.habit_id == habit_id) {
            match parse_date(&record.date) {
                Ok(date) => {
                    values.insert(date, record.value);
                },
                Err(_) => {
                    tracing::debug!(
                        habit_id,
                        date = %record.date,
                        "skipping completion with malformed date"
                    );
                },
            }
        }

        Self { values }
    }

    /// Value logged on `date`, 0 if nothing was logged.
    #[must_use]
    pub fn value_on(&self, date: NaiveDate) -> u32 {
        self.values.get(&date).copied().unwrap_or(0)
    }

    /// Iterate over `(date, value)` in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, u32)> + '_ {
        self.values.iter().map(|(date, value)| (*date, *value))
    }
}

/// Whether `value` reaches the habit's daily target.
///
/// Checkbox habits need exactly 1; counter and timer habits need at least
/// their target.
#[must_use]
pub fn success_threshold(habit: &Habit, value: u32) -> bool {
    match &habit.tracking {
        TrackingType::Checkbox => value == 1,
        TrackingType::Counter { target, .. } | TrackingType::Timer { target, .. } => {
            value >= *target
        },
    }
}

fn classify(habit: &Habit, date: NaiveDate, value: u32, today: NaiveDate) -> DayStatus {
    if date > today {
        return DayStatus::FutureDay;
    }

    if success_threshold(habit, value) {
        DayStatus::Completed
    } else if value > 0 {
        DayStatus::Partial
    } else if date == today {
        DayStatus::TodayPending
    } else {
        DayStatus::NotCompleted
    }
}

/// Status of `date` for the habit.
#[must_use]
pub fn day_status(
    habit: &Habit,
    date: NaiveDate,
    completions: &[CompletionRecord],
    today: NaiveDate,
) -> DayStatus {
    let values = DailyValues::for_habit(&habit.id, completions);
    classify(habit, date, values.value_on(date), today)
}

/// Consecutive successful days walking back from today.
///
/// Today is examined first; if it has not reached the target yet the walk
/// simply moves on to yesterday. From yesterday on, the first miss ends the
/// streak. At most [`STREAK_LOOKBACK_DAYS`] days before today are examined.
#[must_use]
pub fn current_streak(habit: &Habit, completions: &[CompletionRecord], today: NaiveDate) -> u32 {
    let values = DailyValues::for_habit(&habit.id, completions);
    let mut streak = 0;

    for offset in 0..=STREAK_LOOKBACK_DAYS {
        let date = today - Duration::days(offset);
        if success_threshold(habit, values.value_on(date)) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }

    streak
}

/// Monday..Sunday statuses for the week starting at `week_start`.
#[must_use]
pub fn weekly_grid(
    habit: &Habit,
    completions: &[CompletionRecord],
    week_start: NaiveDate,
    today: NaiveDate,
) -> [DayStatus; 7] {
    let values = DailyValues::for_habit(&habit.id, completions);
    week_dates(week_start).map(|date| classify(habit, date, values.value_on(date), today))
}

/// Percent of the week's seven days that reached the target, truncated.
///
/// Only days up to today count as successes, but the denominator is always 7.
#[must_use]
pub fn weekly_success_rate(
    habit: &Habit,
    completions: &[CompletionRecord],
    week_start: NaiveDate,
    today: NaiveDate,
) -> u32 {
    let values = DailyValues::for_habit(&habit.id, completions);
    let successful: u32 = week_dates(week_start)
        .into_iter()
        .filter(|date| *date <= today && success_threshold(habit, values.value_on(*date)))
        .map(|_| 1)
        .sum();

    successful * 100 / 7
}

/// Number of distinct days in the whole history that reached the target.
///
/// A habit with no successes yet reports `min(1, days since creation)`, so a
/// brand-new habit shows 1 rather than 0.
#[must_use]
pub fn total_successful_days(
    habit: &Habit,
    completions: &[CompletionRecord],
    today: NaiveDate,
) -> u32 {
    let values = DailyValues::for_habit(&habit.id, completions);
    let successful: u32 = values
        .iter()
        .filter(|(_, value)| success_threshold(habit, *value))
        .map(|_| 1)
        .sum();

    if successful > 0 {
        return successful;
    }

    let fallback = days_since_creation(habit.created_at, today).min(1);
    u32::try_from(fallback).unwrap_or(0)
}
