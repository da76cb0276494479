//! Per-habit completion history, newest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::DailyValues;
use crate::model::{CompletionRecord, Habit, TrackingType};

/// One logged day in a habit's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub value: u32,
    /// `Completed` for checkboxes, `<value> <unit>` otherwise.
    pub label: String,
}

/// Display label for a logged value.
#[must_use]
pub fn value_label(tracking: &TrackingType, value: u32) -> String {
    match tracking {
        TrackingType::Checkbox => "Completed".to_string(),
        TrackingType::Counter { unit, .. } => format!("{value} {unit}").trim_end().to_string(),
        TrackingType::Timer { unit, .. } if unit.is_empty() => format!("{value} minutes"),
        TrackingType::Timer { unit, .. } => format!("{value} {unit}"),
    }
}

/// Every logged day for `habit`, most recent first.
///
/// Records with a malformed date or a zero value are left out.
#[must_use]
pub fn habit_history(habit: &Habit, completions: &[CompletionRecord]) -> Vec<HistoryEntry> {
    DailyValues::for_habit(&habit.id, completions)
        .iter()
        .rev()
        .filter(|(_, value)| *value > 0)
        .map(|(date, value)| HistoryEntry {
            date,
            value,
            label: value_label(&habit.tracking, value),
        })
        .collect()
}
