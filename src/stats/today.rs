//! Today's progress across all active habits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::{day_status, DailyValues, DayStatus};
use crate::model::{CompletionRecord, Habit, TrackingType};

/// One habit's progress for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayItem {
    pub habit_id: String,
    pub name: String,
    pub tracking: TrackingType,
    /// Value logged today, 0 if nothing.
    pub value: u32,
    pub status: DayStatus,
}

impl TodayItem {
    /// Short progress text: `Done`/`Pending` or `value/target unit`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        match &self.tracking {
            TrackingType::Checkbox => {
                if self.status.is_completed() {
                    "Done".to_string()
                } else {
                    "Pending".to_string()
                }
            },
            TrackingType::Counter { target, unit } | TrackingType::Timer { target, unit } => {
                format!("{}/{} {}", self.value, target, unit).trim_end().to_string()
            },
        }
    }
}

/// Summary of today's habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub items: Vec<TodayItem>,
    /// Active habits that reached their target today.
    pub completed: usize,
    /// Truncated percent of active habits completed; 0 with no habits.
    pub percent: usize,
}

impl TodaySummary {
    /// Build the summary for active habits from today's records.
    ///
    /// `records` may contain records for other dates; only `today` is read.
    #[must_use]
    pub fn build(habits: &[Habit], records: &[CompletionRecord], today: NaiveDate) -> Self {
        let items: Vec<TodayItem> = habits
            .iter()
            .filter(|h| h.is_active)
            .map(|habit| {
                let value = DailyValues::for_habit(&habit.id, records).value_on(today);
                TodayItem {
                    habit_id: habit.id.clone(),
                    name: habit.name.clone(),
                    tracking: habit.tracking.clone(),
                    value,
                    status: day_status(habit, today, records, today),
                }
            })
            .collect();

        let completed = items.iter().filter(|i| i.status.is_completed()).count();

        let percent = if items.is_empty() {
            0
        } else {
            completed * 100 / items.len()
        };

        Self {
            date: today,
            items,
            completed,
            percent,
        }
    }

    /// Number of active habits.
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }
}
