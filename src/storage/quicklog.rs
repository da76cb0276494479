//! One-tap logging: toggle a checkbox or step a counter or timer.

use chrono::NaiveDate;
use serde::Serialize;

use super::Store;
use crate::core::format_date;
use crate::error::JustmeError;
use crate::model::{Habit, TrackingType};

/// What a quick-log tap does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    /// Flip a checkbox habit between done and not done.
    Toggle,
    /// Add one step to a counter or timer.
    Increase,
    /// Remove one step from a counter or timer.
    Decrease,
    /// Write an explicit value. 0 clears the day.
    Set(u32),
}

/// Step sizes for counter and timer habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSizes {
    pub counter: u32,
    /// Minutes.
    pub timer: u32,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            counter: 1,
            timer: 5,
        }
    }
}

impl StepSizes {
    const fn for_tracking(&self, tracking: &TrackingType) -> Option<u32> {
        match tracking {
            TrackingType::Checkbox => None,
            TrackingType::Counter { .. } => Some(self.counter),
            TrackingType::Timer { .. } => Some(self.timer),
        }
    }
}

/// Result of a quick-log action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogOutcome {
    pub habit_id: String,
    pub date: String,
    pub previous: u32,
    pub value: u32,
}

impl LogOutcome {
    /// Whether the action changed the stored value.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.previous != self.value
    }
}

impl Store {
    /// Apply a quick-log action to `habit` on `date`.
    ///
    /// A decrease that would go below zero is ignored. Reaching zero removes
    /// the day's record.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidOperation` when the action does not fit
    /// the habit's tracking type, or an error if the write fails.
    pub fn quick_log(
        &self,
        habit: &Habit,
        date: NaiveDate,
        action: LogAction,
        steps: &StepSizes,
    ) -> Result<LogOutcome, JustmeError> {
        let previous = self
            .completion(&habit.id, date)?
            .map_or(0, |record| record.value);

        let value = match action {
            LogAction::Toggle => {
                if !habit.tracking.is_checkbox() {
                    return Err(JustmeError::InvalidOperation(format!(
                        "'{}' is a {} habit; use inc or dec",
                        habit.name,
                        habit.tracking.as_str()
                    )));
                }
                u32::from(previous == 0)
            },
            LogAction::Increase | LogAction::Decrease => {
                let step = steps.for_tracking(&habit.tracking).ok_or_else(|| {
                    JustmeError::InvalidOperation(format!(
                        "'{}' is a checkbox habit; use toggle",
                        habit.name
                    ))
                })?;
                if action == LogAction::Increase {
                    previous.saturating_add(step)
                } else if previous >= step {
                    previous - step
                } else {
                    previous
                }
            },
            LogAction::Set(value) => value,
        };

        if value != previous {
            self.log_value(habit, date, value)?;
        }

        Ok(LogOutcome {
            habit_id: habit.id.clone(),
            date: format_date(date),
            previous,
            value,
        })
    }
}
