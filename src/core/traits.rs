//! Shared traits.
//!
//! The statistics layer reads habits and history through [`HabitStore`], so it
//! can run against the SQLite store, a mock, or anything else that can list
//! records.

use crate::error::JustmeError;
use crate::model::{CompletionRecord, Habit};

/// Read access to habits and their completion history.
#[cfg_attr(test, mockall::automock)]
pub trait HabitStore {
    /// All habits, active or not, in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list_habits(&self) -> Result<Vec<Habit>, JustmeError>;

    /// Completion records for one habit, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list_completions(&self, habit_id: &str) -> Result<Vec<CompletionRecord>, JustmeError>;
}
