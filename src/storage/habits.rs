//! Habit persistence.

use rusqlite::params;

use super::Store;
use crate::core::HabitStore;
use crate::error::JustmeError;
use crate::model::{Habit, HabitUpdate};

impl Store {
    /// Insert a new habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the habit is invalid or the insert fails (for
    /// example a duplicate id).
    pub fn add_habit(&self, habit: &Habit) -> Result<(), JustmeError> {
        habit.validate()?;

        self.conn()
            .execute(
                r"INSERT INTO habits
                  (id, name, description, tracking_type, target_value, unit, created_at, is_active)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    habit.id,
                    habit.name,
                    habit.description,
                    habit.tracking.as_str(),
                    habit.target_value(),
                    habit.unit(),
                    habit.created_at.to_rfc3339(),
                    habit.is_active,
                ],
            )
            .map_err(|e| JustmeError::Database(format!("Failed to insert habit: {e}")))?;

        tracing::debug!(id = %habit.id, name = %habit.name, "added habit");
        Ok(())
    }

    /// Get a habit by exact id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_habit(&self, id: &str) -> Result<Option<Habit>, JustmeError> {
        Ok(self.query_habits("id = ?1", params![id])?.into_iter().next())
    }

    /// Active habits in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_habits(&self) -> Result<Vec<Habit>, JustmeError> {
        self.query_habits("is_active = 1", &[])
    }

    /// Resolve a habit from user input.
    ///
    /// Tries, in order: exact id, case-insensitive name, unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::NotFound` if nothing matches and
    /// `JustmeError::InvalidOperation` if the input is ambiguous.
    pub fn find_habit(&self, query: &str) -> Result<Habit, JustmeError> {
        if let Some(habit) = self.get_habit(query)? {
            return Ok(habit);
        }

        let habits = self.list_habits()?;

        let mut by_name: Vec<&Habit> = habits
            .iter()
            .filter(|h| h.name.eq_ignore_ascii_case(query.trim()))
            .collect();
        if by_name.is_empty() && !query.is_empty() {
            by_name = habits.iter().filter(|h| h.id.starts_with(query)).collect();
        }

        match by_name.as_slice() {
            [] => Err(JustmeError::NotFound(format!("habit '{query}'"))),
            [habit] => Ok((*habit).clone()),
            _ => Err(JustmeError::InvalidOperation(format!(
                "'{query}' matches {} habits; use the habit id",
                by_name.len()
            ))),
        }
    }

    /// Apply an edit to a stored habit and return the result.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::NotFound` for an unknown id, or the validation
    /// error from [`Habit::apply`].
    pub fn update_habit(&self, id: &str, update: &HabitUpdate) -> Result<Habit, JustmeError> {
        let mut habit = self
            .get_habit(id)?
            .ok_or_else(|| JustmeError::NotFound(format!("habit '{id}'")))?;
        habit.apply(update)?;

        self.conn()
            .execute(
                r"UPDATE habits SET
                  description = ?1,
                  target_value = ?2,
                  is_active = ?3
                  WHERE id = ?4",
                params![
                    habit.description,
                    habit.target_value(),
                    habit.is_active,
                    habit.id
                ],
            )
            .map_err(|e| JustmeError::Database(format!("Failed to update habit: {e}")))?;

        tracing::debug!(id = %habit.id, "updated habit");
        Ok(habit)
    }

    /// Delete a habit and all of its completion records.
    ///
    /// Returns whether a habit was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_habit(&self, id: &str) -> Result<bool, JustmeError> {
        let tx = self
            .conn()
            .unchecked_transaction()
            .map_err(|e| JustmeError::Database(format!("Failed to begin transaction: {e}")))?;

        let removed_completions = tx
            .execute("DELETE FROM completions WHERE habit_id = ?1", [id])
            .map_err(|e| JustmeError::Database(format!("Failed to delete completions: {e}")))?;
        let removed = tx
            .execute("DELETE FROM habits WHERE id = ?1", [id])
            .map_err(|e| JustmeError::Database(format!("Failed to delete habit: {e}")))?;

        tx.commit()
            .map_err(|e| JustmeError::Database(format!("Failed to commit delete: {e}")))?;

        tracing::debug!(id, removed_completions, "deleted habit");
        Ok(removed > 0)
    }
}
