//! Completion record persistence.
//!
//! A record exists only while its value is positive; writing 0 removes it.

use chrono::NaiveDate;
use rusqlite::params;

use super::Store;
use crate::core::format_date;
use crate::error::JustmeError;
use crate::model::{CompletionRecord, Habit};

impl Store {
    /// The record for `habit_id` on `date`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn completion(
        &self,
        habit_id: &str,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, JustmeError> {
        Ok(self
            .query_completions(
                "habit_id = ?1 AND date = ?2",
                params![habit_id, format_date(date)],
            )?
            .into_iter()
            .next())
    }

    /// Insert or replace a completion record.
    ///
    /// A record with value 0 deletes any existing record for its date.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails, including when the habit does
    /// not exist.
    pub fn put_completion(&self, record: &CompletionRecord) -> Result<(), JustmeError> {
        if record.value == 0 {
            let removed = self.delete_completion(&record.habit_id, &record.date)?;
            tracing::debug!(habit = %record.habit_id, date = %record.date, removed, "cleared day");
            return Ok(());
        }

        self.conn()
            .execute(
                r"INSERT INTO completions (habit_id, date, value, timestamp)
                  VALUES (?1, ?2, ?3, ?4)
                  ON CONFLICT(habit_id, date) DO UPDATE SET
                    value = excluded.value,
                    timestamp = excluded.timestamp",
                params![
                    record.habit_id,
                    record.date,
                    record.value,
                    record.timestamp.to_rfc3339()
                ],
            )
            .map_err(|e| JustmeError::Database(format!("Failed to save completion: {e}")))?;
        Ok(())
    }

    /// Record `value` for `habit` on `date`.
    ///
    /// Returns the stored record, or `None` when `value` is 0 and the day
    /// was cleared.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidOperation` for a checkbox value above 1,
    /// or an error if the write fails.
    pub fn log_value(
        &self,
        habit: &Habit,
        date: NaiveDate,
        value: u32,
    ) -> Result<Option<CompletionRecord>, JustmeError> {
        if habit.tracking.is_checkbox() && value > 1 {
            return Err(JustmeError::InvalidOperation(format!(
                "checkbox habit '{}' only accepts 0 or 1",
                habit.name
            )));
        }

        let record = CompletionRecord::new(habit.id.clone(), date, value);
        self.put_completion(&record)?;
        tracing::debug!(habit = %habit.id, date = %record.date, value, "logged value");

        Ok((value > 0).then_some(record))
    }

    /// Remove the record for `habit_id` on the `yyyy-MM-dd` key `date`.
    ///
    /// Returns whether a record was removed.
    fn delete_completion(&self, habit_id: &str, date: &str) -> Result<bool, JustmeError> {
        let removed = self
            .conn()
            .execute(
                "DELETE FROM completions WHERE habit_id = ?1 AND date = ?2",
                params![habit_id, date],
            )
            .map_err(|e| JustmeError::Database(format!("Failed to delete completion: {e}")))?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HabitStore;
    use crate::model::TrackingType;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn setup(tracking: TrackingType) -> (Store, Habit) {
        let store = Store::open_in_memory().unwrap();
        let habit = Habit::new("Habit", "", tracking).unwrap();
        store.add_habit(&habit).unwrap();
        (store, habit)
    }

    #[test]
    fn test_log_value_upserts() {
        let (store, habit) = setup(TrackingType::Counter {
            target: 8,
            unit: "glasses".to_string(),
        });

        store.log_value(&habit, day(3), 2).unwrap();
        store.log_value(&habit, day(3), 5).unwrap();

        let records = store.list_completions(&habit.id).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 5);
    }

    #[test]
    fn test_log_zero_removes_record() {
        let (store, habit) = setup(TrackingType::Checkbox);

        store.log_value(&habit, day(3), 1).unwrap();
        assert!(store.completion(&habit.id, day(3)).unwrap().is_some());

        let stored = store.log_value(&habit, day(3), 0).unwrap();
        assert!(stored.is_none());
        assert!(store.completion(&habit.id, day(3)).unwrap().is_none());
    }

    #[test]
    fn test_checkbox_rejects_large_value() {
        let (store, habit) = setup(TrackingType::Checkbox);
        let result = store.log_value(&habit, day(3), 2);
        assert!(matches!(result, Err(JustmeError::InvalidOperation(_))));
    }

    #[test]
    fn test_unknown_habit_rejected() {
        let store = Store::open_in_memory().unwrap();
        let record = CompletionRecord::new("ghost", day(3), 1);
        assert!(store.put_completion(&record).is_err());
    }

    #[test]
    fn test_completions_ordered_by_date() {
        let (store, habit) = setup(TrackingType::Checkbox);
        store.log_value(&habit, day(9), 1).unwrap();
        store.log_value(&habit, day(2), 1).unwrap();
        store.log_value(&habit, day(5), 1).unwrap();

        let dates: Vec<String> = store
            .list_completions(&habit.id)
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-05", "2024-01-09"]);
    }

    #[test]
    fn test_delete_completion() {
        let (store, habit) = setup(TrackingType::Checkbox);
        store.log_value(&habit, day(3), 1).unwrap();

        assert!(store.delete_completion(&habit.id, "2024-01-03").unwrap());
        assert!(!store.delete_completion(&habit.id, "2024-01-03").unwrap());
    }

    #[test]
    fn test_put_zero_clears_only_that_day() {
        let (store, habit) = setup(TrackingType::Checkbox);
        store.log_value(&habit, day(3), 1).unwrap();
        store.log_value(&habit, day(4), 1).unwrap();

        store
            .put_completion(&CompletionRecord::new(habit.id.clone(), day(3), 0))
            .unwrap();

        assert!(store.completion(&habit.id, day(3)).unwrap().is_none());
        assert!(store.completion(&habit.id, day(4)).unwrap().is_some());
    }

    #[test]
    fn test_completions_on() {
        let (store, habit) = setup(TrackingType::Checkbox);
        store.log_value(&habit, day(3), 1).unwrap();
        store.log_value(&habit, day(4), 1).unwrap();

        let records = store.completions_on(day(3)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].habit_id, habit.id);
    }
}
