//! The SQLite-backed habit store.
//!
//! `Store` is split across several files by record kind; this file holds the
//! constructor, row-conversion helpers and the [`HabitStore`] implementation.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use super::Database;
use crate::config::Paths;
use crate::core::{format_date, HabitStore};
use crate::error::JustmeError;
use crate::model::{CompletionRecord, Habit, TrackingType};

pub(super) const HABIT_COLUMNS: &str =
    "id, name, description, tracking_type, target_value, unit, created_at, is_active";

pub(super) const COMPLETION_COLUMNS: &str = "habit_id, date, value, timestamp";

/// Persistent storage for habits, completions and moods.
pub struct Store {
    db: Database,
}

impl Store {
    /// Open the store under `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(paths: &Paths) -> Result<Self, JustmeError> {
        Ok(Self {
            db: Database::open(paths)?,
        })
    }

    /// Open a throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, JustmeError> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// Create a store on an existing database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    pub(super) const fn conn(&self) -> &Connection {
        self.db.connection()
    }

    /// Delete every habit, completion and mood entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn reset_all(&self) -> Result<(), JustmeError> {
        self.conn()
            .execute_batch(
                "BEGIN;
                 DELETE FROM completions;
                 DELETE FROM habits;
                 DELETE FROM mood_entries;
                 COMMIT;",
            )
            .map_err(|e| JustmeError::Database(format!("Failed to reset data: {e}")))?;
        tracing::info!("all data reset");
        Ok(())
    }

    pub(super) fn query_completions(
        &self,
        filter: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<CompletionRecord>, JustmeError> {
        let sql = format!("SELECT {COMPLETION_COLUMNS} FROM completions WHERE {filter}");
        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(|e| JustmeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_completion)
            .map_err(|e| JustmeError::Database(format!("Failed to query completions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| JustmeError::Database(format!("Failed to read completion: {e}")))
    }

    pub(super) fn query_habits(
        &self,
        filter: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Habit>, JustmeError> {
        let sql = format!("SELECT {HABIT_COLUMNS} FROM habits WHERE {filter} ORDER BY rowid");
        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(|e| JustmeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_habit)
            .map_err(|e| JustmeError::Database(format!("Failed to query habits: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| JustmeError::Database(format!("Failed to read habit: {e}")))
    }

    /// Completion records for every habit on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn completions_on(&self, date: NaiveDate) -> Result<Vec<CompletionRecord>, JustmeError> {
        self.query_completions("date = ?1 ORDER BY habit_id", params![format_date(date)])
    }
}

impl HabitStore for Store {
    fn list_habits(&self) -> Result<Vec<Habit>, JustmeError> {
        self.query_habits("1 = 1", &[])
    }

    fn list_completions(&self, habit_id: &str) -> Result<Vec<CompletionRecord>, JustmeError> {
        self.query_completions("habit_id = ?1 ORDER BY date", params![habit_id])
    }
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

pub(super) fn parse_timestamp(column: usize, raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn row_to_habit(row: &Row<'_>) -> Result<Habit, rusqlite::Error> {
    let kind: String = row.get(3)?;
    let target: u32 = row.get(4)?;
    let unit: String = row.get(5)?;
    let created_at: String = row.get(6)?;

    let tracking =
        TrackingType::from_parts(&kind, target, &unit).map_err(|e| conversion_error(3, e))?;

    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        tracking,
        created_at: parse_timestamp(6, &created_at)?,
        is_active: row.get(7)?,
    })
}

fn row_to_completion(row: &Row<'_>) -> Result<CompletionRecord, rusqlite::Error> {
    let timestamp: String = row.get(3)?;
    Ok(CompletionRecord {
        habit_id: row.get(0)?,
        date: row.get(1)?,
        value: row.get(2)?,
        timestamp: parse_timestamp(3, &timestamp)?,
    })
}
