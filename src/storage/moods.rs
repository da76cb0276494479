//! Mood journal persistence. One entry per date; a later write replaces it.

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::store::parse_timestamp;
use super::Store;
use crate::core::format_date;
use crate::error::JustmeError;
use crate::model::{Mood, MoodEntry};

const MOOD_COLUMNS: &str = "id, mood, notes, date, timestamp";

impl Store {
    /// Save the mood for the entry's date, replacing any earlier entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_mood(&self, entry: &MoodEntry) -> Result<(), JustmeError> {
        self.conn()
            .execute(
                r"INSERT INTO mood_entries (date, id, mood, notes, timestamp)
                  VALUES (?1, ?2, ?3, ?4, ?5)
                  ON CONFLICT(date) DO UPDATE SET
                    id = excluded.id,
                    mood = excluded.mood,
                    notes = excluded.notes,
                    timestamp = excluded.timestamp",
                params![
                    entry.date,
                    entry.id,
                    entry.mood.as_str(),
                    entry.notes,
                    entry.timestamp.to_rfc3339()
                ],
            )
            .map_err(|e| JustmeError::Database(format!("Failed to save mood: {e}")))?;

        tracing::debug!(date = %entry.date, mood = entry.mood.as_str(), "saved mood");
        Ok(())
    }

    /// The mood entry for `date`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn mood_on(&self, date: NaiveDate) -> Result<Option<MoodEntry>, JustmeError> {
        Ok(self
            .query_moods("date = ?1", params![format_date(date)])?
            .into_iter()
            .next())
    }

    /// Every mood entry, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_moods(&self) -> Result<Vec<MoodEntry>, JustmeError> {
        self.query_moods("1 = 1", &[])
    }

    /// Mood entries with dates in `start..=end`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn moods_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoodEntry>, JustmeError> {
        self.query_moods(
            "date >= ?1 AND date <= ?2",
            params![format_date(start), format_date(end)],
        )
    }

    fn query_moods(
        &self,
        filter: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<MoodEntry>, JustmeError> {
        let sql = format!("SELECT {MOOD_COLUMNS} FROM mood_entries WHERE {filter} ORDER BY date");
        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(|e| JustmeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_mood)
            .map_err(|e| JustmeError::Database(format!("Failed to query moods: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| JustmeError::Database(format!("Failed to read mood: {e}")))
    }
}

fn row_to_mood(row: &Row<'_>) -> Result<MoodEntry, rusqlite::Error> {
    let mood: String = row.get(1)?;
    let timestamp: String = row.get(4)?;

    let mood = Mood::parse(&mood).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown mood '{mood}'").into(),
        )
    })?;

    Ok(MoodEntry {
        id: row.get(0)?,
        mood,
        notes: row.get(2)?,
        date: row.get(3)?,
        timestamp: parse_timestamp(4, &timestamp)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_set_and_get_mood() {
        let store = Store::open_in_memory().unwrap();
        store
            .set_mood(&MoodEntry::new(Mood::Excited, "shipped it", day(4)))
            .unwrap();

        let entry = store.mood_on(day(4)).unwrap().unwrap();
        assert_eq!(entry.mood, Mood::Excited);
        assert_eq!(entry.notes, "shipped it");
        assert!(store.mood_on(day(5)).unwrap().is_none());
    }

    #[test]
    fn test_one_mood_per_date() {
        let store = Store::open_in_memory().unwrap();
        store
            .set_mood(&MoodEntry::new(Mood::Sad, "", day(4)))
            .unwrap();
        store
            .set_mood(&MoodEntry::new(Mood::Happy, "better now", day(4)))
            .unwrap();

        let all = store.list_moods().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].mood, Mood::Happy);
        assert_eq!(all[0].notes, "better now");
    }

    #[test]
    fn test_moods_between_inclusive() {
        let store = Store::open_in_memory().unwrap();
        for d in 1..=10 {
            store
                .set_mood(&MoodEntry::new(Mood::Neutral, "", day(d)))
                .unwrap();
        }

        let range = store.moods_between(day(3), day(6)).unwrap();
        let dates: Vec<&str> = range.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-01-03", "2024-01-04", "2024-01-05", "2024-01-06"]
        );
    }
}
