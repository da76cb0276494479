//! Mood trend and calendar computations.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{format_date, parse_date, week_dates};
use crate::error::JustmeError;
use crate::model::{Mood, MoodEntry};

fn index_by_date(entries: &[MoodEntry]) -> BTreeMap<NaiveDate, &MoodEntry> {
    let mut by_date = BTreeMap::new();
    for entry in entries {
        if let Ok(date) = parse_date(&entry.date) {
            by_date.insert(date, entry);
        } else {
            tracing::debug!(date = %entry.date, "skipping mood entry with malformed date");
        }
    }
    by_date
}

/// One point of the weekly mood trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub date: NaiveDate,
    pub mood: Option<Mood>,
    /// Mood score, 0 when nothing was logged.
    pub score: u8,
}

/// Mood scores for the week, Monday up to today.
///
/// Days after today are left out; past days without an entry score 0.
#[must_use]
pub fn mood_trend(
    entries: &[MoodEntry],
    week_start: NaiveDate,
    today: NaiveDate,
) -> Vec<MoodTrendPoint> {
    let by_date = index_by_date(entries);

    week_dates(week_start)
        .into_iter()
        .filter(|date| *date <= today)
        .map(|date| {
            let mood = by_date.get(&date).map(|e| e.mood);
            MoodTrendPoint {
                date,
                mood,
                score: mood.map_or(0, |m| m.score()),
            }
        })
        .collect()
}

/// Average mood score over entries dated within `[start, end]`.
///
/// Returns `None` when no entry falls in the range or the range is empty.
#[must_use]
pub fn average_mood(entries: &[MoodEntry], start: NaiveDate, end: NaiveDate) -> Option<f64> {
    if start > end {
        return None;
    }

    let scores: Vec<f64> = index_by_date(entries)
        .range(start..=end)
        .map(|(_, entry)| f64::from(entry.mood.score()))
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// A single day cell in the month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: String,
    pub mood: Option<Mood>,
    pub is_today: bool,
}

/// Month view laid out in Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCalendar {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st so that it lands on its weekday column.
    pub leading_blanks: usize,
    pub days: Vec<CalendarDay>,
}

impl MoodCalendar {
    /// Build the calendar for `year`/`month`.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidOperation` for a month outside 1..=12 or
    /// an out-of-range year.
    pub fn build(
        entries: &[MoodEntry],
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Result<Self, JustmeError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            JustmeError::InvalidOperation(format!("invalid month {year}-{month:02}"))
        })?;
        let by_date = index_by_date(entries);

        let mut days = Vec::new();
        let mut date = first;
        while date.month() == month {
            days.push(CalendarDay {
                day: date.day(),
                date: format_date(date),
                mood: by_date.get(&date).map(|e| e.mood),
                is_today: date == today,
            });
            date += Duration::days(1);
        }

        Ok(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_monday() as usize,
            days,
        })
    }

    /// Cells row by row, `None` for blanks, padded to full weeks.
    #[must_use]
    pub fn weeks(&self) -> Vec<[Option<&CalendarDay>; 7]> {
        let mut cells: Vec<Option<&CalendarDay>> = vec![None; self.leading_blanks];
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }
}
