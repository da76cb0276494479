//! JSON output formatting for justme.
//!
//! Dates are `yyyy-MM-dd` strings and day statuses are snake_case names, so
//! the output can be consumed by scripts without further parsing.

use serde::Serialize;
use serde_json::json;

use crate::error::JustmeError;
use crate::model::{Habit, MoodEntry};
use crate::stats::{HabitReport, MoodCalendar, MoodTrendPoint, ProfileOverview, TodaySummary};

/// Format habits as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit]) -> Result<String, JustmeError> {
    let output = json!({
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format habit reports as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_reports_json(reports: &[HabitReport]) -> Result<String, JustmeError> {
    let output = json!({
        "count": reports.len(),
        "items": reports
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format today's summary as JSON, listing at most `limit` habits
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_today_json(summary: &TodaySummary, limit: usize) -> Result<String, JustmeError> {
    let shown: Vec<_> = summary.items.iter().take(limit).collect();
    let output = json!({
        "date": summary.date,
        "completed": summary.completed,
        "total": summary.total(),
        "percent": summary.percent,
        "items": shown,
        "more": summary.total().saturating_sub(limit)
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the cross-habit overview as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_profile_json(profile: &ProfileOverview) -> Result<String, JustmeError> {
    let output = json!({
        "date": profile.date,
        "active_habits": profile.active_habits,
        "current_streak": profile.overall_streak,
        "mood_entries": profile.mood_entries,
        "week_start": profile.week_start,
        "weekly_active_days": profile.active_days_this_week,
        "best_habit": profile.best_habit,
        "favorite_mood": profile.favorite_mood
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a mood entry (or its absence) as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_entry_json(entry: Option<&MoodEntry>) -> Result<String, JustmeError> {
    let output = json!({ "entry": entry });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the weekly mood trend as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_week_json(
    points: &[MoodTrendPoint],
    average: Option<f64>,
) -> Result<String, JustmeError> {
    let output = json!({
        "days": points,
        "average": average
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a mood calendar as JSON
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_calendar_json(calendar: &MoodCalendar) -> Result<String, JustmeError> {
    Ok(serde_json::to_string_pretty(calendar)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JustmeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mood, TrackingType};
    use crate::stats::{DayStatus, TodayItem};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_format_habits_json_empty_list() {
        let result = format_habits_json(&[]).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_habits_json_tracking_tag() {
        let habit = Habit::new(
            "Drink Water",
            "8 glasses daily",
            TrackingType::Counter {
                target: 8,
                unit: "glasses".to_string(),
            },
        )
        .unwrap();
        let result = format_habits_json(&[habit]).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"kind\": \"counter\""));
        assert!(result.contains("\"target\": 8"));
        assert!(result.contains("\"unit\": \"glasses\""));
    }

    #[test]
    fn test_format_profile_json() {
        let profile = ProfileOverview {
            date: date(10),
            active_habits: 2,
            overall_streak: 5,
            mood_entries: 3,
            week_start: date(8),
            active_days_this_week: 3,
            best_habit: None,
            favorite_mood: Some(crate::stats::FavoriteMood {
                mood: Mood::Happy,
                count: 2,
            }),
        };

        let value: serde_json::Value =
            serde_json::from_str(&format_profile_json(&profile).unwrap()).unwrap();
        assert_eq!(value["current_streak"], 5);
        assert_eq!(value["weekly_active_days"], 3);
        assert_eq!(value["week_start"], "2024-01-08");
        assert!(value["best_habit"].is_null());
        assert_eq!(value["favorite_mood"]["mood"], "happy");
        assert_eq!(value["favorite_mood"]["count"], 2);
    }

    #[test]
    fn test_format_today_json_limit() {
        let items = (0..7)
            .map(|i| TodayItem {
                habit_id: format!("h{i}"),
                name: format!("Habit {i}"),
                tracking: TrackingType::Checkbox,
                value: 0,
                status: DayStatus::TodayPending,
            })
            .collect();
        let summary = TodaySummary {
            date: date(5),
            items,
            completed: 0,
            percent: 0,
        };

        let value: serde_json::Value =
            serde_json::from_str(&format_today_json(&summary, 5).unwrap()).unwrap();
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["total"], 7);
        assert_eq!(value["items"].as_array().unwrap().len(), 5);
        assert_eq!(value["more"], 2);
        assert_eq!(value["items"][0]["status"], "today_pending");
    }

    #[test]
    fn test_format_mood_entry_json_missing() {
        let result = format_mood_entry_json(None).unwrap();
        assert!(result.contains("\"entry\": null"));
    }

    #[test]
    fn test_format_mood_entry_json() {
        let entry = MoodEntry::new(Mood::Excited, "line 1\nline 2", date(3));
        let result = format_mood_entry_json(Some(&entry)).unwrap();

        assert!(result.contains("\"mood\": \"excited\""));
        assert!(result.contains("\"date\": \"2024-01-03\""));
        assert!(result.contains("\\n"));
    }

    #[test]
    fn test_to_json_generic() {
        let result = to_json(&DayStatus::NotCompleted).unwrap();
        assert_eq!(result, "\"not_completed\"");
    }
}
