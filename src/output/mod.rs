//! Output formatting for justme.
//!
//! This module provides formatters for displaying habits, statistics and
//! moods in various formats.

mod chart;
mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::JustmeError;
use crate::model::{Habit, MoodEntry};
use crate::stats::{HabitReport, MoodCalendar, MoodTrendPoint, ProfileOverview, TodaySummary};

pub use chart::{day_glyph, render_mood_sparkline, render_week, WEEKDAY_LABELS};
pub use json::*;
pub use pretty::*;

/// Format habits based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_habits(habits: &[Habit], format: OutputFormat) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits)),
        OutputFormat::Json => format_habits_json(habits),
    }
}

/// Format a single habit report based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_report(report: &HabitReport, format: OutputFormat) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format habit reports based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_reports(
    reports: &[HabitReport],
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_reports_pretty(reports)),
        OutputFormat::Json => format_reports_json(reports),
    }
}

/// Format today's summary based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_today(
    summary: &TodaySummary,
    limit: usize,
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_today_pretty(summary, limit)),
        OutputFormat::Json => format_today_json(summary, limit),
    }
}

/// Format the profile overview based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_profile(
    profile: &ProfileOverview,
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_profile_pretty(profile)),
        OutputFormat::Json => format_profile_json(profile),
    }
}

/// Format a day's mood based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_entry(
    entry: Option<&MoodEntry>,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_mood_entry_pretty(entry, date)),
        OutputFormat::Json => format_mood_entry_json(entry),
    }
}

/// Format the weekly mood trend based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_week(
    points: &[MoodTrendPoint],
    average: Option<f64>,
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_mood_week_pretty(points, average)),
        OutputFormat::Json => format_mood_week_json(points, average),
    }
}

/// Format a mood calendar based on output format
///
/// # Errors
///
/// Returns `JustmeError::Parse` if JSON serialization fails.
pub fn format_mood_calendar(
    calendar: &MoodCalendar,
    format: OutputFormat,
) -> Result<String, JustmeError> {
    match format {
        OutputFormat::Pretty => Ok(format_mood_calendar_pretty(calendar)),
        OutputFormat::Json => format_mood_calendar_json(calendar),
    }
}
