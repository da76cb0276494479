//! Mood journal commands.

use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use super::Context;
use crate::cli::args::{MoodCommands, OutputFormat};
use crate::core::{parse_date, week_dates, week_start};
use crate::error::JustmeError;
use crate::model::{Mood, MoodEntry};
use crate::output::{format_mood_calendar, format_mood_entry, format_mood_week, to_json};
use crate::stats::{average_mood, mood_trend, MoodCalendar};

/// Parse a `yyyy-MM` month.
fn parse_month(input: &str) -> Result<(i32, u32), JustmeError> {
    let date = parse_date(&format!("{}-01", input.trim()))?;
    Ok((date.year(), date.month()))
}

/// Execute mood subcommands
///
/// # Errors
///
/// Returns an error if a mood name or date is invalid, or the store fails.
pub fn mood(ctx: &Context, cmd: MoodCommands) -> Result<String, JustmeError> {
    match cmd {
        MoodCommands::Log { mood, notes, date } => {
            let date = ctx.date_or_today(date.as_deref())?;
            let mood = Mood::parse(&mood).ok_or_else(|| {
                JustmeError::InvalidOperation(format!(
                    "unknown mood '{mood}' (expected happy, excited, neutral, sad or angry)"
                ))
            })?;

            let entry = MoodEntry::new(mood, notes.trim(), date);
            ctx.store.set_mood(&entry)?;

            match ctx.format {
                OutputFormat::Json => to_json(&entry),
                OutputFormat::Pretty => Ok(format!(
                    "{} Mood for {}: {}",
                    "✓".green(),
                    entry.date,
                    entry.mood
                )),
            }
        },
        MoodCommands::Show { date } => {
            let date = ctx.date_or_today(date.as_deref())?;
            let entry = ctx.store.mood_on(date)?;
            format_mood_entry(entry.as_ref(), date, ctx.format)
        },
        MoodCommands::Week { date } => {
            let today = ctx.clock.today();
            let day = ctx.date_or_today(date.as_deref())?;
            let [start, .., end] = week_dates(week_start(day));

            let entries = ctx.store.moods_between(start, end)?;
            let points = mood_trend(&entries, start, today);
            let average = average_mood(&entries, start, end.min(today));
            format_mood_week(&points, average, ctx.format)
        },
        MoodCommands::Calendar { month } => {
            let today = ctx.clock.today();
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (today.year(), today.month()),
            };

            let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
                JustmeError::InvalidOperation(format!("invalid month {year}-{month:02}"))
            })?;
            let last = first
                .checked_add_months(chrono::Months::new(1))
                .and_then(|d| d.pred_opt())
                .unwrap_or(first);

            let entries = ctx.store.moods_between(first, last)?;
            let calendar = MoodCalendar::build(&entries, year, month, today)?;
            format_mood_calendar(&calendar, ctx.format)
        },
    }
}
