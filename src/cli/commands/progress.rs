//! Progress commands: `today`, `stats` and `profile`.

use super::Context;
use crate::core::{FixedClock, HabitStore};
use crate::error::JustmeError;
use crate::output::{format_profile, format_reports, format_today};
use crate::stats::{build_profile, build_reports, TodaySummary};

/// Execute the today command
///
/// # Errors
///
/// Returns an error if the date is malformed or the store cannot be read.
pub fn today(ctx: &Context, date: Option<&str>) -> Result<String, JustmeError> {
    let date = ctx.date_or_today(date)?;
    let habits = ctx.store.list_habits()?;
    let records = ctx.store.completions_on(date)?;

    let summary = TodaySummary::build(&habits, &records, date);
    tracing::debug!(
        completed = summary.completed,
        total = summary.total(),
        "built today summary"
    );
    format_today(&summary, ctx.config.display.max_today_habits, ctx.format)
}

/// Execute the stats command
///
/// # Errors
///
/// Returns an error if the date is malformed or the store cannot be read.
pub fn stats(ctx: &Context, all: bool, date: Option<&str>) -> Result<String, JustmeError> {
    let reports = match date {
        Some(_) => {
            let clock = FixedClock(ctx.date_or_today(date)?);
            build_reports(&ctx.store, &clock, all)?
        },
        None => build_reports(&ctx.store, ctx.clock.as_ref(), all)?,
    };
    format_reports(&reports, ctx.format)
}

/// Execute the profile command
///
/// # Errors
///
/// Returns an error if the date is malformed or the store cannot be read.
pub fn profile(ctx: &Context, date: Option<&str>) -> Result<String, JustmeError> {
    let moods = ctx.store.list_moods()?;
    let overview = match date {
        Some(_) => {
            let clock = FixedClock(ctx.date_or_today(date)?);
            build_profile(&ctx.store, &clock, &moods)?
        },
        None => build_profile(&ctx.store, ctx.clock.as_ref(), &moods)?,
    };
    format_profile(&overview, ctx.format)
}
