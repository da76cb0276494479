//! Habit management commands: add, edit, delete, list, show.

use colored::Colorize;
use serde_json::json;

use super::{require_confirmation, Context};
use crate::cli::args::{AddArgs, EditArgs, HabitKind, OutputFormat};
use crate::core::{week_start, HabitStore};
use crate::error::JustmeError;
use crate::model::{Habit, HabitUpdate, TrackingType};
use crate::output::{format_habits, format_report, to_json};
use crate::stats::HabitReport;

fn tracking_from_args(args: &AddArgs) -> Result<TrackingType, JustmeError> {
    match (args.kind, args.target) {
        (HabitKind::Checkbox, Some(_)) => Err(JustmeError::InvalidHabitConfiguration(
            "checkbox habits have no target value".to_string(),
        )),
        (HabitKind::Checkbox, None) => Ok(TrackingType::Checkbox),
        (kind, None) => Err(JustmeError::InvalidHabitConfiguration(format!(
            "--target is required for {} habits",
            kind.as_str()
        ))),
        (kind, Some(target)) => {
            TrackingType::from_parts(kind.as_str(), target, args.unit.as_deref().unwrap_or(""))
        },
    }
}

/// Execute the add command
///
/// # Errors
///
/// Returns an error if the habit is invalid or cannot be saved.
pub fn add(ctx: &Context, args: &AddArgs) -> Result<String, JustmeError> {
    let habit = Habit::new(args.name.as_str(), args.description.as_str(), tracking_from_args(args)?)?;
    ctx.store.add_habit(&habit)?;

    match ctx.format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => Ok(format!(
            "{} Created habit: {} (ID: {})",
            "✓".green(),
            habit.name.bold(),
            habit.id
        )),
    }
}

/// Execute the edit command
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the edit is invalid.
pub fn edit(ctx: &Context, args: &EditArgs) -> Result<String, JustmeError> {
    let habit = ctx.store.find_habit(&args.habit)?;

    let active = match (args.active, args.inactive) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let update = HabitUpdate {
        description: args.description.clone(),
        target: args.target,
        active,
    };

    if update.is_empty() {
        return Err(JustmeError::InvalidOperation(
            "nothing to change; pass --description, --target, --active or --inactive"
                .to_string(),
        ));
    }

    let updated = ctx.store.update_habit(&habit.id, &update)?;

    match ctx.format {
        OutputFormat::Json => to_json(&updated),
        OutputFormat::Pretty => Ok(format!(
            "{} Updated habit: {}",
            "✓".green(),
            updated.name.bold()
        )),
    }
}

/// Execute the delete command
///
/// # Errors
///
/// Returns an error if `--yes` was not given, the habit cannot be found, or
/// the delete fails.
pub fn delete(ctx: &Context, query: &str, yes: bool) -> Result<String, JustmeError> {
    let habit = ctx.store.find_habit(query)?;
    require_confirmation(yes, &format!("Deleting '{}' and its history", habit.name))?;
    let deleted = ctx.store.delete_habit(&habit.id)?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "id": habit.id, "deleted": deleted })),
        OutputFormat::Pretty => Ok(format!("Deleted habit: {}", habit.name)),
    }
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list(ctx: &Context, all: bool) -> Result<String, JustmeError> {
    let habits = if all {
        ctx.store.list_habits()?
    } else {
        ctx.store.list_active_habits()?
    };
    format_habits(&habits, ctx.format)
}

/// Execute the show command
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the date is malformed.
pub fn show(
    ctx: &Context,
    query: &str,
    date: Option<&str>,
    limit: Option<usize>,
) -> Result<String, JustmeError> {
    let today = ctx.date_or_today(date)?;
    let habit = ctx.store.find_habit(query)?;
    let completions = ctx.store.list_completions(&habit.id)?;

    let report = HabitReport::build(&habit, &completions, today, week_start(today))
        .with_history(&habit, &completions, limit);
    format_report(&report, ctx.format)
}
