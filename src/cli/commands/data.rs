//! Whole-database commands: `seed` and `reset`.

use colored::Colorize;
use serde_json::json;

use super::{require_confirmation, Context};
use crate::cli::args::OutputFormat;
use crate::error::JustmeError;
use crate::output::{format_seed_pretty, to_json};

/// Execute the seed command
///
/// # Errors
///
/// Returns an error if `--yes` was not given or the writes fail.
pub fn seed(ctx: &Context, days: u32, yes: bool) -> Result<String, JustmeError> {
    require_confirmation(yes, "Seeding replaces all existing data and")?;

    let summary = ctx
        .store
        .seed_demo_data(ctx.clock.today(), days, &mut rand::thread_rng())?;

    match ctx.format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => Ok(format_seed_pretty(&summary)),
    }
}

/// Execute the reset command
///
/// # Errors
///
/// Returns an error if `--yes` was not given or the delete fails.
pub fn reset(ctx: &Context, yes: bool) -> Result<String, JustmeError> {
    require_confirmation(yes, "Reset")?;
    ctx.store.reset_all()?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "reset": true })),
        OutputFormat::Pretty => Ok(format!("{} All data deleted", "✓".green())),
    }
}
