//! The `log` command: quick logging against a habit.

use super::Context;
use crate::cli::args::{LogArgs, LogCommands, OutputFormat};
use crate::error::JustmeError;
use crate::output::{format_log_outcome_pretty, to_json};
use crate::storage::LogAction;

impl From<LogCommands> for LogAction {
    fn from(cmd: LogCommands) -> Self {
        match cmd {
            LogCommands::Toggle => Self::Toggle,
            LogCommands::Inc => Self::Increase,
            LogCommands::Dec => Self::Decrease,
            LogCommands::Set { value } => Self::Set(value),
        }
    }
}

/// Execute the log command
///
/// # Errors
///
/// Returns an error if the habit cannot be found, the date is malformed, or
/// the action does not fit the habit's tracking type.
pub fn log(ctx: &Context, args: &LogArgs) -> Result<String, JustmeError> {
    let date = ctx.date_or_today(args.date.as_deref())?;
    let habit = ctx.store.find_habit(&args.habit)?;

    let outcome = ctx.store.quick_log(
        &habit,
        date,
        args.action.into(),
        &ctx.config.step_sizes(),
    )?;

    match ctx.format {
        OutputFormat::Json => to_json(&outcome),
        OutputFormat::Pretty => Ok(format_log_outcome_pretty(&habit, &outcome)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, today};
    use super::*;
    use crate::model::{Habit, TrackingType};

    fn log_args(habit: &str, action: LogCommands, date: Option<&str>) -> LogArgs {
        LogArgs {
            habit: habit.to_string(),
            action,
            date: date.map(str::to_string),
        }
    }

    fn water(ctx: &Context) -> Habit {
        let habit = Habit::new(
            "Water",
            "",
            TrackingType::Counter {
                target: 8,
                unit: "glasses".to_string(),
            },
        )
        .unwrap();
        ctx.store.add_habit(&habit).unwrap();
        habit
    }

    #[test]
    fn test_log_inc_uses_configured_step() {
        let mut ctx = context(OutputFormat::Json);
        ctx.config.tracking.counter_step = 2;
        let habit = water(&ctx);

        log(&ctx, &log_args("Water", LogCommands::Inc, None)).unwrap();

        let record = ctx.store.completion(&habit.id, today()).unwrap().unwrap();
        assert_eq!(record.value, 2);
    }

    #[test]
    fn test_log_on_yesterday() {
        let ctx = context(OutputFormat::Json);
        let habit = water(&ctx);

        let output = log(
            &ctx,
            &log_args("Water", LogCommands::Set { value: 5 }, Some("yesterday")),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2024-01-09");
        assert_eq!(value["value"], 5);
        assert!(ctx.store.completion(&habit.id, today()).unwrap().is_none());
    }

    #[test]
    fn test_log_toggle_on_counter_fails() {
        let ctx = context(OutputFormat::Pretty);
        water(&ctx);

        let result = log(&ctx, &log_args("Water", LogCommands::Toggle, None));
        assert!(matches!(result, Err(JustmeError::InvalidOperation(_))));
    }

    #[test]
    fn test_log_pretty_output() {
        let ctx = context(OutputFormat::Pretty);
        water(&ctx);

        let output = log(&ctx, &log_args("Water", LogCommands::Inc, None)).unwrap();
        assert!(output.contains("Water"));
        assert!(output.contains("1/8 glasses"));
    }
}
