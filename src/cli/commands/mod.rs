//! Command implementations for justme.
//!
//! Each command takes a [`Context`] and returns the text to print.

mod data;
mod habits;
mod log;
mod mood;
mod progress;

pub use data::{reset, seed};
pub use habits::{add, delete, edit, list, show};
pub use log::log;
pub use mood::mood;
pub use progress::{profile, stats, today};

use chrono::{Duration, NaiveDate};
use clap::CommandFactory;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::core::{parse_date, Clock};
use crate::error::JustmeError;
use crate::storage::Store;

/// Everything a command needs to run.
pub struct Context {
    pub store: Store,
    pub clock: Box<dyn Clock>,
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve an optional `--date` argument against the context clock.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::MalformedDate` if the input is not `today`,
    /// `yesterday` or `yyyy-MM-dd`.
    pub fn date_or_today(&self, input: Option<&str>) -> Result<NaiveDate, JustmeError> {
        input.map_or_else(
            || Ok(self.clock.today()),
            |s| resolve_date(s, self.clock.as_ref()),
        )
    }
}

/// Parse `today`, `yesterday` or a `yyyy-MM-dd` date.
///
/// # Errors
///
/// Returns `JustmeError::MalformedDate` for anything else.
pub fn resolve_date(input: &str, clock: &dyn Clock) -> Result<NaiveDate, JustmeError> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(clock.today()),
        "yesterday" => Ok(clock.today() - Duration::days(1)),
        other => parse_date(other),
    }
}

/// Refuse a destructive command unless `--yes` was given.
fn require_confirmation(confirmed: bool, what: &str) -> Result<(), JustmeError> {
    if confirmed {
        Ok(())
    } else {
        Err(JustmeError::InvalidOperation(format!(
            "{what} cannot be undone; re-run with --yes to confirm"
        )))
    }
}

/// Generate shell completions.
#[must_use]
pub fn completions(shell: clap_complete::Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "justme", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
