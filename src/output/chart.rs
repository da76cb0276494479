//! Small terminal charts for weekly grids and mood trends.

use colored::{ColoredString, Colorize};

use crate::model::Mood;
use crate::stats::DayStatus;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Weekday column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Render mood scores (0 for no entry) as a sparkline.
///
/// A score of 5 is the tallest bar; 0 renders as a blank.
#[must_use]
pub fn render_mood_sparkline(scores: &[u8]) -> String {
    scores
        .iter()
        .map(|&score| {
            if score == 0 {
                BAR_CHARS[0]
            } else {
                let max = usize::from(Mood::Happy.score());
                let normalized = usize::from(score) * (BAR_CHARS.len() - 1) / max;
                BAR_CHARS[normalized.clamp(1, BAR_CHARS.len() - 1)]
            }
        })
        .collect()
}

/// Single-cell glyph for a day in the weekly grid.
#[must_use]
pub fn day_glyph(status: DayStatus) -> ColoredString {
    match status {
        DayStatus::Completed => "●".green(),
        DayStatus::Partial => "◐".yellow(),
        DayStatus::NotCompleted => "○".red(),
        DayStatus::TodayPending => "◌".cyan(),
        DayStatus::FutureDay => "·".dimmed(),
    }
}

/// Render a Monday..Sunday row of day glyphs.
#[must_use]
pub fn render_week(week: &[DayStatus; 7]) -> String {
    week.iter()
        .map(|s| day_glyph(*s).to_string())
        .collect::<Vec<_>>()
        .join("  ")
}
