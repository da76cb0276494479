use chrono::NaiveDate;
use colored::Colorize;

use super::chart::{render_mood_sparkline, render_week, WEEKDAY_LABELS};
use crate::model::{Habit, MoodEntry, TrackingType};
use crate::stats::{HabitReport, MoodCalendar, MoodTrendPoint, ProfileOverview, TodaySummary};
use crate::storage::{LogOutcome, SeedSummary};

/// Leading id characters shown in listings.
const SHORT_ID_LEN: usize = 8;

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn target_label(tracking: &TrackingType) -> String {
    match tracking {
        TrackingType::Checkbox => "daily".to_string(),
        TrackingType::Counter { target, unit } | TrackingType::Timer { target, unit } => {
            format!("{target} {unit}").trim_end().to_string()
        },
    }
}

/// Format a list of habits as a pretty table
pub fn format_habits_pretty(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "Habits (0)\n  No habits yet. Add one with `justme add`.".to_string();
    }

    let mut output = format!("Habits ({})\n", habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let name = if habit.is_active {
            habit.name.bold()
        } else {
            habit.name.dimmed()
        };

        let mut line = format!(
            "{}  {}  {}",
            short_id(&habit.id).dimmed(),
            name,
            format!("{} · {}", habit.tracking, target_label(&habit.tracking)).cyan()
        );

        if !habit.is_active {
            line.push_str(&format!("  {}", "(inactive)".yellow()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format one habit's statistics in detail
pub fn format_report_pretty(report: &HabitReport) -> String {
    let mut output = format!("{}\n", report.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), report.habit_id));

    if !report.description.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Description".dimmed(),
            report.description
        ));
    }

    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Tracking".dimmed(),
        report.tracking,
        target_label(&report.tracking)
    ));

    if !report.is_active {
        output.push_str(&format!("  {}: {}\n", "Status".dimmed(), "inactive".yellow()));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Current streak".dimmed(),
        streak_label(report.current_streak)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Total days".dimmed(),
        report.total_successful_days
    ));
    output.push_str(&format!(
        "  {} {}:\n",
        "Week of".dimmed(),
        report.week_start.format("%b %d")
    ));
    output.push_str(&format!("    {}\n", WEEKDAY_LABELS.join(" ").dimmed()));
    output.push_str(&format!("    {}\n", render_week(&report.week)));
    output.push_str(&format!(
        "    {}/7 days · {}%\n",
        report.weekly_completed, report.weekly_success_rate
    ));

    if !report.history.is_empty() {
        output.push_str(&format!("  {}:\n", "History".dimmed()));
        for entry in &report.history {
            output.push_str(&format!(
                "    {}  {}\n",
                entry.date.format("%b %d, %Y").to_string().dimmed(),
                entry.label
            ));
        }
    }

    output
}

fn streak_label(streak: u32) -> String {
    match streak {
        0 => "0 days".dimmed().to_string(),
        1 => "🔥 1 day".green().to_string(),
        n => format!("🔥 {n} days").green().to_string(),
    }
}

/// Format the statistics overview for all habits
pub fn format_reports_pretty(reports: &[HabitReport]) -> String {
    if reports.is_empty() {
        return "Statistics\n  No habits to report on".to_string();
    }

    let mut output = format!("{}\n", "📊 HABIT STATISTICS".bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  {:<24} {}\n",
        "",
        WEEKDAY_LABELS.join(" ").dimmed()
    ));

    for report in reports {
        let name: String = report.name.chars().take(24).collect();
        output.push_str(&format!(
            "  {:<24} {}  {}/7  {:>3}%  {}\n",
            name,
            render_week(&report.week),
            report.weekly_completed,
            report.weekly_success_rate,
            streak_label(report.current_streak)
        ));
    }

    output
}

/// Format today's progress, listing at most `limit` habits
pub fn format_today_pretty(summary: &TodaySummary, limit: usize) -> String {
    let mut output = format!(
        "{} {}\n",
        "Today".bold(),
        summary.date.format("%A, %b %d").to_string().dimmed()
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if summary.items.is_empty() {
        output.push_str("  No active habits\n");
        return output;
    }

    for item in summary.items.iter().take(limit) {
        let icon = if item.status.is_completed() {
            "✓".green()
        } else if item.value > 0 {
            "◐".yellow()
        } else {
            "○".white()
        };
        output.push_str(&format!(
            "  {} {}  {}\n",
            icon,
            item.name,
            item.progress_label().dimmed()
        ));
    }

    let hidden = summary.total().saturating_sub(limit);
    if hidden > 0 {
        output.push_str(&format!("  {}\n", format!("+{hidden} more").dimmed()));
    }

    output.push_str(&format!(
        "\n  {}/{} completed · {}%\n",
        summary.completed,
        summary.total(),
        summary.percent
    ));

    output
}

/// Format the result of a log action
pub fn format_log_outcome_pretty(habit: &Habit, outcome: &LogOutcome) -> String {
    let value = match &habit.tracking {
        TrackingType::Checkbox => {
            if outcome.value > 0 {
                "done".green().to_string()
            } else {
                "not done".yellow().to_string()
            }
        },
        TrackingType::Counter { target, unit } | TrackingType::Timer { target, unit } => {
            format!("{}/{} {}", outcome.value, target, unit)
                .trim_end()
                .to_string()
        },
    };

    if outcome.changed() {
        format!("{} {} on {}: {}", "✓".green(), habit.name.bold(), outcome.date, value)
    } else {
        format!(
            "{} {} on {}: {} (unchanged)",
            "-".dimmed(),
            habit.name.bold(),
            outcome.date,
            value
        )
    }
}

/// Format a single day's mood
pub fn format_mood_entry_pretty(entry: Option<&MoodEntry>, date: NaiveDate) -> String {
    entry.map_or_else(
        || format!("{}: {}", date, "no mood logged".dimmed()),
        |entry| {
            let mut output = format!("{}: {}", entry.date, entry.mood);
            if !entry.notes.is_empty() {
                output.push_str(&format!("\n  {}", entry.notes.italic()));
            }
            output
        },
    )
}

/// Format the weekly mood trend
pub fn format_mood_week_pretty(points: &[MoodTrendPoint], average: Option<f64>) -> String {
    let mut output = format!("{}\n", "Mood this week".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for point in points {
        let mood = point
            .mood
            .map_or_else(|| "-".dimmed().to_string(), |m| m.to_string());
        output.push_str(&format!("  {}  {}\n", point.date.format("%a %d"), mood));
    }

    let scores: Vec<u8> = points.iter().map(|p| p.score).collect();
    output.push_str(&format!("\n  Trend: {}\n", render_mood_sparkline(&scores)));

    match average {
        Some(avg) => output.push_str(&format!("  Average: {avg:.1}/5\n")),
        None => output.push_str(&format!("  {}\n", "No moods logged yet".dimmed())),
    }

    output
}

/// Format a month of moods as a calendar grid
pub fn format_mood_calendar_pretty(calendar: &MoodCalendar) -> String {
    let title = NaiveDate::from_ymd_opt(calendar.year, calendar.month, 1).map_or_else(
        || format!("{}-{:02}", calendar.year, calendar.month),
        |d| d.format("%B %Y").to_string(),
    );

    let mut output = format!("{}\n", title.bold());
    output.push_str(&format!(
        "{}\n",
        WEEKDAY_LABELS
            .iter()
            .map(|l| format!("{l:<4}"))
            .collect::<String>()
            .trim_end()
            .dimmed()
    ));

    for week in calendar.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_string(),
                Some(day) => {
                    let label = day.mood.map_or_else(
                        || format!("{:>2}", day.day),
                        |m| m.emoji().to_string(),
                    );
                    let label = if day.is_today {
                        label.reversed().to_string()
                    } else {
                        label
                    };
                    format!("{label}  ")
                },
            })
            .collect();
        output.push_str(row.concat().trim_end());
        output.push('\n');
    }

    output
}

/// Format the cross-habit overview
pub fn format_profile_pretty(profile: &ProfileOverview) -> String {
    let mut output = format!("{}\n", "👤 PROFILE".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    let rows = [
        ("Active habits", profile.active_habits.to_string()),
        ("Current streak", streak_label(profile.overall_streak)),
        ("Mood entries", profile.mood_entries.to_string()),
        (
            "This week",
            format!("{}/7 days", profile.active_days_this_week),
        ),
        (
            "Best habit",
            profile.best_habit.as_ref().map_or_else(
                || "No habits yet".dimmed().to_string(),
                |best| format!("{} ({} times)", best.name, best.completions),
            ),
        ),
        (
            "Favorite mood",
            profile.favorite_mood.map_or_else(
                || "No moods logged".dimmed().to_string(),
                |fav| format!("{} ({} times)", fav.mood, fav.count),
            ),
        ),
    ];

    for (label, value) in rows {
        let label = format!("{:<16}", format!("{label}:"));
        output.push_str(&format!("  {}{}\n", label.dimmed(), value));
    }

    output
}

/// Format the demo data summary
pub fn format_seed_pretty(summary: &SeedSummary) -> String {
    format!(
        "{} Seeded {} habits, {} completions and {} mood entries",
        "✓".green(),
        summary.habits,
        summary.completions,
        summary.moods
    )
}
