//! Per-habit statistics view model.
//!
//! Bundles the engine outputs shown on the statistics screen: current streak,
//! this week's grid, the "n/7" completed count, the weekly success rate and the
//! all-time successful day count. The detail view also carries the logged
//! history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::{
    current_streak, total_successful_days, weekly_grid, weekly_success_rate, DayStatus,
};
use super::history::{habit_history, HistoryEntry};
use crate::core::{Clock, HabitStore};
use crate::error::JustmeError;
use crate::model::{CompletionRecord, Habit, TrackingType};

/// Statistics for one habit as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitReport {
    pub habit_id: String,
    pub name: String,
    pub description: String,
    pub tracking: TrackingType,
    pub is_active: bool,
    /// Consecutive successful days ending today (or yesterday if today is
    /// still pending).
    pub current_streak: u32,
    /// Monday of the reported week.
    pub week_start: NaiveDate,
    /// Monday..Sunday statuses.
    pub week: [DayStatus; 7],
    /// Days in `week` marked completed.
    pub weekly_completed: usize,
    /// Truncated percent of 7 days completed this week.
    pub weekly_success_rate: u32,
    /// Distinct successful days in the whole history.
    pub total_successful_days: u32,
    /// Logged days, newest first. Only filled in for the detail view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
}

impl HabitReport {
    /// Build the report from a habit and its history.
    #[must_use]
    pub fn build(
        habit: &Habit,
        completions: &[CompletionRecord],
        today: NaiveDate,
        week_start: NaiveDate,
    ) -> Self {
        let week = weekly_grid(habit, completions, week_start, today);
        let weekly_completed = week.iter().filter(|s| s.is_completed()).count();

        Self {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            description: habit.description.clone(),
            tracking: habit.tracking.clone(),
            is_active: habit.is_active,
            current_streak: current_streak(habit, completions, today),
            week_start,
            week,
            weekly_completed,
            weekly_success_rate: weekly_success_rate(habit, completions, week_start, today),
            total_successful_days: total_successful_days(habit, completions, today),
            history: Vec::new(),
        }
    }

    /// Attach the habit's history, keeping at most `limit` recent entries.
    #[must_use]
    pub fn with_history(
        mut self,
        habit: &Habit,
        completions: &[CompletionRecord],
        limit: Option<usize>,
    ) -> Self {
        let mut history = habit_history(habit, completions);
        if let Some(limit) = limit {
            history.truncate(limit);
        }
        self.history = history;
        self
    }
}

/// Build reports for every habit in the store.
///
/// Inactive habits are skipped unless `include_inactive` is set.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn build_reports<S, C>(
    store: &S,
    clock: &C,
    include_inactive: bool,
) -> Result<Vec<HabitReport>, JustmeError>
where
    S: HabitStore + ?Sized,
    C: Clock + ?Sized,
{
    let today = clock.today();
    let week_start = clock.current_week_start();

    store
        .list_habits()?
        .iter()
        .filter(|habit| include_inactive || habit.is_active)
        .map(|habit| {
            let completions = store.list_completions(&habit.id)?;
            Ok(HabitReport::build(habit, &completions, today, week_start))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, MockHabitStore};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: &str, active: bool) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("Habit {id}"),
            description: String::new(),
            tracking: TrackingType::Checkbox,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            is_active: active,
        }
    }

    fn record(habit_id: &str, day: &str) -> CompletionRecord {
        CompletionRecord {
            habit_id: habit_id.to_string(),
            date: day.to_string(),
            value: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_build_report() {
        let h = habit("a", true);
        let completions = vec![
            record("a", "2024-01-01"),
            record("a", "2024-01-02"),
            record("a", "2024-01-03"),
        ];
        let report = HabitReport::build(&h, &completions, date(2024, 1, 4), date(2024, 1, 1));

        assert_eq!(report.current_streak, 3);
        assert_eq!(report.weekly_completed, 3);
        assert_eq!(report.weekly_success_rate, 42);
        assert_eq!(report.total_successful_days, 3);
        assert_eq!(report.week[3], DayStatus::TodayPending);
        assert_eq!(report.week[6], DayStatus::FutureDay);
    }

    #[test]
    fn test_report_history() {
        let h = habit("a", true);
        let completions = vec![
            record("a", "2024-01-01"),
            record("a", "2024-01-03"),
            record("a", "2024-01-02"),
        ];

        let report = HabitReport::build(&h, &completions, date(2024, 1, 4), date(2024, 1, 1));
        assert!(report.history.is_empty());

        let report = report.with_history(&h, &completions, Some(2));
        let dates: Vec<NaiveDate> = report.history.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 3), date(2024, 1, 2)]);
    }

    #[test]
    fn test_build_reports_skips_inactive() {
        let mut store = MockHabitStore::new();
        store
            .expect_list_habits()
            .returning(|| Ok(vec![habit("a", true), habit("b", false)]));
        store
            .expect_list_completions()
            .with(eq("a"))
            .times(1)
            .returning(|_| Ok(vec![record("a", "2024-01-02")]));

        let clock = FixedClock(date(2024, 1, 3));
        let reports = build_reports(&store, &clock, false).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].habit_id, "a");
        assert_eq!(reports[0].current_streak, 1);
        assert_eq!(reports[0].week_start, date(2024, 1, 1));
    }

    #[test]
    fn test_build_reports_includes_inactive() {
        let mut store = MockHabitStore::new();
        store
            .expect_list_habits()
            .returning(|| Ok(vec![habit("a", true), habit("b", false)]));
        store
            .expect_list_completions()
            .times(2)
            .returning(|_| Ok(Vec::new()));

        let clock = FixedClock(date(2024, 1, 3));
        let reports = build_reports(&store, &clock, true).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!reports[1].is_active);
    }

    #[test]
    fn test_build_reports_propagates_errors() {
        let mut store = MockHabitStore::new();
        store
            .expect_list_habits()
            .returning(|| Err(JustmeError::Database("locked".to_string())));

        let clock = FixedClock(date(2024, 1, 3));
        assert!(build_reports(&store, &clock, false).is_err());
    }
}
