//! Cross-habit overview: activity streak, weekly activity, best habit and
//! favourite mood.
//!
//! Unlike the per-habit engine, these figures only ask whether *anything* was
//! logged on a day, regardless of targets.

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::engine::STREAK_LOOKBACK_DAYS;
use crate::core::{parse_date, week_dates, Clock, HabitStore};
use crate::error::JustmeError;
use crate::model::{CompletionRecord, Habit, Mood, MoodEntry};

/// The habit with the most completion records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHabit {
    pub habit_id: String,
    pub name: String,
    pub completions: usize,
}

/// The most frequently logged mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMood {
    pub mood: Mood,
    pub count: usize,
}

/// Overview across all habits and moods as of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOverview {
    pub date: NaiveDate,
    pub active_habits: usize,
    /// Consecutive days with at least one completion.
    pub overall_streak: u32,
    pub mood_entries: usize,
    pub week_start: NaiveDate,
    /// Days this week with at least one completion, out of 7.
    pub active_days_this_week: usize,
    pub best_habit: Option<BestHabit>,
    pub favorite_mood: Option<FavoriteMood>,
}

fn active_dates(completions: &[CompletionRecord]) -> BTreeSet<NaiveDate> {
    completions
        .iter()
        .filter(|r| r.value > 0)
        .filter_map(|r| parse_date(&r.date).ok())
        .collect()
}

/// Consecutive days ending today with any completion at all.
///
/// An empty today does not end the walk; an empty earlier day does. Looks
/// back at most [`STREAK_LOOKBACK_DAYS`] days.
#[must_use]
pub fn overall_streak(completions: &[CompletionRecord], today: NaiveDate) -> u32 {
    let dates = active_dates(completions);
    let mut streak = 0;

    for offset in 0..=STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if dates.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }

    streak
}

/// Distinct days in the week starting `week_start` with any completion.
#[must_use]
pub fn active_days_in_week(completions: &[CompletionRecord], week_start: NaiveDate) -> usize {
    let dates = active_dates(completions);
    week_dates(week_start)
        .into_iter()
        .filter(|day| dates.contains(day))
        .count()
}

/// The habit with the most completion records, if any has one.
///
/// Ties go to the habit listed first.
#[must_use]
pub fn best_habit(habits: &[Habit], completions: &[CompletionRecord]) -> Option<BestHabit> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in completions.iter().filter(|r| r.value > 0) {
        *counts.entry(record.habit_id.as_str()).or_default() += 1;
    }

    habits
        .iter()
        .map(|h| (h, counts.get(h.id.as_str()).copied().unwrap_or(0)))
        .rev()
        .max_by_key(|(_, count)| *count)
        .filter(|(_, count)| *count > 0)
        .map(|(habit, count)| BestHabit {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            completions: count,
        })
}

/// The most frequently logged mood.
///
/// Ties go to the mood that appears first in `entries`.
#[must_use]
pub fn favorite_mood(entries: &[MoodEntry]) -> Option<FavoriteMood> {
    let mut counts: Vec<FavoriteMood> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|c| c.mood == entry.mood) {
            Some(c) => c.count += 1,
            None => counts.push(FavoriteMood {
                mood: entry.mood,
                count: 1,
            }),
        }
    }

    counts.into_iter().rev().max_by_key(|c| c.count)
}

impl ProfileOverview {
    /// Build the overview from every habit, completion and mood entry.
    #[must_use]
    pub fn build(
        habits: &[Habit],
        completions: &[CompletionRecord],
        moods: &[MoodEntry],
        today: NaiveDate,
        week_start: NaiveDate,
    ) -> Self {
        Self {
            date: today,
            active_habits: habits.iter().filter(|h| h.is_active).count(),
            overall_streak: overall_streak(completions, today),
            mood_entries: moods.len(),
            week_start,
            active_days_this_week: active_days_in_week(completions, week_start),
            best_habit: best_habit(habits, completions),
            favorite_mood: favorite_mood(moods),
        }
    }
}

/// Build the overview from a store's habits and the given mood entries.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn build_profile<S, C>(
    store: &S,
    clock: &C,
    moods: &[MoodEntry],
) -> Result<ProfileOverview, JustmeError>
where
    S: HabitStore + ?Sized,
    C: Clock + ?Sized,
{
    let habits = store.list_habits()?;
    let mut completions = Vec::new();
    for habit in &habits {
        completions.extend(store.list_completions(&habit.id)?);
    }

    Ok(ProfileOverview::build(
        &habits,
        &completions,
        moods,
        clock.today(),
        clock.current_week_start(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, MockHabitStore};
    use crate::model::TrackingType;
    use chrono::{TimeZone, Utc};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
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

    fn mood(m: Mood, d: u32) -> MoodEntry {
        MoodEntry::new(m, "", date(d))
    }

    #[test]
    fn test_overall_streak_spans_habits() {
        let completions = vec![
            record("a", "2024-01-08"),
            record("b", "2024-01-09"),
            record("a", "2024-01-10"),
            record("a", "2024-01-06"),
        ];
        assert_eq!(overall_streak(&completions, date(10)), 3);
    }

    #[test]
    fn test_overall_streak_empty_today_does_not_break() {
        let completions = vec![record("a", "2024-01-08"), record("b", "2024-01-09")];
        assert_eq!(overall_streak(&completions, date(10)), 2);
    }

    #[test]
    fn test_overall_streak_zero_when_yesterday_empty() {
        let completions = vec![record("a", "2024-01-08")];
        assert_eq!(overall_streak(&completions, date(10)), 0);
    }

    #[test]
    fn test_overall_streak_capped_by_lookback() {
        let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let completions: Vec<CompletionRecord> = (0..80)
            .map(|i| record("a", &crate::core::format_date(start + Duration::days(i))))
            .collect();
        assert_eq!(overall_streak(&completions, date(10)), 31);
    }

    #[test]
    fn test_active_days_in_week_counts_distinct_dates() {
        let completions = vec![
            record("a", "2024-01-01"),
            record("b", "2024-01-01"),
            record("a", "2024-01-03"),
            record("a", "2023-12-31"),
            record("a", "2024-01-08"),
            record("a", "bad"),
        ];
        assert_eq!(active_days_in_week(&completions, date(1)), 2);
    }

    #[test]
    fn test_best_habit() {
        let habits = vec![habit("a", true), habit("b", false), habit("c", true)];
        let completions = vec![
            record("a", "2024-01-01"),
            record("b", "2024-01-01"),
            record("b", "2024-01-02"),
            record("c", "2024-01-02"),
            record("c", "2024-01-03"),
        ];

        let best = best_habit(&habits, &completions).unwrap();
        assert_eq!(best.habit_id, "b");
        assert_eq!(best.completions, 2);
    }

    #[test]
    fn test_best_habit_none_without_completions() {
        assert!(best_habit(&[habit("a", true)], &[]).is_none());
        assert!(best_habit(&[], &[]).is_none());
    }

    #[test]
    fn test_favorite_mood() {
        let entries = vec![
            mood(Mood::Sad, 1),
            mood(Mood::Happy, 2),
            mood(Mood::Happy, 3),
            mood(Mood::Sad, 4),
            mood(Mood::Neutral, 5),
        ];

        let favorite = favorite_mood(&entries).unwrap();
        assert_eq!(favorite.mood, Mood::Sad);
        assert_eq!(favorite.count, 2);
        assert!(favorite_mood(&[]).is_none());
    }

    #[test]
    fn test_build_profile_from_store() {
        let mut store = MockHabitStore::new();
        store
            .expect_list_habits()
            .returning(|| Ok(vec![habit("a", true), habit("b", false)]));
        store.expect_list_completions().returning(|id| {
            Ok(match id {
                "a" => vec![record("a", "2024-01-09"), record("a", "2024-01-10")],
                _ => vec![record("b", "2024-01-08")],
            })
        });

        let moods = vec![mood(Mood::Excited, 9)];
        let profile = build_profile(&store, &FixedClock(date(10)), &moods).unwrap();

        assert_eq!(profile.active_habits, 1);
        assert_eq!(profile.overall_streak, 3);
        assert_eq!(profile.mood_entries, 1);
        assert_eq!(profile.week_start, date(8));
        assert_eq!(profile.active_days_this_week, 3);
        assert_eq!(profile.best_habit.unwrap().name, "Habit a");
        assert_eq!(profile.favorite_mood.unwrap().mood, Mood::Excited);
    }
}
