//! Demo data for trying the tool out.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::Store;
use crate::error::JustmeError;
use crate::model::{Habit, Mood, MoodEntry, TrackingType};

/// Chance that a habit was logged on a given demo day.
const COMPLETION_CHANCE: f64 = 0.8;

/// Chance that a mood was logged on a given demo day.
const MOOD_CHANCE: f64 = 0.9;

const MOOD_NOTES: [&str; 6] = [
    "Had a great day!",
    "Feeling productive",
    "Nice and relaxed",
    "Busy but good",
    "Just okay today",
    "",
];

/// What a seed run created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub habits: usize,
    pub completions: usize,
    pub moods: usize,
}

fn demo_habits() -> Result<Vec<Habit>, JustmeError> {
    Ok(vec![
        Habit::new(
            "Drink Water",
            "8 glasses daily",
            TrackingType::Counter {
                target: 8,
                unit: "glasses".to_string(),
            },
        )?,
        Habit::new("Morning Exercise", "30 min workout", TrackingType::Checkbox)?,
        Habit::new(
            "Read Books",
            "15 min reading",
            TrackingType::Timer {
                target: 15,
                unit: "minutes".to_string(),
            },
        )?,
        Habit::new(
            "Meditate",
            "Daily meditation",
            TrackingType::Timer {
                target: 10,
                unit: "minutes".to_string(),
            },
        )?,
        Habit::new("Take Vitamins", "Daily supplements", TrackingType::Checkbox)?,
    ])
}

fn demo_value<R: Rng + ?Sized>(tracking: &TrackingType, rng: &mut R) -> u32 {
    match tracking {
        TrackingType::Checkbox => 1,
        TrackingType::Counter { target, .. } => rng.gen_range(1..=*target),
        // Whole five-minute blocks
        TrackingType::Timer { target, .. } => rng.gen_range(1..=(*target / 5).max(1)) * 5,
    }
}

impl Store {
    /// Replace all data with demo habits and `days` days of history ending
    /// at `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn seed_demo_data<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        days: u32,
        rng: &mut R,
    ) -> Result<SeedSummary, JustmeError> {
        self.reset_all()?;

        let tx = self
            .conn()
            .unchecked_transaction()
            .map_err(|e| JustmeError::Database(format!("Failed to begin transaction: {e}")))?;

        let first_day = today - Duration::days(i64::from(days.saturating_sub(1)));
        let mut summary = SeedSummary {
            habits: 0,
            completions: 0,
            moods: 0,
        };

        let mut habits = demo_habits()?;
        for habit in &mut habits {
            habit.created_at = first_day.and_time(NaiveTime::MIN).and_utc();
            self.add_habit(habit)?;
            summary.habits += 1;
        }

        for offset in 0..days {
            let date = today - Duration::days(i64::from(offset));

            for habit in &habits {
                if rng.gen_bool(COMPLETION_CHANCE) {
                    let value = demo_value(&habit.tracking, rng);
                    self.log_value(habit, date, value)?;
                    summary.completions += 1;
                }
            }

            if rng.gen_bool(MOOD_CHANCE) {
                let mood = Mood::ALL.choose(rng).copied().unwrap_or(Mood::Neutral);
                let notes = MOOD_NOTES.choose(rng).copied().unwrap_or_default();
                self.set_mood(&MoodEntry::new(mood, notes, date))?;
                summary.moods += 1;
            }
        }

        tx.commit()
            .map_err(|e| JustmeError::Database(format!("Failed to commit demo data: {e}")))?;

        tracing::info!(
            habits = summary.habits,
            completions = summary.completions,
            moods = summary.moods,
            "seeded demo data"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HabitStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_seed_creates_demo_habits() {
        let store = Store::open_in_memory().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let summary = store.seed_demo_data(today(), 30, &mut rng).unwrap();
        assert_eq!(summary.habits, 5);

        let habits = store.list_habits().unwrap();
        let names: Vec<&str> = habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Drink Water",
                "Morning Exercise",
                "Read Books",
                "Meditate",
                "Take Vitamins"
            ]
        );
        assert!(summary.moods <= 30);
        assert!(summary.completions <= 150);
    }

    #[test]
    fn test_seed_values_fit_tracking_type() {
        let store = Store::open_in_memory().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        store.seed_demo_data(today(), 30, &mut rng).unwrap();

        let first = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        for habit in store.list_habits().unwrap() {
            assert_eq!(habit.created_at.date_naive(), first);
            for record in store.list_completions(&habit.id).unwrap() {
                let date = record.parsed_date().unwrap();
                assert!(date <= today() && date >= first);
                match habit.tracking {
                    TrackingType::Checkbox => assert_eq!(record.value, 1),
                    TrackingType::Counter { target, .. } => {
                        assert!((1..=target).contains(&record.value));
                    },
                    TrackingType::Timer { target, .. } => {
                        assert_eq!(record.value % 5, 0);
                        assert!(record.value <= target);
                    },
                }
            }
        }
    }

    #[test]
    fn test_seed_replaces_existing_data() {
        let store = Store::open_in_memory().unwrap();
        let mine = Habit::new("Mine", "", TrackingType::Checkbox).unwrap();
        store.add_habit(&mine).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        store.seed_demo_data(today(), 7, &mut rng).unwrap();

        assert!(store.get_habit(&mine.id).unwrap().is_none());
        assert_eq!(store.list_habits().unwrap().len(), 5);
    }
}
