//! Domain types: habits, their daily completion records, and mood entries.

mod completion;
mod habit;
mod mood;

pub use completion::CompletionRecord;
pub use habit::{Habit, HabitUpdate, TrackingType, DEFAULT_TIMER_UNIT};
pub use mood::{Mood, MoodEntry};
