//! Statistics for habits and moods.
//!
//! - Streak, day status and weekly success computations
//! - Per-habit reports and history
//! - Cross-habit profile overview
//! - Today's progress summary
//! - Mood trends and calendars

pub mod engine;
pub mod history;
pub mod mood;
pub mod profile;
pub mod report;
pub mod today;

pub use engine::{
    current_streak, day_status, success_threshold, total_successful_days, weekly_grid,
    weekly_success_rate, DailyValues, DayStatus, MAX_STREAK, STREAK_LOOKBACK_DAYS,
};
pub use history::{habit_history, value_label, HistoryEntry};
pub use mood::{average_mood, mood_trend, CalendarDay, MoodCalendar, MoodTrendPoint};
pub use profile::{
    active_days_in_week, best_habit, build_profile, favorite_mood, overall_streak, BestHabit,
    FavoriteMood, ProfileOverview,
};
pub use report::{build_reports, HabitReport};
pub use today::{TodayItem, TodaySummary};
