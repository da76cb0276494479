//! Core abstractions for justme.
//!
//! This module provides date utilities and the storage trait used across
//! features.

mod date;
mod traits;

pub use date::{
    days_since_creation, format_date, local_date, parse_date, week_dates, week_start, Clock,
    FixedClock, SystemClock, DATE_FORMAT,
};
#[cfg(test)]
pub use traits::MockHabitStore;
pub use traits::HabitStore;
