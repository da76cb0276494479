//! Storage layer for justme.
//!
//! This module provides SQLite-based persistence for:
//! - Habits and their daily completion records
//! - Mood journal entries
//! - Quick logging and demo data on top of those

mod completions;
mod database;
mod habits;
mod migrations;
mod moods;
mod quicklog;
mod seed;
mod store;

pub use database::Database;
pub use quicklog::{LogAction, LogOutcome, StepSizes};
pub use seed::SeedSummary;
pub use store::Store;
