//! justme - habit and mood tracking for the command line
//!
//! This crate tracks checkbox, counter and timer habits in a local `SQLite`
//! database and derives streaks, weekly grids and success rates from the
//! daily completion history. A one-entry-per-day mood journal sits alongside.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod output;
pub mod stats;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::JustmeError;
pub use storage::Store;
