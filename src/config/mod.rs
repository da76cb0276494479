//! Configuration management for justme.
//!
//! This module handles loading and saving configuration from `~/.justme/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DisplayConfig, GeneralConfig, TrackingConfig};
