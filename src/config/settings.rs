//! Configuration settings for justme.
//!
//! Settings are loaded from `~/.justme/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::JustmeError;
use crate::storage::StepSizes;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Quick-log settings.
    pub tracking: TrackingConfig,
    /// Display settings.
    pub display: DisplayConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Quick-log step sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Amount added or removed per counter step.
    #[serde(default = "default_counter_step")]
    pub counter_step: u32,
    /// Minutes added or removed per timer step.
    #[serde(default = "default_timer_step")]
    pub timer_step_minutes: u32,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Habits listed in the today summary before collapsing to "+N more".
    #[serde(default = "default_max_today_habits")]
    pub max_today_habits: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_counter_step() -> u32 {
    1
}

const fn default_timer_step() -> u32 {
    5
}

const fn default_max_today_habits() -> usize {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            counter_step: default_counter_step(),
            timer_step_minutes: default_timer_step(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_today_habits: default_max_today_habits(),
        }
    }
}

impl From<&TrackingConfig> for StepSizes {
    fn from(config: &TrackingConfig) -> Self {
        // A zero step would make inc/dec silently do nothing
        Self {
            counter: config.counter_step.max(1),
            timer: config.timer_step_minutes.max(1),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, JustmeError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, JustmeError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            JustmeError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            JustmeError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), JustmeError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| JustmeError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            JustmeError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Quick-log step sizes from the tracking section.
    #[must_use]
    pub fn step_sizes(&self) -> StepSizes {
        StepSizes::from(&self.tracking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.tracking.counter_step, 1);
        assert_eq!(config.tracking.timer_step_minutes, 5);
        assert_eq!(config.display.max_today_habits, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.tracking.timer_step_minutes = 10;
        config.display.max_today_habits = 3;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.tracking.timer_step_minutes, 10);
        assert_eq!(loaded.display.max_today_habits, 3);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
tracking:
  counter_step: 2
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.tracking.counter_step, 2);
        // Defaults should be used for missing fields
        assert_eq!(config.tracking.timer_step_minutes, 5);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "general: [not, a, map]").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(JustmeError::Config(_))));
    }

    #[test]
    fn test_step_sizes_never_zero() {
        let mut config = Config::default();
        config.tracking.counter_step = 0;

        let steps = config.step_sizes();
        assert_eq!(steps.counter, 1);
        assert_eq!(steps.timer, 5);
    }
}
