//! Habit definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::JustmeError;

/// Unit shown for timer habits when none was given.
pub const DEFAULT_TIMER_UNIT: &str = "minutes";

/// How a day's logged value maps to success.
///
/// The kind is fixed when the habit is created; only the target may change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackingType {
    /// Done / not done.
    Checkbox,
    /// A count that must reach `target` (e.g. 8 glasses of water).
    Counter {
        /// Daily goal, at least 1.
        target: u32,
        /// Free-form label for the count.
        unit: String,
    },
    /// Minutes that must reach `target`.
    Timer {
        /// Daily goal, at least 1.
        target: u32,
        /// Label for the duration, usually `minutes`.
        unit: String,
    },
}

impl TrackingType {
    /// Build a tracking type from its stored parts.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidHabitConfiguration` for an unknown kind or
    /// a counter/timer target below 1.
    pub fn from_parts(kind: &str, target: u32, unit: &str) -> Result<Self, JustmeError> {
        let tracking = match kind.to_lowercase().as_str() {
            "checkbox" | "check" => Self::Checkbox,
            "counter" | "count" => Self::Counter {
                target,
                unit: unit.to_string(),
            },
            "timer" | "time" => Self::Timer {
                target,
                unit: if unit.is_empty() {
                    DEFAULT_TIMER_UNIT.to_string()
                } else {
                    unit.to_string()
                },
            },
            other => {
                return Err(JustmeError::InvalidHabitConfiguration(format!(
                    "unknown tracking type '{other}' (expected checkbox, counter or timer)"
                )))
            },
        };
        tracking.validate()?;
        Ok(tracking)
    }

    /// Stable name of the kind, as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Counter { .. } => "counter",
            Self::Timer { .. } => "timer",
        }
    }

    /// Daily target; always 1 for checkbox habits.
    #[must_use]
    pub const fn target(&self) -> u32 {
        match self {
            Self::Checkbox => 1,
            Self::Counter { target, .. } | Self::Timer { target, .. } => *target,
        }
    }

    /// Unit label; empty for checkbox habits.
    #[must_use]
    pub fn unit(&self) -> &str {
        match self {
            Self::Checkbox => "",
            Self::Counter { unit, .. } | Self::Timer { unit, .. } => unit,
        }
    }

    /// Whether the day's value is binary.
    #[must_use]
    pub const fn is_checkbox(&self) -> bool {
        matches!(self, Self::Checkbox)
    }

    fn validate(&self) -> Result<(), JustmeError> {
        match self {
            Self::Checkbox => Ok(()),
            Self::Counter { target, .. } | Self::Timer { target, .. } if *target == 0 => {
                Err(JustmeError::InvalidHabitConfiguration(
                    "target value must be greater than 0".to_string(),
                ))
            },
            Self::Counter { .. } | Self::Timer { .. } => Ok(()),
        }
    }
}

impl std::fmt::Display for TrackingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkbox => write!(f, "Checkbox"),
            Self::Counter { .. } => write!(f, "Counter"),
            Self::Timer { .. } => write!(f, "Timer"),
        }
    }
}

/// A tracked behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque identifier, immutable.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Tracking kind and target.
    pub tracking: TrackingType,
    /// Creation time, immutable.
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag. Inactive habits keep their history.
    pub is_active: bool,
}

impl Habit {
    /// Create a new active habit with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidHabitConfiguration` if the name is empty or
    /// the target is 0.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tracking: TrackingType,
    ) -> Result<Self, JustmeError> {
        let habit = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into().trim().to_string(),
            description: description.into().trim().to_string(),
            tracking,
            created_at: Utc::now(),
            is_active: true,
        };
        habit.validate()?;
        Ok(habit)
    }

    /// Check the habit's invariants.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidHabitConfiguration` on violation.
    pub fn validate(&self) -> Result<(), JustmeError> {
        if self.name.is_empty() {
            return Err(JustmeError::InvalidHabitConfiguration(
                "name cannot be empty".to_string(),
            ));
        }
        self.tracking.validate()
    }

    /// Daily target; 1 for checkbox habits.
    #[must_use]
    pub const fn target_value(&self) -> u32 {
        self.tracking.target()
    }

    /// Unit label for counter and timer habits.
    #[must_use]
    pub fn unit(&self) -> &str {
        self.tracking.unit()
    }

    /// Apply an edit. Id, tracking kind and creation time never change.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::InvalidHabitConfiguration` if the edit sets a
    /// target on a checkbox habit, sets a zero target, or clears the
    /// description.
    pub fn apply(&mut self, update: &HabitUpdate) -> Result<(), JustmeError> {
        let mut edited = self.clone();

        if let Some(description) = &update.description {
            let description = description.trim();
            if description.is_empty() {
                return Err(JustmeError::InvalidHabitConfiguration(
                    "description cannot be empty".to_string(),
                ));
            }
            edited.description = description.to_string();
        }

        if let Some(new_target) = update.target {
            match &mut edited.tracking {
                TrackingType::Checkbox => {
                    return Err(JustmeError::InvalidHabitConfiguration(
                        "checkbox habits have no target value".to_string(),
                    ))
                },
                TrackingType::Counter { target, .. } | TrackingType::Timer { target, .. } => {
                    *target = new_target;
                },
            }
        }

        if let Some(active) = update.active {
            edited.is_active = active;
        }

        edited.validate()?;
        *self = edited;
        Ok(())
    }
}

/// Editable fields of a habit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitUpdate {
    /// New description.
    pub description: Option<String>,
    /// New daily target (counter and timer only).
    pub target: Option<u32>,
    /// New active flag.
    pub active: Option<bool>,
}

impl HabitUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.target.is_none() && self.active.is_none()
    }
}
