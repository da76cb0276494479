//! Daily mood journal entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{format_date, parse_date};
use crate::error::JustmeError;

/// How the day felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 😊
    Happy,
    /// 🤩
    Excited,
    /// 😐
    Neutral,
    /// 😢
    Sad,
    /// 😠
    Angry,
}

impl Mood {
    /// Every mood, best first.
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Excited,
        Self::Neutral,
        Self::Sad,
        Self::Angry,
    ];

    /// Parse a mood name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Some(Self::Happy),
            "excited" => Some(Self::Excited),
            "neutral" | "ok" | "meh" => Some(Self::Neutral),
            "sad" => Some(Self::Sad),
            "angry" => Some(Self::Angry),
            _ => None,
        }
    }

    /// Stable storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Excited => "Excited",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
        }
    }

    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Excited => "🤩",
            Self::Neutral => "😐",
            Self::Sad => "😢",
            Self::Angry => "😠",
        }
    }

    /// Score used for trends, 1 (angry) to 5 (happy).
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::Happy => 5,
            Self::Excited => 4,
            Self::Neutral => 3,
            Self::Sad => 2,
            Self::Angry => 1,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.display_name())
    }
}

/// One mood entry. At most one exists per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: Mood,
    pub notes: String,
    /// Calendar date, `yyyy-MM-dd`.
    pub date: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Create an entry with a fresh id.
    #[must_use]
    pub fn new(mood: Mood, notes: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mood,
            notes: notes.into(),
            date: format_date(date),
            timestamp: Utc::now(),
        }
    }

    /// The entry's date, if it is well formed.
    ///
    /// # Errors
    ///
    /// Returns `JustmeError::MalformedDate` for a bad date string.
    pub fn parsed_date(&self) -> Result<NaiveDate, JustmeError> {
        parse_date(&self.date)
    }
}
