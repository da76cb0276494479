//! Error types for justme.

use thiserror::Error;

/// Errors produced by the justme library.
#[derive(Error, Debug)]
pub enum JustmeError {
    /// SQLite access failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be read, written or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A habit or entry could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A date string is not `yyyy-MM-dd`.
    #[error("Malformed date '{0}': expected yyyy-MM-dd")]
    MalformedDate(String),

    /// A habit definition violates its invariants (empty name, zero target).
    #[error("Invalid habit: {0}")]
    InvalidHabitConfiguration(String),

    /// The requested action does not apply to the habit's tracking type.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<serde_json::Error> for JustmeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for JustmeError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
