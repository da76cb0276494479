//! Database migrations for justme.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened; the version lives in
//! `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::JustmeError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, JustmeError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| JustmeError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), JustmeError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| JustmeError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), JustmeError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), JustmeError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(JustmeError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// - `habits`: habit definitions
/// - `completions`: one row per habit per date
/// - `mood_entries`: one row per date
fn migrate_v1(conn: &Connection) -> Result<(), JustmeError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS habits (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            tracking_type TEXT NOT NULL,
            target_value INTEGER NOT NULL DEFAULT 1 CHECK (target_value >= 1),
            unit TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        );

        -- Dates are yyyy-MM-dd so text order is date order
        CREATE TABLE IF NOT EXISTS completions (
            habit_id TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            value INTEGER NOT NULL CHECK (value > 0),
            timestamp TEXT NOT NULL,
            PRIMARY KEY (habit_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_completions_date
        ON completions(date);

        CREATE TABLE IF NOT EXISTS mood_entries (
            date TEXT PRIMARY KEY,
            id TEXT NOT NULL,
            mood TEXT NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            timestamp TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| JustmeError::Database(format!("Migration v1 failed: {e}")))
}
