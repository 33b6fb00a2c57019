//! Database schema and migrations.

use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            "Running migrations from version {} to {}",
            current_version, SCHEMA_VERSION
        );

        if current_version < 1 {
            migrate_v1(conn)?;
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!("Migrations complete");
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> Result<i32> {
    // Create schema_version table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: Initial schema.
fn migrate_v1(conn: &Connection) -> Result<()> {
    info!("Applying migration v1: Initial schema");

    // Config table - key-value configuration (preferences live here)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS config (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    // History table - suggestions the user accepted, newest first.
    // The food column holds a full JSON snapshot so history survives
    // catalog edits.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS history (
            id TEXT PRIMARY KEY,
            food TEXT NOT NULL,
            food_id TEXT NOT NULL,
            mood TEXT NOT NULL,
            city TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // Index for trimming and recency queries
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_history_created_at ON history (created_at)",
        [],
    )?;

    // Favorites table - one row per food, also a JSON snapshot
    conn.execute(
        "CREATE TABLE IF NOT EXISTS favorites (
            food_id TEXT PRIMARY KEY,
            food TEXT NOT NULL,
            added_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    // Quota counters table - one row per limited API kind
    conn.execute(
        "CREATE TABLE IF NOT EXISTS quota_counters (
            kind TEXT PRIMARY KEY,
            count INTEGER NOT NULL DEFAULT 0,
            date TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Run migrations twice - should not error
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_tables_created() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        conn.execute("SELECT * FROM config LIMIT 1", []).ok();
        conn.execute("SELECT * FROM history LIMIT 1", []).ok();
        conn.execute("SELECT * FROM favorites LIMIT 1", []).ok();
        conn.execute("SELECT * FROM quota_counters LIMIT 1", []).ok();
    }
}
