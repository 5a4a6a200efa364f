//! Whole-collection key-value queries.

use rusqlite::{Connection, OptionalExtension};

use crate::Result;

/// Get the raw JSON value stored under `key`, if any.
pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM collections WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Store `value` under `key`, replacing any previous collection.
pub fn set(conn: &Connection, key: &str, value: &str, updated_at: u64) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO collections (key, value, updated_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![key, value, updated_at as i64],
    )?;
    Ok(())
}
