//! SQL schema definitions.

/// Schema for the v1 database.
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;
