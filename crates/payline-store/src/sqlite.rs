//! SQLite-backed sale store.

use std::path::Path;

use payline_types::Affiliate;
use rusqlite::Connection;

use crate::queries::collections;
use crate::{migrations, Result, SaleStore, AFFILIATES_KEY};

/// Open or create the store database at the given path.
///
/// Configures WAL mode, foreign keys, and runs any pending migrations.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    migrations::run(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing).
pub fn open_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    migrations::run(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

/// [`SaleStore`] persisting the affiliates collection in SQLite.
pub struct SqliteSaleStore {
    conn: Connection,
}

impl SqliteSaleStore {
    /// Wrap an already opened and migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open(path)?))
    }

    /// In-memory store (for testing).
    pub fn open_memory() -> Result<Self> {
        Ok(Self::new(open_memory()?))
    }

    /// Whether an affiliates collection has ever been written.
    pub fn has_data(&self) -> Result<bool> {
        Ok(collections::get(&self.conn, AFFILIATES_KEY)?.is_some())
    }
}

impl SaleStore for SqliteSaleStore {
    fn load(&self) -> Result<Vec<Affiliate>> {
        match collections::get(&self.conn, AFFILIATES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, affiliates: &[Affiliate]) -> Result<()> {
        let json = serde_json::to_string(affiliates)?;
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        collections::set(&self.conn, AFFILIATES_KEY, &json, now)?;
        tracing::debug!(affiliates = affiliates.len(), bytes = json.len(), "affiliates saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use payline_types::Sale;

    fn sample() -> Vec<Affiliate> {
        vec![Affiliate {
            id: "AFF-1".to_string(),
            name: "Mara Quint".to_string(),
            email: "mara@example.com".to_string(),
            commission_rate: 12.0,
            joined_at: "2024-01-10".to_string(),
            sales: vec![Sale::new("S-1", "Tote", 40.0, "2024-07-01", "Ari")],
        }]
    }

    #[test]
    fn test_open_memory_version() {
        let conn = open_memory().expect("open in-memory db");
        let version: u32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .expect("get user_version");
        assert_eq!(version, crate::SCHEMA_VERSION);
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = SqliteSaleStore::open_memory().expect("open");
        assert!(store.load().expect("load").is_empty());
        assert!(!store.has_data().expect("has_data"));
    }

    #[test]
    fn test_save_and_load() {
        let mut store = SqliteSaleStore::open_memory().expect("open");
        store.save(&sample()).expect("save");
        assert!(store.has_data().expect("has_data"));
        assert_eq!(store.load().expect("load"), sample());
    }

    #[test]
    fn test_corrupt_collection_is_reported() {
        let store = SqliteSaleStore::open_memory().expect("open");
        collections::set(&store.conn, AFFILIATES_KEY, "{not json", 1).expect("set");
        assert!(matches!(store.load(), Err(StoreError::Serialization(_))));
    }
}
