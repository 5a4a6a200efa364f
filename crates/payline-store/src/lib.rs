//! # payline-store
//!
//! Sale store for affiliate data.
//!
//! Affiliates and their sales are kept as whole JSON collections in a
//! key-value table and rewritten wholesale on every mutation. Callers go
//! through the [`SaleStore`] trait so the payout engine never touches
//! storage.
//!
//! ## Schema
//!
//! - WAL mode, foreign keys enforced
//! - Timestamps are Unix epoch seconds
//! - Schema version stored in `PRAGMA user_version`

pub mod memory;
pub mod migrations;
pub mod ops;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod sqlite;

use payline_types::Affiliate;

pub use memory::MemorySaleStore;
pub use ops::{clear_sale_status, find_affiliate, set_sale_status};
pub use sqlite::SqliteSaleStore;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Collection key under which affiliates are stored.
pub const AFFILIATES_KEY: &str = "affiliates";

/// Store error types.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Repository of affiliates and their sales.
pub trait SaleStore {
    /// Load every affiliate with its sales.
    fn load(&self) -> Result<Vec<Affiliate>>;

    /// Replace the stored affiliates.
    fn save(&mut self, affiliates: &[Affiliate]) -> Result<()>;
}
