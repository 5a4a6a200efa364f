//! Subcommand handlers.
//!
//! Each handler renders its output to a string, as text or JSON depending on
//! [`Context::json`], and leaves printing to the caller.

pub mod calendar;
pub mod overview;
pub mod report;
pub mod status;

use chrono::{DateTime, Utc};
use payline_engine::StatusPolicy;

/// Settings shared by every subcommand.
#[derive(Clone, Copy, Debug)]
pub struct Context {
    /// Evaluation instant for status derivation.
    pub as_of: DateTime<Utc>,
    pub policy: StatusPolicy,
    pub json: bool,
}

/// Render a date column.
pub(crate) fn day(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
