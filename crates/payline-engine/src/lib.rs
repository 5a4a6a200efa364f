//! # payline-engine
//!
//! Affiliate commission accounting and payout scheduling.
//!
//! Sales mature for 14 days before their commission becomes eligible, and
//! eligible commission is paid on the next day of the monthly cycle
//! {7, 14, 21, 28}. Everything here is a pure function of its inputs; the
//! evaluation instant is always passed in explicitly.
//!
//! ## Modules
//!
//! - [`schedule`] — Eligibility window and payout cycle date math
//! - [`commission`] — Commission rate validation and per-sale commission
//! - [`status`] — Status derivation and override precedence
//! - [`calculator`] — Payout report computation
//! - [`overview`] — Cross-affiliate payout summaries
//! - [`money`] — Presentation rounding

pub mod calculator;
pub mod commission;
pub mod money;
pub mod overview;
pub mod schedule;
pub mod status;

pub use calculator::compute_payouts;
pub use schedule::next_scheduled_payout_date;
pub use status::StatusPolicy;

/// Error types for payout computation.
#[derive(Debug, thiserror::Error)]
pub enum PayoutError {
    /// A sale's date could not be parsed.
    #[error("sale {sale_id} has an invalid date: {value:?}")]
    InvalidSaleDate {
        /// The offending sale.
        sale_id: String,
        /// The raw date text.
        value: String,
    },

    /// A sale's amount is negative or not a finite number.
    #[error("sale {sale_id} has an invalid amount: {amount}")]
    InvalidSaleAmount {
        /// The offending sale.
        sale_id: String,
        /// The rejected amount.
        amount: f64,
    },

    /// Commission rate is negative or not a finite number.
    #[error("invalid commission rate: {rate}")]
    InvalidCommissionRate {
        /// The rejected rate.
        rate: f64,
    },

    /// A date fell outside the representable calendar range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}

/// Convenience result type for payout operations.
pub type Result<T> = std::result::Result<T, PayoutError>;
