//! # payline-types
//!
//! Shared domain types for affiliate commission accounting: raw sales as the
//! dashboard stores them, affiliates, and the payout records derived from
//! them.

pub mod affiliate;
pub mod payout;
pub mod sale;

pub use affiliate::Affiliate;
pub use payout::{Payout, PayoutReport, PayoutStatus, Status};
pub use sale::{ProductInfo, Sale};

/// Identifier of a sale within an affiliate's collection.
pub type SaleId = String;

/// Identifier of an affiliate.
pub type AffiliateId = String;

/// Currency amounts. Full precision internally, rounded only for display.
pub type Money = f64;

/// Days a sale must mature before its commission can be paid.
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 14;

/// Days of the month on which payouts are disbursed, ascending.
pub const PAYOUT_CYCLE_DAYS: [u32; 4] = [7, 14, 21, 28];

/// Error returned when a status string cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("unknown payout status: {0}")]
pub struct UnknownStatus(pub String);
