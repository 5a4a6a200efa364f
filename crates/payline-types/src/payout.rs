//! Payout records derived from sales.
//!
//! Payouts are never persisted. They are recomputed from the current sale
//! list, the affiliate's commission rate and an evaluation instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Money, ProductInfo, SaleId, UnknownStatus};

/// Payout status of a single sale's commission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    /// Still inside the eligibility window.
    #[serde(alias = "Pending Eligibility", alias = "pending")]
    PendingEligibility,
    /// Matured and waiting for the next payout batch.
    #[serde(alias = "Eligible for Payout", alias = "eligible")]
    EligibleForPayout,
    /// Disbursed.
    #[serde(alias = "Paid")]
    Paid,
}

impl PayoutStatus {
    /// Dashboard label.
    pub fn label(self) -> &'static str {
        match self {
            PayoutStatus::PendingEligibility => "Pending Eligibility",
            PayoutStatus::EligibleForPayout => "Eligible for Payout",
            PayoutStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayoutStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "pending" | "pendingeligibility" => Ok(PayoutStatus::PendingEligibility),
            "eligible" | "eligibleforpayout" => Ok(PayoutStatus::EligibleForPayout),
            "paid" => Ok(PayoutStatus::Paid),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Where a payout's status came from.
///
/// A manually set status always wins over the derived one; the derived
/// value is only the fallback when no override exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(tag = "source", content = "status", rename_all = "snake_case")]
pub enum Status {
    Derived(PayoutStatus),
    ManuallySet(PayoutStatus),
}

impl Status {
    /// The status in effect regardless of its source.
    pub fn effective(self) -> PayoutStatus {
        match self {
            Status::Derived(s) | Status::ManuallySet(s) => s,
        }
    }

    pub fn is_manual(self) -> bool {
        matches!(self, Status::ManuallySet(_))
    }
}

/// A sale's commission with its computed schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Payout {
    pub sale_id: SaleId,
    pub product: ProductInfo,
    pub amount: Money,
    #[ts(type = "string")]
    pub sale_date: DateTime<Utc>,
    pub customer_name: String,
    pub commission: Money,
    #[ts(type = "string")]
    pub eligible_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub payout_date: DateTime<Utc>,
    pub status: Status,
}

impl Payout {
    /// Effective status shorthand.
    pub fn effective_status(&self) -> PayoutStatus {
        self.status.effective()
    }
}

/// Output of a payout computation for one affiliate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct PayoutReport {
    /// One payout per sale, most recent sale first.
    pub payouts: Vec<Payout>,
    /// Eligible commission scheduled in the nearest upcoming batch.
    pub next_payout_total: Money,
    /// Earliest payout date among unpaid payouts.
    #[ts(type = "string | null")]
    pub next_payout_date: Option<DateTime<Utc>>,
    /// Commission still inside the eligibility window.
    pub pending_total: Money,
    /// Commission not yet paid, whatever its eligibility.
    pub total_commission_pending: Money,
    /// Commission already paid.
    pub paid_total: Money,
}
