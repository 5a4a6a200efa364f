//! Status derivation and override precedence.
//!
//! State machine under [`StatusPolicy::ManualPaidOnly`]:
//!
//! ```text
//! PendingEligibility --(as_of > eligible_date)--> EligibleForPayout
//! any --(manual override)--> any
//! ```
//!
//! `Paid` is reachable only by a manual override. The
//! [`StatusPolicy::PaidAfterPayoutDate`] policy additionally treats a payout
//! whose scheduled date has passed as paid.

use chrono::{DateTime, Utc};
use payline_types::{PayoutStatus, Status};
use serde::{Deserialize, Serialize};

/// How statuses are derived when a sale has no manual override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Only pending and eligible are ever derived.
    #[default]
    ManualPaidOnly,
    /// A passed payout date is derived as paid.
    PaidAfterPayoutDate,
}

/// Derive a status from the clock alone.
pub fn derive_status(
    policy: StatusPolicy,
    as_of: DateTime<Utc>,
    eligible_date: DateTime<Utc>,
    payout_date: DateTime<Utc>,
) -> PayoutStatus {
    if policy == StatusPolicy::PaidAfterPayoutDate && as_of > payout_date {
        return PayoutStatus::Paid;
    }
    if as_of > eligible_date {
        PayoutStatus::EligibleForPayout
    } else {
        PayoutStatus::PendingEligibility
    }
}

/// Resolve a payout's status, letting a manual override win.
pub fn resolve_status(
    manual: Option<PayoutStatus>,
    policy: StatusPolicy,
    as_of: DateTime<Utc>,
    eligible_date: DateTime<Utc>,
    payout_date: DateTime<Utc>,
) -> Status {
    match manual {
        Some(status) => Status::ManuallySet(status),
        None => Status::Derived(derive_status(policy, as_of, eligible_date, payout_date)),
    }
}
