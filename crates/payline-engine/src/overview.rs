//! Cross-affiliate payout summaries for the admin payouts page.
//!
//! Each affiliate is computed independently. An affiliate whose data fails
//! validation is reported as a failed panel and does not affect the others.

use chrono::{DateTime, Utc};
use payline_types::{Affiliate, AffiliateId, Money, PayoutReport};
use serde::{Deserialize, Serialize};

use crate::calculator::compute_payouts;
use crate::status::StatusPolicy;

/// Summary figures of one affiliate's payout report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutTotals {
    pub next_payout_total: Money,
    pub next_payout_date: Option<DateTime<Utc>>,
    pub pending_total: Money,
    pub total_commission_pending: Money,
    pub paid_total: Money,
}

impl From<&PayoutReport> for PayoutTotals {
    fn from(report: &PayoutReport) -> Self {
        Self {
            next_payout_total: report.next_payout_total,
            next_payout_date: report.next_payout_date,
            pending_total: report.pending_total,
            total_commission_pending: report.total_commission_pending,
            paid_total: report.paid_total,
        }
    }
}

/// State of an affiliate's payout panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelState {
    Ready(PayoutTotals),
    Failed { error: String },
}

/// One row of the payouts overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffiliateSummary {
    pub affiliate_id: AffiliateId,
    pub name: String,
    pub commission_rate: f64,
    pub sale_count: usize,
    pub sales_volume: Money,
    pub panel: PanelState,
}

/// Summarize every affiliate's payouts as of `as_of`.
pub fn affiliate_overview(
    affiliates: &[Affiliate],
    as_of: DateTime<Utc>,
    policy: StatusPolicy,
) -> Vec<AffiliateSummary> {
    affiliates
        .iter()
        .map(|affiliate| {
            let panel = match compute_payouts(&affiliate.sales, affiliate.commission_rate, as_of, policy) {
                Ok(report) => PanelState::Ready(PayoutTotals::from(&report)),
                Err(e) => {
                    tracing::warn!(affiliate = %affiliate.id, error = %e, "affiliate payouts unavailable");
                    PanelState::Failed { error: e.to_string() }
                }
            };
            AffiliateSummary {
                affiliate_id: affiliate.id.clone(),
                name: affiliate.name.clone(),
                commission_rate: affiliate.commission_rate,
                sale_count: affiliate.sales.len(),
                sales_volume: affiliate.sales_volume(),
                panel,
            }
        })
        .collect()
}

/// Combined totals over all ready panels. The combined next payout date is
/// the earliest one among them; its total includes only affiliates paid in
/// that batch.
pub fn combined_totals(summaries: &[AffiliateSummary]) -> PayoutTotals {
    let ready: Vec<&PayoutTotals> = summaries
        .iter()
        .filter_map(|s| match &s.panel {
            PanelState::Ready(totals) => Some(totals),
            PanelState::Failed { .. } => None,
        })
        .collect();

    let next_payout_date = ready.iter().filter_map(|t| t.next_payout_date).min();

    PayoutTotals {
        next_payout_total: ready
            .iter()
            .filter(|t| next_payout_date.is_some() && t.next_payout_date == next_payout_date)
            .map(|t| t.next_payout_total)
            .sum(),
        next_payout_date,
        pending_total: ready.iter().map(|t| t.pending_total).sum(),
        total_commission_pending: ready.iter().map(|t| t.total_commission_pending).sum(),
        paid_total: ready.iter().map(|t| t.paid_total).sum(),
    }
}
