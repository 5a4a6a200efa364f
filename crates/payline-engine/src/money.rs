//! Presentation rounding. Computation keeps full precision; values are
//! rounded to cents only when they leave the engine for display.

use payline_types::{Money, PayoutReport};

use crate::overview::{AffiliateSummary, PanelState, PayoutTotals};

/// Round to two decimal places, half away from zero.
pub fn round_to_cents(value: Money) -> Money {
    (value * 100.0).round() / 100.0
}

/// Format an amount as a dollar string, e.g. `$1,234.50`.
pub fn format_money(value: Money) -> String {
    let cents = (round_to_cents(value) * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Copy of `report` with every currency figure rounded to cents.
pub fn rounded(report: &PayoutReport) -> PayoutReport {
    let mut out = report.clone();
    for payout in &mut out.payouts {
        payout.amount = round_to_cents(payout.amount);
        payout.commission = round_to_cents(payout.commission);
    }
    out.next_payout_total = round_to_cents(out.next_payout_total);
    out.pending_total = round_to_cents(out.pending_total);
    out.total_commission_pending = round_to_cents(out.total_commission_pending);
    out.paid_total = round_to_cents(out.paid_total);
    out
}

/// Copy of `totals` with every currency figure rounded to cents.
pub fn rounded_totals(totals: &PayoutTotals) -> PayoutTotals {
    PayoutTotals {
        next_payout_total: round_to_cents(totals.next_payout_total),
        next_payout_date: totals.next_payout_date,
        pending_total: round_to_cents(totals.pending_total),
        total_commission_pending: round_to_cents(totals.total_commission_pending),
        paid_total: round_to_cents(totals.paid_total),
    }
}

/// Copy of an overview row with sales volume and panel totals rounded.
pub fn rounded_summary(summary: &AffiliateSummary) -> AffiliateSummary {
    let mut out = summary.clone();
    out.sales_volume = round_to_cents(out.sales_volume);
    if let PanelState::Ready(totals) = &summary.panel {
        out.panel = PanelState::Ready(rounded_totals(totals));
    }
    out
}
