//! `payline overview`: payout panels for every affiliate.

use std::fmt::Write;

use payline_engine::money::{format_money, rounded_summary, rounded_totals};
use payline_engine::overview::{affiliate_overview, combined_totals, PanelState};
use payline_store::SaleStore;
use serde_json::json;

use super::{day, Context};

pub fn run(store: &dyn SaleStore, ctx: &Context) -> anyhow::Result<String> {
    let affiliates = store.load()?;
    let summaries = affiliate_overview(&affiliates, ctx.as_of, ctx.policy);
    let combined = combined_totals(&summaries);

    if ctx.json {
        let affiliates: Vec<_> = summaries.iter().map(rounded_summary).collect();
        let value = json!({
            "as_of": ctx.as_of,
            "affiliates": affiliates,
            "combined": rounded_totals(&combined),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    writeln!(out, "Payouts as of {}", day(ctx.as_of))?;
    writeln!(
        out,
        "{:<10} {:<20} {:>6} {:>6} {:>12} {:>12} {:<10} {:>12} {:>12}",
        "ID", "NAME", "RATE", "SALES", "VOLUME", "NEXT", "NEXT DATE", "PENDING", "PAID"
    )?;
    for s in &summaries {
        match &s.panel {
            PanelState::Ready(t) => writeln!(
                out,
                "{:<10} {:<20} {:>5}% {:>6} {:>12} {:>12} {:<10} {:>12} {:>12}",
                s.affiliate_id,
                s.name,
                s.commission_rate,
                s.sale_count,
                format_money(s.sales_volume),
                format_money(t.next_payout_total),
                t.next_payout_date.map(day).unwrap_or_else(|| "-".to_string()),
                format_money(t.pending_total),
                format_money(t.paid_total),
            )?,
            PanelState::Failed { error } => {
                writeln!(out, "{:<10} {:<20} error: {}", s.affiliate_id, s.name, error)?
            }
        }
    }
    writeln!(
        out,
        "\nNext batch: {} on {}; unpaid commission {}",
        format_money(combined.next_payout_total),
        combined.next_payout_date.map(day).unwrap_or_else(|| "-".to_string()),
        format_money(combined.total_commission_pending)
    )?;
    Ok(out)
}
