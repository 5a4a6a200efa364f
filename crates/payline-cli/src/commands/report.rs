//! `payline report <affiliate>`: one affiliate's payout schedule.

use std::fmt::Write;

use anyhow::Context as _;
use payline_engine::money::{format_money, rounded};
use payline_engine::compute_payouts;
use payline_store::{find_affiliate, SaleStore};
use serde_json::json;

use super::{day, Context};

pub fn run(store: &dyn SaleStore, ctx: &Context, affiliate_id: &str) -> anyhow::Result<String> {
    let affiliate = find_affiliate(store, affiliate_id)?;
    let report = compute_payouts(&affiliate.sales, affiliate.commission_rate, ctx.as_of, ctx.policy)
        .with_context(|| format!("computing payouts for affiliate {affiliate_id}"))?;
    let report = rounded(&report);

    if ctx.json {
        let value = json!({
            "affiliate_id": affiliate.id,
            "name": affiliate.name,
            "commission_rate": affiliate.commission_rate,
            "as_of": ctx.as_of,
            "report": report,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{} ({}) - {}% commission, as of {}",
        affiliate.name,
        affiliate.id,
        affiliate.commission_rate,
        day(ctx.as_of)
    )?;
    match report.next_payout_date {
        Some(date) => writeln!(out, "Next payout:        {} on {}", format_money(report.next_payout_total), day(date))?,
        None => writeln!(out, "Next payout:        none scheduled")?,
    }
    writeln!(out, "Pending eligibility: {}", format_money(report.pending_total))?;
    writeln!(out, "Unpaid commission:   {}", format_money(report.total_commission_pending))?;
    writeln!(out, "Paid:                {}", format_money(report.paid_total))?;

    if report.payouts.is_empty() {
        writeln!(out, "\nNo sales.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "\n{:<12} {:<10} {:<24} {:>10} {:>10} {:<10} {:<10} STATUS",
        "SALE", "DATE", "PRODUCT", "AMOUNT", "COMMISSION", "ELIGIBLE", "PAYOUT"
    )?;
    for p in &report.payouts {
        let marker = if p.status.is_manual() { " (manual)" } else { "" };
        writeln!(
            out,
            "{:<12} {:<10} {:<24} {:>10} {:>10} {:<10} {:<10} {}{}",
            p.sale_id,
            day(p.sale_date),
            p.product.name,
            format_money(p.amount),
            format_money(p.commission),
            day(p.eligible_date),
            day(p.payout_date),
            p.effective_status(),
            marker
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_text_report() {
        let store = fixtures::store();
        let out = run(&store, &fixtures::context(false), "AFF-001").expect("report");
        assert!(out.contains("Priya Natarajan (AFF-001)"));
        // SALE-1004 (2024-06-11) is alone in the earliest unpaid batch.
        assert!(out.contains("Next payout:        $1.80 on 2024-06-28"));
        let first_row = out.lines().position(|l| l.starts_with("SALE-1003")).expect("row");
        let last_row = out.lines().position(|l| l.starts_with("SALE-1004")).expect("row");
        assert!(first_row < last_row, "most recent sale first");
    }

    #[test]
    fn test_json_report() {
        let store = fixtures::store();
        let out = run(&store, &fixtures::context(true), "AFF-002").expect("report");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["affiliate_id"], "AFF-002");
        assert_eq!(value["report"]["payouts"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_empty_affiliate() {
        let store = fixtures::store();
        let out = run(&store, &fixtures::context(false), "AFF-003").expect("report");
        assert!(out.contains("none scheduled"));
        assert!(out.contains("No sales."));
    }

    #[test]
    fn test_unknown_affiliate() {
        let store = fixtures::store();
        assert!(run(&store, &fixtures::context(false), "AFF-404").is_err());
    }
}
