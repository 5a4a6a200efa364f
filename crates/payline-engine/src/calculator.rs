//! Payout report computation.
//!
//! One payout is derived per sale. The nearest upcoming batch is the minimum
//! payout date over unpaid payouts, which is only known after every sale has
//! been scheduled, so the next-payout total is summed in a second pass.

use chrono::{DateTime, Utc};
use payline_types::{Money, Payout, PayoutReport, PayoutStatus, Sale};

use crate::commission::{commission_for, validate_amount, validate_rate};
use crate::schedule::{eligible_date, parse_sale_date, payout_date_for};
use crate::status::{resolve_status, StatusPolicy};
use crate::Result;

/// Derive the payout for a single sale.
///
/// # Errors
///
/// - [`crate::PayoutError::InvalidSaleDate`] if the sale date cannot be parsed
/// - [`crate::PayoutError::InvalidSaleAmount`] if the amount is negative or not finite
pub fn payout_for_sale(
    sale: &Sale,
    commission_rate: f64,
    as_of: DateTime<Utc>,
    policy: StatusPolicy,
) -> Result<Payout> {
    validate_amount(&sale.id, sale.amount)?;
    let sale_date = parse_sale_date(&sale.id, &sale.date)?;
    let eligible = eligible_date(sale_date)?;
    let payout_date = payout_date_for(eligible)?;

    Ok(Payout {
        sale_id: sale.id.clone(),
        product: sale.product.clone(),
        amount: sale.amount,
        sale_date,
        customer_name: sale.customer_name.clone(),
        commission: commission_for(sale.amount, commission_rate),
        eligible_date: eligible,
        payout_date,
        status: resolve_status(sale.status, policy, as_of, eligible, payout_date),
    })
}

/// Compute payouts and summary totals for one affiliate's sales.
///
/// The result holds exactly one payout per input sale, ordered by sale date
/// with the most recent first. Sales sharing a date keep their input order.
///
/// # Arguments
///
/// * `sales` - The affiliate's sales
/// * `commission_rate` - Commission percentage for the affiliate
/// * `as_of` - Evaluation instant used to derive statuses
/// * `policy` - How statuses are derived when no override is set
///
/// # Errors
///
/// - [`crate::PayoutError::InvalidCommissionRate`] if the rate is negative or not finite
/// - [`crate::PayoutError::InvalidSaleDate`] naming the first sale with an unparseable date
/// - [`crate::PayoutError::InvalidSaleAmount`] naming the first sale with a bad amount
pub fn compute_payouts(
    sales: &[Sale],
    commission_rate: f64,
    as_of: DateTime<Utc>,
    policy: StatusPolicy,
) -> Result<PayoutReport> {
    validate_rate(commission_rate)?;

    let mut payouts = Vec::with_capacity(sales.len());
    let mut pending_total: Money = 0.0;
    let mut total_commission_pending: Money = 0.0;
    let mut paid_total: Money = 0.0;
    let mut next_payout_date: Option<DateTime<Utc>> = None;

    for sale in sales {
        let payout = payout_for_sale(sale, commission_rate, as_of, policy)?;

        match payout.effective_status() {
            PayoutStatus::Paid => paid_total += payout.commission,
            status => {
                if status == PayoutStatus::PendingEligibility {
                    pending_total += payout.commission;
                }
                total_commission_pending += payout.commission;
                next_payout_date = Some(match next_payout_date {
                    Some(current) if current <= payout.payout_date => current,
                    _ => payout.payout_date,
                });
            }
        }

        payouts.push(payout);
    }

    let next_payout_total: Money = match next_payout_date {
        Some(batch) => payouts
            .iter()
            .filter(|p| p.effective_status() == PayoutStatus::EligibleForPayout)
            .filter(|p| p.payout_date == batch)
            .map(|p| p.commission)
            .sum(),
        None => 0.0,
    };

    payouts.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));

    tracing::debug!(
        sales = sales.len(),
        commission_rate,
        next_payout_total,
        pending_total,
        total_commission_pending,
        "payouts computed"
    );

    Ok(PayoutReport {
        payouts,
        next_payout_total,
        next_payout_date,
        pending_total,
        total_commission_pending,
        paid_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PayoutError;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().expect("valid timestamp")
    }

    fn sale(id: &str, amount: f64, date: &str) -> Sale {
        Sale::new(id, "Canvas Tote", amount, date, "Jordan Ellery")
    }

    fn compute(sales: &[Sale], rate: f64, as_of: DateTime<Utc>) -> PayoutReport {
        compute_payouts(sales, rate, as_of, StatusPolicy::ManualPaidOnly).expect("compute")
    }

    #[test]
    fn test_empty_sales() {
        let report = compute(&[], 10.0, ts(2024, 8, 1));
        assert!(report.payouts.is_empty());
        assert_eq!(report.next_payout_total, 0.0);
        assert!(report.next_payout_date.is_none());
        assert_eq!(report.pending_total, 0.0);
        assert_eq!(report.total_commission_pending, 0.0);
        assert_eq!(report.paid_total, 0.0);
    }

    #[test]
    fn test_schedule_examples() {
        let sales = [
            sale("A", 100.0, "2024-07-01"),
            sale("B", 100.0, "2024-07-20"),
            sale("C", 100.0, "2024-07-25"),
        ];
        let report = compute(&sales, 10.0, ts(2024, 7, 1));
        let by_id = |id: &str| {
            report
                .payouts
                .iter()
                .find(|p| p.sale_id == id)
                .expect("payout present")
                .clone()
        };

        let a = by_id("A");
        assert_eq!(a.eligible_date, ts(2024, 7, 15));
        assert_eq!(a.payout_date, ts(2024, 7, 21));

        let b = by_id("B");
        assert_eq!(b.eligible_date, ts(2024, 8, 3));
        assert_eq!(b.payout_date, ts(2024, 8, 7));

        let c = by_id("C");
        assert_eq!(c.eligible_date, ts(2024, 8, 8));
        assert_eq!(c.payout_date, ts(2024, 8, 14));
    }

    #[test]
    fn test_commission_and_dates_invariants() {
        let sales = [
            sale("A", 59.99, "2024-03-30T22:15:00Z"),
            sale("B", 0.0, "2024-12-20"),
            sale("C", 1250.0, "2024-02-16"),
        ];
        let report = compute(&sales, 12.5, ts(2024, 6, 1));
        assert_eq!(report.payouts.len(), sales.len());
        for p in &report.payouts {
            assert!((p.commission - p.amount * 12.5 / 100.0).abs() < 1e-9);
            assert_eq!(p.eligible_date, p.sale_date + chrono::Duration::days(14));
            assert!(p.eligible_date >= p.sale_date);
            assert!(p.payout_date >= p.eligible_date);
        }
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let sales = [
            sale("old", 10.0, "2024-05-01"),
            sale("tie-1", 10.0, "2024-06-10"),
            sale("new", 10.0, "2024-07-01"),
            sale("tie-2", 10.0, "2024-06-10"),
        ];
        let report = compute(&sales, 10.0, ts(2024, 7, 2));
        let ids: Vec<&str> = report.payouts.iter().map(|p| p.sale_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie-1", "tie-2", "old"]);
    }

    #[test]
    fn test_status_derivation_and_pending_total() {
        let sales = [
            sale("eligible", 100.0, "2024-07-01"),
            sale("pending", 200.0, "2024-07-10"),
        ];
        let report = compute(&sales, 10.0, ts(2024, 7, 16));
        let status_of = |id: &str| {
            report
                .payouts
                .iter()
                .find(|p| p.sale_id == id)
                .map(|p| p.effective_status())
        };
        assert_eq!(status_of("eligible"), Some(PayoutStatus::EligibleForPayout));
        assert_eq!(status_of("pending"), Some(PayoutStatus::PendingEligibility));
        assert!((report.pending_total - 20.0).abs() < 1e-9);
        assert!((report.total_commission_pending - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_next_payout_only_nearest_batch() {
        // Both eligible by August 20, scheduled for July 21 and August 7.
        let sales = [
            sale("batch-1a", 100.0, "2024-07-01"),
            sale("batch-1b", 50.0, "2024-07-02"),
            sale("batch-2", 300.0, "2024-07-20"),
        ];
        let report = compute(&sales, 10.0, ts(2024, 8, 20));
        assert_eq!(report.next_payout_date, Some(ts(2024, 7, 21)));
        assert!((report.next_payout_total - 15.0).abs() < 1e-9);
        assert!((report.total_commission_pending - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_next_batch_pending_only_yields_zero_total() {
        // Nearest batch belongs to a still-pending sale.
        let sales = [sale("p", 100.0, "2024-07-01")];
        let report = compute(&sales, 10.0, ts(2024, 7, 5));
        assert_eq!(report.next_payout_date, Some(ts(2024, 7, 21)));
        assert_eq!(report.next_payout_total, 0.0);
        assert!((report.pending_total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_manual_paid_excluded() {
        let sales = [
            sale("paid", 500.0, "2024-06-01").with_status(PayoutStatus::Paid),
            sale("open", 100.0, "2024-07-01"),
        ];
        let report = compute(&sales, 10.0, ts(2024, 8, 1));
        // Paid sale would have been scheduled for June 21.
        assert_eq!(report.next_payout_date, Some(ts(2024, 7, 21)));
        assert!((report.next_payout_total - 10.0).abs() < 1e-9);
        assert!((report.total_commission_pending - 10.0).abs() < 1e-9);
        assert!((report.paid_total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_manual_override_beats_clock() {
        let sales = [sale("early", 100.0, "2024-07-01").with_status(PayoutStatus::EligibleForPayout)];
        let report = compute(&sales, 10.0, ts(2024, 7, 2));
        let payout = &report.payouts[0];
        assert!(payout.status.is_manual());
        assert_eq!(payout.effective_status(), PayoutStatus::EligibleForPayout);
        assert!((report.next_payout_total - 10.0).abs() < 1e-9);
        assert_eq!(report.pending_total, 0.0);
    }

    #[test]
    fn test_legacy_policy_marks_past_batches_paid() {
        let sales = [
            sale("old", 100.0, "2024-06-01"),
            sale("recent", 100.0, "2024-07-20"),
        ];
        let report =
            compute_payouts(&sales, 10.0, ts(2024, 7, 30), StatusPolicy::PaidAfterPayoutDate).expect("compute");
        let old = report.payouts.iter().find(|p| p.sale_id == "old").expect("old");
        assert_eq!(old.status, payline_types::Status::Derived(PayoutStatus::Paid));
        assert!((report.paid_total - 10.0).abs() < 1e-9);
        assert_eq!(report.next_payout_date, Some(ts(2024, 8, 7)));
    }

    #[test]
    fn test_zero_rate() {
        let report = compute(&[sale("A", 100.0, "2024-07-01")], 0.0, ts(2024, 8, 1));
        assert_eq!(report.payouts[0].commission, 0.0);
        assert_eq!(report.next_payout_total, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let as_of = ts(2024, 8, 1);
        let policy = StatusPolicy::ManualPaidOnly;

        let err = compute_payouts(&[sale("A", 1.0, "2024-07-01")], -1.0, as_of, policy).expect_err("rate");
        assert!(matches!(err, PayoutError::InvalidCommissionRate { .. }));

        let bad_date = [sale("ok", 1.0, "2024-07-01"), sale("bad", 1.0, "07/01/2024")];
        let err = compute_payouts(&bad_date, 10.0, as_of, policy).expect_err("date");
        assert!(matches!(err, PayoutError::InvalidSaleDate { ref sale_id, .. } if sale_id == "bad"));

        let err = compute_payouts(&[sale("neg", -3.0, "2024-07-01")], 10.0, as_of, policy).expect_err("amount");
        assert!(matches!(err, PayoutError::InvalidSaleAmount { ref sale_id, .. } if sale_id == "neg"));
    }

    #[test]
    fn test_deterministic() {
        let sales = [sale("A", 10.0, "2024-07-01"), sale("B", 20.0, "2024-07-09")];
        let first = compute(&sales, 7.5, ts(2024, 7, 20));
        let second = compute(&sales, 7.5, ts(2024, 7, 20));
        assert_eq!(first, second);
    }
}
