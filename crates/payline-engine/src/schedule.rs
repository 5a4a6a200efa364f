//! Eligibility window and payout cycle date math.
//!
//! ```text
//! eligible_date = sale_date + 14 days
//! payout_date   = first of {7, 14, 21, 28} >= day(eligible_date),
//!                 or the 7th of the next month when day > 28
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use payline_types::{ELIGIBILITY_WINDOW_DAYS, PAYOUT_CYCLE_DAYS};

use crate::{PayoutError, Result};

/// Instant at which a sale's commission becomes eligible for payout.
pub fn eligible_date(sale_date: DateTime<Utc>) -> Result<DateTime<Utc>> {
    sale_date
        .checked_add_signed(Duration::days(ELIGIBILITY_WINDOW_DAYS))
        .ok_or_else(|| PayoutError::DateOutOfRange(sale_date.to_rfc3339()))
}

/// Snap a date forward onto the monthly payout cycle.
///
/// Returns `d` itself when it already falls on a cycle day.
pub fn next_scheduled_payout_date(d: NaiveDate) -> Result<NaiveDate> {
    let day = d.day();
    if let Some(cycle_day) = PAYOUT_CYCLE_DAYS.iter().copied().find(|&c| c >= day) {
        return d
            .with_day(cycle_day)
            .ok_or_else(|| PayoutError::DateOutOfRange(d.to_string()));
    }

    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, PAYOUT_CYCLE_DAYS[0])
        .ok_or_else(|| PayoutError::DateOutOfRange(d.to_string()))
}

/// Payout instant for an eligible instant. The time of day is preserved.
pub fn payout_date_for(eligible: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let date = next_scheduled_payout_date(eligible.date_naive())?;
    Ok(date.and_time(eligible.time()).and_utc())
}

/// Parse an ISO-8601 instant.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` without offset
/// (taken as UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a sale's date, naming the sale on failure.
pub fn parse_sale_date(sale_id: &str, raw: &str) -> Result<DateTime<Utc>> {
    parse_instant(raw).ok_or_else(|| PayoutError::InvalidSaleDate {
        sale_id: sale_id.to_string(),
        value: raw.to_string(),
    })
}

/// The next `count` payout cycle dates on or after `from`.
pub fn upcoming_payout_dates(from: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    let mut cursor = from;
    for _ in 0..count {
        let next = next_scheduled_payout_date(cursor)?;
        dates.push(next);
        cursor = next
            .succ_opt()
            .ok_or_else(|| PayoutError::DateOutOfRange(next.to_string()))?;
    }
    Ok(dates)
}
