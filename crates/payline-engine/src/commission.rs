//! Commission rate validation and per-sale commission.
//!
//! ```text
//! commission = amount * (rate / 100)
//! ```
//!
//! Rates are affiliate-level percentages. No upper bound is enforced: a rate
//! above 100 is unusual but still well defined.

use payline_types::Money;

use crate::{PayoutError, Result};

/// Validate an affiliate's commission rate.
///
/// # Errors
///
/// - [`PayoutError::InvalidCommissionRate`] if the rate is negative or not finite
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(PayoutError::InvalidCommissionRate { rate });
    }
    Ok(())
}

/// Validate a sale amount.
///
/// # Errors
///
/// - [`PayoutError::InvalidSaleAmount`] if the amount is negative or not finite
pub fn validate_amount(sale_id: &str, amount: Money) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(PayoutError::InvalidSaleAmount {
            sale_id: sale_id.to_string(),
            amount,
        });
    }
    Ok(())
}

/// Commission earned on `amount` at `rate` percent.
pub fn commission_for(amount: Money, rate: f64) -> Money {
    amount * (rate / 100.0)
}
