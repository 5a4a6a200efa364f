//! Sale mutations.
//!
//! Setting or clearing a status override is the only change made to stored
//! sales. The whole collection is loaded, patched and saved back.

use payline_types::{Affiliate, PayoutStatus};

use crate::{Result, SaleStore, StoreError};

/// Load a single affiliate by id.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if no affiliate has that id
pub fn find_affiliate(store: &dyn SaleStore, affiliate_id: &str) -> Result<Affiliate> {
    store
        .load()?
        .into_iter()
        .find(|a| a.id == affiliate_id)
        .ok_or_else(|| StoreError::NotFound(format!("affiliate '{affiliate_id}'")))
}

/// Manually assign a payout status to a sale.
///
/// The override is authoritative for every later computation until it is
/// cleared.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if the affiliate or sale does not exist
pub fn set_sale_status(
    store: &mut dyn SaleStore,
    affiliate_id: &str,
    sale_id: &str,
    status: PayoutStatus,
) -> Result<()> {
    let previous = update_status(store, affiliate_id, sale_id, Some(status))?;
    tracing::info!(
        affiliate = affiliate_id,
        sale = sale_id,
        ?previous,
        %status,
        "sale status overridden"
    );
    Ok(())
}

/// Remove a sale's manual status so it is derived from the clock again.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if the affiliate or sale does not exist
pub fn clear_sale_status(store: &mut dyn SaleStore, affiliate_id: &str, sale_id: &str) -> Result<()> {
    let previous = update_status(store, affiliate_id, sale_id, None)?;
    tracing::info!(
        affiliate = affiliate_id,
        sale = sale_id,
        ?previous,
        "sale status override cleared"
    );
    Ok(())
}

fn update_status(
    store: &mut dyn SaleStore,
    affiliate_id: &str,
    sale_id: &str,
    status: Option<PayoutStatus>,
) -> Result<Option<PayoutStatus>> {
    let mut affiliates = store.load()?;
    let affiliate = affiliates
        .iter_mut()
        .find(|a| a.id == affiliate_id)
        .ok_or_else(|| StoreError::NotFound(format!("affiliate '{affiliate_id}'")))?;
    let sale = affiliate
        .sale_mut(sale_id)
        .ok_or_else(|| StoreError::NotFound(format!("sale '{sale_id}' of affiliate '{affiliate_id}'")))?;

    let previous = std::mem::replace(&mut sale.status, status);
    store.save(&affiliates)?;
    Ok(previous)
}
