//! `payline set-status` / `payline clear-status`.

use payline_store::{clear_sale_status, set_sale_status, SaleStore};
use payline_types::PayoutStatus;

pub fn set(
    store: &mut dyn SaleStore,
    affiliate_id: &str,
    sale_id: &str,
    status: PayoutStatus,
) -> anyhow::Result<String> {
    set_sale_status(store, affiliate_id, sale_id, status)?;
    Ok(format!("{sale_id}: status set to {status}"))
}

pub fn clear(store: &mut dyn SaleStore, affiliate_id: &str, sale_id: &str) -> anyhow::Result<String> {
    clear_sale_status(store, affiliate_id, sale_id)?;
    Ok(format!("{sale_id}: status override cleared"))
}
