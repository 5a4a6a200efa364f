//! Raw sale records as supplied by the sale store.

use serde::{Deserialize, Serialize};

use crate::{Money, PayoutStatus, SaleId};

/// Product descriptor attached to a sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct ProductInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A completed sale attributed to an affiliate.
///
/// `date` is kept as the ISO-8601 text the store holds so that a malformed
/// value can be reported against the sale that carries it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Sale {
    pub id: SaleId,
    pub product: ProductInfo,
    pub amount: Money,
    pub date: String,
    pub customer_name: String,
    /// Manually assigned status. Authoritative when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
}

impl Sale {
    /// Create a sale with no status override.
    pub fn new(
        id: impl Into<SaleId>,
        product: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product: ProductInfo {
                name: product.into(),
                size: None,
                color: None,
            },
            amount,
            date: date.into(),
            customer_name: customer_name.into(),
            status: None,
        }
    }

    /// Builder-style helper that attaches a manual status.
    pub fn with_status(mut self, status: PayoutStatus) -> Self {
        self.status = Some(status);
        self
    }
}
