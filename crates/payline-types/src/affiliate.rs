//! Affiliate accounts and their attributed sales.

use serde::{Deserialize, Serialize};

use crate::{AffiliateId, Sale};

/// An affiliate and the sales credited to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Affiliate {
    pub id: AffiliateId,
    pub name: String,
    pub email: String,
    /// Percentage of each sale paid as commission, typically 0-100.
    pub commission_rate: f64,
    pub joined_at: String,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl Affiliate {
    /// Look up a sale by id.
    pub fn sale(&self, sale_id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == sale_id)
    }

    /// Mutable lookup of a sale by id.
    pub fn sale_mut(&mut self, sale_id: &str) -> Option<&mut Sale> {
        self.sales.iter_mut().find(|s| s.id == sale_id)
    }

    /// Total sales volume before commission.
    pub fn sales_volume(&self) -> f64 {
        self.sales.iter().map(|s| s.amount).sum()
    }
}
