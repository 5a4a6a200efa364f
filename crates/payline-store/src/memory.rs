//! In-memory sale store.

use payline_types::Affiliate;

use crate::{Result, SaleStore};

/// [`SaleStore`] holding affiliates in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySaleStore {
    affiliates: Vec<Affiliate>,
}

impl MemorySaleStore {
    pub fn new(affiliates: Vec<Affiliate>) -> Self {
        Self { affiliates }
    }
}

impl SaleStore for MemorySaleStore {
    fn load(&self) -> Result<Vec<Affiliate>> {
        Ok(self.affiliates.clone())
    }

    fn save(&mut self, affiliates: &[Affiliate]) -> Result<()> {
        self.affiliates = affiliates.to_vec();
        Ok(())
    }
}
