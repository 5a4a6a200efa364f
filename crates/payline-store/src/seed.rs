//! Demo affiliates written on first run.

use payline_types::{Affiliate, ProductInfo, Sale};

use crate::{Result, SaleStore};

fn sale(id: &str, product: &str, size: Option<&str>, color: Option<&str>, amount: f64, date: &str, customer: &str) -> Sale {
    Sale {
        id: id.to_string(),
        product: ProductInfo {
            name: product.to_string(),
            size: size.map(str::to_string),
            color: color.map(str::to_string),
        },
        amount,
        date: date.to_string(),
        customer_name: customer.to_string(),
        status: None,
    }
}

/// Demo affiliates with a spread of sale dates across payout batches.
pub fn demo_affiliates() -> Vec<Affiliate> {
    vec![
        Affiliate {
            id: "AFF-001".to_string(),
            name: "Priya Natarajan".to_string(),
            email: "priya.n@example.com".to_string(),
            commission_rate: 10.0,
            joined_at: "2024-01-15".to_string(),
            sales: vec![
                sale("SALE-1001", "Merino Crew Sweater", Some("M"), Some("Charcoal"), 129.0, "2024-07-01", "Elena Park"),
                sale("SALE-1002", "Waxed Canvas Tote", None, Some("Olive"), 89.5, "2024-07-20", "Marcus Hale"),
                sale("SALE-1003", "Linen Button-Down", Some("L"), Some("White"), 74.0, "2024-07-25", "Dana Whitfield"),
                sale("SALE-1004", "Trail Runner Socks", Some("M"), None, 18.0, "2024-06-11", "Sam Okafor"),
            ],
        },
        Affiliate {
            id: "AFF-002".to_string(),
            name: "Tomás Ribeiro".to_string(),
            email: "tomas.r@example.com".to_string(),
            commission_rate: 15.0,
            joined_at: "2024-03-02".to_string(),
            sales: vec![
                sale("SALE-2001", "Leather Card Holder", None, Some("Tan"), 45.0, "2024-07-08", "Jordan Ellery"),
                sale("SALE-2002", "Denim Jacket", Some("S"), Some("Indigo"), 148.0, "2024-07-15T14:20:00Z", "Ari Levin"),
            ],
        },
        Affiliate {
            id: "AFF-003".to_string(),
            name: "Hannah Brooks".to_string(),
            email: "hannah.b@example.com".to_string(),
            commission_rate: 8.0,
            joined_at: "2024-05-21".to_string(),
            sales: Vec::new(),
        },
    ]
}

/// Write the demo affiliates, replacing whatever the store holds.
pub fn seed(store: &mut dyn SaleStore) -> Result<usize> {
    let affiliates = demo_affiliates();
    store.save(&affiliates)?;
    tracing::info!(affiliates = affiliates.len(), "demo affiliates seeded");
    Ok(affiliates.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySaleStore;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_unique() {
        let affiliates = demo_affiliates();
        let ids: HashSet<&str> = affiliates
            .iter()
            .flat_map(|a| a.sales.iter().map(|s| s.id.as_str()))
            .collect();
        let total: usize = affiliates.iter().map(|a| a.sales.len()).sum();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_seed_writes_store() {
        let mut store = MemorySaleStore::default();
        let n = seed(&mut store).expect("seed");
        assert_eq!(n, 3);
        assert_eq!(store.load().expect("load"), demo_affiliates());
    }
}
