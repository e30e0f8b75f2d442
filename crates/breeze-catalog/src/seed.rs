//! # Seed Fixtures
//!
//! Realistic AC catalog data for development and tests.
//!
//! ## Generated Items
//! A mix that exercises every pricing path the storefront has:
//! - New inverter units at full price
//! - New units with an active percentage discount
//! - Used/refurbished units (cheaper, no discount)
//!
//! Prices are typical Pakistani market figures in whole rupees.

use chrono::Utc;

use breeze_core::types::{CatalogItem, Condition};

/// One fixture row: id, name, price, original price, discount %, condition,
/// feature bullets.
type SeedRow = (
    &'static str,
    &'static str,
    i64,
    Option<i64>,
    Option<u8>,
    Condition,
    &'static [&'static str],
);

const ITEMS: &[SeedRow] = &[
    (
        "ac-gree-15t-inverter",
        "Gree 1.5 Ton Pular Inverter AC",
        150_000,
        Some(165_000),
        Some(10),
        Condition::New,
        &["1.5 Ton", "DC Inverter", "Heat & Cool", "Wi-Fi Control", "T3 Compressor"],
    ),
    (
        "ac-haier-15t-inverter",
        "Haier 1.5 Ton Thunder Inverter AC",
        125_000,
        None,
        None,
        Condition::New,
        &["1.5 Ton", "DC Inverter", "Heat & Cool", "Self Cleaning"],
    ),
    (
        "ac-dawlance-1t",
        "Dawlance 1 Ton Chrome Pro AC",
        98_000,
        None,
        None,
        Condition::New,
        &["1 Ton", "Fixed Speed", "Turbo Cool"],
    ),
    (
        "ac-orient-2t-inverter",
        "Orient 2 Ton Ultron Inverter AC",
        185_000,
        Some(195_000),
        Some(5),
        Condition::New,
        &["2 Ton", "DC Inverter", "Heat & Cool", "4D Airflow"],
    ),
    (
        "ac-used-haier-1t",
        "Haier 1 Ton Window AC (Used)",
        45_000,
        None,
        None,
        Condition::Used,
        &["1 Ton", "Window Type", "Serviced & Gas Refilled", "3 Month Warranty"],
    ),
    (
        "ac-used-gree-15t",
        "Gree 1.5 Ton Split AC (Used)",
        72_000,
        None,
        None,
        Condition::Used,
        &["1.5 Ton", "Split Type", "Compressor Checked", "3 Month Warranty"],
    ),
];

/// Builds the sample catalog.
///
/// ## Example
/// ```rust
/// use breeze_catalog::{seed, CatalogStore};
///
/// let store = CatalogStore::with_items(seed::sample_items()).unwrap();
/// assert!(store.len() >= 6);
/// ```
pub fn sample_items() -> Vec<CatalogItem> {
    let now = Utc::now();
    ITEMS
        .iter()
        .map(
            |(id, name, price, original, discount, condition, features)| CatalogItem {
                id: (*id).to_string(),
                name: (*name).to_string(),
                description: None,
                price_rupees: *price,
                original_price_rupees: *original,
                discount_percent: *discount,
                discounted: discount.is_some(),
                condition: *condition,
                images: vec![format!("https://cdn.breeze.pk/items/{}.jpg", id)],
                features: features.iter().map(|f| (*f).to_string()).collect(),
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    #[test]
    fn test_sample_items_pass_store_validation() {
        let items = sample_items();
        let count = items.len();
        let store = CatalogStore::with_items(items).unwrap();
        assert_eq!(store.len(), count);
    }

    #[test]
    fn test_sample_items_cover_pricing_paths() {
        let items = sample_items();
        assert!(items.iter().any(|i| i.has_active_discount()));
        assert!(items.iter().any(|i| !i.has_active_discount()));
        assert!(items.iter().any(|i| i.condition == Condition::Used));
    }

    #[test]
    fn test_discounted_seed_prices() {
        let items = sample_items();
        let gree = items
            .iter()
            .find(|i| i.id == "ac-gree-15t-inverter")
            .unwrap();
        assert_eq!(gree.effective_price().rupees(), 135_000);
    }
}
