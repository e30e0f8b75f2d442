//! # Item Commands
//!
//! Catalog browsing for shoppers plus the small admin CRUD surface.
//!
//! ## DTO Pattern
//! Commands return [`ItemView`], not the raw domain item: the view carries
//! the *effective* price pre-computed and pre-formatted, so every surface
//! (card, detail page, cart) shows the exact same rupee figure.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use breeze_catalog::{CatalogStore, ItemFilter};
use breeze_core::types::{CatalogItem, Condition};

// =============================================================================
// DTOs
// =============================================================================

/// A catalog item as the frontend displays it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// List price in rupees, before discount.
    pub price_rupees: i64,
    /// Struck-through comparison price, when the shop set one.
    pub original_price_rupees: Option<i64>,
    pub discount_percent: Option<u8>,
    /// Whether a discount is actually in effect (flag AND positive percent).
    pub has_discount: bool,
    /// The price actually charged, in rupees.
    pub effective_price_rupees: i64,
    /// Effective price formatted for display, e.g. `"PKR 135,000"`.
    pub formatted_price: String,
    pub condition: Condition,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub is_active: bool,
}

impl From<CatalogItem> for ItemView {
    fn from(item: CatalogItem) -> Self {
        let effective = item.effective_price();
        let has_discount = item.has_active_discount();
        ItemView {
            id: item.id,
            name: item.name,
            description: item.description,
            price_rupees: item.price_rupees,
            original_price_rupees: item.original_price_rupees,
            discount_percent: item.discount_percent,
            has_discount,
            effective_price_rupees: effective.rupees(),
            formatted_price: effective.to_string(),
            condition: item.condition,
            images: item.images,
            features: item.features,
            is_active: item.is_active,
        }
    }
}

/// Admin input for creating or updating an item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_rupees: i64,
    #[serde(default)]
    pub original_price_rupees: Option<i64>,
    #[serde(default)]
    pub discount_percent: Option<u8>,
    #[serde(default)]
    pub discounted: bool,
    pub condition: Condition,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ItemInput {
    fn into_item(self) -> CatalogItem {
        let now = chrono::Utc::now();
        CatalogItem {
            id: self.id,
            name: self.name,
            description: self.description,
            price_rupees: self.price_rupees,
            original_price_rupees: self.original_price_rupees,
            discount_percent: self.discount_percent,
            discounted: self.discounted,
            condition: self.condition,
            images: self.images,
            features: self.features,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// Browse Commands
// =============================================================================

/// Lists catalog items, filtered.
///
/// Shopper-facing callers leave `include_inactive` off; the admin screen
/// turns it on to see delisted stock.
pub fn list_items(catalog: &CatalogStore, filter: &ItemFilter) -> Result<Vec<ItemView>, ApiError> {
    debug!(?filter, "Command: list_items");
    Ok(catalog
        .list(filter)
        .into_iter()
        .map(ItemView::from)
        .collect())
}

/// Fetches a single item by id, active or not.
pub fn get_item(catalog: &CatalogStore, id: &str) -> Result<ItemView, ApiError> {
    debug!(id = %id, "Command: get_item");
    catalog
        .get(id)
        .map(ItemView::from)
        .ok_or_else(|| ApiError::not_found("Item", id))
}

// =============================================================================
// Admin Commands
// =============================================================================

/// Creates a new catalog item. Fails on duplicate id or invalid fields.
pub fn create_item(catalog: &CatalogStore, input: ItemInput) -> Result<ItemView, ApiError> {
    debug!(id = %input.id, "Command: create_item");
    let item = input.into_item();
    catalog.insert(item.clone())?;
    info!(id = %item.id, "Catalog item created");
    Ok(ItemView::from(item))
}

/// Updates an existing item in place. `created_at` is preserved by the
/// store; `updated_at` is bumped.
pub fn update_item(catalog: &CatalogStore, input: ItemInput) -> Result<ItemView, ApiError> {
    debug!(id = %input.id, "Command: update_item");
    let id = input.id.clone();
    catalog.update(input.into_item())?;
    // Re-read so the view reflects the store-managed timestamps
    get_item(catalog, &id)
}

/// Soft-deletes an item: it stops listing and can no longer be added to
/// carts, but existing references keep resolving for display.
pub fn deactivate_item(catalog: &CatalogStore, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "Command: deactivate_item");
    catalog.deactivate(id)?;
    info!(id = %id, "Catalog item deactivated");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use breeze_catalog::seed;

    fn store() -> CatalogStore {
        CatalogStore::with_items(seed::sample_items()).unwrap()
    }

    fn input(id: &str, price: i64) -> ItemInput {
        ItemInput {
            id: id.to_string(),
            name: format!("Test AC {}", id),
            description: None,
            price_rupees: price,
            original_price_rupees: None,
            discount_percent: None,
            discounted: false,
            condition: Condition::New,
            images: vec![format!("https://cdn.breeze.pk/items/{}.jpg", id)],
            features: vec![],
            is_active: true,
        }
    }

    #[test]
    fn test_list_default_filter_hides_inactive() {
        let catalog = store();
        catalog.deactivate("ac-dawlance-1t").unwrap();

        let views = list_items(&catalog, &ItemFilter::default()).unwrap();
        assert!(views.iter().all(|v| v.id != "ac-dawlance-1t"));

        let all = list_items(
            &catalog,
            &ItemFilter {
                include_inactive: true,
                ..ItemFilter::default()
            },
        )
        .unwrap();
        assert!(all.iter().any(|v| v.id == "ac-dawlance-1t" && !v.is_active));
    }

    #[test]
    fn test_view_carries_effective_price() {
        let catalog = store();
        let view = get_item(&catalog, "ac-gree-15t-inverter").unwrap();

        assert!(view.has_discount);
        assert_eq!(view.price_rupees, 150_000);
        assert_eq!(view.effective_price_rupees, 135_000);
        assert_eq!(view.formatted_price, "PKR 135,000");
    }

    #[test]
    fn test_get_missing_item() {
        let catalog = store();
        let err = get_item(&catalog, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_create_then_duplicate() {
        let catalog = store();

        let view = create_item(&catalog, input("ac-new-1", 110_000)).unwrap();
        assert_eq!(view.effective_price_rupees, 110_000);

        let err = create_item(&catalog, input("ac-new-1", 110_000)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let catalog = store();
        let mut bad = input("ac-neg", 100_000);
        bad.price_rupees = -5;

        let err = create_item(&catalog, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_changes_price() {
        let catalog = store();
        let mut updated = input("ac-haier-15t-inverter", 120_000);
        updated.name = "Haier 1.5 Ton Thunder Inverter AC".to_string();

        let view = update_item(&catalog, updated).unwrap();
        assert_eq!(view.effective_price_rupees, 120_000);
    }

    #[test]
    fn test_update_missing_item() {
        let catalog = store();
        let err = update_item(&catalog, input("ghost", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
