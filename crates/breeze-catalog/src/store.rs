//! # Catalog Store
//!
//! In-memory row store for catalog items.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CatalogStore                                      │
//! │                                                                         │
//! │  RwLock<Vec<CatalogItem>>     insertion order = display order          │
//! │       │                                                                 │
//! │       ├── list(filter)      storefront grids (active items only)       │
//! │       ├── get(id)           admin editors (any item)                   │
//! │       ├── insert / update   validated writes                           │
//! │       ├── deactivate        soft delete - item stops being sellable    │
//! │       └── remove            hard delete                                │
//! │                                                                         │
//! │  impl CatalogLookup: resolves ACTIVE items only. A deactivated item    │
//! │  in somebody's cart surfaces as a price-resolution failure, never as   │
//! │  a stale price.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads clone rows out; a handful of catalog items makes copying cheaper
//! than lifetime plumbing across the lock boundary.

use std::sync::RwLock;

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use breeze_core::types::{CatalogItem, CatalogLookup, Condition};
use breeze_core::validation::{
    validate_discount_percent, validate_item_id, validate_item_name, validate_price_rupees,
};

// =============================================================================
// Item Filter
// =============================================================================

/// Client-side filtering options for listing the catalog.
///
/// All criteria are conjunctive; the default filter returns every active
/// item in insertion order. Deserializes from the query params the
/// storefront sends, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemFilter {
    /// Only items in this condition (new/used).
    pub condition: Option<Condition>,

    /// Only items with an active discount.
    pub discounted_only: bool,

    /// Case-insensitive substring match against the item name.
    pub query: Option<String>,

    /// Include soft-deleted items (admin screens only).
    pub include_inactive: bool,
}

// =============================================================================
// Catalog Store
// =============================================================================

/// Thread-safe, insertion-ordered catalog of sellable items.
#[derive(Debug, Default)]
pub struct CatalogStore {
    items: RwLock<Vec<CatalogItem>>,
}

impl CatalogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CatalogStore {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with the given items.
    ///
    /// Every item is validated the same way `insert` validates it.
    pub fn with_items(items: Vec<CatalogItem>) -> StoreResult<Self> {
        let store = CatalogStore::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Validates an item's fields before any write.
    fn validate_item(item: &CatalogItem) -> StoreResult<()> {
        validate_item_id(&item.id)?;
        validate_item_name(&item.name)?;
        validate_price_rupees(item.price_rupees)?;
        if let Some(orig) = item.original_price_rupees {
            validate_price_rupees(orig)?;
        }
        if let Some(pct) = item.discount_percent {
            validate_discount_percent(pct)?;
        }
        // A displayed item needs at least a thumbnail
        if item.is_active && item.images.is_empty() {
            return Err(StoreError::Validation(
                breeze_core::ValidationError::Required {
                    field: "images".to_string(),
                },
            ));
        }
        Ok(())
    }

    /// Inserts a new item at the end of the catalog.
    ///
    /// ## Errors
    /// - `Validation` for bad fields
    /// - `DuplicateId` if the id is already taken
    pub fn insert(&self, item: CatalogItem) -> StoreResult<()> {
        Self::validate_item(&item)?;

        let mut items = self.items.write().expect("catalog lock poisoned");
        if items.iter().any(|i| i.id == item.id) {
            return Err(StoreError::DuplicateId { id: item.id });
        }

        debug!(item_id = %item.id, name = %item.name, "Inserting catalog item");
        items.push(item);
        Ok(())
    }

    /// Replaces an existing item wholesale, bumping `updated_at`.
    ///
    /// This is what the admin price editor calls; the cart picks up the
    /// new price on its next read automatically.
    pub fn update(&self, mut item: CatalogItem) -> StoreResult<()> {
        Self::validate_item(&item)?;

        let mut items = self.items.write().expect("catalog lock poisoned");
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                item.created_at = existing.created_at;
                item.updated_at = Utc::now();
                debug!(item_id = %item.id, "Updating catalog item");
                *existing = item;
                Ok(())
            }
            None => Err(StoreError::NotFound { id: item.id }),
        }
    }

    /// Fetches an item by id, active or not (admin view).
    pub fn get(&self, id: &str) -> Option<CatalogItem> {
        self.items
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Lists items matching the filter, in insertion order.
    pub fn list(&self, filter: &ItemFilter) -> Vec<CatalogItem> {
        let query = filter.query.as_ref().map(|q| q.trim().to_lowercase());

        self.items
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .filter(|i| filter.include_inactive || i.is_active)
            .filter(|i| filter.condition.map_or(true, |c| i.condition == c))
            .filter(|i| !filter.discounted_only || i.has_active_discount())
            .filter(|i| {
                query
                    .as_ref()
                    .map_or(true, |q| q.is_empty() || i.name.to_lowercase().contains(q))
            })
            .cloned()
            .collect()
    }

    /// Soft-deletes an item: it disappears from listings and stops
    /// resolving in carts, but stays visible to admin screens.
    pub fn deactivate(&self, id: &str) -> StoreResult<()> {
        let mut items = self.items.write().expect("catalog lock poisoned");
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                debug!(item_id = %id, "Deactivating catalog item");
                item.is_active = false;
                item.updated_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Hard-deletes an item row.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut items = self.items.write().expect("catalog lock poisoned");
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            Err(StoreError::NotFound { id: id.to_string() })
        } else {
            debug!(item_id = %id, "Removed catalog item");
            Ok(())
        }
    }

    /// Number of rows, including inactive ones.
    pub fn len(&self) -> usize {
        self.items.read().expect("catalog lock poisoned").len()
    }

    /// Whether the store holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The resolution seam the cart engine depends on.
///
/// Only ACTIVE items resolve: a shopper's cart line for a deactivated
/// item fails price resolution instead of quoting a withdrawn price.
impl CatalogLookup for CatalogStore {
    fn item(&self, id: &str) -> Option<CatalogItem> {
        self.items
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|i| i.id == id && i.is_active)
            .cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
