//! # Cart Commands
//!
//! Session cart operations exposed to the host.
//!
//! ## Resolution at the Edge
//! The cart itself stores only item ids and quantities. These commands
//! resolve names and prices against the catalog *per call* and hand the
//! frontend a fully-priced [`CartView`], so the page never does rupee
//! arithmetic and never sees a stale price.
//!
//! ## Example Frontend Usage
//! ```typescript
//! const view = await invoke<CartView>('add_to_cart', { itemId: 'ac-gree-15t-inverter' });
//! // view.totals.formattedTotal === "PKR 135,000"
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;
use breeze_catalog::CatalogStore;
use breeze_core::cart::Cart;
use breeze_core::types::CatalogLookup;
use breeze_core::{CartError, Money};

// =============================================================================
// View DTOs
// =============================================================================

/// One cart line with name and prices resolved against the live catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub item_id: String,
    pub name: String,
    /// First catalog image, for the cart thumbnail.
    pub image: Option<String>,
    pub quantity: i64,
    /// Effective unit price in rupees, after any active discount.
    pub unit_price_rupees: i64,
    pub line_total_rupees: i64,
    /// Line total formatted for display, e.g. `"PKR 270,000"`.
    pub formatted_line_total: String,
}

/// Aggregate figures for the whole cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities across lines (the cart-badge number).
    pub total_quantity: i64,
    pub total_rupees: i64,
    pub formatted_total: String,
}

/// The complete cart as the frontend renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
}

/// Builds the priced view of the cart.
///
/// Fails with a price-resolution error if any line's item has vanished
/// from the catalog; the caller then offers [`prune_cart`].
fn build_view(cart: &Cart, catalog: &CatalogStore) -> Result<CartView, ApiError> {
    let mut lines = Vec::with_capacity(cart.line_count());
    let mut total = Money::zero();

    for line in &cart.lines {
        let item = catalog
            .item(&line.item_id)
            .ok_or(CartError::PriceResolution {
                item_id: line.item_id.clone(),
            })?;

        let unit_price = item.effective_price();
        let line_total = unit_price.multiply_quantity(line.quantity);
        total += line_total;

        lines.push(CartLineView {
            item_id: line.item_id.clone(),
            name: item.name.clone(),
            image: item.images.first().cloned(),
            quantity: line.quantity,
            unit_price_rupees: unit_price.rupees(),
            line_total_rupees: line_total.rupees(),
            formatted_line_total: line_total.to_string(),
        });
    }

    Ok(CartView {
        totals: CartTotals {
            line_count: lines.len(),
            total_quantity: cart.total_quantity(),
            total_rupees: total.rupees(),
            formatted_total: total.to_string(),
        },
        lines,
    })
}

// =============================================================================
// Commands
// =============================================================================

/// Returns the current cart, fully priced.
pub fn get_cart(catalog: &CatalogStore, cart: &CartState) -> Result<CartView, ApiError> {
    debug!("Command: get_cart");
    cart.with_cart(|c| build_view(c, catalog))
}

/// Adds an item to the cart (or bumps its quantity).
///
/// `quantity` defaults to 1 when omitted. Inactive or unknown items are
/// rejected before the cart is touched.
pub fn add_to_cart(
    catalog: &CatalogStore,
    cart: &CartState,
    item_id: &str,
    quantity: Option<i64>,
) -> Result<CartView, ApiError> {
    let qty = quantity.unwrap_or(1);
    debug!(item_id = %item_id, quantity = qty, "Command: add_to_cart");

    let item = catalog
        .get(item_id)
        .ok_or_else(|| ApiError::not_found("Item", item_id))?;
    if !item.is_active {
        return Err(ApiError::validation(format!(
            "Item '{}' is no longer available",
            item.name
        )));
    }

    cart.with_cart_mut(|c| c.add_item(&item, qty))?;
    cart.with_cart(|c| build_view(c, catalog))
}

/// Overwrites a line's quantity; `quantity <= 0` removes the line.
pub fn update_cart_item(
    catalog: &CatalogStore,
    cart: &CartState,
    item_id: &str,
    quantity: i64,
) -> Result<CartView, ApiError> {
    debug!(item_id = %item_id, quantity, "Command: update_cart_item");
    cart.with_cart_mut(|c| c.set_quantity(item_id, quantity))?;
    cart.with_cart(|c| build_view(c, catalog))
}

/// Removes a line entirely. Idempotent.
pub fn remove_from_cart(
    catalog: &CatalogStore,
    cart: &CartState,
    item_id: &str,
) -> Result<CartView, ApiError> {
    debug!(item_id = %item_id, "Command: remove_from_cart");
    cart.with_cart_mut(|c| c.remove_item(item_id));
    cart.with_cart(|c| build_view(c, catalog))
}

/// Empties the cart.
pub fn clear_cart(catalog: &CatalogStore, cart: &CartState) -> Result<CartView, ApiError> {
    debug!("Command: clear_cart");
    cart.with_cart_mut(|c| c.clear());
    cart.with_cart(|c| build_view(c, catalog))
}

/// Drops lines whose items the catalog no longer resolves, returning the
/// dropped ids so the UI can tell the shopper what disappeared.
pub fn prune_cart(catalog: &CatalogStore, cart: &CartState) -> Result<Vec<String>, ApiError> {
    debug!("Command: prune_cart");
    let dropped = cart.with_cart_mut(|c| c.prune_unresolvable(catalog));
    if !dropped.is_empty() {
        debug!(dropped = ?dropped, "Pruned unresolvable cart lines");
    }
    Ok(dropped)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use breeze_catalog::seed;

    fn setup() -> (CatalogStore, CartState) {
        let catalog = CatalogStore::with_items(seed::sample_items()).unwrap();
        (catalog, CartState::new())
    }

    #[test]
    fn test_add_and_view() {
        let (catalog, cart) = setup();

        let view = add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap();

        assert_eq!(view.totals.line_count, 1);
        assert_eq!(view.totals.total_quantity, 1);
        // 150,000 with 10% off
        assert_eq!(view.totals.total_rupees, 135_000);
        assert_eq!(view.totals.formatted_total, "PKR 135,000");
        assert_eq!(view.lines[0].name, "Gree 1.5 Ton Pular Inverter AC");
    }

    #[test]
    fn test_add_unknown_item() {
        let (catalog, cart) = setup();
        let err = add_to_cart(&catalog, &cart, "no-such-ac", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(cart.with_cart(|c| c.line_count()), 0);
    }

    #[test]
    fn test_add_inactive_item_rejected() {
        let (catalog, cart) = setup();
        catalog.deactivate("ac-gree-15t-inverter").unwrap();

        let err = add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(cart.with_cart(|c| c.line_count()), 0);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let (catalog, cart) = setup();
        let err = add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_and_remove() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap();

        let view = update_cart_item(&catalog, &cart, "ac-gree-15t-inverter", 3).unwrap();
        assert_eq!(view.lines[0].quantity, 3);
        assert_eq!(view.totals.total_rupees, 405_000);

        let view = update_cart_item(&catalog, &cart, "ac-gree-15t-inverter", 0).unwrap();
        assert!(view.lines.is_empty());

        // Removing again is a no-op, not an error
        let view = remove_from_cart(&catalog, &cart, "ac-gree-15t-inverter").unwrap();
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_update_unknown_line_is_cart_error() {
        let (catalog, cart) = setup();
        let err = update_cart_item(&catalog, &cart, "never-added", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_vanished_item_fails_view_then_prune_recovers() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap();
        add_to_cart(&catalog, &cart, "ac-used-haier-1t", None).unwrap();

        catalog.remove("ac-used-haier-1t").unwrap();

        let err = get_cart(&catalog, &cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let dropped = prune_cart(&catalog, &cart).unwrap();
        assert_eq!(dropped, vec!["ac-used-haier-1t".to_string()]);
        assert!(get_cart(&catalog, &cart).is_ok());
    }

    #[test]
    fn test_clear() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", Some(2)).unwrap();

        let view = clear_cart(&catalog, &cart).unwrap();
        assert_eq!(view.totals.total_rupees, 0);
        assert_eq!(view.totals.formatted_total, "PKR 0");
    }
}
