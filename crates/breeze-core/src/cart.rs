//! # Cart Engine
//!
//! The shopping cart aggregate and the only legal way to mutate it.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Invariants                                  │
//! │                                                                         │
//! │  1. At most one line per item id                                        │
//! │     (duplicate adds increment quantity, never create a second line)     │
//! │                                                                         │
//! │  2. Every surviving line has quantity >= 1                              │
//! │     (setting quantity to 0 removes the line entirely)                   │
//! │                                                                         │
//! │  3. Lines keep insertion order                                          │
//! │     (first added, first shown - stable display)                         │
//! │                                                                         │
//! │  4. The cart stores NO prices                                           │
//! │     Totals are derived on every read through CatalogLookup, so they     │
//! │     can never drift from the catalog. Prices are frozen exactly once,   │
//! │     at checkout (see the checkout module).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Earlier storefront pages duplicated this arithmetic inline with
//! slightly different results. Here every rupee figure flows through
//! [`CatalogItem::effective_price`] and the two derivation functions
//! below - nothing else does price math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{CatalogItem, CatalogLookup};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A quantity of one catalog item held by the shopper.
///
/// Holds an item *reference*, not a snapshot: name and price are resolved
/// against the catalog whenever the cart is displayed or totalled.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Foreign key into the catalog.
    pub item_id: String,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// When this line was first created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopper's in-progress, uncommitted selection.
///
/// Created empty per shopping session, held in memory, cleared on
/// successful checkout or explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If the item already has a line: quantity increases by `qty`
    /// - Otherwise: a new line is appended at the end (insertion order)
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `qty < 1` (rejected, no-op - never clamped)
    /// - `QuantityTooLarge` if the line would exceed [`MAX_LINE_QUANTITY`]
    /// - `CartTooLarge` if a new line would exceed [`MAX_CART_LINES`]
    pub fn add_item(&mut self, item: &CatalogItem, qty: i64) -> CartResult<()> {
        if qty < 1 {
            return Err(CartError::InvalidQuantity { requested: qty });
        }

        // Cap the increment itself before any line arithmetic; the merge
        // sum below is then bounded by 2 * MAX_LINE_QUANTITY and cannot
        // overflow
        if qty > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            let new_qty = line.quantity + qty;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            quantity: qty,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes the line for `item_id` entirely, regardless of quantity.
    ///
    /// Deliberately a no-op (not an error) if the line does not exist:
    /// "make sure this item is gone" is idempotent.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Overwrites the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `qty <= 0`: equivalent to [`Cart::remove_item`]
    /// - `qty > 0` and the line exists: quantity is overwritten
    /// - `qty > 0` and no line exists: `UnknownLine` - setting a quantity
    ///   on an item never added is not an implicit add
    pub fn set_quantity(&mut self, item_id: &str, qty: i64) -> CartResult<()> {
        if qty <= 0 {
            self.remove_item(item_id);
            return Ok(());
        }

        if qty > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        match self.lines.iter_mut().find(|l| l.item_id == item_id) {
            Some(line) => {
                line.quantity = qty;
                Ok(())
            }
            None => Err(CartError::UnknownLine {
                item_id: item_id.to_string(),
            }),
        }
    }

    /// Empties all lines unconditionally. Used after successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops every line whose item the catalog can no longer resolve,
    /// returning the ids that were removed.
    ///
    /// This is the recovery path after a `PriceResolution` failure: the UI
    /// tells the shopper which items went away, then prunes.
    pub fn prune_unresolvable<L: CatalogLookup>(&mut self, catalog: &L) -> Vec<String> {
        let mut dropped = Vec::new();
        self.lines.retain(|l| {
            if catalog.item(&l.item_id).is_some() {
                true
            } else {
                dropped.push(l.item_id.clone());
                false
            }
        });
        dropped
    }

    /// Derives one line's total: quantity × effective price, resolved now.
    ///
    /// ## Errors
    /// `PriceResolution` if the catalog no longer resolves the item. The
    /// engine never silently prices a missing item at zero.
    pub fn line_total<L: CatalogLookup>(line: &CartLine, catalog: &L) -> CartResult<Money> {
        let item = catalog
            .item(&line.item_id)
            .ok_or_else(|| CartError::PriceResolution {
                item_id: line.item_id.clone(),
            })?;
        Ok(item.effective_price().multiply_quantity(line.quantity))
    }

    /// Derives the cart total: Σ line totals, resolved now.
    ///
    /// Recomputed on every read, never cached, so it always equals the
    /// live sum of `quantity × effective_price` over all lines.
    pub fn total<L: CatalogLookup>(&self, catalog: &L) -> CartResult<Money> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            Ok(acc + Self::line_total(line, catalog)?)
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
