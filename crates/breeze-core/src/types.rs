//! # Domain Types
//!
//! Core domain types for the Breeze storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │     Order       │   │   OrderLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  item_id        │       │
//! │  │  price_rupees   │   │  order_number   │   │  name_snapshot  │       │
//! │  │  discount_%     │   │  customer       │   │  unit_price     │       │
//! │  │  condition      │   │  total_rupees   │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Condition     │   │ PaymentMethod   │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  New            │   │  Cash           │   │  name, email    │       │
//! │  │  Used           │   │  Bank           │   │  phone, address │       │
//! │  └─────────────────┘   │  Easypaisa      │   │  city, notes    │       │
//! │                        │  Jazzcash       │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderLine` freezes the name and effective price at submission time.
//! Later catalog edits never retroactively alter a placed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Condition
// =============================================================================

/// Whether a unit is sold brand-new or refurbished/used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Factory-new unit with manufacturer warranty.
    New,
    /// Used or refurbished unit, inspected and serviced before listing.
    Used,
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A sellable unit in the catalog.
///
/// Immutable from the cart engine's perspective: the cart only ever
/// references an item by id and reads prices through [`CatalogLookup`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Stable unique identifier (slug or UUID, the store doesn't care).
    pub id: String,

    /// Display name shown on cards, in the cart, and on orders.
    pub name: String,

    /// Optional longer description for the detail page.
    pub description: Option<String>,

    /// Unit price in whole rupees.
    pub price_rupees: i64,

    /// Pre-discount price, shown struck through on the card.
    /// Display-only: it never enters price arithmetic.
    pub original_price_rupees: Option<i64>,

    /// Discount percent in 0-100, when a promotion is configured.
    pub discount_percent: Option<u8>,

    /// Whether the discount is switched on.
    ///
    /// Earlier pages mixed a boolean gate and a bare percentage
    /// inconsistently; here the discount applies only when BOTH this flag
    /// and a positive percent are present. See [`CatalogItem::effective_price`].
    pub discounted: bool,

    /// New or used.
    pub condition: Condition,

    /// Image URLs, first is the primary/thumbnail. Non-empty for any item
    /// that is displayed.
    pub images: Vec<String>,

    /// Human-readable feature bullets ("1.5 Ton", "Inverter", ...).
    pub features: Vec<String>,

    /// Whether the item is listed (soft delete).
    pub is_active: bool,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Returns the undiscounted unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupees(self.price_rupees)
    }

    /// Whether a discount is actually in effect.
    ///
    /// Conjunctive rule: the `discounted` flag must be set AND a positive
    /// percent must be present. A flag without a percent, or a percent
    /// without the flag, means no discount.
    pub fn has_active_discount(&self) -> bool {
        self.discounted && matches!(self.discount_percent, Some(p) if p > 0 && p <= 100)
    }

    /// The post-discount unit price actually charged.
    ///
    /// This is THE single source of truth for item pricing. Line-item
    /// display, cart totals, and order freezing all call this; the
    /// arithmetic is never duplicated anywhere else.
    pub fn effective_price(&self) -> Money {
        if self.has_active_discount() {
            // has_active_discount guarantees the percent is present
            let pct = self.discount_percent.unwrap_or(0);
            self.price().apply_discount_percent(pct)
        } else {
            self.price()
        }
    }
}

// =============================================================================
// Catalog Lookup
// =============================================================================

/// Read-only item resolution, the only catalog capability the cart needs.
///
/// The cart stores item ids, not prices; every total is resolved through
/// this trait at read time so it can never go stale. Listing and filtering
/// live on the provider, not here.
pub trait CatalogLookup {
    /// Resolves an item by id. `None` means the item is gone or no longer
    /// sellable; the cart surfaces that as a price-resolution failure,
    /// never as a zero price.
    fn item(&self, id: &str) -> Option<CatalogItem>;
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer intends to pay.
///
/// Label only - no settlement logic exists anywhere in this system. The
/// value is stored on the order and relayed to the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery / in store.
    Cash,
    /// Bank transfer.
    Bank,
    /// Easypaisa mobile wallet.
    Easypaisa,
    /// JazzCash mobile wallet.
    Jazzcash,
}

impl PaymentMethod {
    /// Lenient parse from the labels the frontend sends.
    pub fn parse(label: &str) -> Option<PaymentMethod> {
        match label.trim().to_lowercase().as_str() {
            "cash" | "cod" | "cash_on_delivery" => Some(PaymentMethod::Cash),
            "bank" | "bank_transfer" => Some(PaymentMethod::Bank),
            "easypaisa" => Some(PaymentMethod::Easypaisa),
            "jazzcash" | "jazz_cash" => Some(PaymentMethod::Jazzcash),
            _ => None,
        }
    }

    /// Display label for messages and receipts.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Bank => "Bank Transfer",
            PaymentMethod::Easypaisa => "Easypaisa",
            PaymentMethod::Jazzcash => "JazzCash",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer contact details captured at checkout.
///
/// All fields are required except `notes`; the checkout aggregator
/// enforces that before an order can exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub notes: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// A line item on a placed order.
/// Uses snapshot pattern to freeze item data at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// The catalog item this line was created from.
    pub item_id: String,

    /// Item name at submission time (frozen).
    pub name_snapshot: String,

    /// Effective unit price in rupees at submission time (frozen).
    pub unit_price_rupees: i64,

    /// Quantity ordered.
    pub quantity: i64,

    /// Line total (unit price × quantity, frozen).
    pub line_total_rupees: i64,
}

impl OrderLine {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_rupees(self.unit_price_rupees)
    }

    /// Returns the frozen line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_rupees(self.line_total_rupees)
    }
}

/// An immutable, priced snapshot of a cart plus customer and payment info.
///
/// ## Dual-Key Identity
/// - `id`: UUID v4, stable machine identifier
/// - `order_number`: human-readable reference quoted in messages
///
/// Created atomically at successful checkout; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub payment_method: PaymentMethod,
    /// Cart total at submission time. Always equals the sum of the frozen
    /// line totals; checked when the order is built.
    pub total_rupees: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the frozen order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupees(self.total_rupees)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, discounted: bool, pct: Option<u8>) -> CatalogItem {
        CatalogItem {
            id: "ac-1".to_string(),
            name: "Test AC".to_string(),
            description: None,
            price_rupees: price,
            original_price_rupees: None,
            discount_percent: pct,
            discounted,
            condition: Condition::New,
            images: vec!["https://img.example/ac-1.jpg".to_string()],
            features: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_no_discount() {
        let plain = item(125_000, false, None);
        assert_eq!(plain.effective_price().rupees(), 125_000);
    }

    #[test]
    fn test_effective_price_active_discount() {
        let promo = item(150_000, true, Some(10));
        assert!(promo.has_active_discount());
        assert_eq!(promo.effective_price().rupees(), 135_000);
    }

    #[test]
    fn test_discount_requires_both_flag_and_percent() {
        // Flag set but no percent: no discount
        let flag_only = item(100_000, true, None);
        assert!(!flag_only.has_active_discount());
        assert_eq!(flag_only.effective_price().rupees(), 100_000);

        // Percent present but flag off: no discount
        let pct_only = item(100_000, false, Some(25));
        assert!(!pct_only.has_active_discount());
        assert_eq!(pct_only.effective_price().rupees(), 100_000);

        // Zero percent with flag: no discount
        let zero_pct = item(100_000, true, Some(0));
        assert!(!zero_pct.has_active_discount());
        assert_eq!(zero_pct.effective_price().rupees(), 100_000);
    }

    #[test]
    fn test_effective_price_is_pure() {
        let promo = item(150_000, true, Some(10));
        assert_eq!(promo.effective_price(), promo.effective_price());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("EasyPaisa"), Some(PaymentMethod::Easypaisa));
        assert_eq!(PaymentMethod::parse("bank_transfer"), Some(PaymentMethod::Bank));
        assert_eq!(PaymentMethod::parse("jazzcash"), Some(PaymentMethod::Jazzcash));
        assert_eq!(PaymentMethod::parse("crypto"), None);
    }

    #[test]
    fn test_payment_method_default_is_cash() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }
}
