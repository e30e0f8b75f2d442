//! # Checkout Aggregator
//!
//! Validates customer input and freezes the cart into an immutable Order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  CheckoutForm                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate() ──── per-field errors? ──► ALL reported together            │
//! │       │                                (never one at a time)            │
//! │       ▼                                                                 │
//! │  freeze() ────── resolve every line's effective price NOW               │
//! │       │          and snapshot it into OrderLines                        │
//! │       ▼                                                                 │
//! │  Order (immutable)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.clear() ── ONLY after the Order exists; on any failure            │
//! │                  the cart is untouched                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delivery of the Order (WhatsApp message, REST call, queue) is an
//! external collaborator's concern; this module's only obligation is to
//! produce a well-formed, immutable Order value.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CheckoutError, FieldError};
use crate::types::{CatalogLookup, Customer, Order, OrderLine, PaymentMethod};
use crate::validation::{validate_email, validate_phone, validate_required};

// =============================================================================
// Checkout Form
// =============================================================================

/// Raw customer-info input, exactly as the checkout page submits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub notes: Option<String>,
    /// Label only; no settlement logic anywhere.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Validation
// =============================================================================

/// Required-field and format checks for the checkout form.
///
/// Returns `Ok(())` or EVERY failing field as `{field, reason}` pairs, so
/// the customer can fix the whole form in one pass. Expected user-input
/// problems never panic.
pub fn validate(form: &CheckoutForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let required = [
        ("name", &form.name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("address", &form.address),
        ("city", &form.city),
    ];
    for (field, value) in required {
        if let Err(e) = validate_required(field, value) {
            errors.push(FieldError::new(field, e.to_string()));
        }
    }

    // Format checks only make sense once the field is present at all
    if !form.email.trim().is_empty() {
        if let Err(e) = validate_email(&form.email) {
            errors.push(FieldError::new("email", e.to_string()));
        }
    }
    if !form.phone.trim().is_empty() {
        if let Err(e) = validate_phone(&form.phone) {
            errors.push(FieldError::new("phone", e.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Freezing & Submission
// =============================================================================

/// Freezes the cart into an Order without mutating anything.
///
/// Every line's effective price is resolved against the catalog at this
/// moment and snapshotted; later catalog price changes never alter the
/// resulting order.
///
/// ## Errors
/// - `EmptyCart` if there is nothing to order
/// - `Cart(PriceResolution)` if any line's item is no longer resolvable -
///   the order is not created and the cart is left exactly as it was
pub fn freeze<L: CatalogLookup>(
    cart: &Cart,
    catalog: &L,
    form: &CheckoutForm,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(cart.line_count());
    let mut total = crate::money::Money::zero();

    for line in &cart.lines {
        let item = catalog.item(&line.item_id).ok_or_else(|| {
            CheckoutError::Cart(crate::error::CartError::PriceResolution {
                item_id: line.item_id.clone(),
            })
        })?;

        let unit_price = item.effective_price();
        let line_total = unit_price.multiply_quantity(line.quantity);
        total += line_total;

        lines.push(OrderLine {
            item_id: line.item_id.clone(),
            name_snapshot: item.name.clone(),
            unit_price_rupees: unit_price.rupees(),
            quantity: line.quantity,
            line_total_rupees: line_total.rupees(),
        });
    }

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        order_number: generate_order_number(),
        customer: Customer {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            city: form.city.trim().to_string(),
            notes: form
                .notes
                .as_ref()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        },
        lines,
        payment_method: form.payment_method,
        total_rupees: total.rupees(),
        created_at: Utc::now(),
    })
}

/// Validates, freezes, and - only then - clears the cart.
///
/// On ANY failure (bad form, empty cart, unresolvable line) the cart is
/// untouched, so the shopper never loses their selection to a failed
/// submission. Callers that hand the order to an external sink should use
/// [`validate`] + [`freeze`] directly and clear the cart themselves once
/// the sink accepts it.
pub fn submit<L: CatalogLookup>(
    cart: &mut Cart,
    catalog: &L,
    form: &CheckoutForm,
) -> Result<Order, CheckoutError> {
    validate(form).map_err(CheckoutError::Invalid)?;
    let order = freeze(cart, catalog, form)?;
    cart.clear();
    Ok(order)
}

/// Generates a human-readable order number: `ORD-yymmdd-HHMMSS-nnnn`.
fn generate_order_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let random: u16 = (nanos % 10000) as u16;
    format!("ORD-{}-{:04}", now.format("%y%m%d-%H%M%S"), random)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogItem, Condition};
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mutable test catalog so we can change prices after freezing.
    #[derive(Default)]
    struct TestCatalog {
        items: RwLock<HashMap<String, CatalogItem>>,
    }

    impl TestCatalog {
        fn insert(&self, item: CatalogItem) {
            self.items.write().unwrap().insert(item.id.clone(), item);
        }

        fn set_price(&self, id: &str, rupees: i64) {
            if let Some(item) = self.items.write().unwrap().get_mut(id) {
                item.price_rupees = rupees;
            }
        }

        fn remove(&self, id: &str) {
            self.items.write().unwrap().remove(id);
        }
    }

    impl CatalogLookup for TestCatalog {
        fn item(&self, id: &str) -> Option<CatalogItem> {
            self.items.read().unwrap().get(id).cloned()
        }
    }

    fn test_item(id: &str, price: i64, discount: Option<u8>) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("AC {}", id),
            description: None,
            price_rupees: price,
            original_price_rupees: None,
            discount_percent: discount,
            discounted: discount.is_some(),
            condition: Condition::New,
            images: vec![format!("https://img.example/{}.jpg", id)],
            features: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn good_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ahmed Khan".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: "0300 123 4567".to_string(),
            address: "House 12, Street 4, G-10/2".to_string(),
            city: "Islamabad".to_string(),
            notes: None,
            payment_method: PaymentMethod::Easypaisa,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate(&good_form()).is_ok());
    }

    #[test]
    fn test_validate_reports_all_failures_together() {
        let form = CheckoutForm {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
            address: "  ".to_string(),
            city: "".to_string(),
            notes: None,
            payment_method: PaymentMethod::Cash,
        };

        let errors = validate(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        // One pass over the form catches everything
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"phone"));
        assert!(fields.contains(&"address"));
        assert!(fields.contains(&"city"));
    }

    #[test]
    fn test_submit_builds_order_and_clears_cart() {
        let catalog = TestCatalog::default();
        let a = test_item("A", 125_000, None);
        let b = test_item("B", 150_000, Some(10));
        catalog.insert(a.clone());
        catalog.insert(b.clone());

        let mut cart = Cart::new();
        cart.add_item(&a, 1).unwrap();
        cart.add_item(&b, 2).unwrap();

        let order = submit(&mut cart, &catalog, &good_form()).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].unit_price_rupees, 125_000);
        assert_eq!(order.lines[1].unit_price_rupees, 135_000);
        assert_eq!(order.lines[1].line_total_rupees, 270_000);
        assert_eq!(order.total_rupees, 395_000);
        assert_eq!(order.payment_method, PaymentMethod::Easypaisa);
        assert!(order.order_number.starts_with("ORD-"));

        // Cart is cleared only after the order exists
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_freezes_prices() {
        let catalog = TestCatalog::default();
        let x = test_item("X", 100, None);
        catalog.insert(x.clone());

        let mut cart = Cart::new();
        cart.add_item(&x, 1).unwrap();

        let order = submit(&mut cart, &catalog, &good_form()).unwrap();
        assert_eq!(order.lines[0].unit_price_rupees, 100);

        // Catalog price changes after submission...
        catalog.set_price("X", 200);

        // ...the placed order is unaffected
        assert_eq!(order.lines[0].unit_price_rupees, 100);
        assert_eq!(order.total_rupees, 100);
    }

    #[test]
    fn test_freeze_extreme_prices_saturate_instead_of_wrapping() {
        let catalog = TestCatalog::default();
        let pricey = test_item("XL", i64::MAX, None);
        catalog.insert(pricey.clone());

        let mut cart = Cart::new();
        cart.add_item(&pricey, 3).unwrap();

        // An absurd admin-entered price clamps at the bound; the order can
        // never carry a wrapped-negative total
        let order = freeze(&cart, &catalog, &good_form()).unwrap();
        assert_eq!(order.lines[0].line_total_rupees, i64::MAX);
        assert_eq!(order.total_rupees, i64::MAX);
    }

    #[test]
    fn test_submit_invalid_form_leaves_cart_alone() {
        let catalog = TestCatalog::default();
        let a = test_item("A", 125_000, None);
        catalog.insert(a.clone());

        let mut cart = Cart::new();
        cart.add_item(&a, 1).unwrap();

        let mut form = good_form();
        form.email = "broken".to_string();

        let err = submit(&mut cart, &catalog, &form).unwrap_err();
        assert!(matches!(err, CheckoutError::Invalid(ref errs) if errs.len() == 1));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_submit_empty_cart() {
        let catalog = TestCatalog::default();
        let mut cart = Cart::new();

        let err = submit(&mut cart, &catalog, &good_form()).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn test_submit_unresolvable_line_leaves_cart_alone() {
        let catalog = TestCatalog::default();
        let a = test_item("A", 125_000, None);
        catalog.insert(a.clone());

        let mut cart = Cart::new();
        cart.add_item(&a, 1).unwrap();

        // Item pulled from the catalog while the form was open
        catalog.remove("A");

        let err = submit(&mut cart, &catalog, &good_form()).unwrap_err();
        assert!(matches!(err, CheckoutError::Cart(_)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_freeze_trims_customer_fields_and_drops_blank_notes() {
        let catalog = TestCatalog::default();
        let a = test_item("A", 1000, None);
        catalog.insert(a.clone());

        let mut cart = Cart::new();
        cart.add_item(&a, 1).unwrap();

        let mut form = good_form();
        form.name = "  Ahmed Khan  ".to_string();
        form.notes = Some("   ".to_string());

        let order = freeze(&cart, &catalog, &form).unwrap();
        assert_eq!(order.customer.name, "Ahmed Khan");
        assert_eq!(order.customer.notes, None);

        // freeze never mutates the cart
        assert_eq!(cart.line_count(), 1);
    }
}
