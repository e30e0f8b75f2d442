//! # Checkout Command
//!
//! Turns the session cart plus a checkout form into a delivered order.
//!
//! ## Ordering Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_checkout                                      │
//! │                                                                         │
//! │  1. validate(form)        ── all field errors at once, cart untouched   │
//! │  2. freeze(cart)          ── prices resolved NOW, Order built,          │
//! │                              cart still untouched                       │
//! │  3. sink.submit_order()   ── delivery attempt                           │
//! │  4. cart.clear()          ── ONLY after the sink accepted the order     │
//! │                                                                         │
//! │  Any failure at steps 1-3 leaves the cart exactly as it was, so the     │
//! │  shopper can fix the form or retry without re-adding items.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ErrorCode};
use crate::sink::OrderSink;
use crate::state::CartState;
use breeze_catalog::CatalogStore;
use breeze_core::checkout::{self, CheckoutForm};
use breeze_core::{CheckoutError, Money};

/// What the frontend shows on the confirmation page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    /// Human-readable reference, e.g. `ORD-260823-142530-0481`.
    pub order_number: String,
    pub total_rupees: i64,
    /// Total formatted for display, e.g. `"PKR 395,000"`.
    pub formatted_total: String,
    /// Sink confirmation - for the WhatsApp sink, the `wa.me` deep-link
    /// the page opens.
    pub confirmation: String,
}

/// Validates, freezes, delivers, then clears the cart.
pub fn submit_checkout(
    catalog: &CatalogStore,
    cart: &CartState,
    sink: &dyn OrderSink,
    form: &CheckoutForm,
) -> Result<CheckoutResponse, ApiError> {
    debug!(email = %form.email, city = %form.city, "Command: submit_checkout");

    checkout::validate(form).map_err(|fields| ApiError::from(CheckoutError::Invalid(fields)))?;

    let order = cart.with_cart(|c| checkout::freeze(c, catalog, form))?;

    let confirmation = sink.submit_order(&order).map_err(|e| {
        warn!(order_number = %order.order_number, error = %e, "Order delivery failed, cart preserved");
        ApiError::new(ErrorCode::DeliveryError, e.to_string())
    })?;

    // The order exists and was accepted; only now does the cart reset
    cart.with_cart_mut(|c| c.clear());

    info!(
        order_number = %order.order_number,
        total_rupees = order.total_rupees,
        lines = order.lines.len(),
        "Order placed"
    );

    Ok(CheckoutResponse {
        order_id: order.id.clone(),
        order_number: order.order_number.clone(),
        total_rupees: order.total_rupees,
        formatted_total: Money::from_rupees(order.total_rupees).to_string(),
        confirmation,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::sink::MemorySink;
    use breeze_catalog::seed;

    fn setup() -> (CatalogStore, CartState, MemorySink) {
        let catalog = CatalogStore::with_items(seed::sample_items()).unwrap();
        (catalog, CartState::new(), MemorySink::new())
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ahmed Khan".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: "03001234567".to_string(),
            address: "House 12, Street 4, F-10".to_string(),
            city: "Islamabad".to_string(),
            notes: None,
            payment_method: Default::default(),
        }
    }

    #[test]
    fn test_full_checkout_flow() {
        let (catalog, cart, sink) = setup();
        // 125,000 plain + 2 x (150,000 with 10% off) = 395,000
        add_to_cart(&catalog, &cart, "ac-haier-15t-inverter", None).unwrap();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", Some(2)).unwrap();

        let resp = submit_checkout(&catalog, &cart, &sink, &valid_form()).unwrap();

        assert_eq!(resp.total_rupees, 395_000);
        assert_eq!(resp.formatted_total, "PKR 395,000");
        assert!(resp.order_number.starts_with("ORD-"));

        // Delivered exactly once, cart reset afterwards
        let orders = sink.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total_rupees, 395_000);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_invalid_form_reports_all_fields_and_preserves_cart() {
        let (catalog, cart, sink) = setup();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap();

        let form = CheckoutForm {
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
            ..CheckoutForm::default()
        };
        let err = submit_checkout(&catalog, &cart, &sink, &form).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        let details = err.details.unwrap();
        // name, address, city missing + email and phone malformed
        assert_eq!(details.len(), 5);

        assert!(sink.orders().is_empty());
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let (catalog, cart, sink) = setup();
        let err = submit_checkout(&catalog, &cart, &sink, &valid_form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutError);
    }

    #[test]
    fn test_failed_delivery_preserves_cart() {
        let (catalog, cart, sink) = setup();
        add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", None).unwrap();
        sink.set_failing(true);

        let err = submit_checkout(&catalog, &cart, &sink, &valid_form()).unwrap_err();

        assert_eq!(err.code, ErrorCode::DeliveryError);
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);

        // The retry goes through once the sink recovers
        sink.set_failing(false);
        let resp = submit_checkout(&catalog, &cart, &sink, &valid_form()).unwrap();
        assert_eq!(resp.total_rupees, 135_000);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_vanished_item_blocks_checkout() {
        let (catalog, cart, sink) = setup();
        add_to_cart(&catalog, &cart, "ac-used-haier-1t", None).unwrap();
        catalog.remove("ac-used-haier-1t").unwrap();

        let err = submit_checkout(&catalog, &cart, &sink, &valid_form()).unwrap_err();

        assert_eq!(err.code, ErrorCode::CartError);
        assert!(sink.orders().is_empty());
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);
    }
}
