//! # Order Sink
//!
//! Where finished orders go.
//!
//! ## Swappable Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Delivery                                    │
//! │                                                                         │
//! │  checkout command ──► OrderSink::submit_order(&Order)                   │
//! │                              │                                          │
//! │              ┌───────────────┼────────────────────┐                     │
//! │              ▼               ▼                    ▼                     │
//! │       WhatsAppSink      MemorySink          (future: REST,             │
//! │       wa.me deep-link   in-memory log        queue, DB...)             │
//! │                                                                         │
//! │  The checkout core only promises a well-formed immutable Order;         │
//! │  HOW it is delivered lives entirely behind this trait.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shop runs on WhatsApp: an order becomes a pre-filled chat message
//! the customer sends with one tap. No order server exists, and that is a
//! feature for a three-person business.

use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, info};

use crate::state::StoreConfig;
use breeze_core::types::Order;
use breeze_core::Money;

// =============================================================================
// Sink Trait
// =============================================================================

/// Delivery errors. Always recoverable: the caller keeps the cart intact
/// and the shopper can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The sink could not accept the order.
    #[error("Order could not be delivered: {0}")]
    Delivery(String),
}

/// Accepts finished orders for delivery.
///
/// Returns an opaque confirmation string on success - for the WhatsApp
/// sink that is the deep-link URL the UI opens; a real backend would
/// return its order id.
pub trait OrderSink: Send + Sync {
    fn submit_order(&self, order: &Order) -> Result<String, SinkError>;
}

// =============================================================================
// WhatsApp Sink
// =============================================================================

/// Composes a `wa.me` deep-link carrying the order as a templated message.
#[derive(Debug, Clone)]
pub struct WhatsAppSink {
    /// Destination number in `wa.me` format (digits only, country code,
    /// no leading zeros).
    number: String,
    store_name: String,
}

impl WhatsAppSink {
    pub fn new(config: &StoreConfig) -> Self {
        WhatsAppSink {
            number: config.whatsapp_number.clone(),
            store_name: config.store_name.clone(),
        }
    }

    /// Renders the order as the plain-text message the shop receives.
    fn compose_message(&self, order: &Order) -> String {
        let mut msg = String::new();
        msg.push_str(&format!("New order {} for {}\n", order.order_number, self.store_name));
        msg.push_str(&format!("Name: {}\n", order.customer.name));
        msg.push_str(&format!("Phone: {}\n", order.customer.phone));
        msg.push_str(&format!(
            "Address: {}, {}\n",
            order.customer.address, order.customer.city
        ));
        msg.push_str(&format!("Payment: {}\n", order.payment_method.label()));
        if let Some(notes) = &order.customer.notes {
            msg.push_str(&format!("Notes: {}\n", notes));
        }
        msg.push('\n');
        for line in &order.lines {
            msg.push_str(&format!(
                "{} x {} - {}\n",
                line.quantity,
                line.name_snapshot,
                line.line_total()
            ));
        }
        msg.push_str(&format!("\nTotal: {}\n", Money::from_rupees(order.total_rupees)));
        msg
    }
}

impl OrderSink for WhatsAppSink {
    fn submit_order(&self, order: &Order) -> Result<String, SinkError> {
        let message = self.compose_message(order);
        let url = format!("https://wa.me/{}?text={}", self.number, percent_encode(&message));

        debug!(
            order_id = %order.id,
            payload = %serde_json::to_string(order).unwrap_or_default(),
            "Composed WhatsApp order message"
        );
        info!(order_number = %order.order_number, "Order handed to WhatsApp sink");

        Ok(url)
    }
}

/// Percent-encodes a string for a `wa.me` `text` parameter.
///
/// Unreserved characters (RFC 3986) pass through; everything else,
/// including spaces and newlines, is `%XX`-encoded byte-wise.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Records orders in memory. Used by tests and as a stand-in until a real
/// backend exists; the failure switch lets tests exercise the
/// "sink failed, cart must survive" path.
#[derive(Debug, Default)]
pub struct MemorySink {
    orders: Mutex<Vec<Order>>,
    failing: Mutex<bool>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent submission fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().expect("sink mutex poisoned") = failing;
    }

    /// All orders accepted so far.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().expect("sink mutex poisoned").clone()
    }
}

impl OrderSink for MemorySink {
    fn submit_order(&self, order: &Order) -> Result<String, SinkError> {
        if *self.failing.lock().expect("sink mutex poisoned") {
            return Err(SinkError::Delivery("sink unavailable".to_string()));
        }
        let mut orders = self.orders.lock().expect("sink mutex poisoned");
        orders.push(order.clone());
        Ok(order.id.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
