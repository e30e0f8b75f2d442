//! Scripted demo session against the seeded catalog.
//!
//! Runs the same command surface a UI would call: browse, fill a cart,
//! change quantities, and check out through the WhatsApp sink. Useful as
//! a smoke test and as living documentation of the command flow.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p breeze-shopfront
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use breeze_catalog::{seed, CatalogStore, ItemFilter};
use breeze_core::checkout::CheckoutForm;
use breeze_core::types::PaymentMethod;
use shopfront::commands::{
    add_to_cart, get_cart, list_items, submit_checkout, update_cart_item,
};
use shopfront::sink::WhatsAppSink;
use shopfront::state::{CartState, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StoreConfig::default();
    let catalog = CatalogStore::with_items(seed::sample_items())?;
    let cart = CartState::new();
    let sink = WhatsAppSink::new(&config);

    info!(store = %config.store_name, items = catalog.len(), "Storefront ready");

    // Browse: what a shopper landing on the catalog page sees
    let listing = list_items(&catalog, &ItemFilter::default())?;
    for item in &listing {
        info!(
            id = %item.id,
            price = %item.formatted_price,
            discount = item.has_discount,
            "{}", item.name
        );
    }

    // Fill the cart: one full-price unit, two discounted ones
    add_to_cart(&catalog, &cart, "ac-haier-15t-inverter", None)?;
    add_to_cart(&catalog, &cart, "ac-gree-15t-inverter", Some(1))?;
    let view = update_cart_item(&catalog, &cart, "ac-gree-15t-inverter", 2)?;
    info!(
        lines = view.totals.line_count,
        total = %view.totals.formatted_total,
        "Cart filled"
    );

    let view = get_cart(&catalog, &cart)?;
    for line in &view.lines {
        info!(
            qty = line.quantity,
            total = %line.formatted_line_total,
            "{}", line.name
        );
    }

    // Check out
    let form = CheckoutForm {
        name: "Ahmed Khan".to_string(),
        email: "ahmed@example.com".to_string(),
        phone: "03001234567".to_string(),
        address: "House 12, Street 4, F-10".to_string(),
        city: config.city.clone(),
        notes: Some("Call before delivery".to_string()),
        payment_method: PaymentMethod::Easypaisa,
    };
    let resp = submit_checkout(&catalog, &cart, &sink, &form)?;

    info!(
        order = %resp.order_number,
        total = %resp.formatted_total,
        "Order placed - open this link to send it:"
    );
    info!("{}", resp.confirmation);

    Ok(())
}
