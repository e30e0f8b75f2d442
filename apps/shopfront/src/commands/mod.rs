//! # Commands Module
//!
//! The host-facing command surface of the shopfront.
//!
//! ## Command Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Groups                                    │
//! │                                                                         │
//! │  item.rs       Catalog browsing + admin CRUD                            │
//! │                list_items, get_item, create_item, update_item,          │
//! │                deactivate_item                                          │
//! │                                                                         │
//! │  cart.rs       Shopping cart session                                    │
//! │                get_cart, add_to_cart, update_cart_item,                 │
//! │                remove_from_cart, clear_cart, prune_cart                 │
//! │                                                                         │
//! │  checkout.rs   Order submission                                         │
//! │                submit_checkout                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes its state explicitly, returns
//! `Result<T, ApiError>`, and logs at `debug!` on entry so a session can
//! be replayed from the log.

pub mod cart;
pub mod checkout;
pub mod item;

pub use cart::{
    add_to_cart, clear_cart, get_cart, prune_cart, remove_from_cart, update_cart_item, CartLineView,
    CartTotals, CartView,
};
pub use checkout::{submit_checkout, CheckoutResponse};
pub use item::{create_item, deactivate_item, get_item, list_items, update_item, ItemInput};
