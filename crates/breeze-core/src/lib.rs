//! # breeze-core: Pure Business Logic for the Breeze Storefront
//!
//! This crate is the **heart** of the Breeze storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Breeze Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Confirmation     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopfront command layer                        │   │
//! │  │    add_to_cart, update_cart_item, checkout, list_items ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ breeze-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │  validate │  │   │
//! │  │   │   Order   │  │ discounts │  │ CartLine  │  │  freeze   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              breeze-catalog (Catalog Provider)                  │   │
//! │  │          in-memory item rows, filters, seed fixtures            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, Order, PaymentMethod, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart engine: mutation ops and total derivation
//! - [`checkout`] - Form validation and cart-to-order freezing
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and delivery concerns are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupees (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Single Pricing Authority**: `CatalogItem::effective_price` is the only
//!    place discount arithmetic exists; display and totals both call it
//!
//! ## Example Usage
//!
//! ```rust
//! use breeze_core::money::Money;
//!
//! let price = Money::from_rupees(150_000);
//! let effective = price.apply_discount_percent(10);
//!
//! assert_eq!(effective.rupees(), 135_000);
//! assert_eq!(effective.to_string(), "PKR 135,000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use breeze_core::Money` instead of
// `use breeze_core::money::Money`

pub use cart::{Cart, CartLine};
pub use checkout::CheckoutForm;
pub use error::{CartError, CheckoutError, FieldError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts; nobody orders a hundred different AC models in
/// one go. Can be made configurable later.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single item in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10) for
/// big-ticket units.
pub const MAX_LINE_QUANTITY: i64 = 99;
