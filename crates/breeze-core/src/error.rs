//! # Error Types
//!
//! Domain-specific error types for breeze-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  breeze-core errors (this file)                                        │
//! │  ├── CartError        - Cart mutation / price resolution failures      │
//! │  ├── CheckoutError    - Checkout submission failures                   │
//! │  ├── FieldError       - One per-field form problem                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  breeze-catalog errors (separate crate)                                │
//! │  └── StoreError       - Catalog row operation failures                 │
//! │                                                                         │
//! │  shopfront errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CartError/CheckoutError → ApiError → Frontend │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, requested quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is a recoverable, caller-facing condition - nothing in
//!    this crate panics on bad input

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart engine errors.
///
/// All of these are caller-programming or data-drift conditions, rejected
/// immediately and loudly so the UI can never present an inconsistent cart.
/// There is no silent clamping anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// An add was attempted with a non-positive quantity.
    ///
    /// ## When This Occurs
    /// - UI sends `quantity: 0` or a negative value to add-to-cart
    ///
    /// The cart is left untouched; "add nothing" is a caller bug, not a
    /// request to remove the line.
    #[error("Quantity must be at least 1, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// A quantity would exceed the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The cart already holds the maximum number of distinct items.
    #[error("Cart cannot hold more than {max} distinct items")]
    CartTooLarge { max: usize },

    /// A set-quantity targeted an item that was never added.
    ///
    /// ## Why Not An Implicit Add?
    /// "Add" and "adjust" are deliberately separate contracts. A quantity
    /// stepper acting on a line that does not exist means the UI and the
    /// cart disagree about state, and that must surface, not self-heal.
    #[error("Item {item_id} is not in the cart")]
    UnknownLine { item_id: String },

    /// A cart line references an item the catalog can no longer resolve.
    ///
    /// ## When This Occurs
    /// - Item removed or deactivated in the admin screens after a shopper
    ///   added it to their cart
    ///
    /// The engine never prices an unresolvable line at zero; the caller
    /// shows "item no longer available" and prunes the line.
    #[error("Price for item {item_id} could not be resolved")]
    PriceResolution { item_id: String },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// One field-level problem with the checkout form.
///
/// Checkout validation reports ALL failing fields together so the customer
/// can fix the whole form in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{field}: {reason}")]
pub struct FieldError {
    /// Form field name as the frontend knows it (`"email"`, `"phone"`, ...)
    pub field: String,

    /// Human-readable reason suitable for inline display
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Checkout submission errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines; there is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// One or more form fields failed validation.
    #[error("{} form field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    /// Freezing the cart failed (typically an unresolvable line).
    #[error(transparent)]
    Cart(#[from] CartError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet field-level requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, phone too short).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// The field this error is about, for per-field reporting.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
