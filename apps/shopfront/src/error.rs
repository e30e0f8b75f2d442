//! # API Error Type
//!
//! Unified error type for shopfront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shopfront                          │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_to_cart')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  StoreError?   ── NotFound / DuplicateId ──────┐                 │  │
//! │  │  CartError?    ── InvalidQuantity / ... ───────┼──► ApiError ──► │  │
//! │  │  CheckoutError?── per-field details attached ──┘                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('add_to_cart') }                                    │
//! │  catch (e) {                                                            │
//! │    // e.code = "CART_ERROR", e.message = "...", e.details = [...]       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The error is serializable: machine-readable `code`, human-readable
//! `message`, and - for checkout validation - the full per-field list so
//! the form can mark every bad input at once.

use serde::Serialize;

use breeze_core::{CartError, CheckoutError, FieldError};
use breeze_catalog::StoreError;

/// API error returned from shopfront commands.
///
/// ## Serialization
/// What the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "2 form field(s) failed validation",
///   "details": [
///     { "field": "email", "reason": "email has invalid format: must contain @" },
///     { "field": "phone", "reason": "phone has invalid format: must contain at least 10 digits" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field validation failures, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Checkout could not complete
    CheckoutError,

    /// Order delivery failed (cart is preserved)
    DeliveryError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a validation error carrying the full per-field list.
    pub fn validation_fields(errors: Vec<FieldError>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: format!("{} form field(s) failed validation", errors.len()),
            details: Some(errors),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts cart engine errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::InvalidQuantity { .. } | CartError::QuantityTooLarge { .. } => {
                ErrorCode::ValidationError
            }
            CartError::UnknownLine { .. }
            | CartError::CartTooLarge { .. }
            | CartError::PriceResolution { .. } => ErrorCode::CartError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts checkout errors to API errors, preserving per-field details.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Invalid(fields) => ApiError::validation_fields(fields),
            CheckoutError::EmptyCart => ApiError::new(ErrorCode::CheckoutError, "Cart is empty"),
            CheckoutError::Cart(e) => e.into(),
        }
    }
}

/// Converts catalog store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::not_found("Item", &id),
            StoreError::DuplicateId { id } => {
                ApiError::validation(format!("Item '{}' already exists", id))
            }
            StoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
