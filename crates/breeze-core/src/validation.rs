//! # Validation Module
//!
//! Field-level validation utilities for the Breeze storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Authoritative field rules                                         │
//! │  └── Used by both the checkout form and the admin item editors         │
//! │                                                                         │
//! │  Defense in depth: the frontend check is a convenience, this one       │
//! │  is the contract.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breeze_core::validation::{validate_phone, validate_email};
//!
//! validate_phone("0300 123 4567").unwrap();
//! validate_email("ahmed@example.com").unwrap();
//! ```
//!
//! Quantity and cart-size limits are not validated here: those live in
//! the cart engine itself, which owns them as `CartError` conditions.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum digits a phone number must contain after stripping formatting.
pub const MIN_PHONE_DIGITS: usize = 10;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is present and non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Only letters, numbers, hyphens, underscores (slug or UUID both pass)
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address: standard `local@domain` shape.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part
/// - Domain contains a dot with non-empty labels around it
///
/// Deliberately not a full RFC 5322 parser - same depth of check the
/// storefront form performs.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    validate_required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return Err(invalid("must contain @")),
    };

    if local.is_empty() {
        return Err(invalid("missing name before @"));
    }
    if domain.contains('@') {
        return Err(invalid("must contain exactly one @"));
    }
    if domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid("invalid domain"));
    }

    Ok(())
}

/// Validates a phone number: at least 10 digits after stripping every
/// non-digit character (spaces, dashes, parentheses, leading `+` all fine).
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone)?;

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: format!("must contain at least {} digits", MIN_PHONE_DIGITS),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in rupees.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (promotional giveaways)
pub fn validate_price_rupees(rupees: i64) -> ValidationResult<()> {
    if rupees < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percent.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(pct: u8) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("ac-gree-15t-inverter").is_ok());
        assert!(validate_item_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("has space").is_err());
        assert!(validate_item_id(&"a".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Gree 1.5 Ton Inverter AC").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ahmed@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.pk").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("name@nodot").is_err());
        assert!(validate_email("name@.com").is_err());
        assert!(validate_email("name@com.").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("03001234567").is_ok());
        assert!(validate_phone("+92 300 123 4567").is_ok());
        assert!(validate_phone("(0300) 123-4567").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("phone please").is_err());
    }

    #[test]
    fn test_validate_price_rupees() {
        assert!(validate_price_rupees(0).is_ok());
        assert!(validate_price_rupees(125_000).is_ok());
        assert!(validate_price_rupees(-1).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }
}
