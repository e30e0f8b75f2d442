//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The old storefront computed its discounts with float math and          │
//! │  showed different totals on different pages for the same cart.          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    PKR has no minor unit in this domain - every price is a whole        │
//! │    number of rupees, so i64 arithmetic is exact everywhere.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breeze_core::money::Money;
//!
//! // Create from whole rupees
//! let price = Money::from_rupees(150_000);
//!
//! // 10% off, rounded to the nearest rupee (ties away from zero)
//! let discounted = price.apply_discount_percent(10);
//! assert_eq!(discounted.rupees(), 135_000);
//!
//! // Display formatting matches the storefront: "PKR 135,000"
//! assert_eq!(discounted.to_string(), "PKR 135,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Pakistani rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Whole rupees**: PKR prices in this business have no paisa component;
///   the smallest unit handled anywhere is one rupee
///
/// ## Where Money Flows
/// ```text
/// CatalogItem.price_rupees ──► effective_price() ──► line total ──► cart total
///                                     │
///                                     └──► Order line snapshot (frozen)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use breeze_core::money::Money;
    ///
    /// let price = Money::from_rupees(125_000);
    /// assert_eq!(price.rupees(), 125_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// Saturates at the i64 bounds instead of wrapping, so an extreme
    /// admin-entered price can never silently flip a total negative.
    ///
    /// ## Example
    /// ```rust
    /// use breeze_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(135_000);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.rupees(), 270_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Rounding Policy
    /// Result is rounded to the nearest whole rupee, ties away from zero.
    /// This is the ONLY place discount arithmetic lives; every price shown
    /// anywhere in the storefront goes through this function.
    ///
    /// ## Implementation
    /// Integer math in i128: `amount * (100 - pct)` is an exact value in
    /// hundredths of a rupee, then `+50 / 100` rounds half up (which equals
    /// half-away-from-zero for the non-negative prices in this domain).
    ///
    /// ## Example
    /// ```rust
    /// use breeze_core::money::Money;
    ///
    /// let price = Money::from_rupees(150_000);
    /// assert_eq!(price.apply_discount_percent(10).rupees(), 135_000);
    ///
    /// // Tie rounds away from zero: 125 * 0.5 = 62.5 → 63
    /// let odd = Money::from_rupees(125);
    /// assert_eq!(odd.apply_discount_percent(50).rupees(), 63);
    /// ```
    pub fn apply_discount_percent(&self, pct: u8) -> Money {
        debug_assert!(pct <= 100, "discount percent must be 0-100");
        let keep = (100 - pct.min(100)) as i128;
        let scaled = self.0 as i128 * keep;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money(rounded as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the storefront does:
/// `"PKR " + thousands-grouped integer`, e.g. `PKR 135,000`.
///
/// Negative values carry the sign in front: `-PKR 5,000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}PKR {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups a number with comma separators every three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values. Saturating, like all Money arithmetic.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing an iterator of Money values.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(125_000);
        assert_eq!(money.rupees(), 125_000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_rupees(135_000)), "PKR 135,000");
        assert_eq!(format!("{}", Money::from_rupees(1_250_000)), "PKR 1,250,000");
        assert_eq!(format!("{}", Money::from_rupees(999)), "PKR 999");
        assert_eq!(format!("{}", Money::from_rupees(1_000)), "PKR 1,000");
        assert_eq!(format!("{}", Money::from_rupees(0)), "PKR 0");
        assert_eq!(format!("{}", Money::from_rupees(-5_000)), "-PKR 5,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(125_000);
        let b = Money::from_rupees(270_000);

        assert_eq!((a + b).rupees(), 395_000);
        assert_eq!((b - a).rupees(), 145_000);
        assert_eq!((a * 2).rupees(), 250_000);
        assert_eq!(a.multiply_quantity(3).rupees(), 375_000);
    }

    #[test]
    fn test_arithmetic_saturates_at_bounds() {
        let huge = Money::from_rupees(i64::MAX);

        // Clamped to the bound, never a wrapped-negative figure
        assert_eq!(huge.multiply_quantity(2).rupees(), i64::MAX);
        assert_eq!((huge + Money::from_rupees(1)).rupees(), i64::MAX);
        assert_eq!(
            (Money::from_rupees(i64::MIN) - Money::from_rupees(1)).rupees(),
            i64::MIN
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [125_000, 135_000, 135_000]
            .iter()
            .map(|r| Money::from_rupees(*r))
            .sum();
        assert_eq!(total.rupees(), 395_000);
    }

    #[test]
    fn test_discount_exact() {
        // 150,000 at 10% off = 135,000 exactly
        let price = Money::from_rupees(150_000);
        assert_eq!(price.apply_discount_percent(10).rupees(), 135_000);
    }

    #[test]
    fn test_discount_rounding_ties_away_from_zero() {
        // 125 at 50% = 62.5 → 63
        assert_eq!(Money::from_rupees(125).apply_discount_percent(50).rupees(), 63);
        // 333 at 25% = 249.75 → 250
        assert_eq!(Money::from_rupees(333).apply_discount_percent(25).rupees(), 250);
        // Negative amounts mirror: -125 at 50% = -62.5 → -63
        assert_eq!(
            Money::from_rupees(-125).apply_discount_percent(50).rupees(),
            -63
        );
    }

    #[test]
    fn test_discount_idempotent_bounds() {
        let price = Money::from_rupees(99_999);
        assert_eq!(price.apply_discount_percent(0), price);
        assert_eq!(price.apply_discount_percent(100), Money::zero());
        // Repeated calls on the same input always agree (pure function)
        assert_eq!(
            price.apply_discount_percent(13),
            price.apply_discount_percent(13)
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_rupees(100);
        assert!(positive.is_positive());

        let negative = Money::from_rupees(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().rupees(), 100);
    }
}
