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
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $15.99 is stored as 1599. Line totals and the cart total are        │
//! │    exact sums - displaying to two decimals never rounds anything.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing
//! Catalog data arrives from the UI with display-formatted costs such as
//! `"$15.99"` or `"$15"`. Those strings are parsed exactly once, at
//! construction, via [`FromStr`]. A malformed cost is a construction error,
//! never a NaN-like value inside a cart.
//!
//! ```rust
//! use verdant_core::money::Money;
//!
//! let price: Money = "$15.99".parse()?;
//! assert_eq!(price.cents(), 1599);
//!
//! // Bare decimals work too
//! let price: Money = "4.5".parse()?;
//! assert_eq!(price.cents(), 450);
//! # Ok::<(), verdant_core::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences (`a - b`) stay representable even though
///   catalog prices themselves are validated non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// An empty cart totals to exactly this.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a display-formatted amount into `Money`.
///
/// Accepted forms: `"$15.99"`, `"15.99"`, `"$15"`, `"4.5"` (one fractional
/// digit means tenths). A leading `-` before the `$` is accepted so that
/// [`fmt::Display`] output round-trips.
///
/// ## Errors
/// - empty input → [`ValidationError::Required`]
/// - non-digit characters, missing digits, or more than two fractional
///   digits → [`ValidationError::InvalidFormat`]
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "cost".to_string(),
            reason: reason.to_string(),
        };

        let raw = s.trim();
        if raw.is_empty() {
            return Err(ValidationError::Required {
                field: "cost".to_string(),
            });
        }

        let (negative, raw) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let raw = raw.strip_prefix('$').unwrap_or(raw);

        let (whole, frac) = match raw.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (raw, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a decimal amount"));
        }
        let dollars: i64 = whole
            .parse()
            .map_err(|_| invalid("amount out of range"))?;

        let frac_cents: i64 = match frac {
            None => 0,
            Some(frac) if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid("not a decimal amount"));
            }
            // "$4.5" means $4.50, not $4.05
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().unwrap_or(0) * 10,
            Some(frac) if frac.len() == 2 => frac.parse::<i64>().unwrap_or(0),
            Some(_) => return Err(invalid("more than two decimal places")),
        };

        let cents = dollars * 100 + frac_cents;
        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is a debugging default. UI-facing formatting (symbol, decimals)
/// goes through the store configuration so the display policy lives in
/// one place.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation over an iterator of Money values (used by cart totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse_with_symbol() {
        assert_eq!("$15.99".parse::<Money>().unwrap().cents(), 1599);
        assert_eq!("$0.01".parse::<Money>().unwrap().cents(), 1);
        assert_eq!("$0.00".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_whole_dollars() {
        // Catalog data often carries "$15" with no fractional part
        assert_eq!("$15".parse::<Money>().unwrap().cents(), 1500);
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_single_fraction_digit() {
        // "$4.5" is four dollars fifty, not four dollars five
        assert_eq!("$4.5".parse::<Money>().unwrap().cents(), 450);
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!("  $2.49 ".parse::<Money>().unwrap().cents(), 249);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for cents in [0, 1, 99, 100, 1599, -550] {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_string().parse().unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Money>().is_err());
        assert!("   ".parse::<Money>().is_err());
        assert!("$".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("$12.345".parse::<Money>().is_err());
        assert!("$12.".parse::<Money>().is_err());
        assert!("$1,299.00".parse::<Money>().is_err());
        assert!("12.9a".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_sum() {
        let total: Money = [999, 500, 1]
            .iter()
            .map(|&c| Money::from_cents(c))
            .sum();
        assert_eq!(total.cents(), 1500);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
