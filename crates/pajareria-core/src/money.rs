//! # Money Module
//!
//! Provides the `Amount` type for sale totals and the canonical rendering of
//! a bird's unit price.
//!
//! ## Floating Point On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HOW PRICES FLOW                                                        │
//! │                                                                         │
//! │  Operator types "25.0" ──► CatalogItem.unit_price (f64)                 │
//! │                                   │                                     │
//! │                                   ├──► "precio=25.0"  (shortest repr)  │
//! │                                   │                                     │
//! │                                   └──► SaleLine.unit_price (snapshot)   │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  Amount = Σ unit_price in line order ──► "65.00" (two decimals)         │
//! │                                                                         │
//! │  Sums are plain f64 additions in append order.                          │
//! │  Rounding happens ONLY when an Amount is displayed.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pajareria_core::money::{format_price, Amount};
//!
//! let total: Amount = [25.0, 40.0].into_iter().map(Amount::new).sum();
//! assert_eq!(total.to_string(), "65.00");
//! assert_eq!(format_price(25.0), "25.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary amount, kept at full `f64` precision.
///
/// ## Display
/// `Display` renders exactly two decimal places (`65.00`), rounding the
/// shortest decimal form of the value half-up: `0.125` shows as `0.13`
/// even though the nearest `f64` sits just below it. The currency symbol is
/// not part of the amount; the console adds it where needed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    /// Wraps a raw value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Zero amount (the total of an empty sale).
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_two_decimals(self.0))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Folds left to right, so the sum follows iteration order.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, next| acc + next)
    }
}

// =============================================================================
// Price Rendering
// =============================================================================

/// Two decimal places, half-up on the shortest round-trip digits.
fn format_two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    // f64 Display never switches to exponent notation
    let shortest = format!("{}", value.abs());
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (units, cents) = digits.split_at(digits.len() - 2);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(units),
        String::from_utf8_lossy(cents)
    )
}

/// Renders a unit price in its shortest round-trip decimal form.
///
/// Integral values keep one decimal (`25.0`). Magnitudes below `1e-3` or
/// from `1e7` upwards switch to scientific notation (`1.0E7`).
///
/// ## Example
/// ```rust
/// use pajareria_core::money::format_price;
///
/// assert_eq!(format_price(25.0), "25.0");
/// assert_eq!(format_price(19.99), "19.99");
/// assert_eq!(format_price(12_500_000.0), "1.25E7");
/// ```
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if !price.is_finite() || magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", price);
    }

    let scientific = format!("{:e}", price);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Amount::new(65.0).to_string(), "65.00");
        assert_eq!(Amount::new(0.5).to_string(), "0.50");
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::new(19.999).to_string(), "20.00");
    }

    #[test]
    fn test_display_rounds_ties_half_up() {
        assert_eq!(Amount::new(0.125).to_string(), "0.13");
        assert_eq!(Amount::new(2.675).to_string(), "2.68");
        assert_eq!(Amount::new(1.005).to_string(), "1.01");
        assert_eq!(Amount::new(10.125).to_string(), "10.13");
        assert_eq!(Amount::new(0.124).to_string(), "0.12");
    }

    #[test]
    fn test_display_carries_into_units() {
        assert_eq!(Amount::new(0.995).to_string(), "1.00");
        assert_eq!(Amount::new(99.995).to_string(), "100.00");
        assert_eq!(Amount::new(1e20).to_string(), "100000000000000000000.00");
    }

    #[test]
    fn test_sum_follows_order() {
        let values = [0.1, 0.2, 0.3];
        let total: Amount = values.iter().copied().map(Amount::new).sum();
        assert_eq!(total.value(), (0.1 + 0.2) + 0.3);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Amount = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(25.0), "25.0");
        assert_eq!(format_price(40.5), "40.5");
        assert_eq!(format_price(0.0), "0.0");
        assert_eq!(format_price(0.1), "0.1");
        assert_eq!(format_price(10_000_000.0), "1.0E7");
        assert_eq!(format_price(0.0001), "1.0E-4");
    }
}
