//! # Money Module
//!
//! Provides the `Money` and `Rate` types for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A receipt recomputed from the same inputs must be bit-for-bit          │
//! │  identical. Accumulating f64 line totals breaks that.                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $1.07 = 107 cents, 3 × 107 = 321 cents, exactly                     │
//! │    Percentages round half-up to the cent at the point of computation   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use check_core::money::{Money, Rate};
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(107); // $1.07
//!
//! // Line total for quantity 3
//! let total = price.multiply_quantity(3); // $3.21
//!
//! // 10% of the line total, rounded half-up to the cent
//! let discount = total.calculate_discount(Rate::from_percent(10)); // $0.32
//! assert_eq!(discount.cents(), 32);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Rate
// =============================================================================

/// A discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000. Card rates are whole percents
/// (3% = 300 bps); the wholesale rate is 10% = 1000 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a whole percentage (3 = 3%).
    #[inline]
    pub const fn from_percent(pct: u8) -> Self {
        Rate(pct as u32 * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a whole percentage, truncating sub-percent bps.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// Every monetary figure on a receipt flows through this type: unit prices,
/// line totals, per-line discounts, the aggregate totals, and the customer
/// balance. i64 is signed so intermediate `total - discount` math never
/// needs special casing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use check_core::money::Money;
    ///
    /// let price = Money::from_cents(107); // Represents $1.07
    /// assert_eq!(price.cents(), 107);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use check_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(107); // $1.07
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 321); // $3.21
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Calculates a discount amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 term is the
    /// half-up rounding (5000/10000 = 0.5), applied at the point of
    /// computation so no unrounded value ever leaves this function.
    ///
    /// ## Example
    /// ```rust
    /// use check_core::money::{Money, Rate};
    ///
    /// let line_total = Money::from_cents(5000); // $50.00
    /// let discount = line_total.calculate_discount(Rate::from_percent(10));
    /// assert_eq!(discount.cents(), 500); // $5.00
    /// ```
    pub fn calculate_discount(&self, rate: Rate) -> Money {
        // i128 intermediate so large totals cannot overflow
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error parsing a decimal money string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid money value: {0}")]
pub struct ParseMoneyError(pub String);

/// Parses decimal text such as `"1.07"`, `"100"`, or `"0.5"` into exact cents.
///
/// At most two fractional digits are accepted; a single digit means tenths
/// (`"0.5"` = 50 cents). This keeps catalog and balance parsing exact with
/// no floating point round-trip.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError(s.to_string()));
        }

        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, s),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError(s.to_string()));
        }
        if minor.len() > 2 {
            return Err(ParseMoneyError(s.to_string()));
        }
        if !major.chars().all(|c| c.is_ascii_digit())
            || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError(s.to_string()));
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ParseMoneyError(s.to_string()))?
        };
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| ParseMoneyError(s.to_string()))? * 10,
            _ => minor.parse().map_err(|_| ParseMoneyError(s.to_string()))?,
        };

        Ok(Money::from_cents(sign * (major * 100 + minor)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and logs. The receipt writer renders its own
/// `N.NN$` cells.
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("1.07".parse::<Money>().unwrap().cents(), 107);
        assert_eq!("100".parse::<Money>().unwrap().cents(), 10000);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0.50".parse::<Money>().unwrap().cents(), 50);
        assert_eq!(".99".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.075".parse::<Money>().is_err());
        assert!("1,07".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
    }

    #[test]
    fn test_discount_basic() {
        // $50.00 at 10% = $5.00
        let amount = Money::from_cents(5000);
        let discount = amount.calculate_discount(Rate::from_percent(10));
        assert_eq!(discount.cents(), 500);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // $1.07 × 3 = $3.21; 3% of $3.21 = $0.0963 → $0.10
        let amount = Money::from_cents(321);
        let discount = amount.calculate_discount(Rate::from_percent(3));
        assert_eq!(discount.cents(), 10);

        // Exactly half a cent rounds up: 2% of $0.25 = $0.005 → $0.01
        let amount = Money::from_cents(25);
        let discount = amount.calculate_discount(Rate::from_percent(2));
        assert_eq!(discount.cents(), 1);
    }

    #[test]
    fn test_discount_zero_rate() {
        let amount = Money::from_cents(12345);
        assert_eq!(amount.calculate_discount(Rate::zero()).cents(), 0);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(107);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 321);
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percent(3);
        assert_eq!(rate.bps(), 300);
        assert_eq!(rate.percent(), 3);
        assert!(Rate::zero().is_zero());
    }
}
