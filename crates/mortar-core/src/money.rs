//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts are stored in integer minor units (cents for USD, whole
//! shillings would use a zero-decimal mapping). Floats exist only at the
//! wire boundary, where the server sends `selling_price` as a JSON number;
//! [`Money::from_decimal`] and [`Money::to_decimal`] do that conversion in
//! one place.
//!
//! ## Usage
//! ```rust
//! use mortar_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price * 3;                // 32.97
//! assert_eq!(line.cents(), 3297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refunds and corrections even though the
///   counter itself only produces non-negative amounts
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **Transparent serde**: serializes as the raw integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a decimal amount from the wire into minor units.
    ///
    /// The server serializes prices as JSON numbers (e.g. `1050.5`).
    /// Rounding to the nearest cent keeps 10.99 from becoming 1098.
    #[inline]
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Converts back to the decimal representation used on the wire.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use mortar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(100_000); // 1,000.00
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 200_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Plain two-decimal rendering without grouping, e.g. `1000.50`.
///
/// This is the per-cell rendering (unit prices, line subtotals). The grand
/// total display goes through [`AmountFormat`] instead, which adds
/// thousands grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_units().abs(), self.minor_units())
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Locale-style amount formatting for the grand total display.
///
/// Renders two decimal places with thousands grouping, e.g. `2,000.00`.
/// The separators come from configuration so a terminal configured for a
/// different locale can render `2.000,00` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    /// Separator between thousands groups.
    pub thousands_separator: char,

    /// Separator before the two decimal digits.
    pub decimal_separator: char,
}

impl Default for AmountFormat {
    fn default() -> Self {
        AmountFormat {
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl AmountFormat {
    /// Formats an amount with grouping, e.g. `1,234,567.89`.
    pub fn format(&self, amount: Money) -> String {
        let major = amount.major_units().abs().to_string();
        let mut grouped = String::with_capacity(major.len() + major.len() / 3 + 4);

        let first_group = major.len() % 3;
        for (i, digit) in major.chars().enumerate() {
            if i != 0 && (i + 3 - first_group) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{}{}{}{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            grouped,
            self.decimal_separator,
            amount.minor_units()
        )
    }

    /// Formats the zero amount, used when the total is reset after a sale.
    pub fn zero(&self) -> String {
        format!("0{}00", self.decimal_separator)
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
        assert_eq!(money.major_units(), 10);
        assert_eq!(money.minor_units(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_decimal_round_trip() {
        assert_eq!(Money::from_decimal(10.99).cents(), 1099);
        assert_eq!(Money::from_decimal(1000.0).cents(), 100_000);
        // 0.1 + 0.2 style float noise must still land on the right cent
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_cents(1099).to_decimal(), 10.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(4).cents(), 4000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(1000), Money::from_cents(550)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 1550);
    }

    #[test]
    fn test_grouped_format() {
        let fmt = AmountFormat::default();
        assert_eq!(fmt.format(Money::from_cents(1550)), "15.50");
        assert_eq!(fmt.format(Money::from_cents(200_000)), "2,000.00");
        assert_eq!(fmt.format(Money::from_cents(123_456_789)), "1,234,567.89");
        assert_eq!(fmt.format(Money::from_cents(0)), "0.00");
        assert_eq!(fmt.format(Money::from_cents(-200_000)), "-2,000.00");
    }

    #[test]
    fn test_grouped_format_custom_separators() {
        let fmt = AmountFormat {
            thousands_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(fmt.format(Money::from_cents(200_050)), "2.000,50");
        assert_eq!(fmt.zero(), "0,00");
    }
}
