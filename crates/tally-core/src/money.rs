//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Prices keep every digit the catalog gives them. Discounts, tax and   │
//! │    sums are exact decimal arithmetic. Rounding to a whole cent happens  │
//! │    once, when an amount is shown.                                       │
//! │                                                                         │
//! │    3 × $0.333, 10% off, 7% tax = 0.961866  →  "$0.96"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price: Money = "10.99".parse().unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.to_string(), "$32.97");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Largest unit price the loader accepts, in dollars.
///
/// Keeps `price × u32::MAX` and the sums built from it far below
/// `Decimal::MAX`.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000_000;

/// Basis points use four decimal places (10000 bps = 1).
const BPS_SCALE: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount at full decimal precision.
///
/// ## Design Decisions
/// - **Unrounded**: `0.333` stays `0.333`; [`Money::rounded`] and `Display`
///   round half away from zero to the cent
/// - **Saturating**: arithmetic clamps at `Decimal::MAX` instead of panicking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount in dollars.
    #[inline]
    pub fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact amount in dollars.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the value in whole cents, after rounding to the cent.
    pub fn cents(&self) -> i64 {
        let mut rounded = self.rounded().0;
        rounded.rescale(2);
        i64::try_from(rounded.mantissa()).unwrap_or(i64::MAX)
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds to the cent, half away from zero.
    ///
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let exact: Money = "0.05778".parse().unwrap();
    /// assert_eq!(exact.rounded(), Money::from_cents(6));
    /// ```
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Returns `bps` basis points of this amount, unrounded.
    pub fn portion_bps(&self, bps: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::new(i64::from(bps), BPS_SCALE)))
    }

    /// Calculates tax for this amount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(2700); // $27.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(700)); // 7%
    /// assert_eq!(tax.cents(), 189);
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.portion_bps(rate.bps())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let line = Money::from_cents(3000); // $30.00
    /// assert_eq!(line.apply_percentage_discount(1000).cents(), 2700); // 10% off
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        *self - self.portion_bps(discount_bps)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a price the way a float literal is written: `12`, `12.50`,
/// `+1.5`, `1e3`, `2.5E-1`. Every digit is kept.
///
/// Negative amounts, `NaN`, infinities, currency symbols and prices above
/// [`MAX_UNIT_PRICE`] are rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' {}", s, reason),
        };

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let body = s.strip_prefix('+').unwrap_or(s);
        let parsed = if body.contains(|c: char| c == 'e' || c == 'E') {
            Decimal::from_scientific(body)
        } else {
            Decimal::from_str(body)
        };
        let amount = parsed.map_err(|_| invalid("is not a number"))?;

        if amount.is_zero() {
            return Ok(Money::zero());
        }
        if amount.is_sign_negative() {
            return Err(invalid("is negative"));
        }
        if amount > Decimal::from(MAX_UNIT_PRICE) {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE,
            });
        }

        Ok(Money(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, rounded to the cent.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.rounded().0;
        rounded.rescale(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${}", sign, rounded.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.amount(), dec("10.99"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_decimal(dec("0.333"))), "$0.33");
        assert_eq!(format!("{}", Money::from_decimal(dec("0.961866"))), "$0.96");
        assert_eq!(format!("{}", Money::from_decimal(dec("1000"))), "$1000.00");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec("0.125")).cents(), 13);
        assert_eq!(Money::from_decimal(dec("0.124999")).cents(), 12);
        assert_eq!(Money::from_decimal(dec("0.035")).cents(), 4);
        assert_eq!(Money::from_decimal(dec("2.675")).to_string(), "$2.68");
    }

    #[test]
    fn test_parse_keeps_full_precision() {
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_cents(1000));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_cents(1050));
        assert_eq!(" 2.25 ".parse::<Money>().unwrap(), Money::from_cents(225));
        assert_eq!("0.333".parse::<Money>().unwrap().amount(), dec("0.333"));
        assert_eq!("0.285".parse::<Money>().unwrap().amount(), dec("0.285"));
    }

    #[test]
    fn test_parse_float_syntax() {
        assert_eq!("1e3".parse::<Money>().unwrap(), Money::from_cents(100_000));
        assert_eq!("2.5E-1".parse::<Money>().unwrap(), Money::from_cents(25));
        assert_eq!("+1.5".parse::<Money>().unwrap(), Money::from_cents(150));
        assert_eq!("-0".parse::<Money>().unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("-1.00".parse::<Money>().is_err());
        assert!("-1e2".parse::<Money>().is_err());
        assert!("$1.00".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("nan".parse::<Money>().is_err());
        assert!("inf".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_caps_price() {
        assert!("1000000000000".parse::<Money>().is_ok());
        assert!(matches!(
            "1000000000000.01".parse::<Money>(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!("1e20".parse::<Money>().is_err());
    }

    #[test]
    fn test_largest_line_does_not_overflow() {
        let price = Money::from_decimal(Decimal::from(MAX_UNIT_PRICE));
        let line = price.multiply_quantity(u32::MAX);
        let total = line + line + line.calculate_tax(TaxRate::from_bps(10_000));
        assert!(total > line);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3u32).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_tax_is_not_rounded() {
        let tax = Money::from_cents(2000).calculate_tax(TaxRate::from_bps(700));
        assert_eq!(tax.cents(), 140);

        let tax = Money::from_cents(50).calculate_tax(TaxRate::from_bps(700));
        assert_eq!(tax.amount(), dec("0.035"));
    }

    #[test]
    fn test_percentage_discount() {
        let discounted = Money::from_cents(10000).apply_percentage_discount(1000);
        assert_eq!(discounted.cents(), 9000);

        let discounted = Money::from_cents(5).apply_percentage_discount(1000);
        assert_eq!(discounted.amount(), dec("0.045"));
    }
}
