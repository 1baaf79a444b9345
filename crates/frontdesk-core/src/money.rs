//! # Money Module
//!
//! Provides the `Money` type for room rates and fees.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  (300 + 105) * 0.12 = 48.599999999999994  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION                                                           │
//! │    Prices and fees: integer cents (Money)                               │
//! │    Tax and totals:  exact decimals, never rounded until display         │
//! │      89.99 * 0.1200 = 10.798800  ✅                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use frontdesk_core::money::Money;
//!
//! let rate = Money::from_major(150);          // $150.00 per night
//! let stay = rate.times(3);                   // $450.00
//! let total = stay + Money::from_major(25);   // + early check-in
//! assert_eq!(total.cents(), 47500);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that adjustments and refunds can be expressed, although the
/// booking flow itself only ever produces non-negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use frontdesk_core::money::Money;
    ///
    /// let fee = Money::from_cents(2500);
    /// assert_eq!(fee.dollars(), 25);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the exact decimal value in whole units.
    ///
    /// ```rust
    /// use frontdesk_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_cents(8999).to_decimal(), Decimal::new(8999, 2));
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Calculates tax at the given rate with no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use frontdesk_core::money::Money;
    /// use frontdesk_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let tax = Money::from_cents(8999).tax_at(TaxRate::from_bps(1200));
    /// assert_eq!(tax, Decimal::new(107988, 4)); // 10.7988
    /// ```
    pub fn tax_at(&self, rate: TaxRate) -> Decimal {
        self.to_decimal() * rate.as_decimal()
    }

    /// Multiplies by a count of units (nights, items).
    ///
    /// ```rust
    /// use frontdesk_core::money::Money;
    ///
    /// let nightly = Money::from_major(100);
    /// assert_eq!(nightly.times(3), Money::from_major(300));
    /// ```
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. Localized formatting belongs to the presentation
/// layer (see the app's config `format_currency`).
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

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Sum for Money {
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
    fn test_from_major_and_parts() {
        let money = Money::from_major(45);
        assert_eq!(money.cents(), 4500);
        assert_eq!(money.dollars(), 45);
        assert_eq!(money.cents_part(), 0);

        let odd = Money::from_cents(4860);
        assert_eq!(odd.dollars(), 48);
        assert_eq!(odd.cents_part(), 60);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(45360)), "$453.60");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_major(15));
    }

    #[test]
    fn test_sum() {
        let fees = [Money::from_major(25), Money::from_major(35), Money::from_major(45)];
        let total: Money = fees.iter().copied().sum();
        assert_eq!(total, Money::from_major(105));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_whole_amounts() {
        let rate = TaxRate::from_bps(1200);
        assert_eq!(Money::from_major(300).tax_at(rate), Decimal::new(36, 0));
        assert_eq!(Money::from_major(405).tax_at(rate), Decimal::new(486, 1));
    }

    #[test]
    fn test_tax_keeps_sub_cent_precision() {
        let rate = TaxRate::from_bps(1200);
        // $0.05 at 12% = 0.6 cents, kept as is
        assert_eq!(Money::from_cents(5).tax_at(rate), Decimal::new(6, 3));
        assert_eq!(Money::from_cents(8999).tax_at(rate), Decimal::new(107988, 4));
    }

    #[test]
    fn test_negative_amounts_stay_exact() {
        let rate = TaxRate::from_bps(1200);
        assert_eq!(Money::from_cents(-5).tax_at(rate), Decimal::new(-6, 3));
        assert_eq!(Money::from_cents(-550).to_decimal(), Decimal::new(-55, 1));
    }
}
