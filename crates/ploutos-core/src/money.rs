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
//! │    33.33 + 33.33 + 33.33 = 99.98999999999999  ❌ WRONG!                 │
//! │                                                                         │
//! │  A register closing comparing that sum against an entered 99.99        │
//! │  would refuse to close over a phantom centavo.                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Floats are rounded to centavos ONCE, at the form boundary.           │
//! │    Everything after that is exact i64 arithmetic, and equality          │
//! │    between a declared total and a computed sum is bit-identical.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ploutos_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let total = Money::from_cents(1099); // R$ 10.99
//!
//! // Or from a form-entered decimal (rounded to centavos on entry)
//! let entered = Money::from_reais(10.99);
//! assert_eq!(total, entered);
//!
//! // Arithmetic operations
//! let sum = total + Money::from_cents(500); // R$ 15.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Boundary Rounding
// =============================================================================

/// Rounds a raw decimal amount to the nearest centavo.
///
/// Defined as `round(x * 100) / 100`. This is the single primitive applied
/// to every float before it becomes a [`Money`]; repeated addition of
/// decimal fractions accumulates binary floating-point error, and the
/// register gate compares amounts for exact equality, not within an epsilon.
///
/// ## Example
/// ```rust
/// use ploutos_core::money::round_to_cents;
///
/// let drifted = 33.33_f64 + 33.33 + 33.33; // 99.98999999999999
/// assert_eq!(round_to_cents(drifted), 99.99);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for differences and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Closing form input (f64) ──► from_reais ──► Money (centavos)          │
/// │                                                                         │
/// │  EntryAmounts / ExitAmounts ──► validators ──► declared vs computed    │
/// │                                                                         │
/// │  LineItem.amount ──► Sum ──► compared against the declared total       │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ploutos_core::money::Money;
    ///
    /// let total = Money::from_cents(1099); // Represents R$ 10.99
    /// assert_eq!(total.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount in reais.
    ///
    /// The amount is rounded to the nearest centavo ([`round_to_cents`]).
    /// This is the ONLY place a float becomes a Money; after this point all
    /// comparisons are exact integer equality.
    ///
    /// Non-finite inputs collapse to zero; use [`Money::try_from_reais`] at
    /// deserialization boundaries where NaN must be rejected loudly.
    ///
    /// ## Example
    /// ```rust
    /// use ploutos_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(10.99).cents(), 1099);
    /// assert_eq!(Money::from_reais(33.33).cents(), 3333);
    /// ```
    #[inline]
    pub fn from_reais(reais: f64) -> Self {
        // `as i64` saturates and maps NaN to 0, so this cannot panic.
        Money((reais * 100.0).round() as i64)
    }

    /// Fallible float conversion for untrusted input.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidAmount`] when the input is NaN or
    /// infinite.
    pub fn try_from_reais(reais: f64) -> Result<Self, CoreError> {
        if !reais.is_finite() {
            return Err(CoreError::InvalidAmount {
                reason: format!("{} is not a finite amount", reais),
            });
        }
        Ok(Money::from_reais(reais))
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    ///
    /// ## Example
    /// ```rust
    /// use ploutos_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).reais(), 10);
    /// assert_eq!(Money::from_cents(-550).reais(), -5);
    /// ```
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a decimal amount in reais (display only).
    #[inline]
    pub fn as_reais(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Absolute difference between two amounts.
    ///
    /// This is what the reconciliation validators report on a mismatch:
    /// how far the computed sum is from the declared total, as a
    /// non-negative amount.
    ///
    /// ## Example
    /// ```rust
    /// use ploutos_core::money::Money;
    ///
    /// let declared = Money::from_cents(100_000);
    /// let computed = Money::from_cents(99_900);
    /// assert_eq!(declared.difference(computed).cents(), 100);
    /// assert_eq!(computed.difference(declared).cents(), 100);
    /// ```
    #[inline]
    pub const fn difference(&self, other: Money) -> Money {
        Money((self.0 - other.0).abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Matches the diagnostics panel convention: `R$ <value to 2 decimals>`,
/// with the sign ahead of the currency symbol for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {}.{:02}",
            sign,
            self.reais().abs(),
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

/// Multiplication by integer (for repeated amounts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of amounts, used when totaling justification lists.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
