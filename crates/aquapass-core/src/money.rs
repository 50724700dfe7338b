//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A tariff walk sums one amount per hour segment; an overnight stay      │
//! │  accumulates dozens of additions. Float drift would show up directly    │
//! │  on the visitor's receipt.                                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Grosze                                           │
//! │    Rates are whole złoty, billed hours are integers, so every           │
//! │    intermediate value is exact. Two-decimal precision holds by          │
//! │    construction - there is nothing left to round at the end.            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aquapass_core::money::Money;
//!
//! // Create from grosze (preferred)
//! let rate = Money::from_cents(1400); // 14.00 zł
//!
//! // Arithmetic operations
//! let two_hours = rate * 2;                    // 28.00 zł
//! let total = two_hours + Money::from_cents(1000); // 38.00 zł
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (grosze).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON export
///
/// Every amount in the system flows through this type: tariff rates,
/// segment charges, ledger rows and report totals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from grosze (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use aquapass_core::money::Money;
    ///
    /// let rate = Money::from_cents(1099); // Represents 10.99 zł
    /// assert_eq!(rate.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole złoty.
    ///
    /// ## Example
    /// ```rust
    /// use aquapass_core::money::Money;
    ///
    /// let day_rate = Money::from_zloty(10); // 10.00 zł
    /// assert_eq!(day_rate.cents(), 1000);
    /// ```
    #[inline]
    pub const fn from_zloty(zloty: i64) -> Self {
        Money(zloty * 100)
    }

    /// Returns the value in grosze (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (złoty) portion.
    #[inline]
    pub const fn zloty(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (grosze) portion (always 0-99).
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
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for receipts and logs. Frontends should format from `cents()`
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} zł", sign, self.zloty().abs(), self.cents_part())
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

/// Addition assignment (+=), used by the tariff segment walk.
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

/// Multiplication by i64 (rate × billed hours).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, hours: i64) -> Self {
        Money(self.0 * hours)
    }
}

/// Summation over an iterator of amounts (report totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
