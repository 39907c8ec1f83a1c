//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING PROBLEM                                                   │
//! │                                                                         │
//! │  Binary floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  Integer cents round every step:                                        │
//! │    970.00 × 6.85% = 66.445 → 66.45 (per line)                           │
//! │    two lines rounded separately drift by a cent from the exact total   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, rounded only for display                │
//! │    1036.445 + 5075.375 = 6111.820 → "6111.82 €"                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use caddie_core::money::Money;
//!
//! let price = Money::from_major(1000);       // 1000 €
//! let cents = Money::from_cents(1099);       // 10.99 €
//! let total = price + cents;
//! assert_eq!(total.to_string(), "1010.99 €");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::types::{DiscountRate, Quantity, TaxRate};
use crate::CURRENCY_SUFFIX;

/// Number of decimal places shown to the shopper.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Basis points in one whole (100%).
const BPS_PER_UNIT: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major currency units (euros), held exactly.
///
/// ## Design Decisions
/// - **Decimal, not cents**: tax on a discounted line is routinely a
///   fraction of a cent, and the total must not be rounded line by line
/// - **Single field tuple struct**: zero-cost wrapper
/// - **Serialized as a string**: `"1036.445"` survives a JSON round trip
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► gross (× quantity) ──► discounted ──► + tax ──► total
///                                                                   │
///                                               Displayed as "6111.82 €"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(5000).to_string(), "5000.00 €");
    /// ```
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Creates a Money value from cents (hundredths of a unit).
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price, Money::from_major(10) + Money::from_cents(99));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an already computed decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies a unit price by a quantity (the gross line amount).
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    /// use caddie_core::types::Quantity;
    ///
    /// let unit_price = Money::from_major(7000);
    /// let gross = unit_price.multiply_quantity(Quantity::new(3).unwrap());
    /// assert_eq!(gross, Money::from_major(21000));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: Quantity) -> Self {
        Money(self.0 * Decimal::from(qty.get()))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// `amount × (1 − rate/100)`, computed exactly.
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    /// use caddie_core::types::DiscountRate;
    ///
    /// let gross = Money::from_major(1000);
    /// let discounted = gross.apply_discount(DiscountRate::from_bps(300)); // 3%
    /// assert_eq!(discounted, Money::from_major(970));
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let kept_bps = (BPS_PER_UNIT - i64::from(rate.bps())).max(0);
        Money(self.0 * Decimal::new(kept_bps, 4))
    }

    /// Calculates the tax owed on this amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    /// use caddie_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let discounted = Money::from_major(970);
    /// let tax = discounted.calculate_tax(TaxRate::from_bps(685)); // 6.85%
    /// assert_eq!(tax.amount(), Decimal::new(66445, 3)); // 66.445
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * Decimal::new(i64::from(rate.bps()), 4))
    }

    /// Rounds to two decimals, halves away from zero.
    ///
    /// Only used at the display boundary; arithmetic always works on the
    /// exact value.
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Formats the amount with exactly two decimals and no currency suffix.
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1000).to_fixed(), "1000.00");
    /// assert_eq!(Money::from_cents(1_036_445).to_fixed(), "10364.45");
    /// ```
    pub fn to_fixed(&self) -> String {
        let mut value = self.rounded().0;
        value.rescale(DISPLAY_DECIMALS);
        value.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to two decimals with the currency suffix.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_fixed(), CURRENCY_SUFFIX)
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
