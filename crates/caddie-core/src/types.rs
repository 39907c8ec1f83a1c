//! # Domain Types
//!
//! Core domain types used throughout Caddie.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Region      │   │    Quantity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  UT NV TX AL CA │   │  u32, never 0   │       │
//! │  │  price (Money)  │   │  → TaxRate      │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │  DiscountRate   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  bps (u32)      │                             │
//! │  │  685 = 6.85%    │   │  1500 = 15%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Rates
// =============================================================================

/// Sales tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every rate in the tax table
/// (6.85%, 8.25%, ...) is an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// Returns the rate as a percentage without trailing zeros (`8`, `6.85`).
    pub fn percentage(&self) -> Decimal {
        bps_to_percentage(self.0)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Discount rate represented in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a whole percentage (`15` → 15%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage without trailing zeros.
    pub fn percentage(&self) -> Decimal {
        bps_to_percentage(self.0)
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

fn bps_to_percentage(bps: u32) -> Decimal {
    Decimal::new(i64::from(bps), 2).normalize()
}

// =============================================================================
// Region
// =============================================================================

/// A US state from the sales tax table.
///
/// Only these five states exist; any other code is rejected at the prompt,
/// so holding a `Region` proves the code is in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "UT")]
    Utah,
    #[serde(rename = "NV")]
    Nevada,
    #[serde(rename = "TX")]
    Texas,
    #[serde(rename = "AL")]
    Alabama,
    #[serde(rename = "CA")]
    California,
}

impl Region {
    /// Every region, in the order the tax table is displayed.
    pub const ALL: [Region; 5] = [
        Region::Utah,
        Region::Nevada,
        Region::Texas,
        Region::Alabama,
        Region::California,
    ];

    /// Two-letter postal code.
    pub const fn code(&self) -> &'static str {
        match self {
            Region::Utah => "UT",
            Region::Nevada => "NV",
            Region::Texas => "TX",
            Region::Alabama => "AL",
            Region::California => "CA",
        }
    }

    /// Sales tax applied to discounted line amounts.
    pub const fn tax_rate(&self) -> TaxRate {
        match self {
            Region::Utah => TaxRate::from_bps(685),
            Region::Nevada => TaxRate::from_bps(800),
            Region::Texas => TaxRate::from_bps(625),
            Region::Alabama => TaxRate::from_bps(400),
            Region::California => TaxRate::from_bps(825),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a region code, ignoring surrounding whitespace and case.
impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Region::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or(ValidationError::UnknownRegion { code })
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// Number of units on a cart line. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Returns `None` for zero.
    #[inline]
    pub const fn new(units: u32) -> Option<Self> {
        if units == 0 {
            None
        } else {
            Some(Quantity(units))
        }
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Quantity::new(units).ok_or(ValidationError::InvalidQuantity {
            input: units.to_string(),
        })
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown in tables.
    pub name: String,

    /// Unit price, never negative.
    pub price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }

    /// Gross amount for `quantity` units (before discount and tax).
    #[inline]
    pub fn gross(&self, quantity: Quantity) -> Money {
        self.price.multiply_quantity(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
