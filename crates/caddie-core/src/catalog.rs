//! # Catalog & Rate Tables
//!
//! The static data the calculator runs on: five products and the
//! quantity-threshold discount schedule. (The sales tax table is the
//! [`Region`](crate::types::Region) enum itself.)
//!
//! ## Discount Lookup
//! ```text
//! gross = 7000 €
//!
//!   ≥ 50000 → 15%   ✗
//!   ≥ 10000 → 10%   ✗
//!   ≥  7000 →  7%   ✓  ← first match wins
//!   ≥  5000 →  5%
//!   ≥  1000 →  3%
//!
//!   below every threshold → 0%
//! ```
//!
//! The schedule is kept sorted by descending threshold no matter what order
//! tiers were supplied in, so the first match is always the highest
//! threshold that does not exceed the gross amount.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountRate, Product};

/// Largest rate a tier may grant (100%).
const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// Product Catalog
// =============================================================================

/// The products on offer, selected by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The shop's fixed catalog.
    pub fn standard() -> Self {
        Catalog::new(vec![
            Product::new("Produit A", Money::from_major(1000)),
            Product::new("Produit B", Money::from_major(5000)),
            Product::new("Produit C", Money::from_major(7000)),
            Product::new("Produit D", Money::from_major(10000)),
            Product::new("Produit E", Money::from_major(50000)),
        ])
    }

    /// Looks up a product by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Product> {
        number
            .checked_sub(1)
            .and_then(|index| self.products.get(index))
    }

    /// Products paired with their 1-based number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Product)> {
        self.products.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Discount Schedule
// =============================================================================

/// "Spend at least `threshold` on one line, get `rate` off that line."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Inclusive lower bound on the gross line amount.
    pub threshold: Money,
    pub rate: DiscountRate,
}

impl DiscountTier {
    pub fn new(threshold: Money, rate: DiscountRate) -> Self {
        DiscountTier { threshold, rate }
    }

    /// Whether a gross line amount qualifies for this tier.
    #[inline]
    pub fn applies_to(&self, gross: Money) -> bool {
        gross >= self.threshold
    }
}

/// Discount tiers ordered from highest to lowest threshold.
///
/// ## Invariants
/// - Thresholds are unique and non-negative
/// - Rates never exceed 100%
/// - A higher threshold never grants a lower rate, so the selected rate is
///   monotonic in the gross amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Builds a schedule from tiers in any order.
    ///
    /// ## Example
    /// ```rust
    /// use caddie_core::catalog::{DiscountSchedule, DiscountTier};
    /// use caddie_core::money::Money;
    /// use caddie_core::types::DiscountRate;
    ///
    /// let schedule = DiscountSchedule::new(vec![
    ///     DiscountTier::new(Money::from_major(100), DiscountRate::from_percent(2)),
    ///     DiscountTier::new(Money::from_major(500), DiscountRate::from_percent(4)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.rate_for(Money::from_major(600)).bps(), 400);
    /// ```
    pub fn new(mut tiers: Vec<DiscountTier>) -> CoreResult<Self> {
        for tier in &tiers {
            if tier.threshold.is_negative() {
                return Err(CoreError::NegativeThreshold {
                    threshold: tier.threshold.to_string(),
                });
            }
            if tier.rate.bps() > MAX_DISCOUNT_BPS {
                return Err(CoreError::RateOutOfRange {
                    rate_bps: tier.rate.bps(),
                });
            }
        }

        tiers.sort_by(|a, b| b.threshold.cmp(&a.threshold));

        for pair in tiers.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            if higher.threshold == lower.threshold {
                return Err(CoreError::DuplicateThreshold {
                    threshold: higher.threshold.to_string(),
                });
            }
            if higher.rate < lower.rate {
                return Err(CoreError::NonMonotonicDiscount {
                    threshold: higher.threshold.to_string(),
                    rate_bps: higher.rate.bps(),
                });
            }
        }

        Ok(DiscountSchedule { tiers })
    }

    /// The shop's quantity discounts.
    pub fn standard() -> Self {
        // Declared highest threshold first; `new` would sort them the same way.
        DiscountSchedule {
            tiers: vec![
                DiscountTier::new(Money::from_major(50000), DiscountRate::from_percent(15)),
                DiscountTier::new(Money::from_major(10000), DiscountRate::from_percent(10)),
                DiscountTier::new(Money::from_major(7000), DiscountRate::from_percent(7)),
                DiscountTier::new(Money::from_major(5000), DiscountRate::from_percent(5)),
                DiscountTier::new(Money::from_major(1000), DiscountRate::from_percent(3)),
            ],
        }
    }

    /// A schedule that never discounts.
    pub fn empty() -> Self {
        DiscountSchedule { tiers: Vec::new() }
    }

    /// The tier a gross line amount falls into, if any.
    pub fn tier_for(&self, gross: Money) -> Option<&DiscountTier> {
        self.tiers.iter().find(|tier| tier.applies_to(gross))
    }

    /// The discount rate for a gross line amount; zero below every threshold.
    pub fn rate_for(&self, gross: Money) -> DiscountRate {
        self.tier_for(gross)
            .map(|tier| tier.rate)
            .unwrap_or_default()
    }

    /// Tiers, highest threshold first.
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        DiscountSchedule::standard()
    }
}

/// Deserialization goes through [`DiscountSchedule::new`] so the invariants
/// hold for schedules read from JSON too.
impl<'de> Deserialize<'de> for DiscountSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            tiers: Vec<DiscountTier>,
        }

        let raw = Raw::deserialize(deserializer)?;
        DiscountSchedule::new(raw.tiers).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
