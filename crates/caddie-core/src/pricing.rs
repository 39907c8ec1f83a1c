//! # Pricing
//!
//! Turns a cart and a region into the amount the shopper pays.
//!
//! ## Per-Line Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Produit A × 1, region UT (6.85%)                                       │
//! │                                                                         │
//! │  gross      = 1 × 1000            = 1000                                │
//! │  rate       = tier ≥ 1000         = 3%                                  │
//! │  discounted = 1000 × (1 − 0.03)   = 970                                 │
//! │  tax        = 970 × 0.0685        = 66.445                              │
//! │  line total = 970 + 66.445        = 1036.445                            │
//! │                                                                         │
//! │  cart total = Σ line totals, rounded only when displayed                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount tier is chosen from each line's own gross amount, never from
//! the cart total. Everything here is pure: same cart, same region, same
//! schedule, same answer.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::catalog::DiscountSchedule;
use crate::money::Money;
use crate::types::{DiscountRate, Region, TaxRate};

/// Every intermediate amount for one cart line. None are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePricing {
    pub gross: Money,
    pub discount_rate: DiscountRate,
    pub discounted: Money,
    pub tax: Money,
    /// Discounted amount plus tax.
    pub total: Money,
}

impl LinePricing {
    /// Amount taken off by the discount.
    pub fn discount(&self) -> Money {
        self.gross - self.discounted
    }
}

/// Prices a single line.
pub fn price_line(item: &CartItem, region: Region, schedule: &DiscountSchedule) -> LinePricing {
    let gross = item.gross();
    let discount_rate = schedule.rate_for(gross);
    let discounted = gross.apply_discount(discount_rate);
    let tax = discounted.calculate_tax(region.tax_rate());

    LinePricing {
        gross,
        discount_rate,
        discounted,
        tax,
        total: discounted + tax,
    }
}

/// Priced cart: per-line detail plus cart-level sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub region: Region,
    pub tax_rate: TaxRate,
    /// One entry per cart line, same order.
    pub lines: Vec<LinePricing>,
}

impl PricingBreakdown {
    pub fn gross_subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.gross).sum()
    }

    pub fn discount_total(&self) -> Money {
        self.lines.iter().map(LinePricing::discount).sum()
    }

    pub fn tax_total(&self) -> Money {
        self.lines.iter().map(|l| l.tax).sum()
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.total).sum()
    }
}

/// Prices every line of the cart.
pub fn price_cart(cart: &Cart, region: Region, schedule: &DiscountSchedule) -> PricingBreakdown {
    PricingBreakdown {
        region,
        tax_rate: region.tax_rate(),
        lines: cart
            .items()
            .iter()
            .map(|item| price_line(item, region, schedule))
            .collect(),
    }
}

/// The amount due for the cart in `region`: discounted lines plus tax.
///
/// ## Example
/// ```rust
/// use caddie_core::{Cart, Catalog, DiscountSchedule, Quantity, Region};
/// use caddie_core::pricing::calculate_total;
///
/// let catalog = Catalog::standard();
/// let mut cart = Cart::new();
/// cart.add_item(catalog.get(3).unwrap(), Quantity::new(1).unwrap());
///
/// // 7000 − 7% = 6510, + 4% tax = 6770.40
/// let total = calculate_total(&cart, Region::Alabama, &DiscountSchedule::standard());
/// assert_eq!(total.to_fixed(), "6770.40");
/// ```
pub fn calculate_total(cart: &Cart, region: Region, schedule: &DiscountSchedule) -> Money {
    price_cart(cart, region, schedule).total()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::Quantity;
    use rust_decimal::Decimal;

    fn qty(units: u32) -> Quantity {
        Quantity::new(units).unwrap()
    }

    fn cart_of(lines: &[(usize, u32)]) -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for &(number, units) in lines {
            cart.add_item(catalog.get(number).unwrap(), qty(units));
        }
        cart
    }

    #[test]
    fn test_utah_scenario() {
        let cart = cart_of(&[(1, 1), (2, 1)]);
        let breakdown = price_cart(&cart, Region::Utah, &DiscountSchedule::standard());

        let first = breakdown.lines[0];
        assert_eq!(first.gross, Money::from_major(1000));
        assert_eq!(first.discount_rate, DiscountRate::from_percent(3));
        assert_eq!(first.discounted, Money::from_major(970));
        assert_eq!(first.tax.amount(), Decimal::new(66445, 3));
        assert_eq!(first.total.amount(), Decimal::new(1_036_445, 3));

        let second = breakdown.lines[1];
        assert_eq!(second.discount_rate, DiscountRate::from_percent(5));
        assert_eq!(second.discounted, Money::from_major(4750));
        assert_eq!(second.tax.amount(), Decimal::new(325_375, 3));
        assert_eq!(second.total.amount(), Decimal::new(5_075_375, 3));

        assert_eq!(breakdown.total().amount(), Decimal::new(611_182, 2));
        assert_eq!(breakdown.total().to_string(), "6111.82 €");
    }

    #[test]
    fn test_discount_uses_line_gross_not_cart_total() {
        // Two lines of 600 each: cart gross is 1200 but no line reaches 1000.
        let cheap = crate::types::Product::new("Produit X", Money::from_major(600));
        let mut cart = Cart::new();
        cart.add_item(&cheap, qty(1));
        cart.add_item(&cheap, qty(1));

        let breakdown = price_cart(&cart, Region::Texas, &DiscountSchedule::standard());
        assert!(breakdown.lines.iter().all(|l| l.discount_rate.is_zero()));
        assert_eq!(breakdown.discount_total(), Money::zero());
    }

    #[test]
    fn test_quantity_moves_line_into_higher_tier() {
        // 2 × 5000 = 10000 → 10%, not 5%.
        let cart = cart_of(&[(2, 2)]);
        let line = price_cart(&cart, Region::Nevada, &DiscountSchedule::standard()).lines[0];
        assert_eq!(line.discount_rate, DiscountRate::from_percent(10));
        assert_eq!(line.discounted, Money::from_major(9000));
        assert_eq!(line.tax, Money::from_major(720));
    }

    #[test]
    fn test_breakdown_sums() {
        let cart = cart_of(&[(1, 1), (2, 1)]);
        let b = price_cart(&cart, Region::Utah, &DiscountSchedule::standard());

        assert_eq!(b.gross_subtotal(), Money::from_major(6000));
        assert_eq!(b.discount_total(), Money::from_major(280));
        assert_eq!(b.tax_total().amount(), Decimal::new(39182, 2));
        assert_eq!(
            b.total(),
            b.gross_subtotal() - b.discount_total() + b.tax_total()
        );
        assert_eq!(b.tax_rate, TaxRate::from_bps(685));
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let total = calculate_total(&Cart::new(), Region::California, &DiscountSchedule::standard());
        assert!(total.is_zero());
    }

    #[test]
    fn test_no_schedule_means_tax_only() {
        let cart = cart_of(&[(4, 1)]);
        let total = calculate_total(&cart, Region::California, &DiscountSchedule::empty());
        assert_eq!(total.to_fixed(), "10825.00");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn region() -> impl Strategy<Value = Region> {
            prop::sample::select(Region::ALL.to_vec())
        }

        fn lines() -> impl Strategy<Value = Vec<(usize, u32)>> {
            prop::collection::vec((1usize..=5, 1u32..=500), 0..12)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the total is never negative and equals the sum of
            /// non-negative line contributions.
            #[test]
            fn total_is_sum_of_non_negative_lines(lines in lines(), region in region()) {
                let cart = cart_of(&lines);
                let breakdown = price_cart(&cart, region, &DiscountSchedule::standard());

                prop_assert!(breakdown.lines.iter().all(|l| !l.total.is_negative()));
                let summed: Money = breakdown.lines.iter().map(|l| l.total).sum();
                prop_assert_eq!(summed, breakdown.total());
                prop_assert!(!breakdown.total().is_negative());
                prop_assert_eq!(
                    calculate_total(&cart, region, &DiscountSchedule::standard()),
                    breakdown.total()
                );
            }

            /// Property: a larger gross amount never gets a smaller discount.
            #[test]
            fn discount_rate_is_monotonic(a in 0i64..10_000_000, b in 0i64..10_000_000) {
                let schedule = DiscountSchedule::standard();
                let (low, high) = if a <= b { (a, b) } else { (b, a) };
                let low_rate = schedule.rate_for(Money::from_cents(low));
                let high_rate = schedule.rate_for(Money::from_cents(high));
                prop_assert!(low_rate <= high_rate);
            }
        }
    }
}
