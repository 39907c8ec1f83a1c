//! # Cart Summary
//!
//! A serializable snapshot of a priced cart, printed as JSON by
//! `caddie --summary json` after the order is confirmed.
//!
//! ```json
//! {
//!   "generated_at": "2026-10-19T10:00:00Z",
//!   "region": "UT",
//!   "tax_rate": 685,
//!   "lines": [
//!     { "product": "Produit A", "unit_price": "1000", "quantity": 1,
//!       "gross": "1000", "discount_rate": 300, "total": "1036.445" }
//!   ],
//!   "total": "6111.820"
//! }
//! ```
//!
//! Amounts are exact decimal strings, so parsing a summary back yields the
//! same products, prices and quantities that were rendered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::money::Money;
use crate::pricing::PricingBreakdown;
use crate::types::{DiscountRate, Product, Quantity, Region, TaxRate};

/// One cart line as it appears in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub product: String,
    pub unit_price: Money,
    pub quantity: Quantity,
    pub gross: Money,
    pub discount_rate: DiscountRate,
    /// Discounted amount plus tax, unrounded.
    pub total: Money,
}

impl SummaryLine {
    /// Rebuilds the cart line this summary line was rendered from.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            &Product::new(self.product.clone(), self.unit_price),
            self.quantity,
        )
    }
}

/// Snapshot of a priced cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub generated_at: DateTime<Utc>,
    pub region: Region,
    pub tax_rate: TaxRate,
    pub lines: Vec<SummaryLine>,
    pub total: Money,
}

impl CartSummary {
    /// Pairs cart lines with their pricing.
    ///
    /// `breakdown` must come from pricing this same cart; lines are matched
    /// by position.
    pub fn new(cart: &Cart, breakdown: &PricingBreakdown, generated_at: DateTime<Utc>) -> Self {
        let lines = cart
            .items()
            .iter()
            .zip(&breakdown.lines)
            .map(|(item, priced)| SummaryLine {
                product: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                gross: priced.gross,
                discount_rate: priced.discount_rate,
                total: priced.total,
            })
            .collect();

        CartSummary {
            generated_at,
            region: breakdown.region,
            tax_rate: breakdown.tax_rate,
            lines,
            total: breakdown.total(),
        }
    }

    /// Rebuilds the cart the summary describes.
    pub fn to_cart(&self) -> Cart {
        self.lines.iter().map(SummaryLine::to_cart_item).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, DiscountSchedule};
    use crate::pricing::price_cart;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
    }

    fn summarize(cart: &Cart, region: Region) -> CartSummary {
        let breakdown = price_cart(cart, region, &DiscountSchedule::standard());
        CartSummary::new(cart, &breakdown, fixed_time())
    }

    #[test]
    fn test_summary_fields() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(1).unwrap(), Quantity::new(1).unwrap());
        cart.add_item(catalog.get(2).unwrap(), Quantity::new(1).unwrap());

        let summary = summarize(&cart, Region::Utah);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].product, "Produit A");
        assert_eq!(summary.lines[1].discount_rate, DiscountRate::from_percent(5));
        assert_eq!(summary.total.to_fixed(), "6111.82");
        assert_eq!(summary.tax_rate, TaxRate::from_bps(685));
    }

    #[test]
    fn test_json_uses_region_code_and_exact_amounts() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(1).unwrap(), Quantity::new(1).unwrap());

        let json = summarize(&cart, Region::Utah).to_json().unwrap();
        assert!(json.contains("\"region\": \"UT\""));
        assert!(json.contains("1036.445"));
    }

    #[test]
    fn test_from_json_rejects_zero_quantity() {
        let json = r#"{
            "generated_at": "2026-10-19T10:00:00Z",
            "region": "TX",
            "tax_rate": 625,
            "lines": [{"product": "Produit A", "unit_price": "1000", "quantity": 0,
                       "gross": "0", "discount_rate": 0, "total": "0"}],
            "total": "0"
        }"#;
        assert!(CartSummary::from_json(json).is_err());
    }

    proptest! {
        /// Property: rendering a summary and parsing it back reproduces the
        /// cart line for line.
        #[test]
        fn json_round_trip_reproduces_cart(
            lines in prop::collection::vec((1usize..=5, 1u32..=10_000), 0..10),
            region in prop::sample::select(Region::ALL.to_vec()),
        ) {
            let catalog = Catalog::standard();
            let mut cart = Cart::new();
            for (number, units) in lines {
                cart.add_item(catalog.get(number).unwrap(), Quantity::new(units).unwrap());
            }

            let summary = summarize(&cart, region);
            let parsed = CartSummary::from_json(&summary.to_json().unwrap()).unwrap();

            prop_assert_eq!(&parsed, &summary);
            prop_assert_eq!(parsed.to_cart(), cart);
        }
    }
}
