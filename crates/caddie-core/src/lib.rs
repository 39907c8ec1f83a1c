//! # caddie-core: Pure Business Logic for Caddie
//!
//! Everything the shopping-cart calculator knows about products, taxes,
//! discounts and totals lives here, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caddie Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    caddie (apps/cli)                            │   │
//! │  │   Catalog table ──► Add items ──► Region ──► Total ──► Confirm  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caddie-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  types  │ │ catalog │ │  cart   │ │ pricing │ │validation│ │   │
//! │  │   │ Region  │ │Products │ │CartItem │ │ totals  │ │ parsers  │ │   │
//! │  │   │ TaxRate │ │Discounts│ │  Cart   │ │breakdown│ │          │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO ENVIRONMENT • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` type
//! - [`types`] - `Region`, `TaxRate`, `DiscountRate`, `Quantity`, `Product`
//! - [`catalog`] - The product catalog and the discount schedule
//! - [`cart`] - Append-only cart of line items
//! - [`pricing`] - Discount and tax calculation
//! - [`validation`] - Raw text → constrained types
//! - [`summary`] - Serializable snapshot of a priced cart
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use caddie_core::{Cart, Catalog, DiscountSchedule, Quantity, Region};
//! use caddie_core::pricing::calculate_total;
//!
//! let catalog = Catalog::standard();
//! let schedule = DiscountSchedule::standard();
//!
//! let mut cart = Cart::new();
//! cart.add_item(catalog.get(1).unwrap(), Quantity::new(1).unwrap());
//! cart.add_item(catalog.get(2).unwrap(), Quantity::new(1).unwrap());
//!
//! let total = calculate_total(&cart, Region::Utah, &schedule);
//! assert_eq!(total.to_string(), "6111.82 €");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, DiscountSchedule, DiscountTier};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{LinePricing, PricingBreakdown};
pub use summary::CartSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency suffix printed after every displayed amount.
pub const CURRENCY_SUFFIX: &str = "€";
