//! # Cart
//!
//! The shopper's cart: an ordered, append-only list of line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Console step             Cart call               Cart state change     │
//! │  ────────────             ─────────               ─────────────────     │
//! │                                                                         │
//! │  Pick product + qty ─────► add_item() ──────────► items.push(item)     │
//! │                                                                         │
//! │  Show cart table ────────► items() ─────────────► (read only)          │
//! │                                                                         │
//! │  Compute total ──────────► pricing::price_cart ─► (read only)          │
//! │                                                                         │
//! │  NOTE: lines are never merged, edited or removed. Picking the same     │
//! │        product twice yields two lines, each discounted on its own.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, Quantity};

/// A line in the cart.
///
/// The product is copied in when the line is created, so the line keeps the
/// name and price it was added with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product snapshot (name and unit price).
    pub product: Product,

    /// Units on this line, at least 1.
    pub quantity: Quantity,
}

impl CartItem {
    pub fn new(product: &Product, quantity: Quantity) -> Self {
        CartItem {
            product: product.clone(),
            quantity,
        }
    }

    /// Unit price × quantity, before discount and tax.
    #[inline]
    pub fn gross(&self) -> Money {
        self.product.gross(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Every line has a positive quantity (enforced by [`Quantity`])
/// - Lines keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a line and returns it.
    pub fn add_item(&mut self, product: &Product, quantity: Quantity) -> &CartItem {
        self.items.push(CartItem::new(product, quantity));
        &self.items[self.items.len() - 1]
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Sum of gross line amounts (before discount and tax).
    pub fn gross_subtotal(&self) -> Money {
        self.items.iter().map(CartItem::gross).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}
