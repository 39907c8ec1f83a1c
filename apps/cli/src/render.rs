//! # Table Rendering
//!
//! Box-drawn text tables for the catalog, the tax table and the cart.
//!
//! ```text
//! ┌─────┬─────────────────────────┬───────────────┐
//! │ #   │ Produit                 │ Prix (€)      │
//! ├─────┼─────────────────────────┼───────────────┤
//! │ 1   │ Produit A               │ 1000.00       │
//! └─────┴─────────────────────────┴───────────────┘
//! ```
//!
//! Layout is delegated to `comfy_table`. Column widths are fixed and include
//! one space of padding on each side; longer text wraps inside its column.

use caddie_core::{Cart, Catalog, Region};
use comfy_table::{ColumnConstraint, ContentArrangement, Table, Width};

/// Solid outer border and header rule, no rules between body rows.
const BOX_PRESET: &str = "││──├─┼┤│    ┬┴┌┐└┘";

/// Builds an empty table with fixed-width columns.
///
/// `columns` are (header, total width) pairs.
fn boxed(columns: &[(&str, u16)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(BOX_PRESET)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(columns.iter().map(|(header, _)| *header).collect::<Vec<_>>())
        .set_constraints(
            columns
                .iter()
                .map(|(_, width)| ColumnConstraint::Absolute(Width::Fixed(*width))),
        );
    table
}

// =============================================================================
// Views
// =============================================================================

/// Numbered product list.
pub fn products_table(catalog: &Catalog) -> Table {
    let mut table = boxed(&[("#", 5), ("Produit", 25), ("Prix (€)", 15)]);
    for (number, product) in catalog.numbered() {
        table.add_row(vec![number.to_string(), product.name.clone(), product.price.to_fixed()]);
    }
    table
}

/// Region codes with their sales tax percentage.
pub fn regions_table() -> Table {
    let mut table = boxed(&[("État", 15), ("Taxe (%)", 15)]);
    for region in Region::ALL {
        table.add_row(vec![
            region.code().to_string(),
            region.tax_rate().percentage().to_string(),
        ]);
    }
    table
}

/// Cart lines with their gross (pre-discount, pre-tax) amount.
pub fn cart_table(cart: &Cart) -> Table {
    let mut table = boxed(&[("Produit", 25), ("Quantité", 15), ("Prix HT (€)", 20)]);
    for item in cart.items() {
        table.add_row(vec![
            item.product.name.clone(),
            item.quantity.to_string(),
            item.gross().to_fixed(),
        ]);
    }
    table
}
