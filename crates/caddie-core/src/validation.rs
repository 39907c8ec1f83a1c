//! # Validation Module
//!
//! Parsers from raw console text into constrained types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Prompt → Parser → Typed value                      │
//! │                                                                         │
//! │  "2"    ── parse_product_index ──► &Product   (1..=catalog.len())      │
//! │  "3"    ── parse_quantity ───────► Quantity   (≥ 1)                    │
//! │  "ut"   ── parse_region ─────────► Region     (key of the tax table)   │
//! │  "oui"  ── parse_yes_no ─────────► bool                                 │
//! │                                                                         │
//! │  Err(ValidationError) → message printed, same question asked again     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Code past the prompt only ever sees the typed value, so nothing
//! downstream re-checks ranges.
//!
//! ## Usage
//! ```rust
//! use caddie_core::validation::{parse_quantity, parse_region};
//! use caddie_core::Region;
//!
//! assert_eq!(parse_quantity("5").unwrap().get(), 5);
//! assert!(parse_quantity("0").is_err());
//! assert_eq!(parse_region("ca").unwrap(), Region::California);
//! ```

use std::num::IntErrorKind;

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::types::{Product, Quantity, Region};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product number against the catalog.
///
/// ## Rules
/// - Must be an integer (surrounding whitespace ignored)
/// - Must be between 1 and the catalog size
///
/// ## Example
/// ```rust
/// use caddie_core::validation::parse_product_index;
/// use caddie_core::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(parse_product_index(&catalog, " 1 ").unwrap().name, "Produit A");
/// assert!(parse_product_index(&catalog, "6").is_err());
/// assert!(parse_product_index(&catalog, "abc").is_err());
/// ```
pub fn parse_product_index<'c>(catalog: &'c Catalog, input: &str) -> ValidationResult<&'c Product> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| catalog.get(number))
        .ok_or_else(|| ValidationError::InvalidProductChoice {
            input: input.trim().to_string(),
            max: catalog.len(),
        })
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be an integer
/// - Must be positive (> 0); zero and negative numbers are rejected
///
/// ## User Workflow
/// ```text
/// User enters quantity: 0
///      │
///      ▼
/// parse_quantity("0") ← THIS FUNCTION
///      │
///      ├── not an integer? → "Quantité invalide, ..."
///      ├── ≤ 0?            → "Quantité invalide, ..."
///      ├── > u32::MAX?     → "Quantité trop grande, ..."
///      └── OK → line added to cart
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<Quantity> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidQuantity {
        input: trimmed.to_string(),
    };

    match trimmed.parse::<u32>() {
        Ok(value) => Quantity::new(value).ok_or_else(invalid),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(ValidationError::QuantityTooLarge {
            input: trimmed.to_string(),
            max: u32::MAX,
        }),
        Err(_) => Err(invalid()),
    }
}

/// Validates a region code; case-insensitive.
pub fn parse_region(input: &str) -> ValidationResult<Region> {
    input.parse()
}

/// Parses a yes/no answer.
///
/// ## Rules
/// - Yes: `y`, `yes`, `o`, `oui`
/// - No: `n`, `no`, `non`
/// - Case and surrounding whitespace are ignored; anything else is rejected
pub fn parse_yes_no(input: &str) -> ValidationResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "o" | "oui" => Ok(true),
        "n" | "no" | "non" => Ok(false),
        _ => Err(ValidationError::InvalidAnswer {
            input: input.trim().to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
