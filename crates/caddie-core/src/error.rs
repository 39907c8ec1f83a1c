//! # Error Types
//!
//! Domain-specific error types for caddie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caddie-core errors (this file)                                        │
//! │  ├── CoreError        - Rate table / schedule construction failures    │
//! │  └── ValidationError  - Rejected console input                         │
//! │                                                                         │
//! │  caddie-cli errors (separate crate)                                    │
//! │  └── CliError         - I/O, closed input, configuration               │
//! │                                                                         │
//! │  ValidationError never leaves its prompt loop: the message is shown   │
//! │  and the question is asked again.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Language
//! `ValidationError` messages are shown verbatim to the shopper, so they are
//! written in French like the rest of the console output.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Two discount tiers share the same threshold.
    #[error("Duplicate discount threshold: {threshold}")]
    DuplicateThreshold { threshold: String },

    /// A higher threshold grants a smaller discount than a lower one.
    ///
    /// ## Why This Is Rejected
    /// ```text
    /// ≥ 5000 → 10%
    /// ≥ 7000 →  7%   ← buying more would lower the discount
    /// ```
    #[error("Discount at threshold {threshold} ({rate_bps} bps) is lower than a smaller tier")]
    NonMonotonicDiscount { threshold: String, rate_bps: u32 },

    /// Discount above 100%.
    #[error("Discount rate {rate_bps} bps exceeds 10000 bps (100%)")]
    RateOutOfRange { rate_bps: u32 },

    /// Discount tier threshold is below zero.
    #[error("Discount threshold must not be negative: {threshold}")]
    NegativeThreshold { threshold: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// One variant per question the session asks. The `Display` text is the
/// line printed before re-prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Product number is not an integer or not in `1..=max`.
    #[error("Choix invalide, veuillez entrer un numéro valide.")]
    InvalidProductChoice { input: String, max: usize },

    /// Quantity is not a positive integer.
    #[error("Quantité invalide, veuillez entrer un nombre positif.")]
    InvalidQuantity { input: String },

    /// Quantity is a positive integer beyond what a cart line can hold.
    #[error("Quantité trop grande, le maximum est {max}.")]
    QuantityTooLarge { input: String, max: u32 },

    /// Region code is not in the tax table.
    #[error("État non valide, veuillez entrer un état valide.")]
    UnknownRegion { code: String },

    /// Answer is neither yes nor no.
    #[error("Réponse invalide, veuillez répondre par y ou n.")]
    InvalidAnswer { input: String },
}

impl ValidationError {
    /// Name of the field that failed, for structured logging.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidProductChoice { .. } => "product",
            ValidationError::InvalidQuantity { .. } | ValidationError::QuantityTooLarge { .. } => {
                "quantity"
            }
            ValidationError::UnknownRegion { .. } => "region",
            ValidationError::InvalidAnswer { .. } => "answer",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::UnknownRegion {
            code: "ZZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "État non valide, veuillez entrer un état valide."
        );

        let err = ValidationError::InvalidQuantity {
            input: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Quantité invalide, veuillez entrer un nombre positif."
        );
    }

    #[test]
    fn test_field_names() {
        let err = ValidationError::InvalidProductChoice {
            input: "9".to_string(),
            max: 5,
        };
        assert_eq!(err.field(), "product");
        assert_eq!(
            ValidationError::InvalidAnswer { input: "x".into() }.field(),
            "answer"
        );
    }

    #[test]
    fn test_quantity_too_large_message() {
        let err = ValidationError::QuantityTooLarge {
            input: "5000000000".to_string(),
            max: u32::MAX,
        };
        assert_eq!(err.field(), "quantity");
        assert_eq!(
            err.to_string(),
            "Quantité trop grande, le maximum est 4294967295."
        );
    }
}
