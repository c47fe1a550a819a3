//! # Error Types
//!
//! Domain error types for sunup-core.
//!
//! Cart and pricing operations are total and never fail; the only errors a
//! pure-logic caller can hit are validation failures on operator input
//! (an item editor submitting an empty name or a negative price). Store
//! errors live in `sunup-store`.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// Raised by [`crate::validation`] before an edited item is handed to the
/// catalog store. Store mutations themselves are total and do not validate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A populated price field is negative.
    #[error("{field} must not be negative (got {value})")]
    NegativePrice { field: String, value: i64 },

    /// A flavor entry is blank.
    #[error("flavor #{position} is blank")]
    BlankFlavor { position: usize },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NegativePrice {
            field: "price_small".to_string(),
            value: -5,
        };
        assert_eq!(err.to_string(), "price_small must not be negative (got -5)");

        let err = ValidationError::BlankFlavor { position: 2 };
        assert_eq!(err.to_string(), "flavor #2 is blank");
    }
}
