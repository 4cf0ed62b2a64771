//! # Error Types
//!
//! Domain-specific error types for verdant-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Where Errors Can Happen                         │
//! │                                                                         │
//! │  Construction boundary (this crate)                                     │
//! │  ├── Money::from_str    - malformed price strings ("$abc")              │
//! │  └── Product::new       - empty name, negative price                    │
//! │                                                                         │
//! │  Cart mutations (cart.rs, store crate)                                  │
//! │  └── NONE. add/update/remove are total functions; mutating an          │
//! │      absent name is a silent no-op, never an error.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Bad data is rejected at construction, before it can reach a total

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when data handed in by the UI doesn't meet
/// requirements. They are raised at construction time so that malformed
/// values (a price that parses to nothing, an unnamed product) can never
/// sit inside a cart and poison the totals.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price string that is not a decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");

        let err = ValidationError::InvalidFormat {
            field: "cost".to_string(),
            reason: "not a decimal amount".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cost has invalid format: not a decimal amount"
        );
    }
}
