//! # Error Types
//!
//! Domain-specific error types for shaswi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shaswi-core errors (this file)                                        │
//! │  ├── CoreError        - Argument / configuration failures              │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is local and synchronous. The core keeps no state, so an
//! error never leaves anything half-updated.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core conversion errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A magnitude was negative, non-finite or out of the representable range.
    ///
    /// ## When This Occurs
    /// - `to_words` called with a value at or above 2^53
    /// - `decompose` called with a negative or NaN base value
    /// - A loan with a zero principal, rate or tenure
    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// A unit list cannot be used for mixed-radix conversion.
    ///
    /// Raised when the converter is built, never at call time.
    #[error("Invalid unit configuration: {0}")]
    InvalidConfiguration(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidArgument`].
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any conversion runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g. unparsable number, bad DMS string).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
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
    fn test_error_messages() {
        let err = CoreError::invalid_argument("base", "must not be negative");
        assert_eq!(err.to_string(), "Invalid argument base: must not be negative");

        let err = CoreError::InvalidConfiguration("unit 'daam' has zero weight".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid unit configuration: unit 'daam' has zero weight"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::OutOfRange {
            field: "latitude".to_string(),
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(err.to_string(), "latitude must be between -90 and 90");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotFinite {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
