//! # Validation Module
//!
//! Input validation utilities shared by every converter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (browser form / CLI parser)                        │
//! │  ├── Type checks (is it a number at all?)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Finite / non-negative / range checks                              │
//! │  └── Field-named errors for display                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Converters                                                   │
//! │  └── Structural invariants (unit weights, 2^53 limit)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shaswi_core::validation::{validate_magnitude, validate_latitude};
//!
//! assert!(validate_magnitude("amount", 1234.5).is_ok());
//! assert!(validate_latitude(91.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_EXACT_INTEGER;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a value is a finite number.
pub fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a magnitude (amount, area, base value).
///
/// ## Rules
/// - Must be finite
/// - Must be zero or greater
///
/// ## Example
/// ```rust
/// use shaswi_core::validation::validate_magnitude;
///
/// assert!(validate_magnitude("area", 0.0).is_ok());
/// assert!(validate_magnitude("area", -1.0).is_err());
/// assert!(validate_magnitude("area", f64::NAN).is_err());
/// ```
pub fn validate_magnitude(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a strictly positive input (loan principal, rate, tenure).
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the integer part of an amount.
///
/// ## Rules
/// - Must be below 2^53 so that it stays exactly representable as `f64`
///
/// ```rust
/// use shaswi_core::validation::validate_integer_part;
///
/// assert!(validate_integer_part(9_007_199_254_740_991).is_ok());
/// assert!(validate_integer_part(9_007_199_254_740_992).is_err());
/// ```
pub fn validate_integer_part(value: u64) -> ValidationResult<()> {
    if value > MAX_EXACT_INTEGER {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0.0,
            max: MAX_EXACT_INTEGER as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Coordinate Validators
// =============================================================================

/// Validates a latitude in decimal degrees (-90..=90).
pub fn validate_latitude(lat: f64) -> ValidationResult<()> {
    validate_finite("latitude", lat)?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::OutOfRange {
            field: "latitude".to_string(),
            min: -90.0,
            max: 90.0,
        });
    }

    Ok(())
}

/// Validates a longitude in decimal degrees (-180..=180).
pub fn validate_longitude(lon: f64) -> ValidationResult<()> {
    validate_finite("longitude", lon)?;

    if !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::OutOfRange {
            field: "longitude".to_string(),
            min: -180.0,
            max: 180.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
