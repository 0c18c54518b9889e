//! # Mixed-Radix Module
//!
//! Converts between a flat base magnitude and a sequence of components at
//! decreasing, unequal-weight units.
//!
//! ## How Decomposition Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base = 14663.2734375 sq ft, units R/A/P/D                              │
//! │                                                                         │
//! │  Ropani  5476       floor(14663.27 / 5476)   = 2   rem 3711.27         │
//! │  Aana    342.25     floor(3711.27 / 342.25)  = 10  rem 288.77          │
//! │  Paisa   85.5625    floor(288.77 / 85.5625)  = 3   rem 32.09           │
//! │  Daam    21.390625  32.09 / 21.390625        = 1.5 (NOT floored)       │
//! │                                                                         │
//! │  → "2-10-3-1.5"                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every unit but the last is a whole count; the last unit carries the
//! continuous remainder. Components keep full `f64` precision and only the
//! textual form rounds the last one.
//!
//! ## Usage
//! ```rust
//! use shaswi_core::radix::{CompositeUnit, MixedRadix};
//!
//! let hms = MixedRadix::new(vec![
//!     CompositeUnit::new("hour", 3600.0),
//!     CompositeUnit::new("minute", 60.0),
//!     CompositeUnit::new("second", 1.0),
//! ])
//! .unwrap();
//!
//! let parts = hms.decompose(3725.5).unwrap();
//! assert_eq!(parts.to_string(), "1-2-5.5");
//! assert_eq!(hms.compose(&parts.values()).unwrap(), 3725.5);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Decimal places used for the last component unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 3;

// =============================================================================
// Composite Unit
// =============================================================================

/// One unit of a mixed-radix system, weighted in the system's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeUnit {
    /// Display name ("Ropani", "minute").
    pub name: String,

    /// How many base units one of this unit is worth.
    pub weight: f64,
}

impl CompositeUnit {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        CompositeUnit {
            name: name.into(),
            weight,
        }
    }
}

// =============================================================================
// Decomposition
// =============================================================================

/// A single named component of a decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Component {
    pub name: String,
    pub value: f64,
}

/// Result of [`MixedRadix::decompose`], most significant unit first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decomposition {
    pub components: Vec<Component>,

    /// Decimal places shown for the last component.
    pub precision: usize,
}

impl Decomposition {
    /// Raw component values in unit order.
    pub fn values(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.value).collect()
    }

    /// The last component rounded to the display precision.
    pub fn rounded_last(&self) -> f64 {
        let last = self.components.last().map_or(0.0, |c| c.value);
        round_to(last, self.precision)
    }
}

/// Dash-joined form: whole counts, then the last value with trailing zeros
/// dropped ("2-10-3-1.5", "0-0-0-0").
impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, leading)) = self.components.split_last() else {
            return Ok(());
        };

        for component in leading {
            write!(f, "{}-", component.value)?;
        }

        write!(f, "{}", format_trimmed(last.value, self.precision))
    }
}

// =============================================================================
// Mixed-Radix Converter
// =============================================================================

/// A validated mixed-radix unit system.
///
/// ## Invariants
/// - At least one unit
/// - Every weight is finite and strictly positive
/// - Weights strictly decrease
///
/// These are checked once in [`MixedRadix::new`], so `decompose` never
/// divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedRadix {
    units: Vec<CompositeUnit>,
    precision: usize,
}

impl MixedRadix {
    /// Builds a converter, rejecting unusable unit lists.
    ///
    /// ## Example
    /// ```rust
    /// use shaswi_core::radix::{CompositeUnit, MixedRadix};
    /// use shaswi_core::CoreError;
    ///
    /// let err = MixedRadix::new(vec![
    ///     CompositeUnit::new("bigha", 72900.0),
    ///     CompositeUnit::new("kattha", 0.0),
    /// ])
    /// .unwrap_err();
    /// assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    /// ```
    pub fn new(units: Vec<CompositeUnit>) -> CoreResult<Self> {
        if units.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "at least one unit is required".to_string(),
            ));
        }

        for unit in &units {
            if !unit.weight.is_finite() || unit.weight <= 0.0 {
                return Err(CoreError::InvalidConfiguration(format!(
                    "unit '{}' has weight {}, expected a finite positive number",
                    unit.name, unit.weight
                )));
            }
        }

        if let Some(pair) = units.windows(2).find(|w| w[0].weight <= w[1].weight) {
            return Err(CoreError::InvalidConfiguration(format!(
                "unit '{}' ({}) must weigh more than '{}' ({})",
                pair[0].name, pair[0].weight, pair[1].name, pair[1].weight
            )));
        }

        Ok(MixedRadix {
            units,
            precision: DEFAULT_PRECISION,
        })
    }

    /// Sets the decimal places shown for the last component.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn units(&self) -> &[CompositeUnit] {
        &self.units
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Splits a base magnitude into components.
    ///
    /// Intermediate units are floored to whole counts; the last unit keeps
    /// the fractional remainder. Negative and non-finite bases are rejected.
    pub fn decompose(&self, base: f64) -> CoreResult<Decomposition> {
        if !base.is_finite() {
            return Err(CoreError::invalid_argument("base", "must be a finite number"));
        }
        if base < 0.0 {
            return Err(CoreError::invalid_argument("base", "must not be negative"));
        }

        let mut remaining = base;
        let mut components = Vec::with_capacity(self.units.len());
        let last = self.units.len() - 1;

        for (index, unit) in self.units.iter().enumerate() {
            let value = if index == last {
                remaining / unit.weight
            } else {
                let count = (remaining / unit.weight).floor();
                // A quotient rounded up to the next integer leaves a remainder
                // one ulp below zero; it is clamped rather than carried.
                remaining = (remaining - count * unit.weight).max(0.0);
                count
            };

            components.push(Component {
                name: unit.name.clone(),
                value,
            });
        }

        Ok(Decomposition {
            components,
            precision: self.precision,
        })
    }

    /// Recombines components into a base magnitude.
    ///
    /// Missing trailing components count as zero. Supplying more components
    /// than units, or a non-finite component, is an error.
    pub fn compose(&self, components: &[f64]) -> CoreResult<f64> {
        if components.len() > self.units.len() {
            return Err(CoreError::invalid_argument(
                "components",
                format!(
                    "expected at most {} components, got {}",
                    self.units.len(),
                    components.len()
                ),
            ));
        }

        if let Some(bad) = components.iter().find(|c| !c.is_finite()) {
            return Err(CoreError::invalid_argument(
                "components",
                format!("{bad} is not a finite number"),
            ));
        }

        Ok(components
            .iter()
            .zip(&self.units)
            .map(|(value, unit)| value * unit.weight)
            .sum())
    }

    /// Parses composite text ("2-10-3-1.5") and composes it.
    pub fn compose_text(&self, text: &str) -> CoreResult<f64> {
        self.compose(&parse_components(text))
    }

    /// Flat value of `base` expressed entirely in the unit at `index`.
    pub fn value_in(&self, base: f64, index: usize) -> Option<f64> {
        self.units.get(index).map(|unit| base / unit.weight)
    }
}

// =============================================================================
// Text Helpers
// =============================================================================

/// Splits composite text on dashes, commas and whitespace.
///
/// Runs of separators count as one. Pieces that are not numbers count as 0,
/// so half-typed input like `"2-x-3"` still composes.
///
/// ```rust
/// use shaswi_core::radix::parse_components;
///
/// assert_eq!(parse_components("2-10-3-1.5"), vec![2.0, 10.0, 3.0, 1.5]);
/// assert_eq!(parse_components(" 1, 2  3"), vec![1.0, 2.0, 3.0]);
/// assert_eq!(parse_components("4-?-1"), vec![4.0, 0.0, 1.0]);
/// assert!(parse_components("").is_empty());
/// ```
pub fn parse_components(text: &str) -> Vec<f64> {
    text.split(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .unwrap_or(0.0)
        })
        .collect()
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Fixed-precision formatting with trailing zeros removed.
///
/// ```rust
/// use shaswi_core::radix::format_trimmed;
///
/// assert_eq!(format_trimmed(1.5, 3), "1.5");
/// assert_eq!(format_trimmed(2.0, 3), "2");
/// assert_eq!(format_trimmed(0.12345, 3), "0.123");
/// assert_eq!(format_trimmed(-0.0001, 3), "0");
/// ```
pub fn format_trimmed(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rapd() -> MixedRadix {
        MixedRadix::new(vec![
            CompositeUnit::new("Ropani", 5476.0),
            CompositeUnit::new("Aana", 342.25),
            CompositeUnit::new("Paisa", 85.5625),
            CompositeUnit::new("Daam", 21.390625),
        ])
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compose_then_decompose() {
        let radix = rapd();
        let base = radix.compose(&[2.0, 10.0, 3.0, 1.5]).unwrap();
        assert_eq!(base, 14663.2734375);

        let parts = radix.decompose(base).unwrap();
        let values = parts.values();
        assert_eq!(&values[..3], &[2.0, 10.0, 3.0]);
        assert_close(values[3], 1.5, 1e-9);
        assert_eq!(parts.rounded_last(), 1.5);
        assert_eq!(parts.to_string(), "2-10-3-1.5");
    }

    #[test]
    fn test_decompose_names_follow_units() {
        let parts = rapd().decompose(5476.0).unwrap();
        let names: Vec<_> = parts.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ropani", "Aana", "Paisa", "Daam"]);
        assert_eq!(parts.to_string(), "1-0-0-0");
    }

    #[test]
    fn test_last_unit_is_not_floored() {
        let parts = rapd().decompose(10.0).unwrap();
        assert_eq!(&parts.values()[..3], &[0.0, 0.0, 0.0]);
        assert_close(parts.values()[3], 10.0 / 21.390625, 1e-12);
        assert_eq!(parts.to_string(), "0-0-0-0.467");
    }

    #[test]
    fn test_zero_base() {
        let parts = rapd().decompose(0.0).unwrap();
        assert_eq!(parts.values(), vec![0.0, 0.0, 0.0, 0.0]);
        assert_eq!(parts.to_string(), "0-0-0-0");
    }

    #[test]
    fn test_invalid_configuration() {
        let zero = MixedRadix::new(vec![
            CompositeUnit::new("Ropani", 5476.0),
            CompositeUnit::new("Daam", 0.0),
        ]);
        assert!(matches!(zero, Err(CoreError::InvalidConfiguration(_))));

        let increasing = MixedRadix::new(vec![
            CompositeUnit::new("Aana", 342.25),
            CompositeUnit::new("Ropani", 5476.0),
        ]);
        assert!(matches!(increasing, Err(CoreError::InvalidConfiguration(_))));

        let nan = MixedRadix::new(vec![CompositeUnit::new("x", f64::NAN)]);
        assert!(matches!(nan, Err(CoreError::InvalidConfiguration(_))));

        assert!(matches!(
            MixedRadix::new(Vec::new()),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_base() {
        let radix = rapd();
        assert!(matches!(
            radix.decompose(-1.0),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!(radix.decompose(f64::NAN).is_err());
        assert!(radix.decompose(f64::INFINITY).is_err());
    }

    #[test]
    fn test_compose_missing_and_surplus_components() {
        let radix = rapd();
        assert_eq!(radix.compose(&[1.0]).unwrap(), 5476.0);
        assert_eq!(radix.compose(&[]).unwrap(), 0.0);
        assert!(radix.compose(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
        assert!(radix.compose(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_compose_text() {
        let radix = rapd();
        assert_eq!(radix.compose_text("2-10-3-1.5").unwrap(), 14663.2734375);
        assert_eq!(radix.compose_text("0 4").unwrap(), 4.0 * 342.25);
        assert_eq!(radix.compose_text("").unwrap(), 0.0);
    }

    #[test]
    fn test_value_in_agrees_with_top_unit() {
        let radix = rapd();
        let base = 3.0 * 5476.0;
        assert_eq!(radix.value_in(base, 0), Some(3.0));
        assert_eq!(radix.value_in(base, 1), Some(48.0));
        assert_eq!(radix.value_in(base, 9), None);
        assert_eq!(radix.decompose(base).unwrap().values()[0], 3.0);
    }

    #[test]
    fn test_round_trip_sweep() {
        let radix = rapd();
        let mut base = 0.0;
        while base < 10_000_000.0 {
            let parts = radix.decompose(base).unwrap();
            let back = radix.compose(&parts.values()).unwrap();
            assert_close(back, base, 1e-3);
            base += 1234.5677;
        }

        // Fine-grained window around one Ropani.
        for step in 0..20_000 {
            let base = 5470.0 + step as f64 * 0.0001;
            let back = radix.compose(&radix.decompose(base).unwrap().values()).unwrap();
            assert_close(back, base, 1e-3);
        }
    }

    #[test]
    fn test_precision_setting() {
        let radix = rapd().with_precision(1);
        assert_eq!(radix.precision(), 1);
        assert_eq!(radix.decompose(10.0).unwrap().to_string(), "0-0-0-0.5");
    }

    proptest! {
        #[test]
        fn prop_weighted_sum_equals_base(base in 0.0f64..10_000_000.0) {
            let radix = rapd();
            let parts = radix.decompose(base).unwrap();
            let sum: f64 = parts
                .values()
                .iter()
                .zip(radix.units())
                .map(|(value, unit)| value * unit.weight)
                .sum();
            prop_assert!((sum - base).abs() <= 1e-6, "sum {} base {}", sum, base);
            prop_assert!(parts.values().iter().all(|v| *v >= 0.0));
        }

        #[test]
        fn prop_normalized_components_round_trip(
            ropani in 0u32..2000,
            aana in 0u32..16,
            paisa in 0u32..4,
            daam_milli in 0u32..4000,
        ) {
            let radix = rapd();
            let input = [
                f64::from(ropani),
                f64::from(aana),
                f64::from(paisa),
                f64::from(daam_milli) / 1000.0,
            ];
            let parts = radix.decompose(radix.compose(&input).unwrap()).unwrap();
            let values = parts.values();
            prop_assert_eq!(&values[..3], &input[..3]);
            prop_assert!((values[3] - input[3]).abs() <= 1e-6);
            prop_assert_eq!(parts.rounded_last(), input[3]);
        }
    }
}
