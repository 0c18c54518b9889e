//! # Area Module
//!
//! Area units used in Nepal and their conversions, all through a single
//! base unit (square feet).
//!
//! ## Unit Systems
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STANDARD            MOUNTAIN (R-A-P-D)         TERAI (B-K-D)           │
//! │  ─────────────       ──────────────────         ─────────────           │
//! │  Sq. Feet     1      Ropani  5476               Bigha   72900           │
//! │  Sq. Meter  10.76    Aana    342.25   (÷16)     Kattha  3645   (÷20)    │
//! │  Acre      43560     Paisa   85.5625  (÷4)      Dhur    182.25 (÷20)    │
//! │  Hectare  107639     Daam    21.390625 (÷4)                             │
//! │                                                                         │
//! │  Every field = BaseValue / factor. No unit ever feeds another unit.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shaswi_core::area::{AreaConversion, AreaUnit, CompositeSystem};
//!
//! let plot = AreaConversion::from_unit(1.0, AreaUnit::Ropani).unwrap();
//! assert_eq!(plot.value(AreaUnit::Aana), 16.0);
//! assert_eq!(plot.composite(CompositeSystem::Mountain).unwrap().to_string(), "1-0-0-0");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::radix::{format_trimmed, CompositeUnit, Decomposition, MixedRadix};
use crate::validation::validate_magnitude;

// =============================================================================
// Area Unit
// =============================================================================

/// Every supported area unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AreaUnit {
    SqFeet,
    SqMeter,
    Acre,
    Hectare,
    Ropani,
    Aana,
    Paisa,
    Daam,
    Bigha,
    Kattha,
    Dhur,
}

impl AreaUnit {
    /// All units in display order.
    pub const ALL: [AreaUnit; 11] = [
        AreaUnit::SqFeet,
        AreaUnit::SqMeter,
        AreaUnit::Acre,
        AreaUnit::Hectare,
        AreaUnit::Ropani,
        AreaUnit::Aana,
        AreaUnit::Paisa,
        AreaUnit::Daam,
        AreaUnit::Bigha,
        AreaUnit::Kattha,
        AreaUnit::Dhur,
    ];

    /// Square feet per one of this unit.
    pub const fn factor(&self) -> f64 {
        match self {
            AreaUnit::SqFeet => 1.0,
            AreaUnit::SqMeter => 10.76391042,
            AreaUnit::Acre => 43560.0,
            AreaUnit::Hectare => 107639.1042,
            AreaUnit::Ropani => 5476.0,
            AreaUnit::Aana => 342.25,
            AreaUnit::Paisa => 85.5625,
            AreaUnit::Daam => 21.390625,
            AreaUnit::Bigha => 72900.0,
            AreaUnit::Kattha => 3645.0,
            AreaUnit::Dhur => 182.25,
        }
    }

    /// Machine key, as used in form fields and on the command line.
    pub const fn key(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "sq_feet",
            AreaUnit::SqMeter => "sq_meter",
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
            AreaUnit::Ropani => "ropani",
            AreaUnit::Aana => "aana",
            AreaUnit::Paisa => "paisa",
            AreaUnit::Daam => "daam",
            AreaUnit::Bigha => "bigha",
            AreaUnit::Kattha => "kattha",
            AreaUnit::Dhur => "dhur",
        }
    }

    /// Human label.
    pub const fn label(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "Sq. Feet",
            AreaUnit::SqMeter => "Sq. Meter",
            AreaUnit::Acre => "Acre",
            AreaUnit::Hectare => "Hectare",
            AreaUnit::Ropani => "Ropani",
            AreaUnit::Aana => "Aana",
            AreaUnit::Paisa => "Paisa",
            AreaUnit::Daam => "Daam",
            AreaUnit::Bigha => "Bigha",
            AreaUnit::Kattha => "Kattha",
            AreaUnit::Dhur => "Dhur",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AreaUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' ', '.'], "_");
        let key = match key.as_str() {
            "sqft" | "sq__feet" | "ft2" => "sq_feet",
            "sqm" | "sq__meter" | "m2" => "sq_meter",
            other => other,
        }
        .to_string();

        AreaUnit::ALL
            .into_iter()
            .find(|unit| unit.key() == key)
            .ok_or_else(|| CoreError::invalid_argument("unit", format!("unknown area unit '{s}'")))
    }
}

/// Converts a value in `unit` to square feet.
pub fn to_base(value: f64, unit: AreaUnit) -> f64 {
    value * unit.factor()
}

/// Converts square feet to `unit`.
pub fn from_base(base: f64, unit: AreaUnit) -> f64 {
    base / unit.factor()
}

/// Field formatting: six decimals with trailing zeros dropped, and blank for
/// anything smaller than a millionth.
///
/// ```rust
/// use shaswi_core::area::display_value;
///
/// assert_eq!(display_value(16.0), "16");
/// assert_eq!(display_value(0.0000001), "");
/// assert_eq!(display_value(1.0 / 3.0), "0.333333");
/// ```
pub fn display_value(value: f64) -> String {
    if value.abs() < 0.000_001 {
        return String::new();
    }
    format_trimmed(value, 6)
}

// =============================================================================
// Composite Systems
// =============================================================================

static MOUNTAIN: Lazy<MixedRadix> = Lazy::new(|| {
    MixedRadix::new(
        [AreaUnit::Ropani, AreaUnit::Aana, AreaUnit::Paisa, AreaUnit::Daam]
            .into_iter()
            .map(|unit| CompositeUnit::new(unit.label(), unit.factor()))
            .collect(),
    )
    .expect("ropani/aana/paisa/daam weights are strictly decreasing")
});

static TERAI: Lazy<MixedRadix> = Lazy::new(|| {
    MixedRadix::new(
        [AreaUnit::Bigha, AreaUnit::Kattha, AreaUnit::Dhur]
            .into_iter()
            .map(|unit| CompositeUnit::new(unit.label(), unit.factor()))
            .collect(),
    )
    .expect("bigha/kattha/dhur weights are strictly decreasing")
});

/// Traditional composite notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompositeSystem {
    /// Ropani-Aana-Paisa-Daam (hill districts).
    Mountain,

    /// Bigha-Kattha-Dhur (Terai plains).
    Terai,
}

impl CompositeSystem {
    /// Shared converter for this system, built once per process.
    pub fn converter(&self) -> &'static MixedRadix {
        match self {
            CompositeSystem::Mountain => &MOUNTAIN,
            CompositeSystem::Terai => &TERAI,
        }
    }

    /// Short notation label ("R-A-P-D").
    pub const fn notation(&self) -> &'static str {
        match self {
            CompositeSystem::Mountain => "R-A-P-D",
            CompositeSystem::Terai => "B-K-D",
        }
    }
}

impl FromStr for CompositeSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mountain" | "hill" | "rapd" | "r-a-p-d" => Ok(CompositeSystem::Mountain),
            "terai" | "bkd" | "b-k-d" => Ok(CompositeSystem::Terai),
            other => Err(CoreError::invalid_argument(
                "system",
                format!("unknown composite system '{other}'"),
            )),
        }
    }
}

// =============================================================================
// Area Conversion
// =============================================================================

/// One unit's value in a conversion report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitValue {
    pub unit: AreaUnit,
    pub label: String,
    pub value: f64,
}

/// Everything a conversion card displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AreaReport {
    /// Square feet.
    pub base: f64,
    pub values: Vec<UnitValue>,
    pub mountain: String,
    pub terai: String,
}

/// A single area, held as its base value in square feet.
///
/// Whatever field the user edits, only the base value is stored, and
/// every displayed unit is recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaConversion {
    base: f64,
}

impl AreaConversion {
    pub fn from_base(base: f64) -> CoreResult<Self> {
        validate_magnitude("area", base)?;
        Ok(AreaConversion { base })
    }

    /// An area typed into one unit's field.
    pub fn from_unit(value: f64, unit: AreaUnit) -> CoreResult<Self> {
        validate_magnitude(unit.key(), value)?;
        Self::from_base(to_base(value, unit))
    }

    /// An area typed as composite text ("2-10-3-1.5" or "1-5-10").
    pub fn from_composite(text: &str, system: CompositeSystem) -> CoreResult<Self> {
        let base = system.converter().compose_text(text)?;
        Self::from_base(base)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn value(&self, unit: AreaUnit) -> f64 {
        from_base(self.base, unit)
    }

    /// Values for every unit, in display order.
    pub fn values(&self) -> Vec<UnitValue> {
        AreaUnit::ALL
            .into_iter()
            .map(|unit| UnitValue {
                unit,
                label: unit.label().to_string(),
                value: self.value(unit),
            })
            .collect()
    }

    pub fn composite(&self, system: CompositeSystem) -> CoreResult<Decomposition> {
        system.converter().decompose(self.base)
    }

    pub fn report(&self) -> CoreResult<AreaReport> {
        Ok(AreaReport {
            base: self.base,
            values: self.values(),
            mountain: self.composite(CompositeSystem::Mountain)?.to_string(),
            terai: self.composite(CompositeSystem::Terai)?.to_string(),
        })
    }
}

// =============================================================================
// Area Ledger
// =============================================================================

/// Several conversion cards summed into one total.
///
/// ## User Workflow
/// ```text
/// [Card 1: 2-10-3-1.5]   [Card 2: 1 Bigha]   [+ Add]
///          │                    │
///          └────────┬───────────┘
///                   ▼
///        Summary: total in every unit + R-A-P-D + B-K-D
/// ```
#[derive(Debug, Clone, Default)]
pub struct AreaLedger {
    cards: Vec<(u64, AreaConversion)>,
    next_id: u64,
}

impl AreaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty card and returns its id.
    pub fn add_card(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.cards.push((id, AreaConversion { base: 0.0 }));
        debug!(card = id, cards = self.cards.len(), "area card added");
        id
    }

    /// Replaces a card's area. Returns `false` for an unknown id.
    pub fn set(&mut self, id: u64, area: AreaConversion) -> bool {
        match self.cards.iter_mut().find(|(card, _)| *card == id) {
            Some((_, slot)) => {
                *slot = area;
                debug!(card = id, base = area.base(), "area card updated");
                true
            }
            None => false,
        }
    }

    /// Removes a card. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|(card, _)| *card != id);
        let removed = self.cards.len() != before;
        if removed {
            debug!(card = id, cards = self.cards.len(), "area card removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_base(&self) -> f64 {
        self.cards.iter().map(|(_, area)| area.base()).sum()
    }

    /// Report for the summed total.
    pub fn summary(&self) -> CoreResult<AreaReport> {
        AreaConversion::from_base(self.total_base())?.report()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
