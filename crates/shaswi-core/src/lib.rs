//! # shaswi-core: Numeral Words and Mixed-Radix Conversion
//!
//! This crate holds every conversion rule used by the `shaswi` tools as
//! pure functions. Nothing in here touches the file system or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShaSWi Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shaswi CLI (apps/cli)                        │   │
//! │  │    words ──► area ──► geo ──► geo-batch ──► emi                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shaswi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   words   │  │   radix   │  │   area    │  │    geo    │  │   │
//! │  │   │ Intl/Lakh │  │ decompose │  │ 11 units  │  │ DD ⇄ DMS  │  │   │
//! │  │   │  grouping │  │  compose  │  │ R-A-P-D   │  │  batch    │  │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │         │              └──────────────┴──────────────┘        │   │
//! │  │   ┌─────▼─────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │  amount   │  │    emi    │  │ validation│                  │   │
//! │  │   │ currency  │  │ schedule  │  │   rules   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO FILE I/O • NO TERMINAL • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`words`] - Integer to English words, International or South Asian grouping
//! - [`radix`] - Generic mixed-radix decompose/compose
//! - [`area`] - Land area units, Ropani-Aana-Paisa-Daam and Bigha-Kattha-Dhur
//! - [`amount`] - Currency amounts in words
//! - [`geo`] - Decimal degrees and DMS, plus CSV row resolution
//! - [`emi`] - Loan installment and amortization schedule
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shaswi_core::{to_words, GroupingSystem};
//! use shaswi_core::area::{AreaConversion, CompositeSystem};
//!
//! let words = to_words(1_234_567, GroupingSystem::SouthAsian).unwrap();
//! assert_eq!(words, "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven");
//!
//! let plot = AreaConversion::from_composite("1-0-0-0", CompositeSystem::Mountain).unwrap();
//! assert_eq!(plot.base(), 5476.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod area;
pub mod emi;
pub mod error;
pub mod geo;
pub mod radix;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::{AmountWords, CaseStyle, Magnitude, Region};
pub use area::{AreaConversion, AreaLedger, AreaUnit, CompositeSystem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use geo::Coordinate;
pub use radix::{CompositeUnit, Decomposition, MixedRadix};
pub use words::{to_words, to_words_signed, GroupingSystem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest integer an IEEE-754 double represents exactly (2^53 − 1).
///
/// Integer parts above this are rejected by [`to_words`] and by
/// [`amount::Magnitude`].
pub const MAX_EXACT_INTEGER: u64 = 9_007_199_254_740_991;
