//! # Amount Module
//!
//! Turns a currency amount into the words written on a cheque or invoice,
//! e.g. `1234.50` → "One Thousand Two Hundred Thirty Four Rupees and Fifty
//! Paisa Only".
//!
//! ## Rendering Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1234.567"                                                             │
//! │      │  Magnitude::parse                                                │
//! │      ▼                                                                  │
//! │  integer = 1234, fraction = 56   (two digits, truncated, never rounded) │
//! │      │  to_words(integer, region.grouping())                            │
//! │      ▼                                                                  │
//! │  "One Thousand Two Hundred Thirty Four" + " Rupees"                     │
//! │      │  fraction > 0                                                    │
//! │      ▼                                                                  │
//! │  + " and Fifty Six Paisa"  (+ " Only")                                  │
//! │      │  CaseStyle                                                       │
//! │      ▼                                                                  │
//! │  "ONE THOUSAND ... PAISA ONLY"                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_integer_part, validate_magnitude};
use crate::words::{to_words, GroupingSystem};

// =============================================================================
// Magnitude
// =============================================================================

/// A non-negative amount split into whole units and hundredths.
///
/// ## Invariants
/// - `integer < 2^53`
/// - `fraction` in 0..=99
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Magnitude {
    integer: u64,
    fraction: u8,
}

impl Magnitude {
    /// Builds a magnitude from its parts.
    pub fn new(integer: u64, fraction: u8) -> CoreResult<Self> {
        validate_integer_part(integer)?;
        if fraction > 99 {
            return Err(CoreError::invalid_argument(
                "fraction",
                format!("{fraction} is not a hundredth (0-99)"),
            ));
        }
        Ok(Magnitude { integer, fraction })
    }

    /// Parses user input.
    ///
    /// Plain decimals are split textually, so large integers never pass
    /// through `f64`. Anything else (`"1e3"`) goes through [`Magnitude::from_f64`].
    /// Only the first two decimals are kept; the rest are dropped.
    ///
    /// ## Example
    /// ```rust
    /// use shaswi_core::amount::Magnitude;
    ///
    /// let m = Magnitude::parse("1234.567").unwrap();
    /// assert_eq!((m.integer(), m.fraction()), (1234, 56));
    ///
    /// let m = Magnitude::parse("5.7").unwrap();
    /// assert_eq!(m.fraction(), 70);
    ///
    /// assert!(Magnitude::parse("-1").is_err());
    /// assert!(Magnitude::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> CoreResult<Self> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            }
            .into());
        }

        let (int_text, frac_text) = text.split_once('.').unwrap_or((text, ""));
        let plain = !int_text.is_empty()
            && int_text.bytes().all(|b| b.is_ascii_digit())
            && frac_text.bytes().all(|b| b.is_ascii_digit());

        if plain {
            let integer = int_text.parse::<u64>().map_err(|_| {
                CoreError::invalid_argument("amount", format!("{int_text} is too large"))
            })?;
            return Magnitude::new(integer, hundredths(frac_text));
        }

        let value = text.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{text}' is not a number"),
        })?;
        Magnitude::from_f64(value)
    }

    /// Splits a floating-point amount using its shortest decimal form.
    pub fn from_f64(value: f64) -> CoreResult<Self> {
        validate_magnitude("amount", value)?;

        // Display for f64 never uses exponent notation.
        let text = value.to_string();
        let (int_text, frac_text) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let integer = int_text.parse::<u64>().map_err(|_| {
            CoreError::invalid_argument("amount", format!("{int_text} is too large"))
        })?;

        Magnitude::new(integer, hundredths(frac_text))
    }

    pub fn integer(&self) -> u64 {
        self.integer
    }

    pub fn fraction(&self) -> u8 {
        self.fraction
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.integer, self.fraction)
    }
}

/// First two decimal digits, right-padded with zero ("5" → 50).
fn hundredths(digits: &str) -> u8 {
    let mut bytes = digits.bytes().take(2);
    let tens = bytes.next().map_or(0, |b| b - b'0');
    let ones = bytes.next().map_or(0, |b| b - b'0');
    tens * 10 + ones
}

// =============================================================================
// Region
// =============================================================================

/// Country presets: currency names and the grouping system they write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Region {
    #[default]
    Nepal,
    India,
    Usa,
    Australia,
    Canada,
    Euro,
    Uk,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Nepal,
        Region::India,
        Region::Usa,
        Region::Australia,
        Region::Canada,
        Region::Euro,
        Region::Uk,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Region::Nepal => "nepal",
            Region::India => "india",
            Region::Usa => "usa",
            Region::Australia => "australia",
            Region::Canada => "canada",
            Region::Euro => "euro",
            Region::Uk => "uk",
        }
    }

    /// ISO 4217 code.
    pub const fn currency_code(&self) -> &'static str {
        match self {
            Region::Nepal => "NPR",
            Region::India => "INR",
            Region::Usa => "USD",
            Region::Australia => "AUD",
            Region::Canada => "CAD",
            Region::Euro => "EUR",
            Region::Uk => "GBP",
        }
    }

    pub const fn currency_name(&self) -> &'static str {
        match self {
            Region::Nepal | Region::India => "Rupees",
            Region::Usa | Region::Australia | Region::Canada => "Dollars",
            Region::Euro => "Euros",
            Region::Uk => "Pounds",
        }
    }

    pub const fn minor_name(&self) -> &'static str {
        match self {
            Region::Nepal | Region::India => "Paisa",
            Region::Uk => "Pence",
            _ => "Cents",
        }
    }

    pub const fn grouping(&self) -> GroupingSystem {
        match self {
            Region::Nepal | Region::India => GroupingSystem::SouthAsian,
            _ => GroupingSystem::International,
        }
    }

    /// Label describing the number format in use.
    pub const fn badge(&self) -> &'static str {
        match self {
            Region::Nepal => "Nepali Format (Lakh/Crore)",
            Region::India => "Indian Format (Lakh/Crore)",
            Region::Usa | Region::Australia | Region::Canada => {
                "International Format (Million/Billion)"
            }
            Region::Euro => "European Format (Million/Billion)",
            Region::Uk => "UK Format (Million/Billion)",
        }
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.key() == key || region.currency_code().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "region".to_string(),
                allowed: Region::ALL.iter().map(|r| r.key().to_string()).collect(),
            })
            .map_err(CoreError::from)
    }
}

// =============================================================================
// Case Style
// =============================================================================

/// Letter case applied to the final phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CaseStyle {
    /// Leave the engine's capitalized words as they are.
    #[default]
    AsIs,
    Upper,
    Lower,
    Title,
    Sentence,
}

impl CaseStyle {
    /// Applies the style.
    ///
    /// ```rust
    /// use shaswi_core::amount::CaseStyle;
    ///
    /// assert_eq!(CaseStyle::Sentence.apply("Ten Dollars Only"), "Ten dollars only");
    /// assert_eq!(CaseStyle::Title.apply("ten DOLLARS"), "Ten Dollars");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseStyle::AsIs => text.to_string(),
            CaseStyle::Upper => text.to_uppercase(),
            CaseStyle::Lower => text.to_lowercase(),
            CaseStyle::Title => text
                .split(' ')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            CaseStyle::Sentence => capitalize(text),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "as-is" | "asis" | "none" => Ok(CaseStyle::AsIs),
            "upper" => Ok(CaseStyle::Upper),
            "lower" => Ok(CaseStyle::Lower),
            "title" => Ok(CaseStyle::Title),
            "sentence" => Ok(CaseStyle::Sentence),
            other => Err(ValidationError::NotAllowed {
                field: format!("case '{other}'"),
                allowed: ["as-is", "upper", "lower", "title", "sentence"]
                    .map(String::from)
                    .to_vec(),
            }
            .into()),
        }
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Amount Words
// =============================================================================

/// Options for rendering an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AmountWords {
    pub region: Region,
    pub case: CaseStyle,

    /// Append "Only" (common on cheques).
    pub only_suffix: bool,
}

/// Rendered amount plus the display metadata a front end shows beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AmountReport {
    pub amount: String,
    pub currency_code: String,
    pub badge: String,
    pub words: String,
}

impl AmountWords {
    pub fn new(region: Region) -> Self {
        AmountWords {
            region,
            ..Default::default()
        }
    }

    pub fn with_case(mut self, case: CaseStyle) -> Self {
        self.case = case;
        self
    }

    pub fn with_only_suffix(mut self, only: bool) -> Self {
        self.only_suffix = only;
        self
    }

    /// Renders the amount as words.
    ///
    /// ## Example
    /// ```rust
    /// use shaswi_core::amount::{AmountWords, Magnitude, Region};
    ///
    /// let words = AmountWords::new(Region::Nepal)
    ///     .with_only_suffix(true)
    ///     .render(&Magnitude::parse("1234.5").unwrap())
    ///     .unwrap();
    /// assert_eq!(
    ///     words,
    ///     "One Thousand Two Hundred Thirty Four Rupees and Fifty Paisa Only"
    /// );
    /// ```
    pub fn render(&self, amount: &Magnitude) -> CoreResult<String> {
        let grouping = self.region.grouping();

        let mut phrase = to_words(amount.integer(), grouping)?;
        phrase.push(' ');
        phrase.push_str(self.region.currency_name());

        if amount.fraction() > 0 {
            phrase.push_str(" and ");
            phrase.push_str(&to_words(u64::from(amount.fraction()), grouping)?);
            phrase.push(' ');
            phrase.push_str(self.region.minor_name());
        }

        if self.only_suffix {
            phrase.push_str(" Only");
        }

        Ok(self.case.apply(&phrase))
    }

    /// Parses and renders in one step, with display metadata.
    pub fn report(&self, text: &str) -> CoreResult<AmountReport> {
        let amount = Magnitude::parse(text)?;
        Ok(AmountReport {
            amount: amount.to_string(),
            currency_code: self.region.currency_code().to_string(),
            badge: self.region.badge().to_string(),
            words: self.render(&amount)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
