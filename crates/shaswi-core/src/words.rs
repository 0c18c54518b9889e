//! # Number Words Module
//!
//! Renders a non-negative integer as English words under one of two
//! grouping systems.
//!
//! ## Grouping Systems
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INTERNATIONAL (groups of 3 digits)                                     │
//! │                                                                         │
//! │    1,234,567  →  One Million | Two Hundred Thirty Four Thousand |      │
//! │                  Five Hundred Sixty Seven                               │
//! │                                                                         │
//! │  SOUTH ASIAN (3 digits, then groups of 2)                               │
//! │                                                                         │
//! │    12,34,567  →  Twelve Lakh | Thirty Four Thousand |                  │
//! │                  Five Hundred Sixty Seven                               │
//! │                                                                         │
//! │    100,00,00,000 → (One Hundred) Crore                                 │
//! │                    └─ crore quotient rendered recursively              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shaswi_core::words::{to_words, GroupingSystem};
//!
//! let words = to_words(1_234_567, GroupingSystem::SouthAsian).unwrap();
//! assert_eq!(words, "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::MAX_EXACT_INTEGER;

// =============================================================================
// Word Tables
// =============================================================================

/// Words for 0..=19. Index 0 is empty: zero is never spoken inside a number.
pub static ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// Words for the tens digit. Indices 0 and 1 are unused.
pub static TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Thousand-grouping tiers, enough for every `u64`.
static INTERNATIONAL_GROUPS: [(u64, &str); 7] = [
    (1, ""),
    (THOUSAND, "Thousand"),
    (1_000_000, "Million"),
    (1_000_000_000, "Billion"),
    (1_000_000_000_000, "Trillion"),
    (1_000_000_000_000_000, "Quadrillion"),
    (1_000_000_000_000_000_000, "Quintillion"),
];

/// Lakh/crore tiers. Crore is the top tier; its quotient recurses.
static SOUTH_ASIAN_GROUPS: [(u64, &str); 4] = [
    (1, ""),
    (THOUSAND, "Thousand"),
    (LAKH, "Lakh"),
    (CRORE, "Crore"),
];

// =============================================================================
// Grouping System
// =============================================================================

/// How digits are grouped into named tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GroupingSystem {
    /// Thousand, Million, Billion, ...
    #[default]
    International,

    /// Thousand, Lakh, Crore (Nepal, India).
    SouthAsian,
}

impl GroupingSystem {
    /// Ordered (weight, name) tiers, strictly increasing, starting at 1.
    pub fn groups(&self) -> &'static [(u64, &'static str)] {
        match self {
            GroupingSystem::International => &INTERNATIONAL_GROUPS,
            GroupingSystem::SouthAsian => &SOUTH_ASIAN_GROUPS,
        }
    }
}

impl fmt::Display for GroupingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingSystem::International => write!(f, "international"),
            GroupingSystem::SouthAsian => write!(f, "south_asian"),
        }
    }
}

impl FromStr for GroupingSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "international" | "intl" => Ok(GroupingSystem::International),
            "south_asian" | "lakh_crore" | "lakh" => Ok(GroupingSystem::SouthAsian),
            other => Err(CoreError::invalid_argument(
                "grouping system",
                format!("unknown system '{other}'"),
            )),
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Converts `n` to words under the given grouping system.
///
/// Zero renders as `"Zero"`. Values at or above 2^53 are rejected so the
/// amount stays exactly representable by the callers that work in `f64`.
///
/// ## Example
/// ```rust
/// use shaswi_core::words::{to_words, GroupingSystem};
///
/// assert_eq!(to_words(0, GroupingSystem::International).unwrap(), "Zero");
/// assert_eq!(
///     to_words(1_000_000_000, GroupingSystem::SouthAsian).unwrap(),
///     "One Hundred Crore"
/// );
/// ```
pub fn to_words(n: u64, system: GroupingSystem) -> CoreResult<String> {
    if n > MAX_EXACT_INTEGER {
        return Err(CoreError::invalid_argument(
            "amount",
            format!("{n} exceeds the largest exactly representable integer"),
        ));
    }

    if n == 0 {
        return Ok("Zero".to_string());
    }

    let mut words = Vec::new();
    match system {
        GroupingSystem::International => push_international(n, &mut words),
        GroupingSystem::SouthAsian => push_south_asian(n, &mut words),
    }

    Ok(words.join(" "))
}

/// Signed entry point for callers holding an `i64`. Negative values are
/// rejected.
pub fn to_words_signed(n: i64, system: GroupingSystem) -> CoreResult<String> {
    let n = u64::try_from(n)
        .map_err(|_| CoreError::invalid_argument("amount", "must not be negative"))?;
    to_words(n, system)
}

/// Renders 0..=999. Returns an empty string for 0.
///
/// ```rust
/// use shaswi_core::words::render_under_1000;
///
/// assert_eq!(render_under_1000(0).unwrap(), "");
/// assert_eq!(render_under_1000(405).unwrap(), "Four Hundred Five");
/// assert!(render_under_1000(1000).is_err());
/// ```
pub fn render_under_1000(n: u16) -> CoreResult<String> {
    if n > 999 {
        return Err(CoreError::invalid_argument(
            "n",
            format!("{n} is not below 1000"),
        ));
    }

    let mut words = Vec::new();
    push_under_1000(u64::from(n), &mut words);
    Ok(words.join(" "))
}

// =============================================================================
// Rendering
// =============================================================================
// Every renderer pushes whole tokens; joining once with a single space is
// what keeps the output free of doubled or trailing whitespace.

fn push_under_1000(mut n: u64, words: &mut Vec<&'static str>) {
    debug_assert!(n < 1000);

    if n >= 100 {
        words.push(ONES[(n / 100) as usize]);
        words.push("Hundred");
        n %= 100;
    }

    if n >= 20 {
        words.push(TENS[(n / 10) as usize]);
        n %= 10;
    }

    if n > 0 {
        words.push(ONES[n as usize]);
    }
}

fn push_international(n: u64, words: &mut Vec<&'static str>) {
    // Least significant group first, rendered in reverse.
    let mut groups = Vec::with_capacity(INTERNATIONAL_GROUPS.len());
    let mut rest = n;
    let mut tier = 0;

    while rest > 0 {
        let group = rest % 1000;
        if group != 0 {
            groups.push((group, INTERNATIONAL_GROUPS[tier].1));
        }
        rest /= 1000;
        tier += 1;
    }

    for (group, name) in groups.into_iter().rev() {
        push_under_1000(group, words);
        if !name.is_empty() {
            words.push(name);
        }
    }
}

fn push_south_asian(n: u64, words: &mut Vec<&'static str>) {
    let Some((&(top, top_name), lower)) = SOUTH_ASIAN_GROUPS.split_last() else {
        return;
    };

    let quotient = n / top;
    let mut rest = n % top;

    if quotient > 0 {
        // The top tier has no successor, so its quotient recurses.
        // Depth is at most 3 for values below 2^53.
        push_south_asian(quotient, words);
        words.push(top_name);
    }

    for &(weight, name) in lower.iter().rev() {
        let tier = rest / weight;
        rest %= weight;
        if tier > 0 {
            push_under_1000(tier, words);
            if !name.is_empty() {
                words.push(name);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0, GroupingSystem::International).unwrap(), "Zero");
        assert_eq!(to_words(0, GroupingSystem::SouthAsian).unwrap(), "Zero");
    }

    #[test]
    fn test_international_million() {
        assert_eq!(
            to_words(1_234_567, GroupingSystem::International).unwrap(),
            "One Million Two Hundred Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn test_south_asian_lakh() {
        assert_eq!(
            to_words(1_234_567, GroupingSystem::SouthAsian).unwrap(),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn test_crore_of_crore_recurses() {
        assert_eq!(
            to_words(1_000_000_000, GroupingSystem::SouthAsian).unwrap(),
            "One Hundred Crore"
        );
        // 1,23,45,67,89,012
        assert_eq!(
            to_words(123_456_789_012, GroupingSystem::SouthAsian).unwrap(),
            "Twelve Thousand Three Hundred Forty Five Crore Sixty Seven Lakh \
             Eighty Nine Thousand Twelve"
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(
            to_words(1_000_001, GroupingSystem::International).unwrap(),
            "One Million One"
        );
        assert_eq!(
            to_words(10_000_100, GroupingSystem::SouthAsian).unwrap(),
            "One Crore One Hundred"
        );
        assert_eq!(
            to_words(5_000_000_000, GroupingSystem::International).unwrap(),
            "Five Billion"
        );
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(to_words(13, GroupingSystem::International).unwrap(), "Thirteen");
        assert_eq!(to_words(40, GroupingSystem::International).unwrap(), "Forty");
        assert_eq!(to_words(99, GroupingSystem::SouthAsian).unwrap(), "Ninety Nine");
        assert_eq!(
            to_words(110, GroupingSystem::International).unwrap(),
            "One Hundred Ten"
        );
    }

    #[test]
    fn test_largest_exact_integer() {
        // 9,007,199,254,740,991
        assert_eq!(
            to_words(MAX_EXACT_INTEGER, GroupingSystem::International).unwrap(),
            "Nine Quadrillion Seven Trillion One Hundred Ninety Nine Billion \
             Two Hundred Fifty Four Million Seven Hundred Forty Thousand \
             Nine Hundred Ninety One"
        );
        assert!(to_words(MAX_EXACT_INTEGER, GroupingSystem::SouthAsian).is_ok());
        assert!(matches!(
            to_words(MAX_EXACT_INTEGER + 1, GroupingSystem::SouthAsian),
            Err(CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            to_words_signed(-1, GroupingSystem::International),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert_eq!(
            to_words_signed(21, GroupingSystem::International).unwrap(),
            "Twenty One"
        );
    }

    #[test]
    fn test_render_under_1000_exhaustive() {
        for n in 0..1000u16 {
            let words = render_under_1000(n).unwrap();
            assert!(!words.contains("Zero"), "{n} rendered as {words:?}");
            assert!(!words.contains("  "), "{n} rendered as {words:?}");
            assert_eq!(words, words.trim());
            assert_eq!(words.is_empty(), n == 0);
        }
    }

    #[test]
    fn test_grouping_system_from_str() {
        assert_eq!(
            "lakh-crore".parse::<GroupingSystem>().unwrap(),
            GroupingSystem::SouthAsian
        );
        assert_eq!(
            "International".parse::<GroupingSystem>().unwrap(),
            GroupingSystem::International
        );
        assert!("roman".parse::<GroupingSystem>().is_err());
    }

    #[test]
    fn test_south_asian_rendering_follows_tier_table() {
        for &(weight, name) in GroupingSystem::SouthAsian.groups().iter().skip(1) {
            let words = to_words(weight, GroupingSystem::SouthAsian).unwrap();
            assert_eq!(words, format!("One {name}"));

            let words = to_words(weight * 99, GroupingSystem::SouthAsian).unwrap();
            assert_eq!(words, format!("Ninety Nine {name}"));
        }
        assert_eq!(
            to_words(CRORE * CRORE, GroupingSystem::SouthAsian).unwrap(),
            "One Crore Crore"
        );
    }

    #[test]
    fn test_group_tables_strictly_increasing() {
        for system in [GroupingSystem::International, GroupingSystem::SouthAsian] {
            let groups = system.groups();
            assert_eq!(groups[0].0, 1);
            assert!(groups.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    proptest! {
        #[test]
        fn prop_words_never_contain_zero_or_double_spaces(n in 1u64..1_000_000_000_000) {
            for system in [GroupingSystem::International, GroupingSystem::SouthAsian] {
                let words = to_words(n, system).unwrap();
                prop_assert!(!words.contains("Zero"));
                prop_assert!(!words.contains("  "));
                prop_assert_eq!(words.trim(), words.as_str());
            }
        }
    }
}
