//! # Geo Module
//!
//! Decimal-degree ↔ degree-minute-second conversion and coordinate parsing.
//!
//! ## DMS Is Mixed-Radix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  |28.2096| × 3600 = 101554.56 arc-seconds                               │
//! │                                                                         │
//! │  degree  3600   floor → 28     rem 754.56                               │
//! │  minute    60   floor → 12     rem 34.56                                │
//! │  second     1   34.56 (NOT floored, shown with 2 decimals)              │
//! │                                                                         │
//! │  → 28° 12' 34.56" N                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Working in arc-seconds keeps every weight an integer, so the same
//! [`MixedRadix`] used for land area handles angles too.

pub mod batch;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::radix::{CompositeUnit, MixedRadix};
use crate::validation::{validate_finite, validate_latitude, validate_longitude};

/// Arc-seconds per degree.
const ARC_SECONDS: f64 = 3600.0;

static ANGLE: Lazy<MixedRadix> = Lazy::new(|| {
    MixedRadix::new(vec![
        CompositeUnit::new("degree", 3600.0),
        CompositeUnit::new("minute", 60.0),
        CompositeUnit::new("second", 1.0),
    ])
    .expect("degree/minute/second weights are strictly decreasing")
    .with_precision(2)
});

// Matches: 28°11'05.1"N or 28 11 05.1 N
static DMS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\d+)[°\s]+(\d+)['\s]+([\d.]+)["\s]*([NSEW])"#)
        .expect("DMS pattern is valid")
});

/// The shared degree/minute/second converter (base unit: arc-second).
pub fn angle_converter() -> &'static MixedRadix {
    &ANGLE
}

// =============================================================================
// Axis & Hemisphere
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Axis {
    Latitude,
    Longitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Hemisphere of a signed decimal degree; zero counts as N/E.
    pub fn of(degrees: f64, axis: Axis) -> Self {
        match (axis, degrees >= 0.0) {
            (Axis::Latitude, true) => Hemisphere::N,
            (Axis::Latitude, false) => Hemisphere::S,
            (Axis::Longitude, true) => Hemisphere::E,
            (Axis::Longitude, false) => Hemisphere::W,
        }
    }

    /// South and west are negative.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::S | Hemisphere::W => -1.0,
            Hemisphere::N | Hemisphere::E => 1.0,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Hemisphere::N => "N",
            Hemisphere::S => "S",
            Hemisphere::E => "E",
            Hemisphere::W => "W",
        };
        f.write_str(letter)
    }
}

impl FromStr for Hemisphere {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Hemisphere::N),
            "S" => Ok(Hemisphere::S),
            "E" => Ok(Hemisphere::E),
            "W" => Ok(Hemisphere::W),
            other => Err(ValidationError::NotAllowed {
                field: format!("hemisphere '{other}'"),
                allowed: ["N", "S", "E", "W"].map(String::from).to_vec(),
            }
            .into()),
        }
    }
}

// =============================================================================
// DMS
// =============================================================================

/// An unsigned angle in degrees, minutes and seconds plus its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Signed decimal degrees.
    pub fn to_decimal(&self) -> f64 {
        dms_to_dd(
            f64::from(self.degrees),
            f64::from(self.minutes),
            self.seconds,
            Some(self.hemisphere),
        )
    }
}

/// `28° 12' 34.56" N`
///
/// Seconds are rounded to hundredths first and any overflow is carried into
/// minutes and degrees, so `59.999"` prints as the next whole minute.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = f64::from(self.degrees) * ARC_SECONDS
            + f64::from(self.minutes) * 60.0
            + self.seconds;
        let hundredths = (total * 100.0).round() as u64;

        write!(
            f,
            "{}° {}' {:.2}\" {}",
            hundredths / 360_000,
            hundredths / 6_000 % 60,
            (hundredths % 6_000) as f64 / 100.0,
            self.hemisphere
        )
    }
}

/// Converts signed decimal degrees to DMS.
///
/// ## Example
/// ```rust
/// use shaswi_core::geo::{dd_to_dms, Axis, Hemisphere};
///
/// let dms = dd_to_dms(-83.25, Axis::Longitude).unwrap();
/// assert_eq!((dms.degrees, dms.minutes), (83, 15));
/// assert_eq!(dms.hemisphere, Hemisphere::W);
/// assert_eq!(dms.to_string(), "83° 15' 0.00\" W");
/// ```
pub fn dd_to_dms(degrees: f64, axis: Axis) -> CoreResult<Dms> {
    validate_finite(axis_name(axis), degrees)?;

    let parts = ANGLE.decompose(degrees.abs() * ARC_SECONDS)?.values();

    Ok(Dms {
        degrees: parts[0] as u32,
        minutes: parts[1] as u32,
        seconds: parts[2],
        hemisphere: Hemisphere::of(degrees, axis),
    })
}

/// Converts DMS to signed decimal degrees.
///
/// A missing hemisphere leaves the value positive.
///
/// ```rust
/// use shaswi_core::geo::{dms_to_dd, Hemisphere};
///
/// assert_eq!(dms_to_dd(28.0, 30.0, 0.0, Some(Hemisphere::N)), 28.5);
/// assert_eq!(dms_to_dd(83.0, 15.0, 0.0, Some(Hemisphere::W)), -83.25);
/// ```
pub fn dms_to_dd(degrees: f64, minutes: f64, seconds: f64, hemisphere: Option<Hemisphere>) -> f64 {
    let value = degrees + minutes / 60.0 + seconds / ARC_SECONDS;
    value * hemisphere.map_or(1.0, |h| h.sign())
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Latitude => "latitude",
        Axis::Longitude => "longitude",
    }
}

// =============================================================================
// Coordinate
// =============================================================================

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Everything the coordinate widget shows for one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoordinateReport {
    pub decimal: String,
    pub dms: String,
    pub maps_link: String,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        validate_latitude(lat)?;
        validate_longitude(lon)?;
        Ok(Coordinate { lat, lon })
    }

    pub fn to_dms(&self) -> CoreResult<(Dms, Dms)> {
        Ok((
            dd_to_dms(self.lat, Axis::Latitude)?,
            dd_to_dms(self.lon, Axis::Longitude)?,
        ))
    }

    pub fn maps_link(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lon)
    }

    pub fn report(&self) -> CoreResult<CoordinateReport> {
        let (lat, lon) = self.to_dms()?;
        Ok(CoordinateReport {
            decimal: self.to_string(),
            dms: format!("{lat}, {lon}"),
            maps_link: self.maps_link(),
        })
    }
}

/// `28.209600, 83.985600`
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses `"lat, lon"` (comma and/or whitespace separated).
///
/// ```rust
/// use shaswi_core::geo::parse_decimal_pair;
///
/// let c = parse_decimal_pair("28.2096,  83.9856").unwrap();
/// assert_eq!((c.lat, c.lon), (28.2096, 83.9856));
/// assert!(parse_decimal_pair("28.2").is_err());
/// ```
pub fn parse_decimal_pair(text: &str) -> CoreResult<Coordinate> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() < 2 {
        return Err(ValidationError::InvalidFormat {
            field: "coordinates".to_string(),
            reason: "expected 'latitude, longitude'".to_string(),
        }
        .into());
    }

    let number = |piece: &str, field: &str| {
        piece.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{piece}' is not a number"),
        })
    };

    Coordinate::new(number(parts[0], "latitude")?, number(parts[1], "longitude")?)
}

/// Parses the first DMS angle in `text` into signed decimal degrees.
///
/// ```rust
/// use shaswi_core::geo::parse_dms;
///
/// let lat = parse_dms("28°12'34.56\"N").unwrap();
/// assert!((lat - 28.2096).abs() < 1e-9);
/// assert!(parse_dms("somewhere").is_none());
/// ```
pub fn parse_dms(text: &str) -> Option<f64> {
    DMS_PATTERN.captures(text).and_then(|caps| dms_from_captures(&caps))
}

/// Parses two DMS angles: the first is latitude, the second longitude.
pub fn parse_dms_pair(text: &str) -> CoreResult<Coordinate> {
    let angles: Vec<f64> = DMS_PATTERN
        .captures_iter(text)
        .filter_map(|caps| dms_from_captures(&caps))
        .take(2)
        .collect();

    match angles.as_slice() {
        [lat, lon] => Coordinate::new(*lat, *lon),
        _ => Err(ValidationError::InvalidFormat {
            field: "coordinates".to_string(),
            reason: "expected two DMS angles like 28°11'05.1\"N 83°59'08.2\"E".to_string(),
        }
        .into()),
    }
}

/// Accepts either notation; DMS is tried first.
pub fn parse_coordinate(text: &str) -> CoreResult<Coordinate> {
    if DMS_PATTERN.is_match(text) {
        parse_dms_pair(text)
    } else {
        parse_decimal_pair(text)
    }
}

fn dms_from_captures(caps: &regex::Captures<'_>) -> Option<f64> {
    let degrees = caps[1].parse::<f64>().ok()?;
    let minutes = caps[2].parse::<f64>().ok()?;
    let seconds = caps[3].parse::<f64>().ok()?;
    let hemisphere = caps[4].parse::<Hemisphere>().ok()?;
    Some(dms_to_dd(degrees, minutes, seconds, Some(hemisphere)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_degree() {
        let dms = dd_to_dms(28.5, Axis::Latitude).unwrap();
        assert_eq!((dms.degrees, dms.minutes), (28, 30));
        assert_eq!(dms.seconds, 0.0);
        assert_eq!(dms.to_string(), "28° 30' 0.00\" N");
    }

    #[test]
    fn test_southern_hemisphere() {
        let dms = dd_to_dms(-33.8688, Axis::Latitude).unwrap();
        assert_eq!(dms.hemisphere, Hemisphere::S);
        assert_eq!((dms.degrees, dms.minutes), (33, 52));
        assert!((dms.seconds - 7.68).abs() < 1e-6);
        assert!((dms.to_decimal() + 33.8688).abs() < 1e-9);
    }

    #[test]
    fn test_zero_is_north_and_east() {
        assert_eq!(dd_to_dms(0.0, Axis::Latitude).unwrap().hemisphere, Hemisphere::N);
        assert_eq!(dd_to_dms(0.0, Axis::Longitude).unwrap().hemisphere, Hemisphere::E);
    }

    #[test]
    fn test_display_carries_rounded_seconds() {
        let dms = dd_to_dms(28.9999999, Axis::Latitude).unwrap();
        assert_eq!((dms.degrees, dms.minutes), (28, 59));
        assert_eq!(dms.to_string(), "29° 0' 0.00\" N");

        let dms = dd_to_dms(-85.0166666, Axis::Longitude).unwrap();
        assert_eq!(dms.to_string(), "85° 1' 0.00\" W");

        let dms = dd_to_dms(27.7172, Axis::Latitude).unwrap();
        assert_eq!(dms.to_string(), "27° 43' 1.92\" N");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(dd_to_dms(f64::NAN, Axis::Latitude).is_err());
        assert!(dd_to_dms(f64::INFINITY, Axis::Longitude).is_err());
    }

    #[test]
    fn test_dms_round_trip() {
        for dd in [0.0, 1.0, 27.7172, 85.324, -45.999, 179.5, -0.25] {
            let dms = dd_to_dms(dd, Axis::Longitude).unwrap();
            assert!((dms.to_decimal() - dd).abs() < 1e-9, "{dd} → {dms}");
        }
    }

    #[test]
    fn test_parse_dms_pair() {
        let c = parse_dms_pair("28°11'05.1\"N, 83°59'08.2\"E").unwrap();
        assert!((c.lat - 28.184_75).abs() < 1e-6);
        assert!((c.lon - 83.985_611).abs() < 1e-6);

        let c = parse_dms_pair("27 42 30 s 85 19 0 w").unwrap();
        assert!(c.lat < 0.0 && c.lon < 0.0);

        assert!(parse_dms_pair("28°11'05.1\"N").is_err());
    }

    #[test]
    fn test_parse_coordinate_either_notation() {
        let decimal = parse_coordinate("28.5 83.25").unwrap();
        let dms = parse_coordinate("28°30'0\"N 83°15'0\"E").unwrap();
        assert_eq!(decimal, dms);
        assert!(parse_coordinate("95, 10").is_err());
        assert!(parse_coordinate("north, east").is_err());
    }

    #[test]
    fn test_report() {
        let report = Coordinate::new(28.5, -83.25).unwrap().report().unwrap();
        assert_eq!(report.decimal, "28.500000, -83.250000");
        assert_eq!(report.dms, "28° 30' 0.00\" N, 83° 15' 0.00\" W");
        assert_eq!(report.maps_link, "https://www.google.com/maps?q=28.5,-83.25");
    }

    #[test]
    fn test_hemisphere_parsing() {
        assert_eq!("w".parse::<Hemisphere>().unwrap(), Hemisphere::W);
        assert!("X".parse::<Hemisphere>().is_err());
    }

    #[test]
    fn test_angle_converter_shape() {
        let angle = angle_converter();
        assert_eq!(angle.precision(), 2);
        assert_eq!(angle.decompose(3661.5).unwrap().to_string(), "1-1-1.5");
    }
}
