//! # Batch Coordinate Processing
//!
//! Resolves spreadsheet rows with loosely named columns into coordinates and
//! appends the converted forms.
//!
//! ## Resolution Strategies (first hit wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Decimal columns     Latitude / Lat,  Longitude / Lon               │
//! │  2. DMS part columns    Lat Deg, Lat Min, Lat Sec, Lat Dir  (+ Lon …)  │
//! │  3. DMS text columns    Latitude DMS = 28°11'05.1"N         (+ Lon …)  │
//! │                                                                         │
//! │  resolved ──► Latitude (DD), Longitude (DD), DMS Latitude, DMS Longitude│
//! │  NaN / out of range ──► Error = "Invalid Coordinates"                   │
//! │  nothing matched ──► Error = "Could not resolve coordinates"            │
//! │  unparsable DMS text counts as nothing matched                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The row type is I/O-free; reading and writing files is the caller's job.

use serde::Serialize;
use tracing::{debug, info};

use super::{dms_to_dd, parse_dms, Coordinate, Hemisphere};

pub const COL_LAT_DD: &str = "Latitude (DD)";
pub const COL_LON_DD: &str = "Longitude (DD)";
pub const COL_LAT_DMS: &str = "DMS Latitude";
pub const COL_LON_DMS: &str = "DMS Longitude";
pub const COL_ERROR: &str = "Error";

/// Columns this module may add, in output order.
pub const OUTPUT_COLUMNS: [&str; 5] = [COL_LAT_DD, COL_LON_DD, COL_LAT_DMS, COL_LON_DMS, COL_ERROR];

const LAT_KEYS: [&str; 4] = ["Latitude", "latitude", "Lat", "lat"];
const LON_KEYS: [&str; 4] = ["Longitude", "longitude", "Lon", "lon"];

const LAT_DEG_KEYS: [&str; 3] = ["Lat Deg", "Lat D", "LatD"];
const LAT_MIN_KEYS: [&str; 3] = ["Lat Min", "Lat M", "LatM"];
const LAT_SEC_KEYS: [&str; 3] = ["Lat Sec", "Lat S", "LatS"];
const LAT_DIR_KEYS: [&str; 2] = ["Lat Dir", "LatDir"];
const LON_DEG_KEYS: [&str; 3] = ["Lon Deg", "Lon D", "LonD"];
const LON_MIN_KEYS: [&str; 3] = ["Lon Min", "Lon M", "LonM"];
const LON_SEC_KEYS: [&str; 3] = ["Lon Sec", "Lon S", "LonS"];
const LON_DIR_KEYS: [&str; 2] = ["Lon Dir", "LonDir"];

const LAT_DMS_KEYS: [&str; 3] = ["Latitude DMS", "Lat DMS", "DMS Lat"];
const LON_DMS_KEYS: [&str; 3] = ["Longitude DMS", "Lon DMS", "DMS Lon"];

// =============================================================================
// Row
// =============================================================================

/// One spreadsheet row as ordered (column, value) pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchRow {
    fields: Vec<(String, String)>,
}

impl BatchRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        BatchRow { fields }
    }

    /// Builds a row from parallel header and value lists.
    pub fn from_record<H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        BatchRow {
            fields: headers
                .into_iter()
                .map(Into::into)
                .zip(values.into_iter().map(Into::into))
                .collect(),
        }
    }

    /// Value of `column`, or `None` when absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Value of `column` exactly as read, surrounding whitespace included.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    /// Sets a column, replacing an existing value or appending a new column.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| key == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    fn first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of processing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    Converted,
    Invalid,
    Unresolved,
}

/// Counts across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub invalid: usize,
    pub unresolved: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.invalid + self.unresolved
    }
}

/// Raw (lat, lon) for a row, before range validation. NaN marks a column
/// that was present but not numeric.
pub fn resolve(row: &BatchRow) -> Option<(f64, f64)> {
    from_decimal_columns(row)
        .or_else(|| from_dms_part_columns(row))
        .or_else(|| from_dms_text_columns(row))
}

fn from_decimal_columns(row: &BatchRow) -> Option<(f64, f64)> {
    let lat = row.first(&LAT_KEYS)?.parse::<f64>().ok()?;
    let lon = row.first(&LON_KEYS)?.parse::<f64>().ok()?;
    Some((lat, lon))
}

fn from_dms_part_columns(row: &BatchRow) -> Option<(f64, f64)> {
    let lat_deg = row.first(&LAT_DEG_KEYS)?;
    let lon_deg = row.first(&LON_DEG_KEYS)?;

    let angle = |deg: &str, min: &[&str], sec: &[&str], dir: &[&str]| {
        let number = |text: Option<&str>| text.map_or(Ok(0.0), str::parse::<f64>);
        let hemisphere = row.first(dir).and_then(|d| d.parse::<Hemisphere>().ok());
        match (deg.parse::<f64>(), number(row.first(min)), number(row.first(sec))) {
            (Ok(d), Ok(m), Ok(s)) => dms_to_dd(d, m, s, hemisphere),
            _ => f64::NAN,
        }
    };

    Some((
        angle(lat_deg, &LAT_MIN_KEYS, &LAT_SEC_KEYS, &LAT_DIR_KEYS),
        angle(lon_deg, &LON_MIN_KEYS, &LON_SEC_KEYS, &LON_DIR_KEYS),
    ))
}

/// Text the DMS parser rejects counts as no match.
fn from_dms_text_columns(row: &BatchRow) -> Option<(f64, f64)> {
    let lat = parse_dms(row.first(&LAT_DMS_KEYS)?)?;
    let lon = parse_dms(row.first(&LON_DMS_KEYS)?)?;
    Some((lat, lon))
}

/// Resolves a row and writes the output columns into it.
pub fn process_row(row: &mut BatchRow) -> RowStatus {
    let Some((lat, lon)) = resolve(row) else {
        row.set(COL_ERROR, "Could not resolve coordinates");
        return RowStatus::Unresolved;
    };

    let converted = Coordinate::new(lat, lon).and_then(|c| Ok((c, c.to_dms()?)));
    match converted {
        Ok((coordinate, (dms_lat, dms_lon))) => {
            row.set(COL_LAT_DD, format!("{:.6}", coordinate.lat));
            row.set(COL_LON_DD, format!("{:.6}", coordinate.lon));
            row.set(COL_LAT_DMS, dms_lat.to_string());
            row.set(COL_LON_DMS, dms_lon.to_string());
            RowStatus::Converted
        }
        Err(err) => {
            debug!(%err, lat, lon, "batch row has invalid coordinates");
            row.set(COL_ERROR, "Invalid Coordinates");
            RowStatus::Invalid
        }
    }
}

/// Processes every row in place.
pub fn process_rows(rows: &mut [BatchRow]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (index, row) in rows.iter_mut().enumerate() {
        let status = process_row(row);
        debug!(row = index + 1, ?status, "batch row processed");
        match status {
            RowStatus::Converted => summary.converted += 1,
            RowStatus::Invalid => summary.invalid += 1,
            RowStatus::Unresolved => summary.unresolved += 1,
        }
    }

    info!(
        converted = summary.converted,
        invalid = summary.invalid,
        unresolved = summary.unresolved,
        "batch processed"
    );
    summary
}

/// Input headers followed by whichever output columns the rows gained.
pub fn output_headers(input: &[String], rows: &[BatchRow]) -> Vec<String> {
    let mut headers = input.to_vec();
    for column in OUTPUT_COLUMNS {
        let used = rows.iter().any(|row| row.get(column).is_some());
        if used && !headers.iter().any(|h| h == column) {
            headers.push(column.to_string());
        }
    }
    headers
}

// =============================================================================
// Unit Tests
// =============================================================================
