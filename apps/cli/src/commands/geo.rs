//! # Geo Commands
//!
//! `shaswi geo <TEXT>` converts a single point, `shaswi geo-batch <IN.csv>`
//! converts every row of a spreadsheet export.
//!
//! ## Batch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IN.csv ──► csv::Reader ──► BatchRow per record ──► process_rows       │
//! │                                                          │              │
//! │                       input columns + output columns ◄──┘              │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                      csv::Writer ──► OUT.csv or stdout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{Read, Write};

use csv::{ReaderBuilder, Writer};
use shaswi_core::geo::batch::{output_headers, process_rows, BatchRow, BatchSummary};
use shaswi_core::geo::{parse_coordinate, CoordinateReport};
use tracing::info;

use super::render;
use crate::cli::{GeoArgs, GeoBatchArgs};
use crate::error::{CliError, CliResult};

// =============================================================================
// Single Coordinate
// =============================================================================

pub fn run(args: &GeoArgs, json: bool) -> CliResult<String> {
    let text = args.text.join(" ");
    let report = parse_coordinate(&text)?.report()?;
    render(&report, json, format_report)
}

fn format_report(report: &CoordinateReport) -> String {
    format!(
        "Decimal  {}\nDMS      {}\nMap      {}",
        report.decimal, report.dms, report.maps_link
    )
}

// =============================================================================
// Batch
// =============================================================================

/// Converts a CSV file. With `--output` the CSV goes to the file and the
/// summary is returned; otherwise the CSV itself is returned for stdout.
pub fn run_batch(args: &GeoBatchArgs, json: bool) -> CliResult<String> {
    let input = File::open(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;

    match &args.output {
        Some(path) => {
            let summary = convert_csv(input, File::create(path)?)?;
            info!(output = %path.display(), rows = summary.total(), "batch written");
            render(&summary, json, |s| {
                format!(
                    "{} rows: {} converted, {} invalid, {} unresolved -> {}",
                    s.total(),
                    s.converted,
                    s.invalid,
                    s.unresolved,
                    path.display()
                )
            })
        }
        None => {
            let mut buffer = Vec::new();
            convert_csv(input, &mut buffer)?;
            String::from_utf8(buffer)
                .map_err(|err| CliError::InvalidInput(format!("output is not UTF-8: {err}")))
        }
    }
}

/// Reads rows from `input`, resolves them and writes the widened table to
/// `output`. Input cells are written back unchanged.
pub fn convert_csv<R: Read, W: Write>(input: R, output: W) -> CliResult<BatchSummary> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(BatchRow::from_record(headers.iter().cloned(), record.iter()));
    }

    if rows.is_empty() {
        return Err(CliError::InvalidInput("the CSV file has no data rows".to_string()));
    }

    let summary = process_rows(&mut rows);
    let columns = output_headers(&headers, &rows);

    let mut writer = Writer::from_writer(output);
    writer.write_record(&columns)?;
    for row in &rows {
        writer.write_record(columns.iter().map(|column| row.raw(column).unwrap_or("")))?;
    }
    writer.flush()?;

    Ok(summary)
}
