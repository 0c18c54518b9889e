//! # Commands Module
//!
//! One file per subcommand. Each `run` returns the text to print, so the
//! dispatcher in `lib.rs` owns stdout.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, output helper)
//! ├── words.rs    ◄─── Amount in words
//! ├── area.rs     ◄─── Area units, R-A-P-D / B-K-D, plot totals
//! ├── geo.rs      ◄─── Single coordinate and CSV batch
//! └── emi.rs      ◄─── Installment, schedule, CSV export
//! ```
//!
//! ## Output Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Args + CliConfig ──► shaswi-core ──► report (Serialize)                │
//! │                                            │                            │
//! │                           --json? ─────────┼────────── no               │
//! │                              │                          │               │
//! │                              ▼                          ▼               │
//! │                     serde_json pretty          human-readable text      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::CliResult;

pub mod area;
pub mod emi;
pub mod geo;
pub mod words;

/// Formats a report as pretty JSON or through `text`.
pub fn render<T, F>(report: &T, json: bool, text: F) -> CliResult<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(text(report))
    }
}
