//! # Area Command
//!
//! `shaswi area <VALUE> <UNIT>` converts one typed value.
//! `shaswi area --composite TEXT [--composite TEXT ...]` reads composite
//! notation; several plots are summed into one total.

use serde::Serialize;
use shaswi_core::area::{display_value, AreaReport};
use shaswi_core::radix::format_trimmed;
use shaswi_core::{AreaConversion, AreaLedger, CompositeSystem};
use tracing::debug;

use super::render;
use crate::cli::AreaArgs;
use crate::error::{CliError, CliResult};

/// Report plus the number of plots it covers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOutput {
    pub plots: usize,
    #[serde(flatten)]
    pub report: AreaReport,
}

pub fn run(args: &AreaArgs, json: bool) -> CliResult<String> {
    let output = match (args.value, args.unit) {
        (Some(value), Some(unit)) => AreaOutput {
            plots: 1,
            report: AreaConversion::from_unit(value, unit)?.report()?,
        },
        _ => sum_composites(&args.composite, args.system)?,
    };

    render(&output, json, format_output)
}

/// Adds each composite text as its own card and reports the total.
fn sum_composites(texts: &[String], system: CompositeSystem) -> CliResult<AreaOutput> {
    if texts.is_empty() {
        return Err(CliError::InvalidInput(
            "give VALUE UNIT or at least one --composite".to_string(),
        ));
    }

    let mut ledger = AreaLedger::new();
    for text in texts {
        let area = AreaConversion::from_composite(text, system)?;
        let card = ledger.add_card();
        ledger.set(card, area);
    }

    debug!(plots = ledger.len(), total = ledger.total_base(), "area ledger summed");

    Ok(AreaOutput {
        plots: ledger.len(),
        report: ledger.summary()?,
    })
}

fn format_output(output: &AreaOutput) -> String {
    let report = &output.report;
    let mut lines = Vec::with_capacity(report.values.len() + 3);

    if output.plots > 1 {
        lines.push(format!("Total of {} plots", output.plots));
    }

    // Totals are shown to 3 decimals, single plots like an input field
    for unit in &report.values {
        let value = if output.plots > 1 {
            format_trimmed(unit.value, 3)
        } else {
            display_value(unit.value)
        };
        lines.push(format!("{:<10} {}", unit.label, value));
    }
    lines.push(format!(
        "{:<10} {}",
        CompositeSystem::Mountain.notation(),
        report.mountain
    ));
    lines.push(format!(
        "{:<10} {}",
        CompositeSystem::Terai.notation(),
        report.terai
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaswi_core::AreaUnit;

    fn value_args(value: f64, unit: AreaUnit) -> AreaArgs {
        AreaArgs {
            value: Some(value),
            unit: Some(unit),
            composite: Vec::new(),
            system: CompositeSystem::Mountain,
        }
    }

    fn composite_args(texts: &[&str], system: CompositeSystem) -> AreaArgs {
        AreaArgs {
            value: None,
            unit: None,
            composite: texts.iter().map(|t| t.to_string()).collect(),
            system,
        }
    }

    #[test]
    fn test_single_value() {
        let out = run(&value_args(1.0, AreaUnit::Ropani), false).unwrap();
        assert!(out.contains("Aana       16\n"));
        assert!(out.contains("R-A-P-D    1-0-0-0"));
        assert!(!out.contains("plots"));
    }

    #[test]
    fn test_composites_are_summed() {
        let out = run(
            &composite_args(&["0-8-0-0", "0-8-0-0"], CompositeSystem::Mountain),
            false,
        )
        .unwrap();
        assert!(out.starts_with("Total of 2 plots"));
        assert!(out.contains("Ropani     1\n"));
        assert!(out.contains("R-A-P-D    1-0-0-0"));
    }

    #[test]
    fn test_terai_json() {
        let out = run(&composite_args(&["1-0-0"], CompositeSystem::Terai), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["plots"], 1);
        assert_eq!(value["base"], 72900.0);
        assert_eq!(value["terai"], "1-0-0");
    }

    #[test]
    fn test_needs_some_input() {
        let empty = composite_args(&[], CompositeSystem::Mountain);
        assert!(matches!(run(&empty, false), Err(CliError::InvalidInput(_))));
        assert!(run(&value_args(-1.0, AreaUnit::Acre), false).is_err());
    }
}
