//! # EMI Command
//!
//! `shaswi emi <PRINCIPAL> <RATE> <TENURE>`: installment and totals, with
//! the schedule printed (`--schedule`) or exported as CSV (`--export`).

use std::fs::File;
use std::io::Write;

use csv::Writer;
use shaswi_core::emi::{EmiSchedule, LoanTerms, TenureUnit};
use tracing::info;

use super::render;
use crate::cli::EmiArgs;
use crate::error::CliResult;

pub fn run(args: &EmiArgs, json: bool) -> CliResult<String> {
    let unit = if args.months {
        TenureUnit::Months
    } else {
        TenureUnit::Years
    };
    let schedule = LoanTerms::new(args.principal, args.rate, args.tenure, unit)?.schedule();

    if let Some(path) = &args.export {
        write_schedule(&schedule, File::create(path)?)?;
        info!(path = %path.display(), months = schedule.installments.len(), "schedule exported");
    }

    render(&schedule, json, |s| format_schedule(s, args.schedule))
}

/// Writes one CSV row per month.
pub fn write_schedule<W: Write>(schedule: &EmiSchedule, output: W) -> CliResult<()> {
    let mut writer = Writer::from_writer(output);
    for installment in &schedule.installments {
        writer.serialize(installment)?;
    }
    writer.flush()?;
    Ok(())
}

fn format_schedule(schedule: &EmiSchedule, with_table: bool) -> String {
    let mut out = format!(
        "Monthly EMI     {:.2}\nTotal Interest  {:.2}\nTotal Payment   {:.2}",
        schedule.emi, schedule.total_interest, schedule.total_payment
    );

    if with_table {
        out.push_str(&format!(
            "\n\n{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}",
            "Month", "Opening", "EMI", "Principal", "Interest", "Closing"
        ));
        for row in &schedule.installments {
            out.push_str(&format!(
                "\n{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                row.month, row.opening, row.emi, row.principal, row.interest, row.closing
            ));
        }
    }

    out
}
