//! # Words Command
//!
//! `shaswi words <AMOUNT>`: a currency amount written out in words.

use shaswi_core::amount::AmountReport;
use shaswi_core::AmountWords;
use tracing::debug;

use super::render;
use crate::cli::WordsArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Renders the amount. Flags win over configuration.
pub fn run(args: &WordsArgs, config: &CliConfig, json: bool) -> CliResult<String> {
    let options = AmountWords::new(args.region.unwrap_or(config.region))
        .with_case(args.case.unwrap_or(config.case))
        .with_only_suffix(args.only || config.only_suffix);

    debug!(?options, amount = %args.amount, "words command");

    let report = options.report(&args.amount)?;
    render(&report, json, format_report)
}

fn format_report(report: &AmountReport) -> String {
    format!(
        "{} {}  [{}]\n{}",
        report.currency_code, report.amount, report.badge, report.words
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaswi_core::{CaseStyle, Region};

    fn args(amount: &str) -> WordsArgs {
        WordsArgs {
            amount: amount.to_string(),
            region: None,
            case: None,
            only: false,
        }
    }

    #[test]
    fn test_uses_config_defaults() {
        let out = run(&args("1234.5"), &CliConfig::default(), false).unwrap();
        assert_eq!(
            out,
            "NPR 1234.50  [Nepali Format (Lakh/Crore)]\n\
             One Thousand Two Hundred Thirty Four Rupees and Fifty Paisa"
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            case: CaseStyle::Upper,
            ..CliConfig::default()
        };
        let mut words = args("21");
        words.region = Some(Region::Usa);
        words.case = Some(CaseStyle::Lower);
        words.only = true;

        let out = run(&words, &config, false).unwrap();
        assert!(out.ends_with("twenty one dollars only"));
    }

    #[test]
    fn test_json_output() {
        let out = run(&args("10000000"), &CliConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["words"], "One Crore Rupees");
        assert_eq!(value["currencyCode"], "NPR");
    }

    #[test]
    fn test_rejects_bad_amounts() {
        assert!(run(&args("-5"), &CliConfig::default(), false).is_err());
        assert!(run(&args("twelve"), &CliConfig::default(), false).is_err());
        assert!(run(&args("9007199254740992"), &CliConfig::default(), false).is_err());
    }
}
