//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shaswi_core::{AreaUnit, CaseStyle, CompositeSystem, Region};

#[derive(Parser, Debug)]
#[command(name = "shaswi", version)]
#[command(about = "Amounts in words, land area, coordinates and loan installments", long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a currency amount in words
    Words(WordsArgs),

    /// Convert a land area between units and composite notations
    Area(AreaArgs),

    /// Convert one coordinate between decimal degrees and DMS
    Geo(GeoArgs),

    /// Convert every row of a coordinate CSV file
    GeoBatch(GeoBatchArgs),

    /// Monthly installment and amortization schedule for a loan
    Emi(EmiArgs),
}

#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Amount, e.g. 1234.50
    pub amount: String,

    /// Currency preset (nepal, india, usa, australia, canada, euro, uk or a currency code)
    #[arg(short, long)]
    pub region: Option<Region>,

    /// Letter case: as-is, upper, lower, title or sentence
    #[arg(short, long)]
    pub case: Option<CaseStyle>,

    /// Append "Only"
    #[arg(long)]
    pub only: bool,
}

#[derive(Args, Debug)]
pub struct AreaArgs {
    /// Value in UNIT
    #[arg(required_unless_present = "composite", requires = "unit")]
    pub value: Option<f64>,

    /// Unit of VALUE, e.g. ropani, sq_feet, hectare
    pub unit: Option<AreaUnit>,

    /// Composite text such as 2-10-3-1.5; repeat to add several plots
    #[arg(long, conflicts_with = "value")]
    pub composite: Vec<String>,

    /// Notation of --composite: mountain (R-A-P-D) or terai (B-K-D)
    #[arg(long, default_value = "mountain")]
    pub system: CompositeSystem,
}

#[derive(Args, Debug)]
pub struct GeoArgs {
    /// "lat, lon" in decimal degrees, or two DMS angles
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

#[derive(Args, Debug)]
pub struct GeoBatchArgs {
    /// Input CSV with a header row
    pub input: PathBuf,

    /// Output CSV (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EmiArgs {
    /// Loan amount
    pub principal: f64,

    /// Annual interest rate in percent
    pub rate: f64,

    /// Loan tenure, in years unless --months is given
    pub tenure: f64,

    /// Read TENURE as months
    #[arg(long)]
    pub months: bool,

    /// Print the month-by-month schedule
    #[arg(long)]
    pub schedule: bool,

    /// Write the schedule to a CSV file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_words_flags() {
        let cli = Cli::parse_from(["shaswi", "words", "1234.5", "--region", "usa", "--only", "--json"]);
        assert!(cli.json);
        match cli.command {
            Command::Words(args) => {
                assert_eq!(args.amount, "1234.5");
                assert_eq!(args.region, Some(Region::Usa));
                assert!(args.only);
                assert_eq!(args.case, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_area_value_or_composite() {
        let cli = Cli::parse_from(["shaswi", "area", "2", "ropani"]);
        match cli.command {
            Command::Area(args) => {
                assert_eq!(args.value, Some(2.0));
                assert_eq!(args.unit, Some(AreaUnit::Ropani));
                assert!(args.composite.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from([
            "shaswi", "area", "--composite", "1-5-10", "--composite", "0-2-0", "--system", "terai",
        ]);
        match cli.command {
            Command::Area(args) => {
                assert_eq!(args.composite, vec!["1-5-10", "0-2-0"]);
                assert_eq!(args.system, CompositeSystem::Terai);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["shaswi", "area"]).is_err());
        assert!(Cli::try_parse_from(["shaswi", "area", "2"]).is_err());
    }

    #[test]
    fn test_geo_accepts_negative_numbers() {
        let cli = Cli::parse_from(["shaswi", "geo", "-33.8688,", "151.2093"]);
        match cli.command {
            Command::Geo(args) => assert_eq!(args.text, vec!["-33.8688,", "151.2093"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_geo_batch_and_emi() {
        let cli = Cli::parse_from(["shaswi", "geo-batch", "in.csv", "-o", "out.csv"]);
        assert!(matches!(cli.command, Command::GeoBatch(ref args)
            if args.output.as_deref() == Some(std::path::Path::new("out.csv"))));

        let cli = Cli::parse_from(["shaswi", "emi", "100000", "10", "12", "--months"]);
        match cli.command {
            Command::Emi(args) => {
                assert_eq!((args.principal, args.rate, args.tenure), (100_000.0, 10.0, 12.0));
                assert!(args.months);
                assert!(args.export.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
