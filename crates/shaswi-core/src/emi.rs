//! # EMI Module
//!
//! Equated monthly installment for a fixed-rate loan, and the month-by-month
//! amortization schedule.
//!
//! ## Formula
//! ```text
//!            P · r · (1 + r)^n
//!   EMI = ─────────────────────        r = annual% / 12 / 100
//!             (1 + r)^n − 1            n = tenure in months
//! ```
//!
//! ## Usage
//! ```rust
//! use shaswi_core::emi::{LoanTerms, TenureUnit};
//!
//! let loan = LoanTerms::new(100_000.0, 10.0, 1.0, TenureUnit::Years).unwrap();
//! assert_eq!(format!("{:.2}", loan.monthly_installment()), "8791.59");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_positive;

/// Longest supported tenure (100 years).
pub const MAX_TENURE_MONTHS: u32 = 1_200;

/// Whether the tenure is counted in years or months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TenureUnit {
    #[default]
    Years,
    Months,
}

impl FromStr for TenureUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" | "y" => Ok(TenureUnit::Years),
            "month" | "months" | "m" => Ok(TenureUnit::Months),
            other => Err(CoreError::invalid_argument(
                "tenure unit",
                format!("'{other}' is neither years nor months"),
            )),
        }
    }
}

/// Validated loan inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanTerms {
    principal: f64,
    annual_rate_pct: f64,
    months: u32,
}

/// One row of the amortization table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct Installment {
    pub month: u32,
    pub opening: f64,
    pub principal: f64,
    pub interest: f64,
    #[serde(rename = "EMI")]
    pub emi: f64,
    pub closing: f64,
}

/// Totals plus the full table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmiSchedule {
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub installments: Vec<Installment>,
}

impl LoanTerms {
    /// Validates and normalizes the tenure to whole months.
    ///
    /// All three inputs must be positive and finite. A fractional month
    /// count is rounded up, since installments are paid monthly. Tenures
    /// above [`MAX_TENURE_MONTHS`], or rates whose installment cannot be
    /// computed, are rejected.
    pub fn new(
        principal: f64,
        annual_rate_pct: f64,
        tenure: f64,
        unit: TenureUnit,
    ) -> CoreResult<Self> {
        validate_positive("principal", principal)?;
        validate_positive("rate", annual_rate_pct)?;
        validate_positive("tenure", tenure)?;

        let months = match unit {
            TenureUnit::Years => tenure * 12.0,
            TenureUnit::Months => tenure,
        };
        let months = whole_months(months);

        if months < 1.0 {
            return Err(CoreError::invalid_argument("tenure", "must cover at least one month"));
        }
        if months > f64::from(MAX_TENURE_MONTHS) {
            return Err(CoreError::invalid_argument(
                "tenure",
                format!("{months} months exceeds the maximum of {MAX_TENURE_MONTHS}"),
            ));
        }

        let terms = LoanTerms {
            principal,
            annual_rate_pct,
            months: months as u32,
        };

        let emi = terms.monthly_installment();
        if !emi.is_finite() || emi <= 0.0 {
            return Err(CoreError::invalid_argument(
                "rate",
                format!("{annual_rate_pct}% gives no computable installment"),
            ));
        }

        Ok(terms)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Monthly interest rate as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }

    pub fn monthly_installment(&self) -> f64 {
        let r = self.monthly_rate();
        let growth = (1.0 + r).powi(self.months as i32);
        self.principal * r * growth / (growth - 1.0)
    }

    /// Builds the amortization table, one row per month.
    ///
    /// Principal repaid in a row never exceeds its opening balance, and the
    /// balance never goes below zero.
    pub fn schedule(&self) -> EmiSchedule {
        let emi = self.monthly_installment();
        let r = self.monthly_rate();
        let total_payment = emi * f64::from(self.months);

        let mut balance = self.principal;
        let mut installments = Vec::with_capacity(self.months as usize);

        for month in 1..=self.months {
            let interest = balance * r;
            let principal = (emi - interest).min(balance);
            let opening = balance;
            balance = (balance - principal).max(0.0);

            installments.push(Installment {
                month,
                opening,
                principal,
                interest,
                emi,
                closing: balance,
            });
        }

        EmiSchedule {
            emi,
            total_interest: total_payment - self.principal,
            total_payment,
            installments,
        }
    }
}

/// Rounds a month count up, ignoring floating-point noise such as
/// `13.000000000000002` from a years-to-months conversion.
fn whole_months(months: f64) -> f64 {
    let nearest = months.round();
    if (months - nearest).abs() < 1e-9 {
        nearest
    } else {
        months.ceil()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_installment() {
        let loan = LoanTerms::new(100_000.0, 10.0, 12.0, TenureUnit::Months).unwrap();
        assert!((loan.monthly_installment() - 8791.5887).abs() < 1e-3);

        let yearly = LoanTerms::new(100_000.0, 10.0, 1.0, TenureUnit::Years).unwrap();
        assert_eq!(yearly.months(), 12);
        assert_eq!(yearly.monthly_installment(), loan.monthly_installment());
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let loan = LoanTerms::new(500_000.0, 12.0, 5.0, TenureUnit::Years).unwrap();
        let schedule = loan.schedule();

        assert_eq!(schedule.installments.len(), 60);
        let last = schedule.installments.last().unwrap();
        assert!(last.closing.abs() < 1e-6);

        let paid: f64 = schedule.installments.iter().map(|i| i.principal).sum();
        assert!((paid - 500_000.0).abs() < 1e-4);

        let interest: f64 = schedule.installments.iter().map(|i| i.interest).sum();
        assert!((interest - schedule.total_interest).abs() < 1e-4);
    }

    #[test]
    fn test_schedule_rows_chain() {
        let schedule = LoanTerms::new(1_000.0, 6.0, 3.0, TenureUnit::Months)
            .unwrap()
            .schedule();
        for pair in schedule.installments.windows(2) {
            assert_eq!(pair[0].closing, pair[1].opening);
            assert!(pair[1].interest < pair[0].interest);
        }
        assert!((schedule.installments[0].interest - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_tenure_amortizes_fully() {
        let loan = LoanTerms::new(1_000.0, 12.0, 2.5, TenureUnit::Months).unwrap();
        assert_eq!(loan.months(), 3);

        let schedule = loan.schedule();
        assert_eq!(schedule.installments.len(), 3);

        let paid: f64 = schedule.installments.iter().map(|i| i.principal).sum();
        assert!((paid - 1_000.0).abs() < 1e-6);

        let emis: f64 = schedule.installments.iter().map(|i| i.emi).sum();
        assert!((emis - schedule.total_payment).abs() < 1e-6);
        for row in &schedule.installments {
            assert!(row.principal <= row.opening);
        }
    }

    #[test]
    fn test_years_to_months_ignores_float_noise() {
        let loan = LoanTerms::new(1_000.0, 12.0, 1.0 / 3.0, TenureUnit::Years).unwrap();
        assert_eq!(loan.months(), 4);
        let loan = LoanTerms::new(1_000.0, 12.0, 1.1, TenureUnit::Years).unwrap();
        assert_eq!(loan.months(), 14);
    }

    #[test]
    fn test_unbounded_tenure_rejected() {
        let result = LoanTerms::new(100_000.0, 10.0, 100_000.0, TenureUnit::Years);
        assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));

        let longest = LoanTerms::new(100_000.0, 10.0, 100.0, TenureUnit::Years).unwrap();
        assert_eq!(longest.months(), MAX_TENURE_MONTHS);
        assert!(longest.monthly_installment().is_finite());
        assert_eq!(longest.schedule().installments.len(), 1_200);
    }

    #[test]
    fn test_uncomputable_rate_rejected() {
        // Growth overflows to infinity.
        let huge = LoanTerms::new(1_000.0, 1e6, 100.0, TenureUnit::Years);
        assert!(matches!(huge, Err(CoreError::InvalidArgument { .. })));

        // Growth rounds to exactly 1, so the denominator is zero.
        let tiny = LoanTerms::new(1_000.0, 1e-300, 12.0, TenureUnit::Months);
        assert!(matches!(tiny, Err(CoreError::InvalidArgument { .. })));
    }

    #[test]
    fn test_invalid_terms() {
        assert!(LoanTerms::new(0.0, 10.0, 12.0, TenureUnit::Months).is_err());
        assert!(LoanTerms::new(1000.0, 0.0, 12.0, TenureUnit::Months).is_err());
        assert!(LoanTerms::new(1000.0, 10.0, -1.0, TenureUnit::Months).is_err());
        assert!(LoanTerms::new(f64::NAN, 10.0, 1.0, TenureUnit::Years).is_err());
        assert!(LoanTerms::new(1000.0, 10.0, 1e-12, TenureUnit::Months).is_err());
    }

    #[test]
    fn test_tenure_unit_parsing() {
        assert_eq!("Months".parse::<TenureUnit>().unwrap(), TenureUnit::Months);
        assert_eq!("y".parse::<TenureUnit>().unwrap(), TenureUnit::Years);
        assert!("weeks".parse::<TenureUnit>().is_err());
    }
}
