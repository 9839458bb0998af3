//! Provident fund maturity: PPF and EPF
//!
//! Both accumulate year by year. PPF reapplies compounding from scratch to the
//! full accumulated principal each year; EPF rolls a running balance forward.

use serde::{Deserialize, Serialize};

use crate::error::{
    ensure_finite, ensure_non_negative, ensure_nonzero, ensure_positive, period_exponent, CalcResult,
};
use crate::rounding::round2;

/// Standard PPF account tenure in years
pub const PPF_DEFAULT_TENURE_YEARS: u32 = 15;

/// PPF maturity amount
///
/// For each year `y` in 1..=years the accumulated deposits are grown by
/// `(1 + r)^y`; the maturity is the value from the final year.
pub fn ppf_maturity(annual_investment: f64, annual_rate: f64, years: u32) -> CalcResult<f64> {
    ensure_positive("annual_investment", annual_investment)?;
    ensure_positive("annual_rate", annual_rate)?;
    let exponent = period_exponent("years", years)?;

    let growth = 1.0 + annual_rate / 100.0;
    ensure_finite("growth factor", growth.powi(exponent))?;

    let mut accumulated = 0.0;
    let mut maturity = 0.0;

    for year in 1..=years {
        accumulated += annual_investment;
        maturity = accumulated * growth.powi(year as i32);
    }

    let maturity = ensure_finite("maturity", maturity)?;
    log::debug!("PPF after {} years: deposits {:.2}, maturity {:.2}", years, accumulated, maturity);
    Ok(round2(maturity))
}

/// Inputs for an EPF projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpfInput {
    /// Monthly basic salary (plus dearness allowance) in the first year
    pub monthly_basic: f64,
    /// Employee contribution, percent of basic
    pub employee_rate: f64,
    /// Employer contribution credited to EPF, percent of basic
    pub employer_rate: f64,
    /// Annual EPF interest rate, percent
    pub annual_rate: f64,
    pub years: u32,
    /// Annual increase in basic salary, percent
    pub annual_salary_growth: f64,
}

/// EPF balance at the end of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpfMaturity {
    pub maturity: f64,
    pub total_contribution: f64,
    pub interest_earned: f64,
}

/// Project an EPF balance year by year
///
/// Each year's contributions are added to the balance, which then earns one
/// year of interest. Salary grows at the end of each year.
pub fn epf_maturity(input: &EpfInput) -> CalcResult<EpfMaturity> {
    ensure_positive("monthly_basic", input.monthly_basic)?;
    ensure_non_negative("employee_rate", input.employee_rate)?;
    ensure_non_negative("employer_rate", input.employer_rate)?;
    ensure_positive("employee_rate + employer_rate", input.employee_rate + input.employer_rate)?;
    ensure_positive("annual_rate", input.annual_rate)?;
    ensure_nonzero("years", input.years)?;
    ensure_non_negative("annual_salary_growth", input.annual_salary_growth)?;

    let mut basic = input.monthly_basic;
    let mut balance = 0.0;
    let mut total_contribution = 0.0;

    for _ in 0..input.years {
        let contribution = basic * 12.0 * (input.employee_rate + input.employer_rate) / 100.0;
        total_contribution += contribution;
        balance = (balance + contribution) * (1.0 + input.annual_rate / 100.0);
        basic *= 1.0 + input.annual_salary_growth / 100.0;
    }

    let maturity = round2(ensure_finite("maturity", balance)?);
    let total_contribution = round2(ensure_finite("total_contribution", total_contribution)?);

    Ok(EpfMaturity {
        maturity,
        total_contribution,
        interest_earned: round2(maturity - total_contribution),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ppf_single_year() {
        let maturity = ppf_maturity(100_000.0, 8.0, 1).unwrap();
        assert_abs_diff_eq!(maturity, 108_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ppf_default_tenure() {
        // Final year compounds all 15 deposits for 15 years
        let maturity = ppf_maturity(150_000.0, 7.1, PPF_DEFAULT_TENURE_YEARS).unwrap();
        assert_abs_diff_eq!(maturity, 6_295_418.13, epsilon = 1e-3);
    }

    #[test]
    fn test_epf_one_year() {
        let result = epf_maturity(&EpfInput {
            monthly_basic: 10_000.0,
            employee_rate: 12.0,
            employer_rate: 12.0,
            annual_rate: 8.0,
            years: 1,
            annual_salary_growth: 0.0,
        })
        .unwrap();
        assert_abs_diff_eq!(result.total_contribution, 28_800.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.maturity, 31_104.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.interest_earned, 2304.0, epsilon = 1e-6);
    }

    #[test]
    fn test_epf_with_salary_growth() {
        let result = epf_maturity(&EpfInput {
            monthly_basic: 30_000.0,
            employee_rate: 12.0,
            employer_rate: 3.67,
            annual_rate: 8.25,
            years: 20,
            annual_salary_growth: 5.0,
        })
        .unwrap();
        assert_abs_diff_eq!(result.maturity, 4_186_790.11, epsilon = 1e-3);
        assert_abs_diff_eq!(result.total_contribution, 1_865_316.60, epsilon = 1e-3);
        assert_abs_diff_eq!(
            result.interest_earned,
            result.maturity - result.total_contribution,
            epsilon = 0.011
        );
    }

    #[test]
    fn test_epf_requires_some_contribution() {
        let input = EpfInput {
            monthly_basic: 30_000.0,
            employee_rate: 0.0,
            employer_rate: 0.0,
            annual_rate: 8.25,
            years: 5,
            annual_salary_growth: 0.0,
        };
        assert!(epf_maturity(&input).is_err());
    }

    #[test]
    fn test_rejects_unrepresentable_horizons() {
        use crate::error::CalcError;

        assert!(matches!(
            ppf_maturity(150_000.0, 7.1, u32::MAX),
            Err(CalcError::TooLarge { field: "years", .. })
        ));
        assert_eq!(
            ppf_maturity(150_000.0, 7.1, 20_000),
            Err(CalcError::NonFinite { field: "growth factor" })
        );

        let input = EpfInput {
            monthly_basic: 25_000.0,
            employee_rate: 12.0,
            employer_rate: 3.67,
            annual_rate: 8.25,
            years: 20_000,
            annual_salary_growth: 5.0,
        };
        assert!(matches!(epf_maturity(&input), Err(CalcError::NonFinite { .. })));
    }
}
