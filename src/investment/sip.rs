//! Systematic investment plans and lumpsum growth
//!
//! SIP contributions are treated as an annuity-due: each monthly installment
//! earns a full month of return in the month it is paid.

use crate::error::{
    ensure_finite, ensure_non_negative, ensure_positive, period_exponent, years_to_months, CalcResult,
};
use crate::rounding::round2;

/// Future value of `months` monthly payments of 1 at monthly rate `i`, paid in advance
fn annuity_due_factor(monthly_rate: f64, months: u32) -> CalcResult<f64> {
    let exponent = period_exponent("months", months)?;
    let growth = ensure_finite("growth factor", (1.0 + monthly_rate).powi(exponent))?;
    Ok((growth - 1.0) / monthly_rate * (1.0 + monthly_rate))
}

/// Maturity value of a monthly SIP
///
/// FV = PMT × ((1 + i)^n − 1) / i × (1 + i), with i = annual_rate / 12 / 100
pub fn calculate_sip(monthly_investment: f64, annual_rate: f64, months: u32) -> CalcResult<f64> {
    ensure_positive("monthly_investment", monthly_investment)?;
    ensure_positive("annual_rate", annual_rate)?;

    let i = annual_rate / 12.0 / 100.0;
    let maturity = monthly_investment * annuity_due_factor(i, months)?;
    Ok(round2(ensure_finite("maturity", maturity)?))
}

/// Maturity value of a monthly SIP held for whole years
pub fn calculate_sip_years(monthly_investment: f64, annual_rate: f64, years: u32) -> CalcResult<f64> {
    let months = years_to_months("years", years)?;
    calculate_sip(monthly_investment, annual_rate, months)
}

/// Maturity value of a SIP whose monthly installment grows once a year
///
/// Year `y` (0-based) contributes `initial × (1 + step_up/100)^y` per month, and
/// that tranche compounds for the `(years − y) × 12` months still remaining.
pub fn step_up_sip(
    initial_investment: f64,
    annual_rate: f64,
    years: u32,
    step_up_rate: f64,
) -> CalcResult<f64> {
    ensure_positive("initial_investment", initial_investment)?;
    ensure_positive("annual_rate", annual_rate)?;
    let total_months = years_to_months("years", years)?;
    ensure_non_negative("step_up_rate", step_up_rate)?;

    let i = annual_rate / 12.0 / 100.0;
    // First tranche compounds longest
    annuity_due_factor(i, total_months)?;

    let mut maturity = 0.0;
    for year in 0..years {
        let installment = initial_investment * (1.0 + step_up_rate / 100.0).powi(year as i32);
        let months_remaining = (years - year) * 12;
        maturity += installment * annuity_due_factor(i, months_remaining)?;
    }
    let maturity = ensure_finite("maturity", maturity)?;

    log::debug!("Step-up SIP over {} years: maturity {:.2}", years, maturity);
    Ok(round2(maturity))
}

/// Future value of a single investment compounded annually
pub fn lumpsum(principal: f64, annual_rate: f64, years: f64) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    ensure_positive("years", years)?;

    let maturity = principal * (1.0 + annual_rate / 100.0).powf(years);
    Ok(round2(ensure_finite("maturity", maturity)?))
}
