//! Equated monthly installment
//!
//! EMI = P × r × (1 + r)^n / [(1 + r)^n - 1]
//!
//! Where r is the monthly rate (annual percent / 12 / 100) and n the term in months.

use crate::error::{ensure_finite, ensure_positive, period_exponent, CalcResult};
use crate::rounding::round2;

/// Monthly rate as a decimal from an annual percentage
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Unrounded installment for validated amounts
///
/// Fails when the term is outside the exponent range or the growth factor
/// overflows.
pub(crate) fn raw_emi(principal: f64, monthly_rate: f64, term_months: u32) -> CalcResult<f64> {
    let exponent = period_exponent("term_months", term_months)?;
    if monthly_rate == 0.0 {
        return Ok(principal / term_months as f64);
    }

    let factor = ensure_finite("growth factor", (1.0 + monthly_rate).powi(exponent))?;
    ensure_finite("emi", principal * monthly_rate * factor / (factor - 1.0))
}

/// Calculate the EMI for a loan
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate` - Annual interest rate in percent (e.g. 12.0)
/// * `term_months` - Loan term in months
pub fn calculate_emi(principal: f64, annual_rate: f64, term_months: u32) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;

    Ok(round2(raw_emi(principal, monthly_rate(annual_rate), term_months)?))
}

/// Total interest paid over the loan: EMI × term − principal
pub fn total_interest_paid(principal: f64, annual_rate: f64, term_months: u32) -> CalcResult<f64> {
    let emi = calculate_emi(principal, annual_rate, term_months)?;
    Ok(round2(emi * term_months as f64 - principal))
}
