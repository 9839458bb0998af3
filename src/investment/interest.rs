//! Simple and compound interest

use crate::error::{ensure_finite, ensure_positive, CalcResult};
use crate::rounding::round2;

/// Compound interest earned: P(1 + r/100/n)^(n·t) − P
///
/// # Arguments
/// * `principal` - Amount invested
/// * `annual_rate` - Annual rate in percent
/// * `times_per_year` - Compounding periods per year
/// * `years` - Duration in years (may be fractional)
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    times_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    ensure_positive("times_per_year", times_per_year)?;
    ensure_positive("years", years)?;

    let amount = principal * (1.0 + annual_rate / 100.0 / times_per_year).powf(times_per_year * years);
    Ok(round2(ensure_finite("interest", amount - principal)?))
}

/// Simple interest earned: P·r·t / 100
pub fn simple_interest(principal: f64, annual_rate: f64, years: f64) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    ensure_positive("years", years)?;

    Ok(round2(ensure_finite("interest", principal * annual_rate * years / 100.0)?))
}
