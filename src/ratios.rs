//! Financial ratios expressed as percentages

use crate::error::{ensure_non_negative, ensure_positive, CalcResult};
use crate::rounding::round2;

/// Debt-to-income ratio, percent
pub fn debt_to_income(total_debt: f64, gross_income: f64) -> CalcResult<f64> {
    ensure_non_negative("total_debt", total_debt)?;
    ensure_positive("gross_income", gross_income)?;

    Ok(round2(total_debt / gross_income * 100.0))
}

/// Dividend yield, percent
pub fn dividend_yield(annual_dividends: f64, stock_price: f64) -> CalcResult<f64> {
    ensure_non_negative("annual_dividends", annual_dividends)?;
    ensure_positive("stock_price", stock_price)?;

    Ok(round2(annual_dividends / stock_price * 100.0))
}

/// Return on investment, percent. Negative when the final value is below cost.
pub fn return_on_investment(initial_investment: f64, final_value: f64) -> CalcResult<f64> {
    ensure_positive("initial_investment", initial_investment)?;
    ensure_non_negative("final_value", final_value)?;

    Ok(round2((final_value - initial_investment) / initial_investment * 100.0))
}
