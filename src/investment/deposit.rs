//! Bank deposits: fixed (FD) and recurring (RD)

use crate::error::{ensure_finite, ensure_positive, years_to_months, CalcResult};
use crate::rounding::round2;

/// Default FD compounding: once a year
pub const FD_DEFAULT_COMPOUNDING: f64 = 1.0;

/// Maturity amount of a fixed deposit
///
/// # Arguments
/// * `principal` - Amount deposited
/// * `annual_rate` - Annual rate in percent
/// * `years` - Duration in years (may be fractional)
/// * `compounding_per_year` - Compounding periods per year ([`FD_DEFAULT_COMPOUNDING`] for annual)
pub fn fixed_deposit(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounding_per_year: f64,
) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    ensure_positive("years", years)?;
    ensure_positive("compounding_per_year", compounding_per_year)?;

    let periodic_rate = annual_rate / 100.0 / compounding_per_year;
    let periods = years * compounding_per_year;
    let maturity = principal * (1.0 + periodic_rate).powf(periods);
    Ok(round2(ensure_finite("maturity", maturity)?))
}

/// Maturity amount of a recurring deposit
///
/// Deposits are monthly but interest compounds quarterly: the deposit made in
/// month `m` grows for `(N − m) / 3` quarters, where N is the number of months.
pub fn recurring_deposit(monthly_deposit: f64, annual_rate: f64, years: u32) -> CalcResult<f64> {
    ensure_positive("monthly_deposit", monthly_deposit)?;
    ensure_positive("annual_rate", annual_rate)?;
    let total_months = years_to_months("years", years)?;

    let quarterly_rate = annual_rate / 4.0 / 100.0;
    // The first deposit compounds longest
    ensure_finite(
        "growth factor",
        (1.0 + quarterly_rate).powf((total_months - 1) as f64 / 3.0),
    )?;

    let maturity: f64 = (1..=total_months)
        .map(|month| {
            let quarters = (total_months - month) as f64 / 3.0;
            monthly_deposit * (1.0 + quarterly_rate).powf(quarters)
        })
        .sum();

    Ok(round2(ensure_finite("maturity", maturity)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fd_quarterly() {
        let maturity = fixed_deposit(100_000.0, 7.0, 5.0, 4.0).unwrap();
        assert_abs_diff_eq!(maturity, 141_477.82, epsilon = 1e-4);
    }

    #[test]
    fn test_fd_default_compounding() {
        let maturity = fixed_deposit(100_000.0, 7.0, 5.0, FD_DEFAULT_COMPOUNDING).unwrap();
        assert_abs_diff_eq!(maturity, 140_255.17, epsilon = 1e-4);
    }

    #[test]
    fn test_rd() {
        let maturity = recurring_deposit(5000.0, 7.0, 5).unwrap();
        assert_abs_diff_eq!(maturity, 357_590.06, epsilon = 1e-4);
        // More than the deposits alone
        assert!(maturity > 5000.0 * 60.0);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(fixed_deposit(100_000.0, 7.0, 5.0, 0.0).is_err());
        assert!(recurring_deposit(5000.0, 7.0, 0).is_err());
    }

    #[test]
    fn test_rd_rejects_unrepresentable_horizons() {
        use crate::error::CalcError;

        assert!(matches!(
            recurring_deposit(1000.0, 7.0, 400_000_000),
            Err(CalcError::TooLarge { field: "years", .. })
        ));
        assert_eq!(
            recurring_deposit(1000.0, 7.0, 20_000),
            Err(CalcError::NonFinite { field: "growth factor" })
        );
        assert!(fixed_deposit(1000.0, 7.0, 1e6, 4.0).is_err());
    }
}
