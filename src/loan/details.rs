//! Year-based loan products (home, personal, education)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::emi::{monthly_rate, raw_emi};
use crate::error::{ensure_positive, years_to_months, CalcError, CalcResult};
use crate::rounding::round2;

/// Loan product. All products share the amortization formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    Home,
    Personal,
    Education,
}

impl LoanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanKind::Home => "home",
            LoanKind::Personal => "personal",
            LoanKind::Education => "education",
        }
    }
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(LoanKind::Home),
            "personal" => Ok(LoanKind::Personal),
            "education" => Ok(LoanKind::Education),
            other => Err(CalcError::UnknownVariant {
                kind: "loan kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Repayment totals over the life of a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanDetails {
    pub kind: LoanKind,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Monthly payment for a loan with a term given in years
pub fn monthly_payment(
    kind: LoanKind,
    principal: f64,
    annual_rate: f64,
    term_years: u32,
) -> CalcResult<f64> {
    ensure_positive("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    let term_months = years_to_months("term_years", term_years)?;

    let payment = round2(raw_emi(principal, monthly_rate(annual_rate), term_months)?);
    log::debug!("{} loan: monthly payment {:.2}", kind, payment);
    Ok(payment)
}

/// Total payment and total interest for a loan with a term given in years
pub fn loan_details(
    kind: LoanKind,
    principal: f64,
    annual_rate: f64,
    term_years: u32,
) -> CalcResult<LoanDetails> {
    let payment = monthly_payment(kind, principal, annual_rate, term_years)?;
    let total_payments = years_to_months("term_years", term_years)?;
    let total_payment = payment * total_payments as f64;
    let total_interest = total_payment - principal;

    Ok(LoanDetails {
        kind,
        monthly_payment: payment,
        total_payment: round2(total_payment),
        total_interest: round2(total_interest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_products_share_formula() {
        let home = monthly_payment(LoanKind::Home, 300_000.0, 7.5, 30).unwrap();
        let personal = monthly_payment(LoanKind::Personal, 300_000.0, 7.5, 30).unwrap();
        let education = monthly_payment(LoanKind::Education, 300_000.0, 7.5, 30).unwrap();
        assert_eq!(home, personal);
        assert_eq!(home, education);
        assert_abs_diff_eq!(home, 2097.64, epsilon = 1e-9);
    }

    #[test]
    fn test_loan_details_totals() {
        let details = loan_details(LoanKind::Home, 300_000.0, 7.5, 30).unwrap();
        assert_abs_diff_eq!(details.total_payment, 755_150.4, epsilon = 1e-6);
        assert_abs_diff_eq!(details.total_interest, 455_150.4, epsilon = 1e-6);
        assert_abs_diff_eq!(
            details.total_interest,
            round2(details.total_payment - 300_000.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rejects_zero_years() {
        assert!(loan_details(LoanKind::Education, 50_000.0, 9.0, 0).is_err());
        assert!(monthly_payment(LoanKind::Personal, -1.0, 9.0, 3).is_err());
    }

    #[test]
    fn test_rejects_terms_past_month_range() {
        assert!(matches!(
            loan_details(LoanKind::Home, 1000.0, 12.0, 400_000_000),
            Err(CalcError::TooLarge { field: "term_years", .. })
        ));
        assert!(matches!(
            monthly_payment(LoanKind::Personal, 1000.0, 12.0, u32::MAX),
            Err(CalcError::TooLarge { .. })
        ));
        // Within range but the growth factor overflows
        assert!(matches!(
            loan_details(LoanKind::Home, 1000.0, 12.0, 10_000),
            Err(CalcError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("education".parse::<LoanKind>().unwrap(), LoanKind::Education);
        assert!("car".parse::<LoanKind>().is_err());
        assert_eq!(LoanKind::Home.to_string(), "home");
    }
}
