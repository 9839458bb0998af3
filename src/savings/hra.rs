//! House rent allowance exemption

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, CalcError, CalcResult};
use crate::rounding::round2;

/// City classification for the salary-based HRA limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityClass {
    /// 50% of basic salary
    Metro,
    /// 40% of basic salary
    NonMetro,
}

impl CityClass {
    pub fn salary_fraction(&self) -> f64 {
        match self {
            CityClass::Metro => 0.5,
            CityClass::NonMetro => 0.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CityClass::Metro => "metro",
            CityClass::NonMetro => "non_metro",
        }
    }
}

impl fmt::Display for CityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CityClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metro" => Ok(CityClass::Metro),
            "non_metro" => Ok(CityClass::NonMetro),
            other => Err(CalcError::UnknownVariant {
                kind: "city class",
                value: other.to_string(),
            }),
        }
    }
}

/// Exempt portion of HRA
///
/// The least of: HRA received, rent paid minus 10% of basic, and 50% (metro) or
/// 40% (non-metro) of basic. Never negative.
pub fn hra_exemption(
    basic_salary: f64,
    hra_received: f64,
    rent_paid: f64,
    city: CityClass,
) -> CalcResult<f64> {
    ensure_positive("basic_salary", basic_salary)?;
    ensure_non_negative("hra_received", hra_received)?;
    ensure_non_negative("rent_paid", rent_paid)?;

    let rent_excess = rent_paid - 0.10 * basic_salary;
    let salary_limit = city.salary_fraction() * basic_salary;
    let exemption = hra_received.min(rent_excess).min(salary_limit).max(0.0);

    Ok(round2(exemption))
}
