//! Income tax under the old and new regimes
//!
//! Tax is computed on marginal slabs, then a 4% health and education cess is
//! added on top. The advanced calculator applies capped deductions before the
//! old-regime slabs; the comparison recommends the cheaper regime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, CalcError, CalcResult};
use crate::rounding::round2;

/// Cess levied on computed tax
pub const CESS_RATE: f64 = 0.04;

/// Section 80C deduction cap
pub const SECTION_80C_CAP: f64 = 150_000.0;

/// Section 80D deduction cap
pub const SECTION_80D_CAP: f64 = 75_000.0;

/// HRA deduction cap as a fraction of gross income
pub const HRA_GROSS_FRACTION_CAP: f64 = 0.40;

/// Marginal slabs as (lower bound, rate); each applies up to the next bound
const OLD_REGIME_SLABS: [(f64, f64); 4] = [
    (0.0, 0.0),
    (250_000.0, 0.05),
    (500_000.0, 0.20),
    (1_000_000.0, 0.30),
];

const NEW_REGIME_SLABS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (300_000.0, 0.05),
    (600_000.0, 0.10),
    (900_000.0, 0.15),
    (1_200_000.0, 0.20),
    (1_500_000.0, 0.30),
];

/// Tax regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    Old,
    New,
}

impl TaxRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxRegime::Old => "old",
            TaxRegime::New => "new",
        }
    }

    /// Tax including cess on `taxable_income` under this regime
    pub fn tax(&self, taxable_income: f64) -> CalcResult<f64> {
        match self {
            TaxRegime::Old => old_regime_tax(taxable_income),
            TaxRegime::New => new_regime_tax(taxable_income),
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxRegime {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "old" => Ok(TaxRegime::Old),
            "new" => Ok(TaxRegime::New),
            other => Err(CalcError::UnknownVariant {
                kind: "tax regime",
                value: other.to_string(),
            }),
        }
    }
}

/// Claimed deductions before capping
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub section_80c: f64,
    pub section_80d: f64,
    pub hra: f64,
}

impl Deductions {
    fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("section_80c", self.section_80c)?;
        ensure_non_negative("section_80d", self.section_80d)?;
        ensure_non_negative("hra", self.hra)
    }

    /// Total allowed after applying the statutory caps
    pub fn capped_total(&self, gross_income: f64) -> f64 {
        self.section_80c.min(SECTION_80C_CAP)
            + self.section_80d.min(SECTION_80D_CAP)
            + self.hra.min(HRA_GROSS_FRACTION_CAP * gross_income)
    }
}

/// Result of the advanced (deduction-aware) old-regime calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancedTax {
    pub total_deductions: f64,
    pub taxable_income: f64,
    pub tax: f64,
}

/// Side-by-side regime comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old_regime_tax: f64,
    pub new_regime_tax: f64,
    pub recommended_regime: TaxRegime,
}

/// Slab tax before cess
fn slab_tax(income: f64, slabs: &[(f64, f64)]) -> f64 {
    slabs
        .iter()
        .enumerate()
        .map(|(idx, &(lower, rate))| {
            let upper = slabs.get(idx + 1).map(|&(next, _)| next).unwrap_or(f64::INFINITY);
            if income > lower {
                (income.min(upper) - lower) * rate
            } else {
                0.0
            }
        })
        .sum()
}

fn tax_with_cess(taxable_income: f64, slabs: &[(f64, f64)]) -> CalcResult<f64> {
    ensure_non_negative("taxable_income", taxable_income)?;

    let tax = slab_tax(taxable_income, slabs);
    Ok(round2(tax * (1.0 + CESS_RATE)))
}

/// Old regime tax including cess
pub fn old_regime_tax(taxable_income: f64) -> CalcResult<f64> {
    tax_with_cess(taxable_income, &OLD_REGIME_SLABS)
}

/// New regime tax including cess
pub fn new_regime_tax(taxable_income: f64) -> CalcResult<f64> {
    tax_with_cess(taxable_income, &NEW_REGIME_SLABS)
}

/// Old-regime tax after capped 80C, 80D and HRA deductions
pub fn advanced_income_tax(gross_income: f64, deductions: &Deductions) -> CalcResult<AdvancedTax> {
    ensure_non_negative("gross_income", gross_income)?;
    deductions.validate()?;

    let total_deductions = deductions.capped_total(gross_income);
    let taxable_income = (gross_income - total_deductions).max(0.0);
    let tax = old_regime_tax(taxable_income)?;

    Ok(AdvancedTax {
        total_deductions: round2(total_deductions),
        taxable_income: round2(taxable_income),
        tax,
    })
}

/// Compare the old regime (with deductions) against the new regime (without)
///
/// Ties recommend the old regime.
pub fn compare_tax_regimes(gross_income: f64, deductions: &Deductions) -> CalcResult<RegimeComparison> {
    let old = advanced_income_tax(gross_income, deductions)?;
    let new_regime_tax = new_regime_tax(gross_income)?;

    let recommended_regime = if old.tax <= new_regime_tax {
        TaxRegime::Old
    } else {
        TaxRegime::New
    };

    log::debug!(
        "Gross {:.2}: old {:.2}, new {:.2}, recommend {}",
        gross_income,
        old.tax,
        new_regime_tax,
        recommended_regime
    );

    Ok(RegimeComparison {
        old_regime_tax: old.tax,
        new_regime_tax,
        recommended_regime,
    })
}
