//! Savings schemes and income tax calculators

mod provident;
mod hra;
pub mod tax;

pub use provident::{epf_maturity, ppf_maturity, EpfInput, EpfMaturity, PPF_DEFAULT_TENURE_YEARS};
pub use hra::{hra_exemption, CityClass};
pub use tax::{
    advanced_income_tax, compare_tax_regimes, new_regime_tax, old_regime_tax, AdvancedTax,
    Deductions, RegimeComparison, TaxRegime,
};
