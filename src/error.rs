//! Error types shared by every calculator
//!
//! Calculators validate all inputs before computing anything. A failed check is
//! reported as a [`CalcError`] naming the offending argument.

use thiserror::Error;

/// Result alias used by all calculators
pub type CalcResult<T> = Result<T, CalcError>;

/// Validation failures raised before any computation proceeds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} is required: {reason}")]
    Missing { field: &'static str, reason: &'static str },

    #[error("unrecognized {kind}: \"{value}\"")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("{field} exceeds {limit} (got {value})")]
    TooLarge { field: &'static str, value: u64, limit: u64 },

    #[error("{field} overflows the floating-point range")]
    NonFinite { field: &'static str },

    /// Withdrawals never exhaust the corpus (or do not within the iteration cap)
    #[error("corpus is not depleted within {limit_months} months")]
    NeverDepletes { limit_months: u32 },
}

/// Reject zero, negative and NaN values
pub fn ensure_positive(field: &'static str, value: f64) -> CalcResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::NonPositive { field, value })
    }
}

/// Reject negative and NaN values
pub fn ensure_non_negative(field: &'static str, value: f64) -> CalcResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::Negative { field, value })
    }
}

/// Reject a zero period count
pub fn ensure_nonzero(field: &'static str, count: u32) -> CalcResult<()> {
    if count > 0 {
        Ok(())
    } else {
        Err(CalcError::NonPositive { field, value: 0.0 })
    }
}

/// Largest period count accepted by the compounding formulas (the `powi` exponent range)
pub const MAX_PERIODS: u32 = i32::MAX as u32;

/// Validate a period count and return it as a `powi` exponent
pub fn period_exponent(field: &'static str, count: u32) -> CalcResult<i32> {
    ensure_nonzero(field, count)?;
    i32::try_from(count).map_err(|_| CalcError::TooLarge {
        field,
        value: count.into(),
        limit: MAX_PERIODS.into(),
    })
}

/// Convert whole years to months, rejecting terms past [`MAX_PERIODS`] months
pub fn years_to_months(field: &'static str, years: u32) -> CalcResult<u32> {
    ensure_nonzero(field, years)?;
    years
        .checked_mul(12)
        .filter(|months| *months <= MAX_PERIODS)
        .ok_or(CalcError::TooLarge {
            field,
            value: years.into(),
            limit: (MAX_PERIODS / 12).into(),
        })
}

/// Reject infinite and NaN intermediates
pub fn ensure_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { field })
    }
}
