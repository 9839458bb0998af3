//! Systematic withdrawal plans
//!
//! Supports:
//! - How long a corpus lasts under a fixed monthly withdrawal (simulated month by month)
//! - The level monthly withdrawal that exhausts a corpus over a chosen duration

use crate::error::{ensure_non_negative, ensure_positive, period_exponent, CalcError, CalcResult};
use crate::rounding::round2;

/// Upper bound on simulated months (500 years)
pub const SWP_MAX_MONTHS: u32 = 6000;

/// Number of months a corpus lasts under a fixed monthly withdrawal
///
/// Each month the remaining corpus first earns one month of return, then the
/// withdrawal is taken. The count includes the month in which the corpus
/// reaches zero or goes negative.
///
/// Fails with [`CalcError::NeverDepletes`] when monthly growth on the initial
/// corpus already covers the withdrawal, or when depletion takes longer than
/// [`SWP_MAX_MONTHS`].
pub fn swp_duration(initial_corpus: f64, withdrawal: f64, annual_rate: f64) -> CalcResult<u32> {
    ensure_positive("initial_corpus", initial_corpus)?;
    ensure_positive("withdrawal", withdrawal)?;
    ensure_non_negative("annual_rate", annual_rate)?;

    let monthly_rate = annual_rate / 12.0 / 100.0;

    if withdrawal <= initial_corpus * monthly_rate {
        log::warn!(
            "Withdrawal {:.2} does not exceed monthly growth {:.2}; corpus is perpetual",
            withdrawal,
            initial_corpus * monthly_rate
        );
        return Err(CalcError::NeverDepletes { limit_months: SWP_MAX_MONTHS });
    }

    let mut remaining = initial_corpus;
    let mut months = 0;

    while remaining > 0.0 {
        if months == SWP_MAX_MONTHS {
            log::warn!("Corpus still {:.2} after {} months", remaining, months);
            return Err(CalcError::NeverDepletes { limit_months: SWP_MAX_MONTHS });
        }
        remaining += remaining * monthly_rate - withdrawal;
        months += 1;
    }

    log::debug!("Corpus {:.2} depleted after {} months", initial_corpus, months);
    Ok(months)
}

/// Level monthly withdrawal that exhausts the corpus over `duration_months`
///
/// W = C·i / (1 − (1 + i)^(−n)); with a zero return rate this is C / n.
pub fn swp_amount(initial_corpus: f64, duration_months: u32, annual_rate: f64) -> CalcResult<f64> {
    ensure_positive("initial_corpus", initial_corpus)?;
    let exponent = period_exponent("duration_months", duration_months)?;
    ensure_non_negative("annual_rate", annual_rate)?;

    let i = annual_rate / 12.0 / 100.0;
    if i == 0.0 {
        return Ok(round2(initial_corpus / duration_months as f64));
    }

    let withdrawal = initial_corpus * i / (1.0 - (1.0 + i).powi(-exponent));
    Ok(round2(withdrawal))
}
