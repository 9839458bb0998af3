//! Time-value-of-money calculators for investments and deposits

mod interest;
mod sip;
mod swp;
mod deposit;

pub use interest::{compound_interest, simple_interest};
pub use sip::{calculate_sip, calculate_sip_years, lumpsum, step_up_sip};
pub use swp::{swp_amount, swp_duration, SWP_MAX_MONTHS};
pub use deposit::{fixed_deposit, recurring_deposit, FD_DEFAULT_COMPOUNDING};
