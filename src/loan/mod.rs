//! Loan calculators: EMI, year-based loan products and amortization schedules

mod emi;
mod details;
mod schedule;

pub use emi::{calculate_emi, total_interest_paid};
pub use details::{loan_details, monthly_payment, LoanDetails, LoanKind};
pub use schedule::{AmortizationRow, AmortizationSchedule, ScheduleSummary, MAX_SCHEDULE_MONTHS};
