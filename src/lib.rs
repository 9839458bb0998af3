//! fincalc - Financial and fitness formula calculators
//!
//! This library provides:
//! - Loan EMI, total interest and amortization schedules
//! - Time-value calculators (compound/simple interest, SIP, SWP, lumpsum, FD/RD)
//! - Savings and tax calculators (PPF, EPF, HRA exemption, old/new regime income tax)
//! - Financial ratios (DTI, dividend yield, ROI)
//! - Fitness calculators (BMI, BMR, TDEE, body fat, macros, heart-rate zones, 1RM)
//! - An async cryptocurrency price client
//!
//! Every calculator is a pure function that validates its inputs, returning
//! [`CalcError`] on failure, and rounds its result to 2 decimals.

pub mod error;
pub mod rounding;
pub mod loan;
pub mod investment;
pub mod savings;
pub mod ratios;
pub mod fitness;
pub mod crypto;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use rounding::round2;
pub use loan::{calculate_emi, total_interest_paid, AmortizationSchedule, LoanDetails, LoanKind};
pub use savings::{Deductions, TaxRegime};
pub use crypto::{CryptoClient, CryptoConfig, CryptoError};
