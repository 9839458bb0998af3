//! Month-by-month amortization schedule
//!
//! Each row splits the installment into interest on the opening balance and
//! principal repaid. Amounts are kept in cents; the final installment absorbs
//! the rounding residue so the loan closes at exactly zero.

use std::io;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::emi::{monthly_rate, raw_emi};
use crate::error::{ensure_nonzero, ensure_positive, CalcError, CalcResult};
use crate::rounding::round2;

/// Longest schedule materialized row by row (1000 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 12_000;

/// A single installment of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based installment number
    pub month: u32,
    pub due_date: Option<NaiveDate>,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Complete schedule for one loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: f64,
    pub annual_rate: f64,
    /// Regular installment (rounded EMI)
    pub emi: f64,
    pub rows: Vec<AmortizationRow>,
}

/// Totals over the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
}

impl AmortizationSchedule {
    /// Build the schedule for a loan with a term in months
    pub fn build(principal: f64, annual_rate: f64, term_months: u32) -> CalcResult<Self> {
        ensure_positive("principal", principal)?;
        ensure_positive("annual_rate", annual_rate)?;
        ensure_nonzero("term_months", term_months)?;
        if term_months > MAX_SCHEDULE_MONTHS {
            return Err(CalcError::TooLarge {
                field: "term_months",
                value: term_months.into(),
                limit: MAX_SCHEDULE_MONTHS.into(),
            });
        }

        let rate = monthly_rate(annual_rate);
        let emi = round2(raw_emi(principal, rate, term_months)?);

        let mut rows = Vec::with_capacity(term_months as usize);
        let mut balance = round2(principal);

        for month in 1..=term_months {
            let interest = round2(balance * rate);

            // Final installment clears whatever is left
            let principal_part = if month == term_months {
                balance
            } else {
                round2(emi - interest).min(balance)
            };
            let closing = round2(balance - principal_part);

            rows.push(AmortizationRow {
                month,
                due_date: None,
                opening_balance: balance,
                payment: round2(interest + principal_part),
                interest,
                principal: principal_part,
                closing_balance: closing,
            });

            balance = closing;
        }

        log::debug!(
            "Built {}-month schedule: principal {:.2}, EMI {:.2}",
            term_months,
            principal,
            emi
        );

        Ok(Self {
            principal,
            annual_rate,
            emi,
            rows,
        })
    }

    /// Assign calendar due dates, the first installment falling on `first_due`
    pub fn with_start_date(mut self, first_due: NaiveDate) -> Self {
        for row in &mut self.rows {
            row.due_date = first_due.checked_add_months(Months::new(row.month - 1));
        }
        self
    }

    /// Get summary totals
    pub fn summary(&self) -> ScheduleSummary {
        let total_payment: f64 = self.rows.iter().map(|r| r.payment).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_payment: round2(total_payment),
            total_principal: round2(total_principal),
            total_interest: round2(total_interest),
        }
    }

    /// Write the rows as CSV with a header line
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
