//! fincalc CLI
//!
//! Command-line front end for the calculators. Results print as plain text, or
//! as JSON with `--json`.
//!
//! Usage:
//! ```bash
//! fincalc emi --principal 100000 --rate 12 --months 12
//! fincalc amortize --principal 2500000 --rate 8.5 --months 240 --start 2025-01-05 --csv schedule.csv
//! fincalc compare-tax --gross 1200000 --section-80c 150000 --section-80d 25000
//! fincalc --json tdee --weight 70 --height 175 --age 30 --gender male --activity moderate
//! ```

use std::fs::File;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use fincalc::fitness::{self, ActivityLevel, DietGoal, Exercise, Gender, Intensity, WeightUnit};
use fincalc::investment::{self, FD_DEFAULT_COMPOUNDING};
use fincalc::loan::{self, AmortizationSchedule, LoanKind};
use fincalc::ratios;
use fincalc::savings::{self, CityClass, Deductions, EpfInput, TaxRegime, PPF_DEFAULT_TENURE_YEARS};

/// Rows shown before the schedule is elided in text output
const PREVIEW_ROWS: usize = 12;

#[derive(Parser)]
#[command(
    name = "fincalc",
    about = "Financial and fitness formula calculators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Equated monthly installment and total interest
    Emi {
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    /// Monthly payment and totals for a home, personal or education loan
    Loan {
        #[arg(long, default_value = "home")]
        kind: LoanKind,
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Month-by-month amortization schedule
    Amortize {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        /// Due date of the first installment (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Write the full schedule to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Compound interest earned
    Compound {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        /// Compounding periods per year
        #[arg(long, default_value_t = 1.0)]
        times: f64,
        #[arg(long)]
        years: f64,
    },
    /// Simple interest earned
    Simple {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// SIP maturity value
    Sip {
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    /// SIP maturity with an annual step-up in the installment
    StepUpSip {
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        /// Annual increase in the installment, percent
        #[arg(long, default_value_t = 0.0)]
        step_up: f64,
    },
    /// Months a corpus lasts under a fixed monthly withdrawal
    SwpDuration {
        #[arg(long)]
        corpus: f64,
        #[arg(long)]
        withdrawal: f64,
        #[arg(long)]
        rate: f64,
    },
    /// Monthly withdrawal that exhausts a corpus over a duration
    SwpAmount {
        #[arg(long)]
        corpus: f64,
        #[arg(long)]
        months: u32,
        #[arg(long)]
        rate: f64,
    },
    /// Future value of a lumpsum
    Lumpsum {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
        #[arg(long, default_value_t = FD_DEFAULT_COMPOUNDING)]
        compounding: f64,
    },
    /// Recurring deposit maturity
    Rd {
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// PPF maturity
    Ppf {
        #[arg(long)]
        annual: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value_t = PPF_DEFAULT_TENURE_YEARS)]
        years: u32,
    },
    /// EPF projection
    Epf {
        /// Monthly basic salary
        #[arg(long)]
        basic: f64,
        #[arg(long, default_value_t = 12.0)]
        employee_rate: f64,
        #[arg(long, default_value_t = 3.67)]
        employer_rate: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value_t = 0.0)]
        salary_growth: f64,
    },
    /// HRA exemption
    Hra {
        #[arg(long)]
        basic: f64,
        #[arg(long)]
        hra: f64,
        #[arg(long)]
        rent: f64,
        #[arg(long, default_value = "metro")]
        city: CityClass,
    },
    /// Income tax on taxable income under one regime
    Tax {
        #[arg(long)]
        income: f64,
        #[arg(long, default_value = "old")]
        regime: TaxRegime,
    },
    /// Old regime with deductions against the new regime
    CompareTax {
        #[arg(long)]
        gross: f64,
        #[arg(long, default_value_t = 0.0)]
        section_80c: f64,
        #[arg(long, default_value_t = 0.0)]
        section_80d: f64,
        #[arg(long, default_value_t = 0.0)]
        hra: f64,
    },
    /// Debt-to-income ratio
    Dti {
        #[arg(long)]
        debt: f64,
        #[arg(long)]
        income: f64,
    },
    /// Dividend yield
    DividendYield {
        #[arg(long)]
        dividends: f64,
        #[arg(long)]
        price: f64,
    },
    /// Return on investment
    Roi {
        #[arg(long)]
        initial: f64,
        #[arg(long)]
        final_value: f64,
    },
    /// Body mass index (kg, metres)
    Bmi {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    /// Basal metabolic rate (kg, cm, years)
    Bmr {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: f64,
        #[arg(long)]
        gender: Gender,
    },
    /// Body fat percentage (cm)
    BodyFat {
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        neck: f64,
        #[arg(long)]
        waist: f64,
        #[arg(long)]
        hips: Option<f64>,
    },
    /// Convert a weight into kg or lb
    ConvertWeight {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        to: WeightUnit,
    },
    /// Total daily energy expenditure
    Tdee {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: f64,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        activity: ActivityLevel,
    },
    /// Macronutrient grams for a calorie budget
    Macros {
        #[arg(long)]
        tdee: f64,
        #[arg(long, default_value = "balanced")]
        goal: DietGoal,
    },
    /// Target heart-rate zone
    HrZone {
        #[arg(long)]
        age: f64,
        #[arg(long)]
        resting: f64,
        #[arg(long)]
        intensity: Intensity,
    },
    /// Estimated one-rep max
    OneRepMax {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        reps: u32,
        #[arg(long, default_value = "generic")]
        exercise: Exercise,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Command::Emi { principal, rate, months } => {
            let emi = loan::calculate_emi(principal, rate, months)?;
            let interest = loan::total_interest_paid(principal, rate, months)?;
            print_result("emi", &json!({ "emi": emi, "total_interest": interest }), json)
        }
        Command::Loan { kind, principal, rate, years } => {
            print_result("loan", &loan::loan_details(kind, principal, rate, years)?, json)
        }
        Command::Amortize { principal, rate, months, start, csv } => {
            let mut schedule = AmortizationSchedule::build(principal, rate, months)?;
            if let Some(first_due) = start {
                schedule = schedule.with_start_date(first_due);
            }
            if let Some(path) = csv {
                let file = File::create(&path).with_context(|| format!("creating {}", path))?;
                schedule
                    .write_csv(file)
                    .with_context(|| format!("writing schedule to {}", path))?;
                eprintln!("Full schedule written to: {}", path);
            }
            print_schedule(&schedule, json)
        }
        Command::Compound { principal, rate, times, years } => print_result(
            "compound_interest",
            &investment::compound_interest(principal, rate, times, years)?,
            json,
        ),
        Command::Simple { principal, rate, years } => print_result(
            "simple_interest",
            &investment::simple_interest(principal, rate, years)?,
            json,
        ),
        Command::Sip { monthly, rate, months } => {
            print_result("sip_maturity", &investment::calculate_sip(monthly, rate, months)?, json)
        }
        Command::StepUpSip { monthly, rate, years, step_up } => print_result(
            "step_up_sip_maturity",
            &investment::step_up_sip(monthly, rate, years, step_up)?,
            json,
        ),
        Command::SwpDuration { corpus, withdrawal, rate } => print_result(
            "swp_months",
            &investment::swp_duration(corpus, withdrawal, rate)?,
            json,
        ),
        Command::SwpAmount { corpus, months, rate } => print_result(
            "swp_monthly_withdrawal",
            &investment::swp_amount(corpus, months, rate)?,
            json,
        ),
        Command::Lumpsum { principal, rate, years } => {
            print_result("lumpsum_value", &investment::lumpsum(principal, rate, years)?, json)
        }
        Command::Fd { principal, rate, years, compounding } => print_result(
            "fd_maturity",
            &investment::fixed_deposit(principal, rate, years, compounding)?,
            json,
        ),
        Command::Rd { monthly, rate, years } => {
            print_result("rd_maturity", &investment::recurring_deposit(monthly, rate, years)?, json)
        }
        Command::Ppf { annual, rate, years } => {
            print_result("ppf_maturity", &savings::ppf_maturity(annual, rate, years)?, json)
        }
        Command::Epf { basic, employee_rate, employer_rate, rate, years, salary_growth } => {
            let input = EpfInput {
                monthly_basic: basic,
                employee_rate,
                employer_rate,
                annual_rate: rate,
                years,
                annual_salary_growth: salary_growth,
            };
            print_result("epf", &savings::epf_maturity(&input)?, json)
        }
        Command::Hra { basic, hra, rent, city } => {
            print_result("hra_exemption", &savings::hra_exemption(basic, hra, rent, city)?, json)
        }
        Command::Tax { income, regime } => {
            print_result(&format!("{}_regime_tax", regime), &regime.tax(income)?, json)
        }
        Command::CompareTax { gross, section_80c, section_80d, hra } => {
            let deductions = Deductions { section_80c, section_80d, hra };
            print_result("tax_comparison", &savings::compare_tax_regimes(gross, &deductions)?, json)
        }
        Command::Dti { debt, income } => {
            print_result("dti_percent", &ratios::debt_to_income(debt, income)?, json)
        }
        Command::DividendYield { dividends, price } => print_result(
            "dividend_yield_percent",
            &ratios::dividend_yield(dividends, price)?,
            json,
        ),
        Command::Roi { initial, final_value } => print_result(
            "roi_percent",
            &ratios::return_on_investment(initial, final_value)?,
            json,
        ),
        Command::Bmi { weight, height } => {
            let result = fitness::calculate_bmi(weight, height)?;
            let label = result.category.label();
            print_result("bmi", &json!({ "bmi": result.bmi, "category": label }), json)
        }
        Command::Bmr { weight, height, age, gender } => {
            print_result("bmr", &fitness::calculate_bmr(weight, height, age, gender)?, json)
        }
        Command::BodyFat { gender, height, neck, waist, hips } => print_result(
            "body_fat_percent",
            &fitness::body_fat_percentage(gender, height, neck, waist, hips)?,
            json,
        ),
        Command::ConvertWeight { weight, to } => {
            print_result(&format!("weight_{}", to), &fitness::convert_weight(weight, to)?, json)
        }
        Command::Tdee { weight, height, age, gender, activity } => {
            let result = fitness::calculate_tdee(weight, height, age, gender, activity)?;
            let label = result.category.label();
            print_result("tdee", &json!({ "tdee": result.tdee, "category": label }), json)
        }
        Command::Macros { tdee, goal } => {
            print_result("macros_grams", &fitness::calculate_macros(tdee, goal)?, json)
        }
        Command::HrZone { age, resting, intensity } => print_result(
            "heart_rate_zone",
            &fitness::heart_rate_zone(age, resting, intensity)?,
            json,
        ),
        Command::OneRepMax { weight, reps, exercise } => print_result(
            "one_rep_max",
            &fitness::one_rep_max(weight, reps, exercise)?,
            json,
        ),
    }
}

/// Print a scalar or flat record under `label`
fn print_result<T: Serialize>(label: &str, value: &T, json: bool) -> Result<()> {
    let value = serde_json::to_value(value)?;

    if json {
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(label.to_string(), value);
        println!("{}", serde_json::to_string_pretty(&Value::Object(wrapper))?);
        return Ok(());
    }

    match value {
        Value::Object(fields) => {
            println!("{}:", label);
            for (key, field) in fields {
                println!("  {:<20} {}", key, plain(&field));
            }
        }
        other => println!("{}: {}", label, plain(&other)),
    }
    Ok(())
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn print_schedule(schedule: &AmortizationSchedule, json: bool) -> Result<()> {
    let summary = schedule.summary();

    if json {
        let body = json!({ "schedule": schedule, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("EMI: {:.2}", schedule.emi);
    println!(
        "{:>5} {:>10} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Due", "Opening", "Payment", "Interest", "Principal", "Closing"
    );
    println!("{}", "-".repeat(85));

    for row in schedule.rows.iter().take(PREVIEW_ROWS) {
        let due = row.due_date.map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:>5} {:>10} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month, due, row.opening_balance, row.payment, row.interest, row.principal, row.closing_balance
        );
    }

    if schedule.rows.len() > PREVIEW_ROWS {
        println!("... ({} more months)", schedule.rows.len() - PREVIEW_ROWS);
    }

    println!("\nSummary:");
    println!("  Total Months:    {}", summary.total_months);
    println!("  Total Payment:   {:.2}", summary.total_payment);
    println!("  Total Principal: {:.2}", summary.total_principal);
    println!("  Total Interest:  {:.2}", summary.total_interest);
    Ok(())
}
