//! Fitness calculators
//!
//! Same shape as the financial calculators: validate, apply one published
//! formula, round. TDEE builds on BMR; everything else is standalone.

mod types;
mod body;
mod energy;
mod training;

pub use types::{ActivityLevel, DietGoal, Exercise, Gender, Intensity, WeightUnit};
pub use body::{
    body_fat_percentage, calculate_bmi, calculate_bmr, convert_weight, Bmi, BmiCategory,
    POUNDS_PER_KILOGRAM,
};
pub use energy::{calculate_macros, calculate_tdee, CaloricNeeds, Macros, Tdee};
pub use training::{heart_rate_zone, max_heart_rate, one_rep_max, HeartRateZone};
