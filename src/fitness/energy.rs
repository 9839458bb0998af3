//! Daily energy expenditure and macronutrient targets

use std::fmt;

use serde::{Deserialize, Serialize};

use super::body::calculate_bmr;
use super::types::{ActivityLevel, DietGoal, Gender};
use crate::error::{ensure_positive, CalcResult};
use crate::rounding::round2;

/// kcal per gram
const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;
const CARB_KCAL_PER_GRAM: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaloricNeeds {
    /// < 1800 kcal
    Low,
    /// [1800, 2500) kcal
    Moderate,
    /// >= 2500 kcal
    High,
}

impl CaloricNeeds {
    pub fn from_tdee(tdee: f64) -> Self {
        if tdee < 1800.0 {
            CaloricNeeds::Low
        } else if tdee < 2500.0 {
            CaloricNeeds::Moderate
        } else {
            CaloricNeeds::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaloricNeeds::Low => "Low caloric needs",
            CaloricNeeds::Moderate => "Moderate caloric needs",
            CaloricNeeds::High => "High caloric needs",
        }
    }
}

impl fmt::Display for CaloricNeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tdee {
    pub tdee: f64,
    pub category: CaloricNeeds,
}

/// Grams per day of each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Total daily energy expenditure: BMR × activity multiplier
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
    activity: ActivityLevel,
) -> CalcResult<Tdee> {
    let bmr = calculate_bmr(weight_kg, height_cm, age, gender)?;
    let tdee = round2(bmr * activity.multiplier());

    Ok(Tdee {
        tdee,
        category: CaloricNeeds::from_tdee(tdee),
    })
}

/// Split a calorie budget into grams of protein, fat and carbohydrate
pub fn calculate_macros(tdee: f64, goal: DietGoal) -> CalcResult<Macros> {
    ensure_positive("tdee", tdee)?;

    let (protein, fat, carbs) = goal.calorie_split();
    Ok(Macros {
        protein: round2(tdee * protein / PROTEIN_KCAL_PER_GRAM),
        fat: round2(tdee * fat / FAT_KCAL_PER_GRAM),
        carbs: round2(tdee * carbs / CARB_KCAL_PER_GRAM),
    })
}
