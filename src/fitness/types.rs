//! Closed input sets for the fitness calculators
//!
//! Each enum parses from and displays as its snake_case tag ("very_active",
//! "bench_press", ...). An unknown tag is a validation failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

macro_rules! tagged_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(CalcError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Sex used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

tagged_enum!(Gender, "gender", { Male => "male", Female => "female" });

/// Daily activity level for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

tagged_enum!(ActivityLevel, "activity level", {
    Sedentary => "sedentary",
    Light => "light",
    Moderate => "moderate",
    Active => "active",
    VeryActive => "very_active",
});

impl ActivityLevel {
    /// BMR multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Exercise for one-rep-max estimation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squat,
    Deadlift,
    BenchPress,
    #[default]
    Generic,
}

tagged_enum!(Exercise, "exercise", {
    Squat => "squat",
    Deadlift => "deadlift",
    BenchPress => "bench_press",
    Generic => "generic",
});

impl Exercise {
    /// Epley denominator: 1RM = weight × (1 + reps / divisor)
    pub fn rep_divisor(&self) -> f64 {
        match self {
            Exercise::Squat => 33.33,
            Exercise::Deadlift => 30.0,
            Exercise::BenchPress => 40.0,
            Exercise::Generic => 30.0,
        }
    }
}

/// Training intensity as a band of heart rate reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    VeryLight,
    Light,
    Moderate,
    Hard,
    VeryHard,
}

tagged_enum!(Intensity, "intensity", {
    VeryLight => "very_light",
    Light => "light",
    Moderate => "moderate",
    Hard => "hard",
    VeryHard => "very_hard",
});

impl Intensity {
    /// (lower, upper) fraction of heart rate reserve
    pub fn reserve_band(&self) -> (f64, f64) {
        match self {
            Intensity::VeryLight => (0.0, 0.19),
            Intensity::Light => (0.20, 0.39),
            Intensity::Moderate => (0.40, 0.59),
            Intensity::Hard => (0.60, 0.84),
            Intensity::VeryHard => (0.85, 1.0),
        }
    }
}

/// Macronutrient split goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    Balanced,
    LowCarb,
    HighCarb,
    Ketogenic,
}

tagged_enum!(DietGoal, "diet goal", {
    Balanced => "balanced",
    LowCarb => "low_carb",
    HighCarb => "high_carb",
    Ketogenic => "ketogenic",
});

impl DietGoal {
    /// Share of calories as (protein, fat, carbs)
    pub fn calorie_split(&self) -> (f64, f64, f64) {
        match self {
            DietGoal::Balanced => (0.30, 0.30, 0.40),
            DietGoal::LowCarb => (0.40, 0.40, 0.20),
            DietGoal::HighCarb => (0.20, 0.20, 0.60),
            DietGoal::Ketogenic => (0.25, 0.70, 0.05),
        }
    }
}

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
}

tagged_enum!(WeightUnit, "weight unit", { Kilograms => "kg", Pounds => "lb" });
