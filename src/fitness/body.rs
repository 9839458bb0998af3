//! Body composition: BMI, BMR, body fat and weight conversion

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Gender, WeightUnit};
use crate::error::{ensure_positive, CalcError, CalcResult};
use crate::rounding::round2;

/// Kilograms to pounds
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// BMI category from the standard adult thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// < 18.5
    Underweight,
    /// [18.5, 25)
    Normal,
    /// [25, 30)
    Overweight,
    /// >= 30
    Obesity,
}

impl BmiCategory {
    /// Contiguous bands: [18.5, 25) normal, [25, 30) overweight.
    /// Values such as 24.95 and 29.95 stay in the lower band rather than falling
    /// through to obesity.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body mass index from weight in kilograms and height in metres
///
/// The category is assigned from the rounded value.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> CalcResult<Bmi> {
    ensure_positive("weight", weight_kg)?;
    ensure_positive("height", height_m)?;

    let bmi = round2(weight_kg / (height_m * height_m));
    Ok(Bmi {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor
///
/// # Arguments
/// * `weight_kg` - Weight in kilograms
/// * `height_cm` - Height in centimetres
/// * `age` - Age in years
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: f64, gender: Gender) -> CalcResult<f64> {
    ensure_positive("weight", weight_kg)?;
    ensure_positive("height", height_cm)?;
    ensure_positive("age", age)?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };

    Ok(round2(bmr))
}

/// Body fat percentage, U.S. Navy circumference method
///
/// All lengths in centimetres. Hip circumference is required for women and
/// ignored for men.
pub fn body_fat_percentage(
    gender: Gender,
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    hips_cm: Option<f64>,
) -> CalcResult<f64> {
    ensure_positive("height", height_cm)?;
    ensure_positive("neck", neck_cm)?;
    ensure_positive("waist", waist_cm)?;

    let density = match gender {
        Gender::Male => {
            let girth = waist_cm - neck_cm;
            ensure_positive("waist - neck", girth)?;
            1.0324 - 0.19077 * girth.log10() + 0.15456 * height_cm.log10()
        }
        Gender::Female => {
            let hips = hips_cm.ok_or(CalcError::Missing {
                field: "hips",
                reason: "hip circumference is needed for women",
            })?;
            ensure_positive("hips", hips)?;
            let girth = waist_cm + hips - neck_cm;
            ensure_positive("waist + hips - neck", girth)?;
            1.29579 - 0.35004 * girth.log10() + 0.221 * height_cm.log10()
        }
    };

    Ok(round2(495.0 / density - 450.0))
}

/// Convert a weight into `to`; the input is taken to be in the other unit
pub fn convert_weight(weight: f64, to: WeightUnit) -> CalcResult<f64> {
    ensure_positive("weight", weight)?;

    let converted = match to {
        WeightUnit::Pounds => weight * POUNDS_PER_KILOGRAM,
        WeightUnit::Kilograms => weight / POUNDS_PER_KILOGRAM,
    };

    Ok(round2(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bmi_normal() {
        let result = calculate_bmi(70.0, 1.75).unwrap();
        assert_abs_diff_eq!(result.bmi, 22.86, epsilon = 1e-9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.to_string(), "Normal weight");
    }

    #[test]
    fn test_bmi_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.95), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_bmi_bands_have_no_gaps() {
        for bmi in [24.9, 24.95, 24.999] {
            assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal, "bmi {}", bmi);
        }
        for bmi in [29.9, 29.95, 29.999] {
            assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Overweight, "bmi {}", bmi);
        }
        // 77.5 kg at 1.7625 m gives 24.95 after rounding
        let result = calculate_bmi(77.5, 1.7625).unwrap();
        assert_eq!(result.bmi, 24.95);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_rejects_non_positive() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(-70.0, 1.75).is_err());
    }

    #[test]
    fn test_bmr() {
        assert_abs_diff_eq!(calculate_bmr(70.0, 175.0, 30.0, Gender::Male).unwrap(), 1648.75, epsilon = 1e-9);
        assert_abs_diff_eq!(calculate_bmr(60.0, 165.0, 25.0, Gender::Female).unwrap(), 1345.25, epsilon = 1e-9);
    }

    #[test]
    fn test_body_fat_male() {
        let bf = body_fat_percentage(Gender::Male, 178.0, 37.0, 85.0, None).unwrap();
        assert_abs_diff_eq!(bf, 17.2, epsilon = 1e-9);
    }

    #[test]
    fn test_body_fat_female() {
        let bf = body_fat_percentage(Gender::Female, 165.0, 33.0, 75.0, Some(100.0)).unwrap();
        assert_abs_diff_eq!(bf, 29.43, epsilon = 1e-9);
    }

    #[test]
    fn test_body_fat_female_requires_hips() {
        assert!(matches!(
            body_fat_percentage(Gender::Female, 165.0, 33.0, 75.0, None),
            Err(CalcError::Missing { field: "hips", .. })
        ));
        assert!(body_fat_percentage(Gender::Female, 165.0, 33.0, 75.0, Some(0.0)).is_err());
    }

    #[test]
    fn test_body_fat_rejects_neck_wider_than_waist() {
        assert!(body_fat_percentage(Gender::Male, 178.0, 90.0, 85.0, None).is_err());
    }

    #[test]
    fn test_convert_weight() {
        assert_abs_diff_eq!(convert_weight(70.0, WeightUnit::Pounds).unwrap(), 154.32, epsilon = 1e-9);
        assert_abs_diff_eq!(convert_weight(154.0, WeightUnit::Kilograms).unwrap(), 69.85, epsilon = 1e-9);
        assert!(convert_weight(0.0, WeightUnit::Pounds).is_err());
    }
}
