//! Training targets: heart-rate zones and one-rep max

use serde::{Deserialize, Serialize};

use super::types::{Exercise, Intensity};
use crate::error::{ensure_nonzero, ensure_positive, CalcResult};
use crate::rounding::round2;

/// Target heart rate band in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    pub min_bpm: f64,
    pub max_bpm: f64,
}

/// Estimated maximum heart rate: 206.9 − 0.67 × age
pub fn max_heart_rate(age: f64) -> f64 {
    206.9 - 0.67 * age
}

/// Karvonen target zone: (HRmax − HRrest) × fraction + HRrest, to whole beats
pub fn heart_rate_zone(age: f64, resting_hr: f64, intensity: Intensity) -> CalcResult<HeartRateZone> {
    ensure_positive("age", age)?;
    ensure_positive("resting_heart_rate", resting_hr)?;

    let reserve = max_heart_rate(age) - resting_hr;
    let (low, high) = intensity.reserve_band();

    Ok(HeartRateZone {
        min_bpm: (reserve * low + resting_hr).round(),
        max_bpm: (reserve * high + resting_hr).round(),
    })
}

/// Epley one-rep max with an exercise-specific repetition divisor
pub fn one_rep_max(weight: f64, reps: u32, exercise: Exercise) -> CalcResult<f64> {
    ensure_positive("weight", weight)?;
    ensure_nonzero("reps", reps)?;

    Ok(round2(weight * (1.0 + reps as f64 / exercise.rep_divisor())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hard_zone() {
        // HRmax 186.8, reserve 126.8
        let zone = heart_rate_zone(30.0, 60.0, Intensity::Hard).unwrap();
        assert_eq!(zone.min_bpm, 136.0);
        assert_eq!(zone.max_bpm, 167.0);
    }

    #[test]
    fn test_very_light_starts_at_rest() {
        let zone = heart_rate_zone(30.0, 60.0, Intensity::VeryLight).unwrap();
        assert_eq!(zone.min_bpm, 60.0);
        assert_eq!(zone.max_bpm, 84.0);
    }

    #[test]
    fn test_zones_rise_with_intensity() {
        let moderate = heart_rate_zone(45.0, 65.0, Intensity::Moderate).unwrap();
        let very_hard = heart_rate_zone(45.0, 65.0, Intensity::VeryHard).unwrap();
        assert!(very_hard.min_bpm > moderate.max_bpm);
        assert_abs_diff_eq!(very_hard.max_bpm, max_heart_rate(45.0).round(), epsilon = 1e-9);
    }

    #[test]
    fn test_zone_rejects_invalid() {
        assert!(heart_rate_zone(0.0, 60.0, Intensity::Light).is_err());
        assert!(heart_rate_zone(30.0, -1.0, Intensity::Light).is_err());
    }

    #[test]
    fn test_one_rep_max() {
        assert_abs_diff_eq!(one_rep_max(100.0, 5, Exercise::Squat).unwrap(), 115.0, epsilon = 1e-9);
        assert_abs_diff_eq!(one_rep_max(100.0, 5, Exercise::Deadlift).unwrap(), 116.67, epsilon = 1e-9);
        assert_abs_diff_eq!(one_rep_max(100.0, 5, Exercise::BenchPress).unwrap(), 112.5, epsilon = 1e-9);
        assert_eq!(
            one_rep_max(100.0, 5, Exercise::Generic).unwrap(),
            one_rep_max(100.0, 5, Exercise::Deadlift).unwrap()
        );
        assert!(one_rep_max(100.0, 0, Exercise::Generic).is_err());
    }
}
