//! Output rounding
//!
//! Every monetary and measurement result leaves the library rounded to cents.

/// Round to 2 decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
