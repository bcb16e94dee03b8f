//! Rounding helpers used when deriving and publishing values.
//!
//! All published numbers are rounded at the point they are produced, and any
//! statistic over published numbers is computed over the rounded values. Ties
//! round toward positive infinity at every precision.

/// Round to `decimals` places, ties toward positive infinity.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format with exactly `decimals` places, rounding ties toward positive
/// infinity, e.g. `fmt_fixed(26.0, 1)` is "26.0".
pub fn fmt_fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}
