//! # Grid Mathematics
//!
//! Clamping and interpolation on integer grid coordinates.

/// Clamps `value` into `[low, high]`, applying the lower bound first.
///
/// Unlike [`i32::clamp`] this never panics: when `low > high` the result is
/// `high`, which keeps degenerate (tiny) grids from aborting generation.
///
/// # Examples
///
/// ```
/// use towerforge::utils::clamp_axis;
///
/// assert_eq!(clamp_axis(-3, 1, 18), 1);
/// assert_eq!(clamp_axis(7, 1, 18), 7);
/// assert_eq!(clamp_axis(30, 1, 18), 18);
/// ```
pub fn clamp_axis(value: i32, low: i32, high: i32) -> i32 {
    value.max(low).min(high)
}

/// Interpolates from `from` towards `to` by `fraction`, truncating toward zero.
///
/// Truncation (not rounding) is what gives curved paths their slightly
/// uneven stepping; keep it when touching this.
///
/// # Examples
///
/// ```
/// use towerforge::utils::lerp_truncated;
///
/// assert_eq!(lerp_truncated(0, 10, 0.5), 5);
/// assert_eq!(lerp_truncated(0, 10, 0.33), 3);
/// assert_eq!(lerp_truncated(10, 0, 0.33), 6);
/// ```
pub fn lerp_truncated(from: i32, to: i32, fraction: f64) -> i32 {
    (f64::from(from) + f64::from(to - from) * fraction) as i32
}
