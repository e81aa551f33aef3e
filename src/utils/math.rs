/// Fraction of a gap that survives one exponential step of size `amount`.
///
/// Clamped at zero so that an `amount >= 1` collapses the gap entirely.
#[inline]
pub fn retention_factor(amount: f32) -> f32 {
    (1.0 - amount).max(0.0)
}

/// Moves `bound` toward `target`, keeping `retention_factor(amount)` of the gap.
#[inline]
pub fn approach(bound: f32, target: f32, amount: f32) -> f32 {
    target + (bound - target) * retention_factor(amount)
}

/// Position of `value` inside `[lower, upper]`, clamped to `[0, 1]`.
///
/// A zero (or degenerate) range yields `0.0` instead of dividing by zero.
/// Computed in `f64` so bounds near `f32::MAX` cannot overflow the range.
#[inline]
pub fn normalize_within(value: f32, lower: f32, upper: f32) -> f32 {
    let range = f64::from(upper) - f64::from(lower);
    if range.is_nan() || range <= 0.0 || value.is_nan() {
        return 0.0;
    }
    let n = (f64::from(value) - f64::from(lower)) / range;
    if n.is_nan() {
        return 0.0;
    }
    n.clamp(0.0, 1.0) as f32
}
