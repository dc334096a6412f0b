/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
///
/// Returns exactly `a` when `t == 0` or when `a == b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Moves `current` a fraction `rate` of the way towards `target`.
///
/// This is the exponential smoothing step used by every per-tick "lerp factor"
/// in the vehicle and camera models.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Applies `approach`, skipping steps no larger than `epsilon`.
#[inline]
#[must_use]
pub fn approach_significant(current: f32, target: f32, rate: f32, epsilon: f32) -> f32 {
    let delta = (target - current) * rate;
    if delta.abs() > epsilon {
        current + delta
    } else {
        current
    }
}
