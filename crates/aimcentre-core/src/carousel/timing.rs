//! Time and interpolation helpers for carousel motion.

use std::time::Duration;

/// Progress (0.0 to 1.0) of an animation that has run for `elapsed`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Wrap an offset into `[0, period)`
///
/// Returns the offset unchanged when the period is not positive.
#[inline]
pub fn wrap(offset: f64, period: f64) -> f64 {
    if period <= 0.0 || !period.is_finite() {
        return offset;
    }
    let wrapped = offset.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Duration of one frame at the given rate (60fps fallback for 0)
#[inline]
pub fn frame_duration(frame_rate: u32) -> Duration {
    if frame_rate == 0 {
        Duration::from_millis(16)
    } else {
        Duration::from_secs_f64(1.0 / frame_rate as f64)
    }
}
