//! Time calculation utilities for scroll animations
//!
//! Pure functions over explicit timestamps so animation progress can be
//! computed deterministically in tests.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation that began
/// at `start` and runs for `duration`. Clamped to [0.0, 1.0].
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation has run to completion at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll offsets)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16_downward() {
        assert_eq!(lerp_u16(100, 0, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway() {
        let start = Instant::now();
        let now = start + Duration::from_millis(75);
        let p = progress(start, now, Duration::from_millis(150));
        assert!((p - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_progress_now_before_start() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        // `now` earlier than `start` saturates to zero progress
        assert!((progress(start + duration, start, duration) - 0.0).abs() < 0.001);
        assert!(!is_complete(start + duration, start, duration));
    }
}
