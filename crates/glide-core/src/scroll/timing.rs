//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Pure functions for animation progress and position interpolation.
//! Timestamps are milliseconds on the frame scheduler's clock.

use std::time::Duration;

/// Calculate animation progress from elapsed time and duration
///
/// # Arguments
/// * `elapsed_ms` - Milliseconds since the animation started
/// * `duration_ms` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]; a zero duration is always complete
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms as f64).clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(elapsed_ms: f64, duration_ms: u64) -> bool {
    progress(elapsed_ms, duration_ms) >= 1.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolated scroll location, floored to a whole pixel
#[inline]
pub fn scroll_location(from: f64, to: f64, eased: f64) -> f64 {
    lerp(from, to, eased).floor()
}

/// Frame interval for a target frame rate
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        // Never shorter than 1ms; a zero period would stall or panic the clocks
        Duration::from_millis((1000 / fps as u64).max(1))
    }
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
    fn test_scroll_location_floors() {
        assert_eq!(scroll_location(0.0, 100.0, 0.555), 55.0);
        assert_eq!(scroll_location(100.0, 0.0, 0.555), 44.0);
        assert_eq!(scroll_location(0.0, -100.0, 0.5), -50.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(150.0, 300), 0.5);
        assert_eq!(progress(600.0, 300), 1.0);
        assert_eq!(progress(-5.0, 300), 0.0);
        assert!(is_complete(300.0, 300));
        assert!(!is_complete(299.0, 300));
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(0.0, 0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(60), Duration::from_millis(16));
        assert_eq!(frame_interval(0), Duration::from_millis(16));
        assert_eq!(frame_interval(120), Duration::from_millis(8));
        assert_eq!(frame_interval(2000), Duration::from_millis(1));
        assert_eq!(frame_interval(u32::MAX), Duration::from_millis(1));
    }
}
