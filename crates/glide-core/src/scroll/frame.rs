//! L4 Atomic Layer: Frame scheduling
//!
//! The animator never sleeps on its own; it awaits `next_frame` on an
//! injected scheduler. `TokioFrames` ticks in real time, `SteppedFrames`
//! advances a virtual clock by a fixed step per frame.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant};

use super::timing::frame_interval;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Source of display frames plus a monotonic clock, both in milliseconds
#[async_trait]
pub trait FrameScheduler: Send + Sync {
    /// Current time on the scheduler's clock
    fn now(&self) -> f64;

    /// Wait for the next frame and return its timestamp
    async fn next_frame(&self) -> f64;
}

/// Real-time frames on a fixed grid of `period` boundaries
///
/// Every waiter wakes on the same boundary, so concurrent animations all
/// receive each frame.
#[derive(Debug)]
pub struct TokioFrames {
    origin: Instant,
    period: Duration,
}

impl TokioFrames {
    pub fn new(period: Duration) -> Self {
        Self {
            origin: Instant::now(),
            period: period.max(MIN_PERIOD),
        }
    }

    pub fn with_fps(fps: u32) -> Self {
        Self::new(frame_interval(fps))
    }

    /// First frame boundary strictly after `now`
    fn next_boundary(&self, now: Instant) -> Instant {
        let period = self.period.as_nanos();
        let elapsed = now.saturating_duration_since(self.origin).as_nanos();
        let next = (elapsed / period + 1) * period;
        self.origin + Duration::from_nanos(u64::try_from(next).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl FrameScheduler for TokioFrames {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    async fn next_frame(&self) -> f64 {
        time::sleep_until(self.next_boundary(Instant::now())).await;
        self.now()
    }
}

/// Deterministic frames: each frame advances a virtual clock by `step_ms`
#[derive(Debug)]
pub struct SteppedFrames {
    step_ms: f64,
    clock: Mutex<f64>,
    frames: AtomicUsize,
}

impl SteppedFrames {
    /// Non-positive or non-finite steps fall back to 1ms so the clock always moves
    pub fn new(step_ms: f64) -> Self {
        let step_ms = if step_ms.is_finite() && step_ms > 0.0 {
            step_ms
        } else {
            1.0
        };
        Self {
            step_ms,
            clock: Mutex::new(0.0),
            frames: AtomicUsize::new(0),
        }
    }

    pub fn with_fps(fps: u32) -> Self {
        Self::new(frame_interval(fps).as_secs_f64() * 1000.0)
    }

    /// Number of frames handed out so far
    pub fn frames(&self) -> usize {
        self.frames.load(Ordering::SeqCst)
    }

    /// Move the clock without producing a frame
    pub fn advance(&self, ms: f64) {
        *self.clock.lock().unwrap_or_else(PoisonError::into_inner) += ms;
    }
}

#[async_trait]
impl FrameScheduler for SteppedFrames {
    fn now(&self) -> f64 {
        *self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn next_frame(&self) -> f64 {
        // Let other tasks interleave, as a real frame boundary would
        tokio::task::yield_now().await;
        self.frames.fetch_add(1, Ordering::SeqCst);
        let mut clock = self.clock.lock().unwrap_or_else(PoisonError::into_inner);
        *clock += self.step_ms;
        *clock
    }
}
