//! Tokio-backed implementations of the clock traits.

use std::time::Duration;

use async_trait::async_trait;
use plexus_shared::{FrameClock, Timer};
use tokio::time::{Interval, MissedTickBehavior};

/// Real delay timer on top of `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Frame signal at a fixed rate - the vsync stand-in.
///
/// Missed ticks are skipped, not replayed: after a stall the loop resumes
/// at the current frame instead of fast-forwarding through a backlog.
#[derive(Debug)]
pub struct IntervalFrameClock {
    interval: Interval,
}

impl IntervalFrameClock {
    /// Creates a clock firing `fps` frames per second.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

#[async_trait]
impl FrameClock for IntervalFrameClock {
    async fn next_frame(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_fires_at_rate() {
        let mut clock = IntervalFrameClock::new(60);
        // First tick is immediate, the rest are ~16.6ms apart.
        assert!(clock.next_frame().await);
        let before = tokio::time::Instant::now();
        assert!(clock.next_frame().await);
        let elapsed = before.elapsed();
        assert!(elapsed >= Duration::from_millis(16));
        assert!(elapsed <= Duration::from_millis(18));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_sleeps_logical_time() {
        let before = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(900)).await;
        assert!(before.elapsed() >= Duration::from_millis(900));
    }
}
