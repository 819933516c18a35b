//! Clock traits for the two suspension mechanisms in the engine.
//!
//! The particle loop suspends on a per-frame signal; the typewriter and the
//! contact banner suspend on delay timers. Both are injected, never ambient:
//! production code plugs in tokio-backed clocks, tests plug in the
//! deterministic implementations below and never touch real time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

/// A delay timer. Exactly one sleep is pending per driver at any time.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Suspends for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// A per-frame signal source (vsync stand-in).
#[async_trait]
pub trait FrameClock: Send {
    /// Suspends until the next frame.
    ///
    /// Returns `false` when the source is exhausted and the loop should
    /// stop scheduling.
    async fn next_frame(&mut self) -> bool;
}

/// Cooperative teardown flag shared between a driver and its handle.
///
/// Drivers check the flag before every resumption, so cancellation takes
/// effect before the next tick - no operation ever runs on a torn-down
/// instance.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a new, un-cancelled flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests teardown.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once teardown has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Test timer: resolves instantly and records every requested delay.
#[derive(Clone, Debug, Default)]
pub struct RecordingTimer {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingTimer {
    /// Creates a new recording timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every delay requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().push(duration);
    }
}

/// Test frame clock: fires a fixed number of frames, then reports
/// exhaustion.
#[derive(Debug)]
pub struct ManualFrameClock {
    remaining: usize,
    fired: usize,
}

impl ManualFrameClock {
    /// Creates a clock that will fire exactly `frames` frames.
    #[must_use]
    pub fn new(frames: usize) -> Self {
        Self {
            remaining: frames,
            fired: 0,
        }
    }

    /// Number of frames fired so far.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.fired
    }
}

#[async_trait]
impl FrameClock for ManualFrameClock {
    async fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.fired += 1;
        true
    }
}
