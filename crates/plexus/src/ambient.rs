//! The two cancelable background loops.
//!
//! Each loop is one task that owns its state exclusively and checks its
//! [`CancelFlag`] before every resumption. There is no shared mutable
//! state between them and no locking inside either loop's hot path.

use std::sync::Arc;

use parking_lot::RwLock;
use plexus_field::ParticleField;
use plexus_shared::{CancelFlag, FrameClock, Timer};
use plexus_surface::Surface;
use plexus_typing::Typewriter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::watch;

/// Viewport dimensions delivered by the host environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Creates the resize channel: the host holds the sender, the field loop
/// holds the receiver.
///
/// Dropping the loop drops the subscription with it - acquire and release
/// are tied to the loop's lifetime, not to an ambient global.
#[must_use]
pub fn viewport_channel(initial: Viewport) -> (watch::Sender<Viewport>, watch::Receiver<Viewport>) {
    watch::channel(initial)
}

/// The particle-field loop: one tick and one draw per frame signal.
pub struct FieldLoop<S: Surface, C: FrameClock> {
    field: ParticleField,
    surface: S,
    clock: C,
    viewport: watch::Receiver<Viewport>,
    cancel: CancelFlag,
    rng: ChaCha8Rng,
}

impl<S: Surface, C: FrameClock> FieldLoop<S, C> {
    /// Builds the loop and initializes the field to the surface size.
    ///
    /// `surface` is `None` when the host has no 2D capability; in that
    /// case nothing is initialized or scheduled and no subscription is
    /// registered - a silent no-op, not an error.
    pub fn start(
        field: ParticleField,
        surface: Option<S>,
        clock: C,
        viewport: watch::Receiver<Viewport>,
        seed: u64,
    ) -> Option<Self> {
        let Some(surface) = surface else {
            tracing::info!("No 2D surface available, particle loop not started");
            return None;
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut field = field;
        let (width, height) = surface.size();
        field.init(&mut rng, width, height);

        Some(Self {
            field,
            surface,
            clock,
            viewport,
            cancel: CancelFlag::new(),
            rng,
        })
    }

    /// Flag that tears the loop down from outside.
    #[must_use]
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Runs until cancelled or until the frame source is exhausted.
    ///
    /// Ticks are strictly sequential - the next one is not scheduled until
    /// the current step and draw have finished. Returns the final field
    /// and surface for inspection.
    pub async fn run(mut self) -> (ParticleField, S) {
        loop {
            if self.cancel.is_cancelled() {
                break;
            }
            if !self.clock.next_frame().await {
                break;
            }
            // A frame signal that fires after teardown must not tick.
            if self.cancel.is_cancelled() {
                break;
            }

            self.apply_pending_resize();
            self.field.step();
            self.field.draw(&mut self.surface);
        }
        tracing::info!(
            "Particle loop stopped after {} ticks",
            self.field.stats().ticks
        );
        (self.field, self.surface)
    }

    /// Picks up a viewport change: resize the surface, reinitialize the
    /// field. Prior particles are discarded, not migrated.
    fn apply_pending_resize(&mut self) {
        // A dropped sender just means the host will never resize again.
        if self.viewport.has_changed().unwrap_or(false) {
            let next = *self.viewport.borrow_and_update();
            self.surface.resize(next.width, next.height);
            let (width, height) = self.surface.size();
            self.field.resize(&mut self.rng, width, height);
        }
    }
}

/// The typewriter loop: sleep the prescribed delay, apply one transition,
/// publish the visible text.
pub struct TypingLoop<T: Timer> {
    typewriter: Typewriter,
    timer: T,
    cancel: CancelFlag,
    display: Arc<RwLock<String>>,
}

impl<T: Timer> TypingLoop<T> {
    /// Creates the loop around a typewriter and a timer.
    #[must_use]
    pub fn new(typewriter: Typewriter, timer: T) -> Self {
        Self {
            typewriter,
            timer,
            cancel: CancelFlag::new(),
            display: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Handle the host reads the hero text through.
    #[must_use]
    pub fn display(&self) -> Arc<RwLock<String>> {
        Arc::clone(&self.display)
    }

    /// Flag that tears the loop down from outside.
    #[must_use]
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Runs until cancelled. The cycle itself has no terminal state.
    pub async fn run(self) -> Typewriter {
        self.run_for(u64::MAX).await
    }

    /// Runs at most `max_steps` transitions (the demo and tests bound it).
    ///
    /// Exactly one sleep is pending at any time - the next one is not
    /// requested until the previous transition has been applied. The
    /// cancel check sits between the sleep and the mutation, so a timer
    /// that fires after teardown never touches state.
    pub async fn run_for(mut self, max_steps: u64) -> Typewriter {
        for _ in 0..max_steps {
            if self.cancel.is_cancelled() {
                break;
            }
            let delay = self.typewriter.delay();
            self.timer.sleep(delay).await;
            if self.cancel.is_cancelled() {
                break;
            }
            self.typewriter.step();
            *self.display.write() = self.typewriter.visible().to_string();
        }
        self.typewriter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexus_field::FieldConfig;
    use plexus_shared::{ManualFrameClock, RecordingTimer};
    use plexus_surface::CommandSurface;
    use plexus_typing::TypingConfig;
    use std::time::Duration;

    fn field() -> ParticleField {
        ParticleField::new(FieldConfig::default())
    }

    fn viewport_rx(width: f32, height: f32) -> watch::Receiver<Viewport> {
        let (_tx, rx) = viewport_channel(Viewport { width, height });
        rx
    }

    #[tokio::test]
    async fn test_field_loop_ticks_once_per_frame() {
        let surface = CommandSurface::new(800.0, 600.0);
        let clock = ManualFrameClock::new(10);
        let looped = FieldLoop::start(field(), Some(surface), clock, viewport_rx(800.0, 600.0), 1)
            .expect("surface available");

        let (field, surface) = looped.run().await;
        assert_eq!(field.stats().ticks, 10);
        assert_eq!(surface.stats().frames, 10);
        assert_eq!(surface.stats().circles_last_frame, 80);
    }

    #[tokio::test]
    async fn test_missing_surface_is_a_silent_noop() {
        let clock = ManualFrameClock::new(10);
        let looped: Option<FieldLoop<CommandSurface, _>> =
            FieldLoop::start(field(), None, clock, viewport_rx(800.0, 600.0), 1);
        assert!(looped.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_loop_never_ticks() {
        let surface = CommandSurface::new(800.0, 600.0);
        let clock = ManualFrameClock::new(10);
        let looped = FieldLoop::start(field(), Some(surface), clock, viewport_rx(800.0, 600.0), 1)
            .expect("surface available");

        // Teardown before any frame fires.
        looped.cancel_flag().cancel();
        let (field, surface) = looped.run().await;
        assert_eq!(field.stats().ticks, 0);
        assert_eq!(surface.stats().frames, 0);
    }

    #[tokio::test]
    async fn test_resize_reinitializes_field() {
        let surface = CommandSurface::new(800.0, 600.0);
        let clock = ManualFrameClock::new(3);
        let (tx, rx) = viewport_channel(Viewport {
            width: 800.0,
            height: 600.0,
        });
        let looped =
            FieldLoop::start(field(), Some(surface), clock, rx, 1).expect("surface available");

        tx.send(Viewport {
            width: 400.0,
            height: 300.0,
        })
        .expect("receiver alive");

        let (field, surface) = looped.run().await;
        assert_eq!(surface.size(), (400.0, 300.0));
        assert_eq!(field.size(), (400.0, 300.0));
        assert_eq!(field.stats().inits, 2);
        for p in field.particles() {
            assert!(p.pos.x >= -1.0 && p.pos.x <= 401.0);
        }
    }

    #[tokio::test]
    async fn test_typing_loop_publishes_and_records_delays() {
        let tw = Typewriter::new(vec!["Go".to_string()], TypingConfig::default()).expect("roles");
        let timer = RecordingTimer::new();
        let looped = TypingLoop::new(tw, timer.clone());
        let display = looped.display();

        let tw = looped.run_for(2).await;
        assert_eq!(tw.char_index(), 2);
        assert_eq!(display.read().as_str(), "Go");
        assert_eq!(
            timer.requested(),
            vec![Duration::from_millis(100), Duration::from_millis(100)]
        );
    }

    #[tokio::test]
    async fn test_typing_loop_cancel_blocks_stale_timer() {
        let tw = Typewriter::new(vec!["Go".to_string()], TypingConfig::default()).expect("roles");
        let looped = TypingLoop::new(tw, RecordingTimer::new());
        looped.cancel_flag().cancel();

        let tw = looped.run_for(100).await;
        // The timer never got to mutate anything.
        assert_eq!(tw.char_index(), 0);
        assert!(!tw.is_deleting());
    }
}
