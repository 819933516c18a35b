//! A single drifting point.

use plexus_shared::Vec2;
use rand::Rng;

/// One particle in the field.
///
/// Created at initialization, mutated every tick, never destroyed except
/// by a full reinitialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface space.
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Draw radius in pixels.
    pub radius: f32,
}

impl Particle {
    /// Samples a fresh particle for a viewport of the given size.
    ///
    /// Position is uniform over `[0, w) × [0, h)`, radius uniform over
    /// `[radius_min, radius_max)`, each velocity component uniform over
    /// `[-max_speed, max_speed)`.
    #[must_use]
    pub fn spawn<R: Rng>(
        rng: &mut R,
        width: f32,
        height: f32,
        radius_min: f32,
        radius_max: f32,
        max_speed: f32,
    ) -> Self {
        Self {
            pos: Vec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
            vel: Vec2::new(
                uniform(rng, -max_speed, max_speed),
                uniform(rng, -max_speed, max_speed),
            ),
            radius: uniform(rng, radius_min, radius_max),
        }
    }
}

/// Uniform sample in `[min, max)`.
///
/// Written as `min + r * (max - min)` rather than a range sample so an
/// empty range (zero-sized viewport) degenerates to `min` instead of
/// panicking.
fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
