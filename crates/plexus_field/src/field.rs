//! The particle field: initialization, ticking, and the link pass.

use plexus_shared::{constants, Color};
use plexus_surface::Surface;
use rand::Rng;
use serde::Deserialize;

use crate::particle::Particle;

/// Configuration for the field.
///
/// Defaults are the hand-tuned look of the site; configs loaded from TOML
/// may override any subset of fields.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles kept alive at all times.
    pub count: usize,
    /// Minimum draw radius (pixels).
    pub radius_min: f32,
    /// Maximum draw radius (pixels, exclusive).
    pub radius_max: f32,
    /// Velocity components are sampled from `-max_speed..max_speed`.
    pub max_speed: f32,
    /// Pairs closer than this get a connecting line (pixels).
    pub link_distance: f32,
    /// Link opacity at distance zero.
    pub link_max_alpha: f32,
    /// Link stroke width (pixels).
    pub link_width: f32,
    /// Particle fill color.
    pub particle_color: Color,
    /// Link hue; alpha is replaced per line by the falloff law.
    pub link_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: constants::PARTICLE_COUNT,
            radius_min: constants::RADIUS_MIN,
            radius_max: constants::RADIUS_MAX,
            max_speed: constants::MAX_SPEED,
            link_distance: constants::LINK_DISTANCE,
            link_max_alpha: constants::LINK_MAX_ALPHA,
            link_width: constants::LINK_WIDTH,
            particle_color: Color::PARTICLE,
            link_color: Color::TEAL,
        }
    }
}

/// Per-field counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Simulation ticks performed since the last initialization.
    pub ticks: u64,
    /// Links drawn by the most recent draw pass.
    pub links_last_frame: u32,
    /// Times the field has been (re)initialized.
    pub inits: u32,
}

/// Link opacity for a pair at the given distance.
///
/// Linear falloff: `max_alpha` at distance zero, zero at `link_distance`,
/// `None` at or beyond it (no line drawn).
#[must_use]
pub fn link_alpha(dist: f32, link_distance: f32, max_alpha: f32) -> Option<f32> {
    if dist < link_distance {
        Some(((link_distance - dist) / link_distance) * max_alpha)
    } else {
        None
    }
}

/// The ambient particle field.
///
/// Owns exactly `config.count` particles during steady state. `init` fully
/// replaces the set (resize discards prior state, no migration); `step`
/// advances one tick; `draw` emits the frame's surface commands.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    stats: FieldStats,
}

impl ParticleField {
    /// Creates an empty field. Call [`init`](Self::init) before stepping.
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        let capacity = config.count;
        Self {
            config,
            particles: Vec::with_capacity(capacity),
            width: 0.0,
            height: 0.0,
            stats: FieldStats::default(),
        }
    }

    /// (Re)populates the field for a viewport of `width × height`.
    ///
    /// Callable repeatedly; the prior particle set is discarded wholesale.
    pub fn init<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..self.config.count {
            self.particles.push(Particle::spawn(
                rng,
                width,
                height,
                self.config.radius_min,
                self.config.radius_max,
                self.config.max_speed,
            ));
        }
        self.stats.ticks = 0;
        self.stats.inits += 1;
        tracing::info!(
            "Particle field initialized: {} particles over {width}x{height}",
            self.particles.len()
        );
    }

    /// Handles a viewport resize: new dimensions, fresh particle set.
    pub fn resize<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.init(rng, width, height);
    }

    /// Advances the simulation by one tick.
    ///
    /// Positions integrate first; the bounds check uses the post-move
    /// position, so a particle leaving the viewport flips its velocity
    /// sign and may overshoot by one tick's displacement. Reflective
    /// walls, never clamping.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.vel.y = -p.vel.y;
            }
        }
        self.stats.ticks += 1;
    }

    /// Draws the current frame: clear, one circle per particle, then a
    /// line for every pair within link distance.
    ///
    /// The proximity graph is recomputed from scratch every frame; with
    /// the default 80 particles that is 3160 pair checks.
    pub fn draw<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, self.config.particle_color);
        }

        let mut links = 0u32;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i];
                let b = self.particles[j];
                let dist = a.pos.distance(b.pos);
                if let Some(alpha) =
                    link_alpha(dist, self.config.link_distance, self.config.link_max_alpha)
                {
                    surface.stroke_line(
                        a.pos,
                        b.pos,
                        self.config.link_color.with_alpha(alpha),
                        self.config.link_width,
                    );
                    links += 1;
                }
            }
        }
        self.stats.links_last_frame = links;
    }

    /// The current particle set.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current viewport size.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Counters for the current field lifetime.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexus_shared::Vec2;
    use plexus_surface::{CommandSurface, RenderCommand};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_init_populates_exact_count_in_bounds() {
        let mut field = ParticleField::new(FieldConfig::default());
        field.init(&mut seeded(), 1024.0, 768.0);

        assert_eq!(field.particles().len(), 80);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 1024.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 768.0);
        }
    }

    #[test]
    fn test_reinit_fully_replaces_particles() {
        let mut field = ParticleField::new(FieldConfig::default());
        let mut rng = seeded();
        field.init(&mut rng, 1024.0, 768.0);
        let before = field.particles().to_vec();

        field.resize(&mut rng, 640.0, 480.0);
        assert_eq!(field.particles().len(), 80);
        assert_ne!(field.particles(), before.as_slice());
        assert_eq!(field.size(), (640.0, 480.0));
        assert_eq!(field.stats().inits, 2);
        assert_eq!(field.stats().ticks, 0);
    }

    #[test]
    fn test_boundary_reflection_flips_sign_post_move() {
        let mut field = ParticleField::new(FieldConfig {
            count: 1,
            ..FieldConfig::default()
        });
        field.init(&mut seeded(), 100.0, 100.0);
        field.particles_mut()[0] = Particle {
            pos: Vec2::new(0.0, 50.0),
            vel: Vec2::new(-0.1, 0.0),
            radius: 1.0,
        };

        field.step();
        let p = field.particles()[0];
        // Post-move position is outside; velocity flips but the particle
        // keeps its overshoot for this tick.
        assert!(p.vel.x > 0.0);
        assert!((p.pos.x - -0.1).abs() < 1e-6);
    }

    #[test]
    fn test_interior_particle_keeps_velocity() {
        let mut field = ParticleField::new(FieldConfig {
            count: 1,
            ..FieldConfig::default()
        });
        field.init(&mut seeded(), 100.0, 100.0);
        field.particles_mut()[0] = Particle {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::new(0.2, -0.2),
            radius: 1.0,
        };

        field.step();
        let p = field.particles()[0];
        assert_eq!(p.vel, Vec2::new(0.2, -0.2));
        assert_eq!(p.pos, Vec2::new(50.2, 49.8));
    }

    #[test]
    fn test_link_alpha_falloff() {
        let alpha = link_alpha(60.0, 120.0, 0.35).expect("within link distance");
        assert!((alpha - 0.175).abs() < 1e-6);

        let full = link_alpha(0.0, 120.0, 0.35).expect("distance zero");
        assert!((full - 0.35).abs() < 1e-6);

        assert_eq!(link_alpha(120.0, 120.0, 0.35), None);
        assert_eq!(link_alpha(500.0, 120.0, 0.35), None);
    }

    #[test]
    fn test_draw_emits_clear_circles_then_links() {
        let mut field = ParticleField::new(FieldConfig {
            count: 2,
            ..FieldConfig::default()
        });
        field.init(&mut seeded(), 200.0, 200.0);
        *field.particles_mut() = vec![
            Particle {
                pos: Vec2::new(10.0, 10.0),
                vel: Vec2::ZERO,
                radius: 2.0,
            },
            Particle {
                pos: Vec2::new(70.0, 10.0),
                vel: Vec2::ZERO,
                radius: 2.0,
            },
        ];

        let mut surface = CommandSurface::new(200.0, 200.0);
        field.draw(&mut surface);

        assert_eq!(surface.commands()[0], RenderCommand::Clear);
        assert_eq!(surface.stats().circles_last_frame, 2);
        // Distance 60 < 120, so exactly one link at alpha 0.175.
        assert_eq!(surface.stats().lines_last_frame, 1);
        assert_eq!(field.stats().links_last_frame, 1);
        let alpha = match surface.commands().last() {
            Some(RenderCommand::Line { color, .. }) => color.a,
            other => panic!("expected a link, got {other:?}"),
        };
        assert!((alpha - 0.175).abs() < 1e-6);
    }

    #[test]
    fn test_distant_pair_draws_no_link() {
        let mut field = ParticleField::new(FieldConfig {
            count: 2,
            ..FieldConfig::default()
        });
        field.init(&mut seeded(), 500.0, 500.0);
        *field.particles_mut() = vec![
            Particle {
                pos: Vec2::new(0.0, 0.0),
                vel: Vec2::ZERO,
                radius: 1.0,
            },
            Particle {
                pos: Vec2::new(400.0, 0.0),
                vel: Vec2::ZERO,
                radius: 1.0,
            },
        ];

        let mut surface = CommandSurface::new(500.0, 500.0);
        field.draw(&mut surface);
        assert_eq!(surface.stats().lines_last_frame, 0);
    }

    #[test]
    fn test_determinism_under_seed() {
        let mut a = ParticleField::new(FieldConfig::default());
        let mut b = ParticleField::new(FieldConfig::default());
        a.init(&mut seeded(), 800.0, 600.0);
        b.init(&mut seeded(), 800.0, 600.0);

        for _ in 0..120 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
    }
}
