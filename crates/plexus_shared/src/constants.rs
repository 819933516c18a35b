//! # Engine Constants
//!
//! Tuned values for the ambient background and the typewriter.
//!
//! **CRITICAL:** These are the hand-tuned look of the site. Changing them
//! changes the feel; do it deliberately.

// =============================================================================
// PARTICLE FIELD
// =============================================================================

/// Number of particles in the field at all times.
pub const PARTICLE_COUNT: usize = 80;

/// Minimum particle radius (pixels).
pub const RADIUS_MIN: f32 = 1.0;

/// Maximum particle radius (pixels, exclusive).
pub const RADIUS_MAX: f32 = 3.0;

/// Velocity components are sampled uniformly from `-MAX_SPEED..MAX_SPEED`.
pub const MAX_SPEED: f32 = 0.25;

/// Particles closer than this get a connecting line (pixels).
pub const LINK_DISTANCE: f32 = 120.0;

/// Link opacity at distance zero; falls off linearly to zero at
/// [`LINK_DISTANCE`].
pub const LINK_MAX_ALPHA: f32 = 0.35;

/// Link stroke width (pixels).
pub const LINK_WIDTH: f32 = 1.0;

/// Frame rate the interval clock targets (frames per second).
pub const TICK_RATE: u32 = 60;

// =============================================================================
// TYPEWRITER
// =============================================================================

/// Delay between revealed characters (milliseconds).
pub const TYPE_DELAY_MS: u64 = 100;

/// Hold on the fully typed role before deleting (milliseconds).
pub const HOLD_DELAY_MS: u64 = 900;

/// Delay between deleted characters (milliseconds).
pub const DELETE_DELAY_MS: u64 = 45;

// =============================================================================
// CONTACT
// =============================================================================

/// How long the "sent" banner stays visible (milliseconds).
pub const BANNER_MS: u64 = 3000;
