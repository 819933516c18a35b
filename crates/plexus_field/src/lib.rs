//! # PLEXUS Field
//!
//! The ambient background simulation: a fixed-size set of drifting points
//! with proximity-based connecting lines.
//!
//! ```text
//! Frame N:
//! ┌────────────────────────────────────────────────────┐
//! │ 1. STEP      position += velocity                  │
//! │ 2. REFLECT   post-move out of bounds → flip sign   │
//! │ 3. DRAW      clear, circles, O(n²) link pass       │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! The field owns its particles exclusively; the only way anything leaves
//! this crate is as a stream of surface commands.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod field;
pub mod particle;

pub use field::{link_alpha, FieldConfig, FieldStats, ParticleField};
pub use particle::Particle;
