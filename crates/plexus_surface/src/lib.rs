//! # PLEXUS Surface
//!
//! The drawing contract between the particle field and the host
//! environment:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  SURFACE PIPELINE                    │
//! ├──────────────────────────────────────────────────────┤
//! │  ParticleField::draw → Surface trait → backend       │
//! │         ↓                   ↓              ↓         │
//! │   clear/circle/line   CommandSurface   RasterSurface │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A host without 2D capability simply provides no surface; the field loop
//! then performs no initialization or scheduling at all.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod command;
pub mod surface;

#[cfg(feature = "raster")]
pub mod raster;

pub use command::RenderCommand;
pub use surface::{CommandSurface, Surface};

#[cfg(feature = "raster")]
pub use raster::RasterSurface;
