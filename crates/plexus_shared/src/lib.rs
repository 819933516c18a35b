//! # PLEXUS Shared Types
//!
//! Common vocabulary for the whole workspace: 2D math, the color palette,
//! the tuned engine constants, and the clock traits that make every timing
//! path drivable by a test.
//!
//! No rendering, no network, no async runtime in here - only traits and
//! plain data.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod math;
pub mod sched;

pub use color::Color;
pub use math::Vec2;
pub use sched::{CancelFlag, FrameClock, ManualFrameClock, RecordingTimer, Timer};
