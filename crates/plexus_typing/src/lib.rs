//! # PLEXUS Typing
//!
//! The typewriter effect behind the hero line: reveal a role string one
//! character at a time, hold, retract it, move to the next role, forever.
//!
//! ## States
//!
//! - **TYPING**: `char_index < len`, one character revealed per step.
//! - **HOLD**: fully typed, one long pause before deletion starts.
//! - **DELETING**: one character retracted per step.
//! - **ADVANCE**: empty again, switch to the next role immediately.
//!
//! ## Determinism
//!
//! The machine never schedules anything itself. [`Typewriter::delay`]
//! reports how long the driver should wait before the next
//! [`Typewriter::step`]; tests drive it with no clock at all.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod typewriter;

pub use typewriter::{TypingConfig, TypingError, Typewriter};
