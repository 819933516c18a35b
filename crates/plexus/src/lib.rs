//! # PLEXUS Runtime
//!
//! Two independent, self-contained loops make up the whole engine:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ FIELD LOOP (one task)                                       │
//! │   frame clock → cancel check → step → draw → repeat         │
//! │                                                             │
//! │ TYPING LOOP (one task)                                      │
//! │   delay() → timer.sleep → cancel check → step → publish     │
//! │                                                             │
//! │ CONTACT FLOW (on demand)                                    │
//! │   submit → 2xx? clear + banner + 3s + hide : log + keep     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loops share nothing; each owns its state exclusively. The only
//! crossing point is the typewriter's published display string, behind its
//! own lock. Cancellation is cooperative and takes effect before the next
//! resumption - no tick, draw or mutation ever happens on a torn-down
//! loop.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod ambient;
pub mod clock;
pub mod config;
pub mod contact_flow;

pub use ambient::{viewport_channel, FieldLoop, TypingLoop, Viewport};
pub use clock::{IntervalFrameClock, TokioTimer};
pub use config::{ConfigError, PlexusConfig};
pub use contact_flow::ContactFlow;
