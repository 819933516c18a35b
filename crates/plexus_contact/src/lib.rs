//! # PLEXUS Contact
//!
//! The contact form: owned field state, one multipart POST to the
//! configured third-party endpoint, and the "sent" banner flag.
//!
//! Failure is an acknowledged gap, not an error path: a rejected or failed
//! submission is logged and the panel stays exactly as the visitor left it.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod form;
pub mod panel;

pub use client::ContactClient;
pub use error::ContactError;
pub use form::ContactForm;
pub use panel::ContactPanel;
