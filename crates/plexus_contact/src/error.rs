//! # Contact Error Types
//!
//! All errors that can occur while submitting the form.

use thiserror::Error;

/// Errors from a form submission attempt.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The endpoint answered with a non-2xx status.
    #[error("endpoint rejected submission with status {status}")]
    Rejected {
        /// The HTTP status returned.
        status: u16,
    },

    /// The request never completed (DNS, connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for contact operations.
pub type ContactResult<T> = Result<T, ContactError>;
