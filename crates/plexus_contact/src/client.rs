//! HTTP client for the form endpoint.

use reqwest::header::ACCEPT;

use crate::error::{ContactError, ContactResult};
use crate::form::ContactForm;

/// Client for the third-party form-ingestion endpoint.
///
/// The endpoint and its contract are entirely external; this client only
/// encodes the trigger and classifies the response.
#[derive(Clone, Debug)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the form as multipart form data.
    ///
    /// # Errors
    ///
    /// [`ContactError::Rejected`] for a non-2xx status,
    /// [`ContactError::Transport`] when the request never completes.
    pub async fn submit(&self, form: &ContactForm) -> ContactResult<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form.to_multipart())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Contact form accepted with status {status}");
            Ok(())
        } else {
            Err(ContactError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
