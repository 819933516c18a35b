//! The submitted payload.

use reqwest::multipart::Form;

/// One contact form submission: exactly the three fields the endpoint
/// expects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Creates a form from its three fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Encodes the form as the multipart body the endpoint expects.
    #[must_use]
    pub fn to_multipart(&self) -> Form {
        Form::new()
            .text("name", self.name.clone())
            .text("email", self.email.clone())
            .text("message", self.message.clone())
    }
}
