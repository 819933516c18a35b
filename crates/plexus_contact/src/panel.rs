//! In-memory state of the contact panel.

use crate::form::ContactForm;

/// The contact panel: three text fields and the "sent" banner flag.
///
/// Owned, explicit state - the runtime mutates it through methods, never
/// through captured closures.
#[derive(Clone, Debug, Default)]
pub struct ContactPanel {
    /// Visitor name field.
    pub name: String,
    /// Reply address field.
    pub email: String,
    /// Message body field.
    pub message: String,
    banner_visible: bool,
}

impl ContactPanel {
    /// Creates an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current fields as a submission payload.
    #[must_use]
    pub fn form(&self) -> ContactForm {
        ContactForm::new(self.name.clone(), self.email.clone(), self.message.clone())
    }

    /// Clears all three fields (after a successful submission).
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// True while every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Shows the transient confirmation banner.
    pub fn show_banner(&mut self) {
        self.banner_visible = true;
    }

    /// Hides the confirmation banner.
    pub fn hide_banner(&mut self) {
        self.banner_visible = false;
    }

    /// Whether the confirmation banner is currently shown.
    #[must_use]
    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_empties_fields_only() {
        let mut panel = ContactPanel::new();
        panel.name = "Ada".into();
        panel.email = "ada@example.com".into();
        panel.message = "Hello".into();
        panel.show_banner();

        panel.clear();
        assert!(panel.is_empty());
        // The banner is managed separately from the fields.
        assert!(panel.banner_visible());
    }

    #[test]
    fn test_form_snapshot_matches_fields() {
        let mut panel = ContactPanel::new();
        panel.name = "Ada".into();
        panel.message = "Hi".into();
        let form = panel.form();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "Hi");
    }
}
