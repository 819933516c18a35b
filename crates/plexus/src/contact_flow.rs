//! The submit → banner → clear flow around the contact panel.

use std::time::Duration;

use plexus_contact::{ContactClient, ContactPanel};
use plexus_shared::Timer;

/// Drives one submission of the contact panel.
///
/// Success clears the form and shows the confirmation banner for the
/// configured duration. Any failure is logged and swallowed - no retry,
/// no user-facing error state, panel untouched.
pub struct ContactFlow<T: Timer> {
    client: ContactClient,
    timer: T,
    banner_duration: Duration,
}

impl<T: Timer> ContactFlow<T> {
    /// Creates the flow around a client and a timer.
    #[must_use]
    pub fn new(client: ContactClient, timer: T, banner_duration: Duration) -> Self {
        Self {
            client,
            timer,
            banner_duration,
        }
    }

    /// Submits the panel's current fields.
    ///
    /// Returns `true` when the endpoint accepted the submission.
    pub async fn submit(&self, panel: &mut ContactPanel) -> bool {
        let form = panel.form();
        match self.client.submit(&form).await {
            Ok(()) => {
                panel.clear();
                panel.show_banner();
                self.timer.sleep(self.banner_duration).await;
                panel.hide_banner();
                true
            }
            Err(err) => {
                tracing::warn!("Contact submission failed: {err}");
                false
            }
        }
    }
}
