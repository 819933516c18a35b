//! The typewriter state machine.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default delay between revealed characters (milliseconds).
pub const DEFAULT_TYPE_DELAY_MS: u64 = 100;
/// Default hold on a fully typed role (milliseconds).
pub const DEFAULT_HOLD_DELAY_MS: u64 = 900;
/// Default delay between deleted characters (milliseconds).
pub const DEFAULT_DELETE_DELAY_MS: u64 = 45;

/// Errors from typewriter construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    /// The role list was empty; the transition table is only total for a
    /// non-empty list.
    #[error("role list is empty")]
    NoRoles,
}

/// Timing configuration for the typewriter.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay between revealed characters (milliseconds).
    pub type_delay_ms: u64,
    /// Hold on the fully typed role before deleting (milliseconds).
    pub hold_delay_ms: u64,
    /// Delay between deleted characters (milliseconds).
    pub delete_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
            delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
        }
    }
}

impl TypingConfig {
    /// Delay between revealed characters.
    #[must_use]
    pub const fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    /// Hold on the fully typed role.
    #[must_use]
    pub const fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }

    /// Delay between deleted characters.
    #[must_use]
    pub const fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }
}

/// The typewriter.
///
/// Owns its role/char/deleting state explicitly; a driver alternates
/// `sleep(delay())` with `step()` and reads `visible()` in between. The
/// cycle has no terminal state.
#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
    config: TypingConfig,
}

impl Typewriter {
    /// Creates a typewriter over a fixed ordered role list.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::NoRoles`] for an empty list. Empty role
    /// *strings* are accepted - they pass straight through the hold state.
    pub fn new(roles: Vec<String>, config: TypingConfig) -> Result<Self, TypingError> {
        if roles.is_empty() {
            return Err(TypingError::NoRoles);
        }
        Ok(Self {
            roles,
            role_index: 0,
            char_index: 0,
            deleting: false,
            config,
        })
    }

    /// The role currently being typed.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.roles[self.role_index]
    }

    /// Index of the active role.
    #[must_use]
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Number of characters currently shown.
    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// True while retracting characters.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// The text shown right now: the first `char_index` characters of the
    /// active role.
    #[must_use]
    pub fn visible(&self) -> &str {
        let role = self.role();
        let end = role
            .char_indices()
            .nth(self.char_index)
            .map_or(role.len(), |(i, _)| i);
        &role[..end]
    }

    /// How long the driver should wait before the next [`step`](Self::step).
    ///
    /// Zero for the role-advance row - that transition is immediate.
    #[must_use]
    pub fn delay(&self) -> Duration {
        let len = self.role_len();
        if !self.deleting {
            if self.char_index < len {
                self.config.type_delay()
            } else {
                self.config.hold_delay()
            }
        } else if self.char_index > 0 {
            self.config.delete_delay()
        } else {
            Duration::ZERO
        }
    }

    /// Applies exactly one transition of the table.
    ///
    /// The table is total over every reachable `(char_index, deleting)`
    /// pair, so this never fails and never stalls.
    pub fn step(&mut self) {
        let len = self.role_len();
        if !self.deleting {
            if self.char_index < len {
                self.char_index += 1;
            } else {
                self.deleting = true;
            }
        } else if self.char_index > 0 {
            self.char_index -= 1;
        } else {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            tracing::debug!(
                "Typewriter advanced to role {} of {}: {:?}",
                self.role_index,
                self.roles.len(),
                self.role()
            );
        }
    }

    fn role_len(&self) -> usize {
        self.role().chars().count()
    }
}
