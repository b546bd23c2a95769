use crate::error::SessionError;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The authenticated identity held by the navigation controller.
///
/// The role is a client-trusted label; nothing here is verified against a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub display_name: String,
    #[serde(default)]
    pub remember: bool,
    /// Milliseconds since the Unix epoch. `None` lives for the browser session.
    #[serde(default)]
    pub expires_at: Option<u64>,
}

impl Session {
    /// Build a session, trimming the display name.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyDisplayName`] when the name is blank.
    pub fn new(role: Role, display_name: &str, remember: bool) -> Result<Self, SessionError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(SessionError::EmptyDisplayName);
        }
        Ok(Self {
            role,
            display_name: display_name.to_string(),
            remember,
            expires_at: None,
        })
    }

    #[must_use]
    pub const fn with_expiry(mut self, expires_at: Option<u64>) -> Self {
        self.expires_at = expires_at;
        self
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_ms)
    }

    /// Records restored from storage are re-validated against the same rules.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.display_name.trim().is_empty()
    }
}
