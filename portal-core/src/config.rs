//! Tunables for cookie names and lifetimes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SECTION: &str = "dashboard";

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Cookie holding the serialized session record.
    pub session_cookie: String,
    /// Cookie holding the last opened dashboard section.
    pub section_cookie: String,
    /// Throwaway cookie written by the capability probe.
    pub probe_cookie: String,
    /// Lifetime of a "remember me" session.
    pub remember_days: u32,
    /// Lifetime of the dashboard section preference.
    pub section_ttl_days: u32,
    pub default_section: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            session_cookie: "portal_session".to_string(),
            section_cookie: "portal_section".to_string(),
            probe_cookie: "portal_probe".to_string(),
            remember_days: 30,
            section_ttl_days: 365,
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl PortalConfig {
    /// Parse a JSON config, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn remember_ttl_ms(&self) -> u64 {
        self.remember_days as u64 * DAY_MS
    }

    #[must_use]
    pub const fn section_ttl_ms(&self) -> u64 {
        self.section_ttl_days as u64 * DAY_MS
    }
}
