//! Cookie-backed persistence for the session record and the dashboard section preference.
//!
//! The store is a serialization boundary only: it never decides *whether* a session should
//! exist, it just writes what the controller hands it and reads back what survived.

use crate::config::PortalConfig;
use crate::error::StorageError;
use crate::session::Session;
use std::collections::HashMap;

/// When a cookie stops being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieExpiry {
    /// Dropped when the browser session ends.
    BrowserSession,
    /// Absolute expiry, milliseconds since the Unix epoch.
    At(u64),
}

/// Key/value cookie storage scoped to the current origin.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the host rejects the write outright. Browsers with cookies
    /// disabled usually accept the write and drop it, which only the probe can detect.
    fn set(&mut self, name: &str, value: &str, expiry: CookieExpiry) -> Result<(), StorageError>;

    fn remove(&mut self, name: &str);
}

/// In-memory jar used by tests and the scenario runner.
#[derive(Debug, Default, Clone)]
pub struct MemoryCookieJar {
    cookies: HashMap<String, (String, CookieExpiry)>,
    blocked: bool,
}

impl MemoryCookieJar {
    /// A jar that accepts writes and silently drops them, like a browser with cookies off.
    #[must_use]
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub const fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    #[must_use]
    pub fn expiry_of(&self, name: &str) -> Option<CookieExpiry> {
        self.cookies.get(name).map(|(_, expiry)| *expiry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Drop browser-session cookies, as closing every tab would.
    pub fn end_browser_session(&mut self) {
        self.cookies
            .retain(|_, (_, expiry)| matches!(expiry, CookieExpiry::At(_)));
    }

    /// Drop cookies whose deadline has passed.
    pub fn purge_expired(&mut self, now_ms: u64) {
        self.cookies.retain(|_, (_, expiry)| match expiry {
            CookieExpiry::At(at) => *at > now_ms,
            CookieExpiry::BrowserSession => true,
        });
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|(value, _)| value.clone())
    }

    fn set(&mut self, name: &str, value: &str, expiry: CookieExpiry) -> Result<(), StorageError> {
        if !self.blocked {
            self.cookies
                .insert(name.to_string(), (value.to_string(), expiry));
        }
        Ok(())
    }

    fn remove(&mut self, name: &str) {
        self.cookies.remove(name);
    }
}

pub struct SessionStore<J> {
    jar: J,
    config: PortalConfig,
    capability: Option<bool>,
}

impl<J: CookieJar> SessionStore<J> {
    #[must_use]
    pub const fn new(jar: J, config: PortalConfig) -> Self {
        Self {
            jar,
            config,
            capability: None,
        }
    }

    /// Write a marker cookie and check it reads back. The result is cached: the probe
    /// runs once per load.
    pub fn probe_cookie_capability(&mut self) -> bool {
        if let Some(known) = self.capability {
            return known;
        }
        let marker = self.config.probe_cookie.clone();
        let usable = self
            .jar
            .set(&marker, "1", CookieExpiry::BrowserSession)
            .is_ok()
            && self.jar.get(&marker).as_deref() == Some("1");
        self.jar.remove(&marker);
        if !usable {
            log::warn!("cookie storage unavailable; session will not survive a reload");
        }
        self.capability = Some(usable);
        usable
    }

    /// `true` only after a successful probe.
    #[must_use]
    pub fn cookies_enabled(&self) -> bool {
        self.capability == Some(true)
    }

    /// Result of the last probe; `None` until `probe` has run.
    #[must_use]
    pub const fn cookie_capability(&self) -> Option<bool> {
        self.capability
    }

    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Restore the persisted session. Malformed or expired records count as absent and are
    /// removed so they are not re-read on the next load.
    pub fn get_session(&mut self, now_ms: u64) -> Option<Session> {
        if !self.cookies_enabled() {
            return None;
        }
        let raw = self.jar.get(&self.config.session_cookie)?;
        let session = match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_well_formed() => session,
            Ok(_) => {
                log::debug!("discarding session record without a display name");
                self.clear_session();
                return None;
            }
            Err(err) => {
                log::debug!("discarding unreadable session record: {err}");
                self.clear_session();
                return None;
            }
        };
        if session.is_expired(now_ms) {
            log::debug!("persisted session expired");
            self.clear_session();
            return None;
        }
        Some(session)
    }

    /// Persist a session. "Remember me" records get a long expiry; others only last for
    /// the browser session. No-op when cookies are unavailable.
    pub fn set_session(&mut self, session: &Session, now_ms: u64) {
        if !self.cookies_enabled() {
            return;
        }
        let (expiry, expires_at) = if session.remember {
            let at = now_ms.saturating_add(self.config.remember_ttl_ms());
            (CookieExpiry::At(at), Some(at))
        } else {
            (CookieExpiry::BrowserSession, None)
        };
        let record = session.clone().with_expiry(expires_at);
        let name = self.config.session_cookie.clone();
        if let Err(err) = self.write(&name, &record, expiry) {
            log::warn!("failed to persist session: {err}");
        }
    }

    /// Remove the persisted session. Safe to call when nothing is stored.
    pub fn clear_session(&mut self) {
        if !self.cookies_enabled() {
            return;
        }
        self.jar.remove(&self.config.session_cookie);
    }

    #[must_use]
    pub fn get_dashboard_section(&self) -> String {
        if !self.cookies_enabled() {
            return self.config.default_section.clone();
        }
        self.jar
            .get(&self.config.section_cookie)
            .filter(|section| !section.trim().is_empty())
            .unwrap_or_else(|| self.config.default_section.clone())
    }

    pub fn set_dashboard_section(&mut self, section: &str, now_ms: u64) {
        if !self.cookies_enabled() {
            return;
        }
        let expiry = CookieExpiry::At(now_ms.saturating_add(self.config.section_ttl_ms()));
        if let Err(err) = self.jar.set(&self.config.section_cookie, section, expiry) {
            log::warn!("failed to persist dashboard section: {err}");
        }
    }

    #[must_use]
    pub const fn jar(&self) -> &J {
        &self.jar
    }

    pub const fn jar_mut(&mut self) -> &mut J {
        &mut self.jar
    }

    #[must_use]
    pub fn into_jar(self) -> J {
        self.jar
    }

    fn write(
        &mut self,
        name: &str,
        record: &Session,
        expiry: CookieExpiry,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(record)?;
        self.jar.set(name, &encoded, expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    const NOW: u64 = 1_700_000_000_000;

    fn probed(jar: MemoryCookieJar) -> SessionStore<MemoryCookieJar> {
        let mut store = SessionStore::new(jar, PortalConfig::default());
        store.probe_cookie_capability();
        store
    }

    fn asha(remember: bool) -> Session {
        Session::new(Role::Student, "Asha", remember).expect("valid session")
    }

    #[test]
    fn probe_leaves_no_marker_behind() {
        let store = probed(MemoryCookieJar::default());
        assert!(store.cookies_enabled());
        assert!(store.jar().is_empty());
    }

    #[test]
    fn probe_detects_blocked_jar() {
        let store = probed(MemoryCookieJar::blocked());
        assert!(!store.cookies_enabled());
    }

    #[test]
    fn unprobed_store_does_not_write() {
        let mut store = SessionStore::new(MemoryCookieJar::default(), PortalConfig::default());
        store.set_session(&asha(true), NOW);
        assert!(store.jar().is_empty());
    }

    #[test]
    fn remembered_session_gets_long_expiry() {
        let mut store = probed(MemoryCookieJar::default());
        store.set_session(&asha(true), NOW);
        let restored = store.get_session(NOW).expect("restored");
        assert_eq!(restored.display_name, "Asha");
        let expected = NOW + PortalConfig::default().remember_ttl_ms();
        assert_eq!(restored.expires_at, Some(expected));
        assert_eq!(
            store.jar().expiry_of("portal_session"),
            Some(CookieExpiry::At(expected))
        );
    }

    #[test]
    fn plain_session_is_browser_scoped() {
        let mut store = probed(MemoryCookieJar::default());
        store.set_session(&asha(false), NOW);
        assert_eq!(
            store.jar().expiry_of("portal_session"),
            Some(CookieExpiry::BrowserSession)
        );
        store.jar_mut().end_browser_session();
        assert!(store.get_session(NOW).is_none());
    }

    #[test]
    fn expired_record_is_absent_and_removed() {
        let mut store = probed(MemoryCookieJar::default());
        store.set_session(&asha(true), NOW);
        let later = NOW + PortalConfig::default().remember_ttl_ms();
        assert!(store.get_session(later).is_none());
        assert!(store.jar().get("portal_session").is_none());
    }

    #[test]
    fn garbage_record_is_absent() {
        let mut jar = MemoryCookieJar::default();
        jar.set("portal_session", "{not json", CookieExpiry::BrowserSession)
            .expect("set");
        let mut store = probed(jar);
        assert!(store.get_session(NOW).is_none());
        assert!(store.jar().get("portal_session").is_none());
    }

    #[test]
    fn blank_name_record_is_absent() {
        let mut jar = MemoryCookieJar::default();
        jar.set(
            "portal_session",
            r#"{"role":"admin","display_name":"  "}"#,
            CookieExpiry::BrowserSession,
        )
        .expect("set");
        let mut store = probed(jar);
        assert!(store.get_session(NOW).is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = probed(MemoryCookieJar::default());
        store.clear_session();
        store.set_session(&asha(false), NOW);
        store.clear_session();
        store.clear_session();
        assert!(store.get_session(NOW).is_none());
    }

    #[test]
    fn section_defaults_and_persists() {
        let mut store = probed(MemoryCookieJar::default());
        assert_eq!(store.get_dashboard_section(), "dashboard");
        store.set_dashboard_section("attendance", NOW);
        assert_eq!(store.get_dashboard_section(), "attendance");
    }

    #[test]
    fn degraded_store_is_memoryless() {
        let mut store = probed(MemoryCookieJar::blocked());
        store.set_session(&asha(true), NOW);
        assert!(store.get_session(NOW).is_none());
        store.set_dashboard_section("timetable", NOW);
        assert_eq!(store.get_dashboard_section(), "dashboard");
    }
}
