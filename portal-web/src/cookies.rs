//! `document.cookie` backed [`CookieJar`].

use crate::dom;
use portal_core::{CookieExpiry, CookieJar, StorageError};
use std::fmt::Write as _;

/// Reads and writes cookies scoped to the portal's base path.
#[derive(Debug, Clone)]
pub struct BrowserCookieJar {
    path: String,
}

impl Default for BrowserCookieJar {
    fn default() -> Self {
        Self::new(crate::paths::router_base().as_deref())
    }
}

impl BrowserCookieJar {
    #[must_use]
    pub fn new(base: Option<&str>) -> Self {
        Self {
            path: base.map_or_else(|| "/".to_string(), str::to_string),
        }
    }
}

impl CookieJar for BrowserCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let header = dom::html_document()?.cookie().ok()?;
        find_cookie(&header, name)
    }

    fn set(&mut self, name: &str, value: &str, expiry: CookieExpiry) -> Result<(), StorageError> {
        let doc = dom::html_document().ok_or(StorageError::Unavailable)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        doc.set_cookie(&set_cookie_string(name, value, expiry, now, &self.path))
            .map_err(|err| StorageError::Write(dom::js_error_message(&err)))
    }

    fn remove(&mut self, name: &str) {
        let Some(doc) = dom::html_document() else {
            return;
        };
        if let Err(err) = doc.set_cookie(&removal_string(name, &self.path)) {
            log::warn!("could not remove cookie {name}: {}", dom::js_error_message(&err));
        }
    }
}

/// Look a cookie up in a `document.cookie` style header and percent-decode its value.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(std::borrow::Cow::into_owned)
}

/// Build the assignment string for `document.cookie`.
#[must_use]
pub fn set_cookie_string(
    name: &str,
    value: &str,
    expiry: CookieExpiry,
    now_ms: u64,
    path: &str,
) -> String {
    let mut cookie = format!(
        "{name}={}; Path={path}; SameSite=Lax",
        urlencoding::encode(value)
    );
    if let CookieExpiry::At(at) = expiry {
        let _ = write!(cookie, "; Max-Age={}", at.saturating_sub(now_ms) / 1000);
    }
    cookie
}

#[must_use]
pub fn removal_string(name: &str, path: &str) -> String {
    format!("{name}=; Path={path}; Max-Age=0; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_and_decodes_named_cookie() {
        let header = "theme=dark; portal_session=%7B%22role%22%3A%22hod%22%7D; other=1";
        assert_eq!(
            find_cookie(header, "portal_session").as_deref(),
            Some(r#"{"role":"hod"}"#)
        );
        assert_eq!(find_cookie(header, "missing"), None);
        assert_eq!(find_cookie("", "theme"), None);
    }

    #[test]
    fn prefix_names_do_not_match() {
        let header = "portal_session_old=1; portal_section=fees";
        assert_eq!(find_cookie(header, "portal_session"), None);
        assert_eq!(find_cookie(header, "portal_section").as_deref(), Some("fees"));
    }

    #[test]
    fn session_cookie_has_no_lifetime() {
        let cookie = set_cookie_string("a", "b c", CookieExpiry::BrowserSession, 0, "/");
        assert_eq!(cookie, "a=b%20c; Path=/; SameSite=Lax");
    }

    #[test]
    fn persistent_cookie_gets_relative_max_age() {
        let cookie = set_cookie_string("a", "1", CookieExpiry::At(90_000), 30_000, "/portal");
        assert_eq!(cookie, "a=1; Path=/portal; SameSite=Lax; Max-Age=60");
    }

    #[test]
    fn encoded_values_survive_a_round_trip() {
        let value = r#"{"display_name":"Asha; K=1","role":"student"}"#;
        let cookie = set_cookie_string("s", value, CookieExpiry::BrowserSession, 0, "/");
        let header = cookie.split("; Path").next().expect("pair");
        assert_eq!(find_cookie(header, "s").as_deref(), Some(value));
    }

    #[test]
    fn removal_expires_immediately() {
        assert!(removal_string("a", "/").contains("Max-Age=0"));
    }
}
