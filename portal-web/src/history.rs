//! `window.history` backed [`History`].

use crate::{dom, paths};
use portal_core::{History, HistoryError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Default)]
pub struct BrowserHistory {
    base: Option<String>,
}

impl BrowserHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: paths::router_base(),
        }
    }

    fn browser_history(path: &str) -> Result<web_sys::History, HistoryError> {
        let win = dom::window().ok_or_else(|| rejected(path, "window unavailable".to_string()))?;
        win.history()
            .map_err(|err| rejected(path, dom::js_error_message(&err)))
    }
}

fn rejected(path: &str, reason: String) -> HistoryError {
    HistoryError::Rejected {
        path: path.to_string(),
        reason,
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        let Some(location) = dom::window().map(|win| win.location()) else {
            return "/".to_string();
        };
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!(
            "{}{search}{hash}",
            paths::strip_base(&pathname, self.base.as_deref())
        )
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        let url = paths::with_base(path, self.base.as_deref());
        Self::browser_history(path)?
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|err| rejected(path, dom::js_error_message(&err)))
    }

    fn replace(&mut self, path: &str) -> Result<(), HistoryError> {
        let url = paths::with_base(path, self.base.as_deref());
        Self::browser_history(path)?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|err| rejected(path, dom::js_error_message(&err)))
    }

    fn scroll_to_top(&mut self) {
        if let Some(win) = dom::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// `Date.now()`; `std::time` is unavailable on `wasm32-unknown-unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl portal_core::Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
