//! Simulated browser tab: in-memory cookies, history and a hand-driven clock.

use portal_core::{
    Clock, History, ManualClock, MemoryCookieJar, MemoryHistory, NavigationController, Notice,
    PortalConfig,
};

pub type Controller = NavigationController<MemoryCookieJar, MemoryHistory, ManualClock>;

/// 2025-06-15T15:06:40Z.
pub const EPOCH_MS: u64 = 1_750_000_000_000;
pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;

pub struct Harness {
    ctl: Controller,
    config: PortalConfig,
    trace: Vec<String>,
}

impl Harness {
    /// Load the portal at `path` with an empty cookie jar.
    #[must_use]
    pub fn open(path: &str) -> Self {
        Self::with_jar(MemoryCookieJar::default(), path)
    }

    #[must_use]
    pub fn with_jar(jar: MemoryCookieJar, path: &str) -> Self {
        let config = PortalConfig::default();
        let mut ctl = NavigationController::new(
            jar,
            MemoryHistory::at(path),
            ManualClock::new(EPOCH_MS),
            config.clone(),
        );
        ctl.start();
        Self {
            ctl,
            config,
            trace: vec![format!("load {path}")],
        }
    }

    /// Reload the tab: same cookies, same URL, fresh controller.
    #[must_use]
    pub fn reload(self) -> Self {
        self.relaunch("reload", false)
    }

    /// Close the browser and open the same URL again; browser-session cookies are lost.
    #[must_use]
    pub fn restart_browser(self) -> Self {
        self.relaunch("restart browser", true)
    }

    fn relaunch(self, label: &str, end_session: bool) -> Self {
        let Self {
            ctl,
            config,
            mut trace,
        } = self;
        let (mut jar, history, clock) = ctl.into_parts();
        let path = history.current_path();
        if end_session {
            jar.end_browser_session();
        }
        jar.purge_expired(clock.now_ms());
        let mut ctl = NavigationController::new(jar, MemoryHistory::at(&path), clock, config.clone());
        ctl.start();
        trace.push(format!("{label} at {path}"));
        Self { ctl, config, trace }
    }

    /// Let wall-clock time pass. Expired cookies are dropped on the next (re)load.
    pub fn advance_days(&mut self, days: u64) {
        self.ctl.clock().advance(days * DAY_MS);
        self.trace.push(format!("wait {days} days"));
    }

    pub fn back(&mut self) -> bool {
        let moved = self.ctl.history_mut().back().is_some();
        if moved {
            self.ctl.location_changed();
        }
        self.trace.push(format!("back -> {}", self.ctl.current_page().path()));
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.ctl.history_mut().forward().is_some();
        if moved {
            self.ctl.location_changed();
        }
        self.trace.push(format!("forward -> {}", self.ctl.current_page().path()));
        moved
    }

    /// Type a URL into the address bar of the running tab.
    pub fn visit(&mut self, path: &str) {
        self.ctl.history_mut().visit(path);
        self.ctl.location_changed();
        self.trace.push(format!("visit {path} -> {}", self.ctl.current_page().path()));
    }

    pub fn note(&mut self, step: impl Into<String>) {
        let step = step.into();
        log::debug!("{step}");
        self.trace.push(step);
    }

    #[must_use]
    pub const fn ctl(&self) -> &Controller {
        &self.ctl
    }

    pub const fn ctl_mut(&mut self) -> &mut Controller {
        &mut self.ctl
    }

    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn notices(&mut self) -> Vec<Notice> {
        self.ctl.take_notices()
    }

    #[must_use]
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}
