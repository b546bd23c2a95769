//! The navigation controller: single writer of the current view and the in-memory session.
//!
//! Every trigger (start-up, login, logout, back/forward, section clicks, call-to-action
//! links) goes through one operation here. Operations that move the current page finish
//! with the guard pipeline from [`crate::guards`].

use crate::clock::Clock;
use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::guards::{GUARD_PIPELINE, GuardOutcome, NavigationState};
use crate::history::History;
use crate::page::{Page, RegistrationKind};
use crate::role::Role;
use crate::session::Session;
use crate::storage::{CookieJar, SessionStore};
use crate::view::{View, select_view};

/// Fire-and-forget messages for the toast channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    WelcomeBack { name: String },
    CookiesDisabled,
    SignedOut,
    SessionExpired,
}

pub struct NavigationController<J, H, C> {
    store: SessionStore<J>,
    history: H,
    clock: C,
    state: NavigationState,
    session: Option<Session>,
    notices: Vec<Notice>,
    started: bool,
}

impl<J, H, C> NavigationController<J, H, C>
where
    J: CookieJar,
    H: History,
    C: Clock,
{
    /// Seed the view from the current location. Nothing is read from cookies until
    /// [`start`](Self::start).
    #[must_use]
    pub fn new(jar: J, history: H, clock: C, config: PortalConfig) -> Self {
        let state = NavigationState {
            current_page: Page::from_path(&history.current_path()),
            dashboard_section: config.default_section.clone(),
        };
        Self {
            store: SessionStore::new(jar, config),
            history,
            clock,
            state,
            session: None,
            notices: Vec::new(),
            started: false,
        }
    }

    /// App start: probe cookies, try to restore a session, reconcile. Runs once per load.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        if !self.store.probe_cookie_capability() {
            self.notices.push(Notice::CookiesDisabled);
            self.reconcile();
            return;
        }

        if let Some(session) = self.store.get_session(self.clock.now_ms()) {
            log::info!(
                "restored {} session for {}",
                session.role,
                session.display_name
            );
            self.state.dashboard_section = self.store.get_dashboard_section();
            self.notices.push(Notice::WelcomeBack {
                name: session.display_name.clone(),
            });
            self.session = Some(session);
            self.state.current_page = Page::Dashboard;
            self.replace_location(Page::Dashboard);
        }
        self.reconcile();
    }

    /// Sign in with a client-trusted role. The login entry is replaced so back-navigation
    /// cannot return to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the display name is blank; state is left untouched.
    pub fn login(&mut self, role: Role, name: &str, remember: bool) -> Result<(), PortalError> {
        let now = self.clock.now_ms();
        let expires_at =
            remember.then(|| now.saturating_add(self.store.config().remember_ttl_ms()));
        let session = Session::new(role, name, remember)?.with_expiry(expires_at);
        self.store.set_session(&session, now);
        log::info!("{} signed in as {}", session.display_name, session.role);
        self.session = Some(session);

        let section = self.store.config().default_section.clone();
        self.store.set_dashboard_section(&section, now);
        self.state.dashboard_section = section;
        self.state.current_page = Page::Dashboard;
        self.replace_location(Page::Dashboard);
        self.reconcile();
        Ok(())
    }

    /// Registration success signs the new user in for this browser session.
    ///
    /// # Errors
    ///
    /// Returns an error if the display name is blank.
    pub fn complete_registration(
        &mut self,
        kind: RegistrationKind,
        name: &str,
    ) -> Result<(), PortalError> {
        self.login(kind.role(), name, false)
    }

    /// Sign out. Calling it again is harmless and yields the same state.
    pub fn logout(&mut self) {
        let ended = self.session.take();
        self.store.clear_session();
        self.state.current_page = Page::Home;
        self.state.dashboard_section = self.store.config().default_section.clone();
        self.replace_location(Page::Home);
        if let Some(session) = ended {
            log::info!("{} signed out", session.display_name);
            self.notices.push(Notice::SignedOut);
        }
        self.reconcile();
    }

    /// The browser location changed (back/forward, popstate). Adopt the decoded page,
    /// then reconcile against the session in a separate pass.
    pub fn location_changed(&mut self) {
        let page = Page::from_path(&self.history.current_path());
        if page != self.state.current_page {
            log::debug!("location moved to {}", page.path());
            self.state.current_page = page;
        }
        self.reconcile();
    }

    /// Switch the dashboard sub-view. Staying on the dashboard adds no history entries.
    pub fn select_section(&mut self, section: &str) {
        if self.expire_session() {
            self.reconcile();
            return;
        }
        if self.session.is_none() {
            log::debug!("ignoring section change without a session");
            return;
        }
        let section = section.trim();
        let section = if section.is_empty() {
            self.store.config().default_section.clone()
        } else {
            section.to_string()
        };
        self.store
            .set_dashboard_section(&section, self.clock.now_ms());
        log::debug!("dashboard section -> {section}");
        self.state.dashboard_section = section;

        if self.state.current_page != Page::Dashboard {
            if let Err(err) = self.history.push(Page::Dashboard.path()) {
                log::warn!("{err}; showing dashboard without a history entry");
            }
            self.state.current_page = Page::Dashboard;
        }
    }

    /// Explicit navigation from a leaf page: push, scroll to top, reconcile.
    pub fn navigate_to(&mut self, page: Page) {
        if let Err(err) = self.history.push(page.path()) {
            log::warn!("{err}; updating the view without a history entry");
        }
        self.state.current_page = page;
        self.history.scroll_to_top();
        self.reconcile();
    }

    /// Drain queued notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.state.current_page
    }

    #[must_use]
    pub fn dashboard_section(&self) -> &str {
        &self.state.dashboard_section
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn cookies_enabled(&self) -> bool {
        self.store.cookies_enabled()
    }

    #[must_use]
    pub const fn cookie_capability(&self) -> Option<bool> {
        self.store.cookie_capability()
    }

    #[must_use]
    pub fn view(&self) -> View {
        select_view(
            self.state.current_page,
            self.role(),
            &self.state.dashboard_section,
        )
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    /// Direct access for hosts that move the location themselves (e.g. simulated back
    /// buttons). Call [`location_changed`](Self::location_changed) afterwards.
    pub const fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore<J> {
        &self.store
    }

    /// Tear down, handing back the backends (used to simulate a page reload).
    #[must_use]
    pub fn into_parts(self) -> (J, H, C) {
        (self.store.into_jar(), self.history, self.clock)
    }

    /// Drop a session whose deadline has passed while the tab stayed open. Returns whether
    /// one was dropped.
    fn expire_session(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.session.as_ref().is_some_and(|s| s.is_expired(now)) {
            return false;
        }
        if let Some(session) = self.session.take() {
            log::info!("session for {} expired", session.display_name);
        }
        self.store.clear_session();
        self.state.dashboard_section = self.store.config().default_section.clone();
        self.notices.push(Notice::SessionExpired);
        true
    }

    fn reconcile(&mut self) {
        self.expire_session();
        for (name, guard) in GUARD_PIPELINE {
            if let GuardOutcome::Redirect(target) = guard(&self.state, self.session.as_ref()) {
                log::debug!(
                    "{name}: {} -> {}",
                    self.state.current_page.path(),
                    target.path()
                );
                self.state.current_page = target;
                self.replace_location(target);
            }
        }
    }

    fn replace_location(&mut self, page: Page) {
        if let Err(err) = self.history.replace(page.path()) {
            log::warn!("{err}; in-app view updated anyway");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::history::MemoryHistory;
    use crate::page::InfoPage;
    use crate::storage::MemoryCookieJar;

    type TestController = NavigationController<MemoryCookieJar, MemoryHistory, ManualClock>;

    const NOW: u64 = 1_700_000_000_000;

    fn controller_at(path: &str) -> TestController {
        let mut ctl = NavigationController::new(
            MemoryCookieJar::default(),
            MemoryHistory::at(path),
            ManualClock::new(NOW),
            PortalConfig::default(),
        );
        ctl.start();
        ctl
    }

    #[test]
    fn start_is_idempotent() {
        let mut ctl = NavigationController::new(
            MemoryCookieJar::blocked(),
            MemoryHistory::at("/"),
            ManualClock::new(NOW),
            PortalConfig::default(),
        );
        ctl.start();
        ctl.start();
        assert_eq!(ctl.take_notices(), vec![Notice::CookiesDisabled]);
    }

    #[test]
    fn capability_is_unknown_until_start() {
        let mut ctl = NavigationController::new(
            MemoryCookieJar::default(),
            MemoryHistory::at("/"),
            ManualClock::new(NOW),
            PortalConfig::default(),
        );
        assert_eq!(ctl.cookie_capability(), None);
        assert!(!ctl.cookies_enabled());
        ctl.start();
        assert_eq!(ctl.cookie_capability(), Some(true));
    }

    #[test]
    fn remembered_login_carries_its_deadline_in_memory() {
        let mut ctl = controller_at("/login");
        ctl.login(Role::Student, "Asha", true).expect("login");
        let ttl = ctl.store().config().remember_ttl_ms();
        assert_eq!(ctl.session().and_then(|s| s.expires_at), Some(NOW + ttl));
        ctl.logout();
        ctl.login(Role::Student, "Asha", false).expect("login");
        assert_eq!(ctl.session().and_then(|s| s.expires_at), None);
    }

    #[test]
    fn blank_name_login_changes_nothing() {
        let mut ctl = controller_at("/login");
        assert!(ctl.login(Role::Student, "  ", false).is_err());
        assert_eq!(ctl.current_page(), Page::Login);
        assert!(ctl.session().is_none());
    }

    #[test]
    fn registration_signs_in_with_kind_role() {
        let mut ctl = controller_at("/register/faculty");
        ctl.complete_registration(RegistrationKind::Faculty, "Ravi")
            .expect("registration");
        assert_eq!(ctl.role(), Some(Role::Faculty));
        assert_eq!(ctl.current_page(), Page::Dashboard);
        assert_eq!(ctl.history().current_path(), "/dashboard");
        assert!(!ctl.session().expect("session").remember);
    }

    #[test]
    fn section_change_without_session_is_ignored() {
        let mut ctl = controller_at("/");
        ctl.select_section("attendance");
        assert_eq!(ctl.dashboard_section(), "dashboard");
        assert_eq!(ctl.current_page(), Page::Home);
    }

    #[test]
    fn section_change_from_profile_returns_to_dashboard() {
        let mut ctl = controller_at("/login");
        ctl.login(Role::Student, "Asha", false).expect("login");
        ctl.navigate_to(Page::Profile(Role::Student));
        ctl.select_section("fees");
        assert_eq!(ctl.current_page(), Page::Dashboard);
        assert_eq!(ctl.history().current_path(), "/dashboard");
        assert_eq!(
            ctl.view(),
            View::Dashboard {
                role: Role::Student,
                section: "fees".to_string()
            }
        );
    }

    #[test]
    fn navigate_scrolls_to_top() {
        let mut ctl = controller_at("/");
        ctl.navigate_to(Page::Info(InfoPage::Admissions));
        assert_eq!(ctl.history().current_path(), "/admissions");
        assert_eq!(ctl.history().scroll_count(), 1);
        assert_eq!(ctl.history().depth(), 2);
    }

    #[test]
    fn navigating_to_login_while_signed_in_bounces_to_dashboard() {
        let mut ctl = controller_at("/login");
        ctl.login(Role::Hod, "Kiran", false).expect("login");
        ctl.navigate_to(Page::Login);
        assert_eq!(ctl.current_page(), Page::Dashboard);
        assert_eq!(ctl.history().current_path(), "/dashboard");
    }

    #[test]
    fn foreign_profile_redirects_to_own_dashboard() {
        let mut ctl = controller_at("/login");
        ctl.login(Role::Faculty, "Ravi", false).expect("login");
        ctl.navigate_to(Page::Profile(Role::Student));
        assert_eq!(ctl.current_page(), Page::Dashboard);
        assert_ne!(ctl.view(), View::Nothing);
    }
}
