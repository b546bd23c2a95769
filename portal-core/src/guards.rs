//! Reconciliation passes run, in order, after every change of the current page.
//!
//! Each pass sees the state left behind by the previous one, so a redirect issued by an
//! early pass is itself checked by the later passes.

use crate::page::Page;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: Page,
    pub dashboard_section: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Unchanged,
    /// Move to this page, replacing the current history entry.
    Redirect(Page),
}

pub type Guard = fn(&NavigationState, Option<&Session>) -> GuardOutcome;

/// Ordered guard passes. Order matters: see the module docs.
pub const GUARD_PIPELINE: [(&str, Guard); 2] = [
    ("misrouted-login", misrouted_login as Guard),
    ("role-gate", role_gate as Guard),
];

/// A signed-in user never stays on the login or registration screens.
#[must_use]
pub fn misrouted_login(state: &NavigationState, session: Option<&Session>) -> GuardOutcome {
    if session.is_some() && state.current_page.is_auth_entry() {
        GuardOutcome::Redirect(Page::Dashboard)
    } else {
        GuardOutcome::Unchanged
    }
}

/// Role-gated pages send anonymous visitors to login and other roles to their dashboard.
#[must_use]
pub fn role_gate(state: &NavigationState, session: Option<&Session>) -> GuardOutcome {
    let role = session.map(|s| s.role);
    if state.current_page.permits(role) {
        GuardOutcome::Unchanged
    } else if role.is_none() {
        GuardOutcome::Redirect(Page::Login)
    } else {
        GuardOutcome::Redirect(Page::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{InfoPage, RegistrationKind};
    use crate::role::Role;

    fn at(page: Page) -> NavigationState {
        NavigationState {
            current_page: page,
            dashboard_section: "dashboard".to_string(),
        }
    }

    fn session(role: Role) -> Session {
        Session::new(role, "Asha", false).expect("valid session")
    }

    #[test]
    fn misrouted_guard_only_fires_with_a_session() {
        assert_eq!(misrouted_login(&at(Page::Login), None), GuardOutcome::Unchanged);
        assert_eq!(
            misrouted_login(&at(Page::Login), Some(&session(Role::Student))),
            GuardOutcome::Redirect(Page::Dashboard)
        );
        assert_eq!(
            misrouted_login(
                &at(Page::Register(RegistrationKind::Faculty)),
                Some(&session(Role::Faculty))
            ),
            GuardOutcome::Redirect(Page::Dashboard)
        );
        assert_eq!(
            misrouted_login(&at(Page::Home), Some(&session(Role::Student))),
            GuardOutcome::Unchanged
        );
    }

    #[test]
    fn role_gate_sends_anonymous_visitors_to_login() {
        assert_eq!(
            role_gate(&at(Page::Dashboard), None),
            GuardOutcome::Redirect(Page::Login)
        );
        assert_eq!(
            role_gate(&at(Page::Profile(Role::Admin)), None),
            GuardOutcome::Redirect(Page::Login)
        );
        assert_eq!(
            role_gate(&at(Page::Info(InfoPage::Events)), None),
            GuardOutcome::Unchanged
        );
    }

    #[test]
    fn role_gate_sends_wrong_role_to_dashboard() {
        assert_eq!(
            role_gate(&at(Page::Profile(Role::Student)), Some(&session(Role::Faculty))),
            GuardOutcome::Redirect(Page::Dashboard)
        );
        assert_eq!(
            role_gate(&at(Page::Profile(Role::Faculty)), Some(&session(Role::Faculty))),
            GuardOutcome::Unchanged
        );
    }

    #[test]
    fn pipeline_runs_misrouted_guard_first() {
        assert_eq!(GUARD_PIPELINE[0].0, "misrouted-login");
        assert_eq!(GUARD_PIPELINE[1].0, "role-gate");
    }
}
