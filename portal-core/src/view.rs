use crate::page::{InfoPage, Page, RegistrationKind};
use crate::role::Role;

/// Which leaf component to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register(RegistrationKind),
    Dashboard { role: Role, section: String },
    Profile(Role),
    Info(InfoPage),
    /// Role-gated page without the matching role. Guards should make this unreachable.
    Nothing,
}

#[must_use]
pub fn select_view(page: Page, role: Option<Role>, section: &str) -> View {
    if !page.permits(role) {
        return View::Nothing;
    }
    match (page, role) {
        (Page::Home, _) => View::Home,
        (Page::Login, _) => View::Login,
        (Page::Register(kind), _) => View::Register(kind),
        (Page::Dashboard, Some(role)) => View::Dashboard {
            role,
            section: section.to_string(),
        },
        (Page::Profile(required), Some(_)) => View::Profile(required),
        (Page::Info(info), _) => View::Info(info),
        (Page::Dashboard | Page::Profile(_), None) => View::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_pages_render_for_everyone() {
        assert_eq!(select_view(Page::Home, None, "dashboard"), View::Home);
        assert_eq!(
            select_view(Page::Info(InfoPage::Contact), Some(Role::Admin), "dashboard"),
            View::Info(InfoPage::Contact)
        );
    }

    #[test]
    fn dashboard_carries_role_and_section() {
        assert_eq!(
            select_view(Page::Dashboard, Some(Role::Faculty), "leave"),
            View::Dashboard {
                role: Role::Faculty,
                section: "leave".to_string()
            }
        );
    }

    #[test]
    fn gated_pages_render_nothing_without_the_role() {
        assert_eq!(select_view(Page::Dashboard, None, "dashboard"), View::Nothing);
        assert_eq!(
            select_view(Page::Profile(Role::Student), Some(Role::Faculty), "dashboard"),
            View::Nothing
        );
        assert_eq!(
            select_view(Page::Profile(Role::Hod), Some(Role::Hod), "dashboard"),
            View::Profile(Role::Hod)
        );
    }
}
