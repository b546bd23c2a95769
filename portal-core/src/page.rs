//! Logical views and their canonical URL paths.

use crate::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationKind {
    Student,
    Faculty,
}

impl RegistrationKind {
    pub const ALL: [Self; 2] = [Self::Student, Self::Faculty];

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Student => Role::Student,
            Self::Faculty => Role::Faculty,
        }
    }
}

/// Static marketing / information pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfoPage {
    About,
    Academics,
    Admissions,
    Departments,
    Facilities,
    Placements,
    Events,
    Contact,
}

impl InfoPage {
    pub const ALL: [Self; 8] = [
        Self::About,
        Self::Academics,
        Self::Admissions,
        Self::Departments,
        Self::Facilities,
        Self::Placements,
        Self::Events,
        Self::Contact,
    ];

    /// Translation key prefix for the page content.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Academics => "academics",
            Self::Admissions => "admissions",
            Self::Departments => "departments",
            Self::Facilities => "facilities",
            Self::Placements => "placements",
            Self::Events => "events",
            Self::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Login,
    Register(RegistrationKind),
    Dashboard,
    Profile(Role),
    Info(InfoPage),
}

/// Who may see a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in role.
    Authenticated,
    RoleOnly(Role),
}

impl Default for Page {
    fn default() -> Self {
        Self::Home
    }
}

impl Page {
    /// Canonical path for the page. Each page has exactly one.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register(RegistrationKind::Student) => "/register/student",
            Self::Register(RegistrationKind::Faculty) => "/register/faculty",
            Self::Dashboard => "/dashboard",
            Self::Profile(Role::Student) => "/profile/student",
            Self::Profile(Role::Faculty) => "/profile/faculty",
            Self::Profile(Role::Hod) => "/profile/hod",
            Self::Profile(Role::Admin) => "/profile/admin",
            Self::Info(InfoPage::About) => "/about",
            Self::Info(InfoPage::Academics) => "/academics",
            Self::Info(InfoPage::Admissions) => "/admissions",
            Self::Info(InfoPage::Departments) => "/departments",
            Self::Info(InfoPage::Facilities) => "/facilities",
            Self::Info(InfoPage::Placements) => "/placements",
            Self::Info(InfoPage::Events) => "/events",
            Self::Info(InfoPage::Contact) => "/contact",
        }
    }

    /// Decode a browser path. Never fails: anything unrecognised is [`Page::Home`].
    #[must_use]
    pub fn from_path(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "/" | "/home" | "/index.html" => Self::Home,
            "/login" => Self::Login,
            "/register/student" => Self::Register(RegistrationKind::Student),
            "/register/faculty" => Self::Register(RegistrationKind::Faculty),
            "/dashboard" => Self::Dashboard,
            "/profile/student" => Self::Profile(Role::Student),
            "/profile/faculty" => Self::Profile(Role::Faculty),
            "/profile/hod" => Self::Profile(Role::Hod),
            "/profile/admin" => Self::Profile(Role::Admin),
            "/about" => Self::Info(InfoPage::About),
            "/academics" => Self::Info(InfoPage::Academics),
            "/admissions" => Self::Info(InfoPage::Admissions),
            "/departments" => Self::Info(InfoPage::Departments),
            "/facilities" => Self::Info(InfoPage::Facilities),
            "/placements" => Self::Info(InfoPage::Placements),
            "/events" => Self::Info(InfoPage::Events),
            "/contact" => Self::Info(InfoPage::Contact),
            _ => Self::default(),
        }
    }

    /// Every page, each exactly once.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Home, Self::Login, Self::Dashboard]
            .into_iter()
            .chain(RegistrationKind::ALL.into_iter().map(Self::Register))
            .chain(Role::ALL.into_iter().map(Self::Profile))
            .chain(InfoPage::ALL.into_iter().map(Self::Info))
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Register(_) | Self::Info(_) => Access::Public,
            Self::Dashboard => Access::Authenticated,
            Self::Profile(role) => Access::RoleOnly(role),
        }
    }

    /// Screens that only make sense for anonymous visitors.
    #[must_use]
    pub const fn is_auth_entry(self) -> bool {
        matches!(self, Self::Login | Self::Register(_))
    }

    /// Whether `role` may view this page.
    #[must_use]
    pub fn permits(self, role: Option<Role>) -> bool {
        match self.access() {
            Access::Public => true,
            Access::Authenticated => role.is_some(),
            Access::RoleOnly(required) => role == Some(required),
        }
    }
}

#[must_use]
pub const fn page_to_path(page: Page) -> &'static str {
    page.path()
}

#[must_use]
pub fn path_to_page(path: &str) -> Page {
    Page::from_path(path)
}

fn normalize(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), page, "{page:?}");
        }
    }

    #[test]
    fn canonical_paths_are_unique() {
        let mut paths: Vec<_> = Page::all().map(Page::path).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Page::from_path("/login?next=/dashboard"), Page::Login);
        assert_eq!(Page::from_path("/about#history"), Page::Info(InfoPage::About));
        assert_eq!(Page::from_path("/?utm=mail"), Page::Home);
    }

    #[test]
    fn trailing_and_missing_slashes_are_tolerated() {
        assert_eq!(Page::from_path("/dashboard/"), Page::Dashboard);
        assert_eq!(Page::from_path("dashboard"), Page::Dashboard);
        assert_eq!(
            Page::from_path("register/faculty/"),
            Page::Register(RegistrationKind::Faculty)
        );
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        for raw in ["/nope", "/DASHBOARD", "//", "/profile", "/profile/none", "%%%", "/login/extra"] {
            assert_eq!(Page::from_path(raw), Page::Home, "{raw}");
        }
    }

    #[test]
    fn access_rules_match_page_kind() {
        assert!(Page::Home.permits(None));
        assert!(!Page::Dashboard.permits(None));
        assert!(Page::Dashboard.permits(Some(Role::Hod)));
        assert!(Page::Profile(Role::Student).permits(Some(Role::Student)));
        assert!(!Page::Profile(Role::Student).permits(Some(Role::Faculty)));
        assert!(Page::Login.is_auth_entry());
        assert!(!Page::Dashboard.is_auth_entry());
    }
}
