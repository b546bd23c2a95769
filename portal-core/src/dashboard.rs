//! Dashboard sections offered to each role.

use crate::role::Role;

pub use crate::config::DEFAULT_SECTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

const fn section(id: &'static str, label: &'static str) -> Section {
    Section { id, label }
}

const STUDENT: &[Section] = &[
    section(DEFAULT_SECTION, "Overview"),
    section("attendance", "Attendance"),
    section("timetable", "Timetable"),
    section("results", "Results"),
    section("fees", "Fees"),
    section("library", "Library"),
];

const FACULTY: &[Section] = &[
    section(DEFAULT_SECTION, "Overview"),
    section("classes", "My Classes"),
    section("attendance", "Mark Attendance"),
    section("timetable", "Timetable"),
    section("leave", "Leave Requests"),
];

const HOD: &[Section] = &[
    section(DEFAULT_SECTION, "Overview"),
    section("faculty", "Faculty"),
    section("department", "Department"),
    section("approvals", "Approvals"),
    section("reports", "Reports"),
];

const ADMIN: &[Section] = &[
    section(DEFAULT_SECTION, "Overview"),
    section("users", "Users"),
    section("departments", "Departments"),
    section("notices", "Notices"),
    section("settings", "Settings"),
];

#[must_use]
pub const fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Student => STUDENT,
        Role::Faculty => FACULTY,
        Role::Hod => HOD,
        Role::Admin => ADMIN,
    }
}

#[must_use]
pub fn is_known_section(role: Role, id: &str) -> bool {
    sections_for(role).iter().any(|s| s.id == id)
}
