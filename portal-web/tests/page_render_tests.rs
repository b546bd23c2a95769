use futures::executor::block_on;
use portal_core::{InfoPage, Page, RegistrationKind, Role};
use portal_web::pages::{
    dashboard::{DashboardPage, DashboardPageProps},
    home::{HomePage, HomePageProps},
    info::{InfoPageProps, InfoPageView},
    login::{LoginPage, LoginPageProps},
    profile::{ProfilePage, ProfilePageProps},
    register::{RegisterPage, RegisterPageProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn home_page_offers_sign_in_or_dashboard() {
    let signed_out = block_on(
        LocalServerRenderer::<HomePage>::with_props(HomePageProps {
            signed_in: false,
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(signed_out.contains("data-testid=\"home-page\""));
    assert!(signed_out.contains("Sign in to your dashboard"));
    assert!(signed_out.contains("href=\"/admissions\""));

    let signed_in = block_on(
        LocalServerRenderer::<HomePage>::with_props(HomePageProps {
            signed_in: true,
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(signed_in.contains("Go to your dashboard"));
    assert!(signed_in.contains("href=\"/dashboard\""));
}

#[test]
fn login_page_lists_every_role_and_registration_links() {
    let html = block_on(
        LocalServerRenderer::<LoginPage>::with_props(LoginPageProps {
            remember_days: 30,
            remember_available: true,
            on_login: Callback::noop(),
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("data-testid=\"login-page\""));
    for role in Role::ALL {
        assert!(html.contains(&format!("value=\"{}\"", role.as_str())), "{role}");
    }
    assert!(html.contains("Remember me for 30 days"));
    assert!(html.contains("href=\"/register/student\""));
    assert!(html.contains("href=\"/register/faculty\""));
}

#[test]
fn register_page_adapts_to_the_kind() {
    let student = block_on(
        LocalServerRenderer::<RegisterPage>::with_props(RegisterPageProps {
            kind: RegistrationKind::Student,
            on_register: Callback::noop(),
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(student.contains("Student registration"));
    assert!(student.contains("Roll number"));

    let faculty = block_on(
        LocalServerRenderer::<RegisterPage>::with_props(RegisterPageProps {
            kind: RegistrationKind::Faculty,
            on_register: Callback::noop(),
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(faculty.contains("Faculty registration"));
    assert!(faculty.contains("Employee ID"));
    assert!(faculty.contains("href=\"/login\""));
}

fn render_dashboard(role: Role, section: &str) -> String {
    block_on(
        LocalServerRenderer::<DashboardPage>::with_props(DashboardPageProps {
            role,
            display_name: AttrValue::from("Asha"),
            section: AttrValue::from(section.to_string()),
            on_select_section: Callback::noop(),
            on_navigate: Callback::noop(),
        })
        .render(),
    )
}

#[test]
fn dashboard_greets_and_marks_the_active_section() {
    let html = render_dashboard(Role::Student, "fees");
    assert!(html.contains("Hello, Asha"));
    assert!(html.contains("data-section=\"fees\""));
    assert!(html.contains("Fee statements and payment status."));
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("href=\"/profile/student\""));
    assert!(!html.contains("not available"));
}

#[test]
fn dashboard_falls_back_to_overview_for_foreign_sections() {
    let html = render_dashboard(Role::Admin, "fees");
    assert!(html.contains("data-section=\"dashboard\""));
    assert!(html.contains("not available"));
    assert!(html.contains("Here is a summary of your day."));
}

#[test]
fn profile_page_shows_identity() {
    let html = block_on(
        LocalServerRenderer::<ProfilePage>::with_props(ProfilePageProps {
            role: Role::Hod,
            display_name: AttrValue::from("Kiran"),
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("data-testid=\"profile-page\""));
    assert!(html.contains("Kiran"));
    assert!(html.contains(Role::Hod.label()));
    assert!(html.contains("href=\"/dashboard\""));
}

#[test]
fn info_pages_render_their_copy() {
    for info in InfoPage::ALL {
        let html = block_on(
            LocalServerRenderer::<InfoPageView>::with_props(InfoPageProps {
                page: info,
                on_navigate: Callback::noop(),
            })
            .render(),
        );
        assert!(
            html.contains(&format!("data-testid=\"info-{}\"", info.key())),
            "{info:?}"
        );
        assert!(!html.contains("info."), "untranslated key on {info:?}");
    }
    assert_eq!(Page::Info(InfoPage::Contact).path(), "/contact");
}
