use anyhow::{Result, ensure};
use portal_core::{
    CookieJar, History, InfoPage, MemoryCookieJar, Notice, Page, Role, View, page_to_path,
    path_to_page,
};

use super::Scenario;
use crate::harness::Harness;

pub const CATALOG: [Scenario; 10] = [
    Scenario {
        key: "fresh-load",
        description: "Visitor lands on the home page and browses",
        run: fresh_load,
    },
    Scenario {
        key: "login-back",
        description: "Back after sign-in never shows the login form",
        run: login_back,
    },
    Scenario {
        key: "logout-twice",
        description: "Signing out twice leaves the same state",
        run: logout_twice,
    },
    Scenario {
        key: "cookies-disabled",
        description: "Cookies off: in-memory session, single warning",
        run: cookies_disabled,
    },
    Scenario {
        key: "section-history",
        description: "Dashboard section clicks do not grow history",
        run: section_history,
    },
    Scenario {
        key: "reload-restore",
        description: "Reload restores session, section and welcome",
        run: reload_restore,
    },
    Scenario {
        key: "session-expiry",
        description: "Remembered and browser sessions expire on time, even in an open tab",
        run: session_expiry,
    },
    Scenario {
        key: "deep-link-guard",
        description: "Protected URLs without a session land on login",
        run: deep_link_guard,
    },
    Scenario {
        key: "history-failure",
        description: "Rejected history writes still update the view",
        run: history_failure,
    },
    Scenario {
        key: "round-trip",
        description: "Every page survives path encoding",
        run: round_trip,
    },
];

fn expect_page(h: &Harness, page: Page) -> Result<()> {
    let actual = h.ctl().current_page();
    ensure!(
        actual == page,
        "expected {} but on {}",
        page.path(),
        actual.path()
    );
    Ok(())
}

fn expect_not_login(h: &Harness) -> Result<()> {
    ensure!(
        h.ctl().view() != View::Login,
        "login form shown to a signed-in user"
    );
    Ok(())
}

fn fresh_load() -> Result<Vec<String>> {
    let mut h = Harness::open("/");
    expect_page(&h, Page::Home)?;
    ensure!(h.ctl().view() == View::Home, "home view expected");
    ensure!(h.ctl().session().is_none(), "no session on a fresh load");
    ensure!(h.notices().is_empty(), "fresh load should not raise notices");

    h.ctl_mut().navigate_to(Page::Info(InfoPage::About));
    h.note("open about");
    ensure!(
        h.ctl().view() == View::Info(InfoPage::About),
        "about view expected"
    );
    ensure!(h.ctl().history().depth() == 2, "navigation pushes one entry");
    ensure!(h.ctl().history().scroll_count() == 1, "navigation scrolls to top");
    Ok(h.trace().to_vec())
}

fn login_back() -> Result<Vec<String>> {
    let mut h = Harness::open("/");
    h.ctl_mut().navigate_to(Page::Login);
    h.ctl_mut().login(Role::Student, "Asha", false)?;
    h.note("sign in as student");
    expect_page(&h, Page::Dashboard)?;
    ensure!(
        !h.ctl().history().entries().iter().any(|e| e == "/login"),
        "login entry left in history: {:?}",
        h.ctl().history().entries()
    );

    h.ctl_mut().navigate_to(Page::Info(InfoPage::Events));
    h.back();
    expect_page(&h, Page::Dashboard)?;
    expect_not_login(&h)?;
    h.back();
    expect_page(&h, Page::Home)?;
    h.forward();
    expect_page(&h, Page::Dashboard)?;
    expect_not_login(&h)?;
    Ok(h.trace().to_vec())
}

fn logout_twice() -> Result<Vec<String>> {
    let mut h = Harness::open("/login");
    h.ctl_mut().login(Role::Faculty, "Ravi", true)?;
    let _ = h.notices();

    h.ctl_mut().logout();
    h.note("sign out");
    let first = (
        h.ctl().state().clone(),
        h.ctl().history().entries().to_vec(),
    );
    ensure!(h.notices() == vec![Notice::SignedOut], "one sign-out notice");
    ensure!(
        h.ctl().store().jar().get(&h.config().session_cookie).is_none(),
        "session cookie survived logout"
    );

    h.ctl_mut().logout();
    h.note("sign out again");
    let second = (
        h.ctl().state().clone(),
        h.ctl().history().entries().to_vec(),
    );
    ensure!(first == second, "second logout changed state");
    ensure!(h.notices().is_empty(), "second logout raised a notice");
    expect_page(&h, Page::Home)?;
    Ok(h.trace().to_vec())
}

fn cookies_disabled() -> Result<Vec<String>> {
    let mut h = Harness::with_jar(MemoryCookieJar::blocked(), "/login");
    ensure!(!h.ctl().cookies_enabled(), "probe should fail");
    ensure!(
        h.notices() == vec![Notice::CookiesDisabled],
        "exactly one cookies warning"
    );

    h.ctl_mut().login(Role::Admin, "Meera", true)?;
    h.ctl_mut().select_section("users");
    h.note("sign in and open users");
    ensure!(
        matches!(h.ctl().view(), View::Dashboard { role: Role::Admin, ref section } if section == "users"),
        "in-memory session should still drive the dashboard"
    );
    ensure!(h.notices().is_empty(), "warning repeated after login");

    let mut h = h.reload();
    ensure!(h.ctl().session().is_none(), "nothing to restore without cookies");
    expect_page(&h, Page::Login)?;
    ensure!(
        h.notices() == vec![Notice::CookiesDisabled],
        "one warning per load"
    );
    Ok(h.trace().to_vec())
}

fn section_history() -> Result<Vec<String>> {
    let mut h = Harness::open("/login");
    h.ctl_mut().login(Role::Student, "Asha", false)?;
    let depth = h.ctl().history().depth();

    for section in ["attendance", "timetable", "results"] {
        h.ctl_mut().select_section(section);
        h.note(format!("section {section}"));
        ensure!(
            h.ctl().history().depth() == depth,
            "section {section} grew history"
        );
        ensure!(h.ctl().dashboard_section() == section, "section not applied");
        expect_page(&h, Page::Dashboard)?;
    }

    h.ctl_mut().navigate_to(Page::Info(InfoPage::Facilities));
    h.ctl_mut().select_section("fees");
    h.note("section fees from facilities");
    expect_page(&h, Page::Dashboard)?;
    ensure!(
        h.ctl().history().depth() == depth + 2,
        "returning to the dashboard should push exactly once"
    );
    ensure!(
        h.ctl().store().get_dashboard_section() == "fees",
        "section preference not persisted"
    );

    h.back();
    expect_page(&h, Page::Info(InfoPage::Facilities))?;
    h.back();
    expect_page(&h, Page::Dashboard)?;
    Ok(h.trace().to_vec())
}

fn reload_restore() -> Result<Vec<String>> {
    let mut h = Harness::open("/login");
    h.ctl_mut().login(Role::Hod, "Kiran", true)?;
    h.ctl_mut().select_section("approvals");
    let _ = h.notices();

    let mut h = h.reload();
    let session = h
        .ctl()
        .session()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("session not restored"))?;
    ensure!(
        session.role == Role::Hod && session.display_name == "Kiran",
        "wrong identity restored"
    );
    ensure!(h.ctl().dashboard_section() == "approvals", "section lost");
    expect_page(&h, Page::Dashboard)?;
    ensure!(
        h.notices()
            == vec![Notice::WelcomeBack {
                name: "Kiran".to_string()
            }],
        "exactly one welcome back"
    );

    h.visit("/about");
    let h = h.reload();
    expect_page(&h, Page::Dashboard)?;
    ensure!(
        h.ctl().history().current_path() == "/dashboard",
        "restore should rewrite the URL"
    );
    Ok(h.trace().to_vec())
}

fn session_expiry() -> Result<Vec<String>> {
    let mut h = Harness::open("/login");
    h.ctl_mut().login(Role::Student, "Asha", true)?;
    h.ctl_mut().select_section("fees");

    h.advance_days(29);
    let mut h = h.reload();
    ensure!(h.ctl().session().is_some(), "session expired early");

    h.advance_days(2);
    let mut h = h.reload();
    ensure!(h.ctl().session().is_none(), "session outlived its lifetime");
    expect_page(&h, Page::Login)?;
    ensure!(
        h.ctl().store().get_dashboard_section() == "fees",
        "section preference should outlive the session"
    );

    h.ctl_mut().login(Role::Student, "Asha", false)?;
    let mut h = h.restart_browser();
    ensure!(
        h.ctl().session().is_none(),
        "browser-session login survived a restart"
    );
    expect_page(&h, Page::Login)?;

    h.ctl_mut().login(Role::Student, "Asha", true)?;
    h.notices();
    h.advance_days(31);
    h.visit("/dashboard");
    ensure!(h.ctl().session().is_none(), "open tab kept an expired session");
    expect_page(&h, Page::Login)?;
    ensure!(
        h.notices() == vec![Notice::SessionExpired],
        "expiry in an open tab should be announced once"
    );
    Ok(h.trace().to_vec())
}

fn deep_link_guard() -> Result<Vec<String>> {
    let mut trace = Vec::new();
    for path in ["/dashboard", "/profile/admin", "/profile/student"] {
        let h = Harness::open(path);
        expect_page(&h, Page::Login)?;
        ensure!(
            h.ctl().history().current_path() == "/login",
            "{path} should redirect to /login"
        );
        trace.extend(h.trace().iter().cloned());
    }

    let mut h = Harness::open("/login");
    h.ctl_mut().login(Role::Student, "Asha", false)?;
    h.ctl_mut().navigate_to(Page::Profile(Role::Admin));
    h.note("open admin profile as student");
    expect_page(&h, Page::Dashboard)?;
    h.ctl_mut().navigate_to(Page::Profile(Role::Student));
    ensure!(
        h.ctl().view() == View::Profile(Role::Student),
        "own profile should open"
    );
    h.visit("/login");
    expect_page(&h, Page::Dashboard)?;
    trace.extend(h.trace().iter().cloned());
    Ok(trace)
}

fn history_failure() -> Result<Vec<String>> {
    let mut h = Harness::open("/");
    h.ctl_mut().history_mut().set_reject_writes(true);
    h.note("history writes rejected");

    h.ctl_mut().navigate_to(Page::Info(InfoPage::Contact));
    expect_page(&h, Page::Info(InfoPage::Contact))?;
    ensure!(
        h.ctl().history().current_path() == "/",
        "rejected push still moved the URL"
    );

    h.ctl_mut().navigate_to(Page::Login);
    h.ctl_mut().login(Role::Faculty, "Ravi", false)?;
    ensure!(
        matches!(h.ctl().view(), View::Dashboard { role: Role::Faculty, .. }),
        "dashboard should render without a history entry"
    );
    h.ctl_mut().logout();
    expect_page(&h, Page::Home)?;
    Ok(h.trace().to_vec())
}

fn round_trip() -> Result<Vec<String>> {
    let mut trace = Vec::new();
    for page in Page::all() {
        let path = page_to_path(page);
        ensure!(path_to_page(path) == page, "{path} did not round-trip");
        trace.push(format!("{path} ok"));
    }
    let loose = [
        ("/home", Page::Home),
        ("/index.html", Page::Home),
        ("/about/", Page::Info(InfoPage::About)),
        ("/login?next=%2F#top", Page::Login),
        ("/nowhere", Page::Home),
        ("", Page::Home),
    ];
    for (raw, page) in loose {
        ensure!(path_to_page(raw) == page, "{raw:?} decoded wrongly");
        trace.push(format!("{raw:?} -> {}", page.path()));
    }
    Ok(trace)
}
