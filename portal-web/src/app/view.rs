use crate::app::handlers::AppHandlers;
use crate::app::state::Snapshot;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::{Toast, ToastMessage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::info::InfoPageView;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use portal_core::View;
use yew::prelude::*;

fn display_name(snapshot: &Snapshot) -> AttrValue {
    snapshot
        .session
        .as_ref()
        .map(|s| AttrValue::from(s.display_name.clone()))
        .unwrap_or_default()
}

fn render_main_view(snapshot: &Snapshot, handlers: &AppHandlers, remember_days: u32) -> Html {
    let on_navigate = handlers.navigate.clone();
    match &snapshot.view {
        View::Home => html! {
            <HomePage signed_in={snapshot.session.is_some()} {on_navigate} />
        },
        View::Login => {
            let remember_available = snapshot.cookie_capability != Some(false);
            html! {
                <LoginPage {remember_days} {remember_available} on_login={handlers.login.clone()} {on_navigate} />
            }
        }
        View::Register(kind) => html! {
            <RegisterPage kind={*kind} on_register={handlers.register.clone()} {on_navigate} />
        },
        View::Dashboard { role, section } => html! {
            <DashboardPage
                role={*role}
                display_name={display_name(snapshot)}
                section={AttrValue::from(section.clone())}
                on_select_section={handlers.select_section.clone()}
                {on_navigate}
            />
        },
        View::Profile(role) => html! {
            <ProfilePage role={*role} display_name={display_name(snapshot)} {on_navigate} />
        },
        View::Info(page) => html! { <InfoPageView page={*page} {on_navigate} /> },
        View::Nothing => Html::default(),
    }
}

/// The whole document body for one snapshot. Pure so it renders outside the browser too.
pub fn render_app(
    snapshot: &Snapshot,
    handlers: &AppHandlers,
    toasts: &[ToastMessage],
    remember_days: u32,
) -> Html {
    let main_view = render_main_view(snapshot, handlers, remember_days);
    html! {
        <>
            <Header
                current={snapshot.page}
                session={snapshot.session.clone()}
                on_navigate={handlers.navigate.clone()}
                on_logout={handlers.logout.clone()}
            />
            <Toast toasts={toasts.to_vec()} on_dismiss={handlers.dismiss_toast.clone()} />
            <div id="portal-status" class="sr-only" aria-live="polite"></div>
            <main id="main" role="main" tabindex="-1">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { main_view }
            </main>
            <Footer on_navigate={handlers.navigate.clone()} />
        </>
    }
}
