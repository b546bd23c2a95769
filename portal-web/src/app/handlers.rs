use crate::app::state::{AppState, ToastAction};
use crate::components::toast::ToastKind;
use crate::i18n::tr1;
use crate::pages::login::LoginRequest;
use crate::pages::register::RegistrationRequest;
use portal_core::Page;
use yew::prelude::*;

/// Callbacks handed to the page components. `Default` gives no-op callbacks for rendering
/// outside a running app.
#[derive(Clone, Default, PartialEq)]
pub struct AppHandlers {
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegistrationRequest>,
    pub logout: Callback<()>,
    pub navigate: Callback<Page>,
    pub select_section: Callback<String>,
    pub dismiss_toast: Callback<u32>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            login: build_login(state),
            register: build_register(state),
            logout: build_logout(state),
            navigate: build_navigate(state),
            select_section: build_select_section(state),
            dismiss_toast: build_dismiss_toast(state),
        }
    }
}

fn report_failure(state: &AppState, err: &portal_core::PortalError) {
    log::warn!("sign-in rejected: {err}");
    state.push_toast(
        ToastKind::Error,
        tr1("notice.login_failed", "reason", &err.to_string()),
    );
}

fn build_login(state: &AppState) -> Callback<LoginRequest> {
    let state = state.clone();
    Callback::from(move |req: LoginRequest| {
        if let Err(err) = state.apply(|c| c.login(req.role, &req.name, req.remember)) {
            report_failure(&state, &err);
        }
    })
}

fn build_register(state: &AppState) -> Callback<RegistrationRequest> {
    let state = state.clone();
    Callback::from(move |req: RegistrationRequest| {
        log::info!(
            "registration submitted for {} ({})",
            req.form.name.trim(),
            req.kind.role()
        );
        if let Err(err) = state.apply(|c| c.complete_registration(req.kind, &req.form.name)) {
            report_failure(&state, &err);
        }
    })
}

fn build_logout(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.apply(|c| c.logout()))
}

fn build_navigate(state: &AppState) -> Callback<Page> {
    let state = state.clone();
    Callback::from(move |page: Page| state.apply(|c| c.navigate_to(page)))
}

fn build_select_section(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |section: String| state.apply(|c| c.select_section(&section)))
}

fn build_dismiss_toast(state: &AppState) -> Callback<u32> {
    let toasts = state.toasts.clone();
    Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
}
