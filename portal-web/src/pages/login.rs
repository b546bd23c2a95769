use crate::components::nav_link::NavLink;
use crate::i18n::{t, tr1};
use portal_core::{Page, RegistrationKind, Role};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub role: Role,
    pub name: String,
    pub remember: bool,
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    pub remember_days: u32,
    /// Cleared once cookie storage is known to be blocked.
    #[prop_or(true)]
    pub remember_available: bool,
    pub on_login: Callback<LoginRequest>,
    pub on_navigate: Callback<Page>,
}

/// Build a request from the raw form fields, or the error key to show.
pub fn login_request(role: Role, name: &str, remember: bool) -> Result<LoginRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("login.name_required");
    }
    Ok(LoginRequest {
        role,
        name: name.to_string(),
        remember,
    })
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let role = use_state(|| Role::Student);
    let name = use_state(String::new);
    let remember = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            if let Some(parsed) = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|sel| sel.value().parse::<Role>().ok())
            {
                role.set(parsed);
            }
        })
    };
    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                remember.set(input.checked());
            }
        })
    };
    let on_submit = {
        let (role, name, remember, error) = (role.clone(), name.clone(), remember.clone(), error.clone());
        let cb = props.on_login.clone();
        let remember_available = props.remember_available;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match login_request(*role, &name, *remember && remember_available) {
                Ok(request) => {
                    error.set(None);
                    cb.emit(request);
                }
                Err(key) => error.set(Some(key)),
            }
        })
    };

    html! {
        <section class="login" data-testid="login-page">
            <h1>{ t("login.title") }</h1>
            <form onsubmit={on_submit} novalidate=true>
                <label for="login-role">{ t("login.role") }</label>
                <select id="login-role" onchange={on_role}>
                    { for Role::ALL.iter().map(|r| html! {
                        <option value={r.as_str()} selected={*r == *role}>{ r.label() }</option>
                    }) }
                </select>
                <label for="login-name">{ t("login.name") }</label>
                <input id="login-name" type="text" autocomplete="name" value={(*name).clone()} oninput={on_name} />
                <label class="checkbox">
                    <input id="login-remember" type="checkbox" checked={*remember && props.remember_available} disabled={!props.remember_available} onchange={on_remember} />
                    { tr1("login.remember", "days", &props.remember_days.to_string()) }
                </label>
                if let Some(key) = *error {
                    <p class="form-error" role="alert">{ t(key) }</p>
                }
                <button type="submit" class="btn btn-primary">{ t("login.submit") }</button>
            </form>
            <p class="register-links">
                { t("login.new_here") }{" "}
                <NavLink page={Page::Register(RegistrationKind::Student)} label={t("login.register_student")} on_navigate={props.on_navigate.clone()} />
                {" · "}
                <NavLink page={Page::Register(RegistrationKind::Faculty)} label={t("login.register_faculty")} on_navigate={props.on_navigate.clone()} />
            </p>
        </section>
    }
}
