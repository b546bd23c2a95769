use crate::components::nav_link::NavLink;
use crate::i18n::t;
use portal_core::{Page, RegistrationKind};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub department: String,
    /// Roll number for students, employee ID for faculty.
    pub id_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub kind: RegistrationKind,
    pub form: RegistrationForm,
}

#[derive(Properties, Clone, PartialEq)]
pub struct RegisterPageProps {
    pub kind: RegistrationKind,
    pub on_register: Callback<RegistrationRequest>,
    pub on_navigate: Callback<Page>,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Department,
    IdNumber,
}

fn field_input(form: &UseStateHandle<RegistrationForm>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
            return;
        };
        let mut next = (*form).clone();
        let slot = match field {
            Field::Name => &mut next.name,
            Field::Email => &mut next.email,
            Field::Department => &mut next.department,
            Field::IdNumber => &mut next.id_number,
        };
        *slot = input.value();
        form.set(next);
    })
}

const fn copy_keys(kind: RegistrationKind) -> (&'static str, &'static str) {
    match kind {
        RegistrationKind::Student => ("register.student_title", "register.roll_number"),
        RegistrationKind::Faculty => ("register.faculty_title", "register.employee_id"),
    }
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let form = use_state(RegistrationForm::default);
    let error = use_state(|| false);
    let (title_key, id_key) = copy_keys(props.kind);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let kind = props.kind;
        let cb = props.on_register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.name.trim().is_empty() {
                error.set(true);
                return;
            }
            error.set(false);
            cb.emit(RegistrationRequest {
                kind,
                form: (*form).clone(),
            });
        })
    };

    html! {
        <section class="register" data-testid="register-page">
            <h1>{ t(title_key) }</h1>
            <form onsubmit={on_submit} novalidate=true>
                <label for="reg-name">{ t("register.name") }</label>
                <input id="reg-name" type="text" value={form.name.clone()} oninput={field_input(&form, Field::Name)} />
                <label for="reg-email">{ t("register.email") }</label>
                <input id="reg-email" type="email" value={form.email.clone()} oninput={field_input(&form, Field::Email)} />
                <label for="reg-department">{ t("register.department") }</label>
                <input id="reg-department" type="text" value={form.department.clone()} oninput={field_input(&form, Field::Department)} />
                <label for="reg-id">{ t(id_key) }</label>
                <input id="reg-id" type="text" value={form.id_number.clone()} oninput={field_input(&form, Field::IdNumber)} />
                if *error {
                    <p class="form-error" role="alert">{ t("register.name_required") }</p>
                }
                <button type="submit" class="btn btn-primary">{ t("register.submit") }</button>
            </form>
            <NavLink page={Page::Login} label={t("register.have_account")} on_navigate={props.on_navigate.clone()} />
        </section>
    }
}
