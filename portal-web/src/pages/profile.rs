use crate::components::nav_link::NavLink;
use crate::i18n::{t, tr1};
use portal_core::{Page, Role};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProfilePageProps {
    pub role: Role,
    pub display_name: AttrValue,
    pub on_navigate: Callback<Page>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    html! {
        <section class="profile" data-testid="profile-page" data-role={props.role.as_str()}>
            <h1>{ tr1("profile.title", "role", props.role.label()) }</h1>
            <dl>
                <dt>{ t("profile.name") }</dt>
                <dd>{ props.display_name.clone() }</dd>
                <dt>{ t("profile.role") }</dt>
                <dd>{ props.role.label() }</dd>
            </dl>
            <NavLink page={Page::Dashboard} label={t("profile.back")} class={classes!("btn")} on_navigate={props.on_navigate.clone()} />
        </section>
    }
}
