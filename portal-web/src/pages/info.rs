use crate::components::nav_link::NavLink;
use crate::i18n::t;
use portal_core::{InfoPage, Page};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct InfoPageProps {
    pub page: InfoPage,
    pub on_navigate: Callback<Page>,
}

/// Static informational page; the copy lives in the string bundle.
#[function_component(InfoPageView)]
pub fn info_page(props: &InfoPageProps) -> Html {
    let key = props.page.key();
    let call_to_action = (props.page != InfoPage::Admissions).then(|| {
        html! {
            <NavLink
                page={Page::Info(InfoPage::Admissions)}
                label={t("home.cta_admissions")}
                class={classes!("btn")}
                on_navigate={props.on_navigate.clone()}
            />
        }
    });
    html! {
        <section class="info-page" data-testid={format!("info-{key}")}>
            <h1>{ t(&format!("info.{key}.title")) }</h1>
            <p>{ t(&format!("info.{key}.body")) }</p>
            { call_to_action.unwrap_or_default() }
        </section>
    }
}
