use crate::components::nav_link::NavLink;
use crate::i18n::t;
use portal_core::{InfoPage, Page};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub signed_in: bool,
    pub on_navigate: Callback<Page>,
}

const HIGHLIGHTS: [InfoPage; 4] = [
    InfoPage::Academics,
    InfoPage::Facilities,
    InfoPage::Placements,
    InfoPage::Events,
];

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let (cta_page, cta_label) = if props.signed_in {
        (Page::Dashboard, t("home.cta_dashboard"))
    } else {
        (Page::Login, t("home.cta_login"))
    };
    html! {
        <section class="home" data-testid="home-page">
            <div class="hero">
                <h1>{ t("home.hero_title") }</h1>
                <p>{ t("home.hero_body") }</p>
                <div class="hero-actions">
                    <NavLink
                        page={Page::Info(InfoPage::Admissions)}
                        label={t("home.cta_admissions")}
                        class={classes!("btn", "btn-primary")}
                        on_navigate={props.on_navigate.clone()}
                    />
                    <NavLink
                        page={cta_page}
                        label={cta_label}
                        class={classes!("btn")}
                        on_navigate={props.on_navigate.clone()}
                    />
                </div>
            </div>
            <h2>{ t("home.highlights") }</h2>
            <div class="cards">
                { for HIGHLIGHTS.iter().map(|info| html! {
                    <article class="card">
                        <h3>{ t(&format!("info.{}.title", info.key())) }</h3>
                        <p>{ t(&format!("info.{}.body", info.key())) }</p>
                        <NavLink
                            page={Page::Info(*info)}
                            label={t(&format!("info.{}.title", info.key()))}
                            class={classes!("card-link")}
                            on_navigate={props.on_navigate.clone()}
                        />
                    </article>
                }) }
            </div>
        </section>
    }
}
