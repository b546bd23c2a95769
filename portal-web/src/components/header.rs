use crate::components::nav_link::NavLink;
use crate::i18n::t;
use portal_core::{InfoPage, Page, Session};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Page,
    pub session: Option<Session>,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

const HEADER_LINKS: [InfoPage; 5] = [
    InfoPage::About,
    InfoPage::Academics,
    InfoPage::Admissions,
    InfoPage::Departments,
    InfoPage::Contact,
];

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let current = Some(p.current);
    let account = match p.session.as_ref() {
        Some(session) => {
            let logout = {
                let cb = p.on_logout.clone();
                Callback::from(move |_| cb.emit(()))
            };
            html! {
                <div class="header-right" data-testid="account-menu">
                    <span class="header-user">{ session.display_name.clone() }</span>
                    <NavLink page={Page::Dashboard} label={t("nav.dashboard")} {current} on_navigate={p.on_navigate.clone()} />
                    <NavLink page={Page::Profile(session.role)} label={t("nav.profile")} {current} on_navigate={p.on_navigate.clone()} />
                    <button id="logout-btn" type="button" onclick={logout}>{ t("nav.logout") }</button>
                </div>
            }
        }
        None => html! {
            <div class="header-right">
                <NavLink page={Page::Login} label={t("nav.login")} {current} class={classes!("btn")} on_navigate={p.on_navigate.clone()} />
            </div>
        },
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <NavLink page={Page::Home} label={t("app.title")} {current} class={classes!("brand")} on_navigate={p.on_navigate.clone()} />
                <nav aria-label={t("nav.primary")} class="header-left">
                    { for HEADER_LINKS.iter().map(|info| html! {
                        <NavLink
                            page={Page::Info(*info)}
                            label={t(&format!("info.{}.title", info.key()))}
                            {current}
                            on_navigate={p.on_navigate.clone()}
                        />
                    }) }
                </nav>
                { account }
            </div>
        </header>
    }
}
