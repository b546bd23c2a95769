use crate::components::nav_link::NavLink;
use crate::i18n::t;
use portal_core::{InfoPage, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    html! {
        <footer role="contentinfo" class="portal-footer">
            <nav aria-label={t("footer.links")}>
                { for InfoPage::ALL.iter().map(|info| html! {
                    <NavLink
                        page={Page::Info(*info)}
                        label={t(&format!("info.{}.title", info.key()))}
                        on_navigate={p.on_navigate.clone()}
                    />
                }) }
            </nav>
            <p class="copyright">{ "© " }{ t("footer.copyright") }</p>
        </footer>
    }
}
