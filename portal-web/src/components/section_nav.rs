use portal_core::{Role, sections_for};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub role: Role,
    pub active: AttrValue,
    pub on_select: Callback<String>,
}

/// Sidebar of dashboard sections. Selecting one never leaves the dashboard.
#[function_component(SectionNav)]
pub fn section_nav(p: &Props) -> Html {
    html! {
        <nav class="section-nav" aria-label={crate::i18n::t("nav.sections")}>
            <ul class="menu">
                { for sections_for(p.role).iter().map(|section| {
                    let id = section.id;
                    let on_click = {
                        let cb = p.on_select.clone();
                        Callback::from(move |_| cb.emit(id.to_string()))
                    };
                    let active = p.active.as_str() == id;
                    html! {
                        <li>
                            <button
                                type="button"
                                class={classes!("section-link", active.then_some("active"))}
                                aria-current={active.then_some("page")}
                                data-section={id}
                                onclick={on_click}
                            >
                                { section.label }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
