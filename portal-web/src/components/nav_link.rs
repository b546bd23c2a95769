use portal_core::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub page: Page,
    pub label: AttrValue,
    #[prop_or_default]
    pub current: Option<Page>,
    #[prop_or_default]
    pub class: Classes,
    pub on_navigate: Callback<Page>,
}

/// Anchor that keeps a real `href` for middle-click/copy but routes clicks in-app.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let page = props.page;
        let cb = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                return;
            }
            e.prevent_default();
            cb.emit(page);
        })
    };
    let aria_current = (props.current == Some(props.page)).then_some("page");
    html! {
        <a
            class={props.class.clone()}
            href={crate::paths::with_base(props.page.path(), crate::paths::router_base().as_deref())}
            aria-current={aria_current}
            {onclick}
        >
            { props.label.clone() }
        </a>
    }
}
