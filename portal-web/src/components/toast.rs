use crate::i18n::{t, tr1};
use portal_core::Notice;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    #[must_use]
    pub fn from_notice(id: u32, notice: &Notice) -> Self {
        let (kind, text) = match notice {
            Notice::WelcomeBack { name } => {
                (ToastKind::Success, tr1("notice.welcome_back", "name", name))
            }
            Notice::CookiesDisabled => (ToastKind::Warning, t("notice.cookies_disabled")),
            Notice::SignedOut => (ToastKind::Info, t("notice.signed_out")),
            Notice::SessionExpired => (ToastKind::Warning, t("notice.session_expired")),
        };
        Self { id, kind, text }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastMessage>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let cb = props.on_dismiss.clone();
                let on_click = Callback::from(move |_| cb.emit(id));
                html! {
                    <div class={classes!("alert", toast.kind.class())} data-toast-id={id.to_string()}>
                        <span>{ toast.text.clone() }</span>
                        <button class="btn btn-ghost btn-xs" aria-label={t("ui.dismiss")} onclick={on_click}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
