#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::{AppState, Snapshot, ToastAction, ToastList};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let handlers = AppHandlers::new(&app_state);
    view::render_app(
        &app_state.snapshot,
        &handlers,
        &app_state.toasts.items,
        app_state.remember_days,
    )
}
