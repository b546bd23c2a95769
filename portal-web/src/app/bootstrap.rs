#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Restore the session once, then follow back/forward for the lifetime of the app.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    use yew_router::history::{BrowserHistory, History as _};

    let state = app_state.clone();
    use_effect_with((), move |()| {
        state.apply(|c| c.start());

        let listener_state = state.clone();
        let listener = BrowserHistory::new().listen(move || {
            listener_state.apply(|c| c.location_changed());
        });
        move || drop(listener)
    });
}
