use crate::components::toast::{ToastKind, ToastMessage};
use crate::cookies::BrowserCookieJar;
use crate::history::{BrowserClock, BrowserHistory};
use portal_core::{Clock, CookieJar, History, NavigationController, Page, Session, View};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;

pub type PortalController = NavigationController<BrowserCookieJar, BrowserHistory, BrowserClock>;

/// How long a toast stays up before dismissing itself.
pub const TOAST_MS: i32 = 5_000;

/// Everything the view needs from the controller, copied out so rendering never borrows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub page: Page,
    pub section: String,
    pub session: Option<Session>,
    pub view: View,
    /// `None` until the controller has started and tested cookie storage.
    pub cookie_capability: Option<bool>,
}

impl Snapshot {
    #[must_use]
    pub fn capture<J: CookieJar, H: History, C: Clock>(
        controller: &NavigationController<J, H, C>,
    ) -> Self {
        Self {
            page: controller.current_page(),
            section: controller.dashboard_section().to_string(),
            session: controller.session().cloned(),
            view: controller.view(),
            cookie_capability: controller.cookie_capability(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    pub items: Vec<ToastMessage>,
}

pub enum ToastAction {
    Push(Vec<ToastMessage>),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(new) => items.extend(new),
            ToastAction::Dismiss(id) => items.retain(|toast| toast.id != id),
        }
        Rc::new(Self { items })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub controller: Rc<RefCell<PortalController>>,
    pub snapshot: UseStateHandle<Snapshot>,
    pub toasts: UseReducerHandle<ToastList>,
    pub next_toast: Rc<Cell<u32>>,
    pub last_page: Rc<Cell<Page>>,
    pub remember_days: u32,
}

#[hook]
pub fn use_app_state() -> AppState {
    let config = use_memo((), |()| crate::config::portal_config());
    let remember_days = config.remember_days;
    let controller = use_mut_ref(|| {
        NavigationController::new(
            BrowserCookieJar::default(),
            BrowserHistory::new(),
            BrowserClock,
            (*config).clone(),
        )
    });
    let seed = controller.clone();
    let snapshot = use_state(move || Snapshot::capture(&seed.borrow()));
    let initial_page = snapshot.page;
    let toasts = use_reducer(ToastList::default);
    let next_toast = use_memo((), |()| Cell::new(1_u32));
    let last_page = use_memo((), move |()| Cell::new(initial_page));
    AppState {
        controller,
        snapshot,
        toasts,
        next_toast,
        last_page,
        remember_days,
    }
}

impl AppState {
    /// Run one controller operation, then publish the result to the view.
    pub fn apply<R>(&self, op: impl FnOnce(&mut PortalController) -> R) -> R {
        let result = op(&mut self.controller.borrow_mut());
        self.sync();
        result
    }

    /// Copy controller state into the view and drain notices into toasts.
    pub fn sync(&self) {
        let (snapshot, notices) = {
            let mut controller = self.controller.borrow_mut();
            (Snapshot::capture(&controller), controller.take_notices())
        };
        let page_changed = self.last_page.replace(snapshot.page) != snapshot.page;
        self.snapshot.set(snapshot);

        let messages: Vec<ToastMessage> = notices
            .iter()
            .map(|notice| ToastMessage::from_notice(self.toast_id(), notice))
            .collect();
        self.show(messages);
        if page_changed {
            crate::a11y::focus_main();
        }
    }

    /// Show a toast that does not come from the controller (e.g. a rejected login).
    pub fn push_toast(&self, kind: ToastKind, text: String) {
        let id = self.toast_id();
        self.show(vec![ToastMessage { id, kind, text }]);
    }

    fn toast_id(&self) -> u32 {
        let id = self.next_toast.get();
        self.next_toast.set(id.wrapping_add(1));
        id
    }

    fn show(&self, messages: Vec<ToastMessage>) {
        if messages.is_empty() {
            return;
        }
        for message in &messages {
            crate::a11y::announce(&message.text);
            #[cfg(target_arch = "wasm32")]
            {
                let toasts = self.toasts.clone();
                let id = message.id;
                wasm_bindgen_futures::spawn_local(async move {
                    if crate::dom::sleep_ms(TOAST_MS).await.is_ok() {
                        toasts.dispatch(ToastAction::Dismiss(id));
                    }
                });
            }
        }
        self.toasts.dispatch(ToastAction::Push(messages));
    }
}
