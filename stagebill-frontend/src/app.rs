use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use log::trace;
use page::{authentication, home};
use stagebill_api::auth::SessionUser;
use stagebill_api::client::{Api, ApiWeb, ServerRes};

pub mod components;
pub mod page;

#[derive(Clone, Copy, Default, Debug)]
pub struct GlobalState {
    pub user: RwSignal<Option<SessionUser>>,
    pub user_pending: RwSignal<bool>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            user_pending: RwSignal::new(true),
            ..Default::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(|v| v.is_some())
    }

    pub fn user_pending(&self) -> bool {
        self.user_pending.get()
    }

    pub fn username(&self) -> Option<String> {
        self.user.with(|v| v.as_ref().map(|user| user.name.clone()))
    }

    pub fn update_user(&self, user: Option<SessionUser>) {
        self.user.set(user);
    }

    pub fn logout(&self) {
        self.user.set(None);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(GlobalState::new());
    let global_state = expect_context::<GlobalState>();

    let api_authorized = ApiWeb::new();
    Effect::new(move || {
        api_authorized.authorized().send_web(move |result| async move {
            match result {
                Ok(ServerRes::User(user)) => {
                    trace!("session restored for {}", user.name);
                    global_state.user.set(Some(user));
                }
                Ok(res) => {
                    trace!("unexpected session check response: {res:?}");
                }
                Err(err) => {
                    trace!("no active session: {err}");
                }
            }
            global_state.user_pending.set(false);
        });
    });

    view! {
        <Router>
            <Routes fallback=|| "not found">
                <Route path=path!("/") view=home::Page />
                <Route path=path!("/authentication") view=authentication::Page />
            </Routes>
        </Router>
    }
}
