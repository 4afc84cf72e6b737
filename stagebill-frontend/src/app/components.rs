pub mod nav {
    use crate::app::GlobalState;
    use leptos::prelude::*;
    use log::error;
    use stagebill_api::client::{Api, ApiWeb};
    use stagebill_shared::fe_router;
    use web_sys::SubmitEvent;

    #[component]
    pub fn Nav() -> impl IntoView {
        let global_state = expect_context::<GlobalState>();
        let api_logout = ApiWeb::new();
        let logout_or_loading = move || {
            if api_logout.is_pending_tracked() {
                "loading..."
            } else {
                "Logout"
            }
        };
        let username = move || global_state.username().unwrap_or_default();
        let on_logout = move |e: SubmitEvent| {
            e.prevent_default();

            api_logout.logout().send_web(move |result| async move {
                match result {
                    Ok(_) => {
                        global_state.logout();
                    }
                    Err(err) => {
                        error!("error logging out {err}");
                    }
                }
            });
        };

        view! {
            <nav class="text-gray-200 pb-1 flex gap-2 px-2 py-1 items-center justify-between">
                <a href=fe_router::home::PATH class="font-black text-[1.3rem]">
                    "Stagebill"
                </a>
                <div class=move || format!("{}", if global_state.user_pending() { "" } else { "hidden" })>
                    <p>"loading..."</p>
                </div>
                <div class=move || format!("{}", if global_state.is_logged_in() || global_state.user_pending() { "hidden" } else { "" })>
                    <a href=fe_router::authentication::PATH>"Log In"</a>
                </div>
                <div class=move || format!("flex gap-2 {}", if global_state.is_logged_in() { "" } else { "hidden" })>
                    <p>{username}</p>
                    <form method="POST" action="" on:submit=on_logout>
                        <input type="submit" value=logout_or_loading class="transition-all duration-300 ease-in hover:font-bold"/>
                    </form>
                </div>
            </nav>
        }
    }
}
