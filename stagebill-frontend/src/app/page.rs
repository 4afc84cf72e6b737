pub mod home {
    use crate::app::components::nav::Nav;
    use leptos::prelude::*;

    #[component]
    pub fn Page() -> impl IntoView {
        view! {
            <main class="grid grid-rows-[auto_1fr] h-screen">
                <Nav/>
                <div class="grid place-items-center text-white">
                    <h1 class="text-2xl font-bold">"Stagebill"</h1>
                </div>
            </main>
        }
    }
}

pub mod authentication {
    use crate::app::GlobalState;
    use crate::app::components::nav::Nav;
    use leptos::prelude::*;
    use leptos_router::hooks::use_navigate;
    use log::error;
    use stagebill_api::auth::{Credentials, SessionUser};
    use stagebill_api::client::{Api, ApiWeb, ServerRes};
    use stagebill_shared::auth::form_errors;
    use stagebill_shared::fe_router;
    use web_sys::SubmitEvent;

    /// Field values plus the mode flag. Toggling the mode flips which
    /// endpoint a submit targets and whether the email rule applies; the
    /// field values survive the toggle untouched.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct FormState {
        pub sign_up: bool,
        pub name: String,
        pub email: String,
    }

    impl FormState {
        pub fn toggle_mode(&mut self) {
            self.sign_up = !self.sign_up;
        }

        pub fn email_active(&self) -> bool {
            self.sign_up
        }

        pub fn errors(&self) -> Vec<String> {
            form_errors(&self.name, &self.email, self.sign_up)
        }

        pub fn credentials(&self) -> Credentials {
            Credentials {
                name: self.name.clone(),
                email: self.email.clone(),
            }
        }
    }

    pub struct ModeLabels {
        pub heading: &'static str,
        pub toggle: &'static str,
        pub submit: &'static str,
    }

    pub fn mode_labels(sign_up: bool) -> ModeLabels {
        if sign_up {
            ModeLabels {
                heading: "Already a member?",
                toggle: "Log In!",
                submit: "Sign Up!",
            }
        } else {
            ModeLabels {
                heading: "Not a member?",
                toggle: "Register now!",
                submit: "Log In!",
            }
        }
    }

    #[component]
    pub fn Page() -> impl IntoView {
        let global_state = expect_context::<GlobalState>();
        let navigate = use_navigate();
        let update_user = Callback::new(move |user: Option<SessionUser>| {
            global_state.update_user(user);
        });
        let navigate = Callback::new(move |path: String| {
            navigate(&path, Default::default());
        });

        view! {
            <main class="grid grid-rows-[auto_1fr] h-screen">
                <Nav/>
                <div class="grid place-items-center text-white">
                    <AuthForm update_user navigate />
                </div>
            </main>
        }
    }

    /// The login/sign-up form. Session updates and navigation are injected
    /// so the form owns nothing beyond its own field state.
    #[component]
    pub fn AuthForm(
        update_user: Callback<Option<SessionUser>>,
        navigate: Callback<String>,
    ) -> impl IntoView {
        let state = RwSignal::new(FormState::default());

        // Derived, never stored: recomputed on every keystroke and on mode
        // toggle. Toggling deliberately keeps the field values around.
        let errors = Memo::new(move |_| state.with(|s| s.errors()));

        let api_submit = ApiWeb::new();

        let on_toggle = move |_| state.update(|s| s.toggle_mode());

        let on_submit = move |e: SubmitEvent| {
            e.prevent_default();
            if !errors.with_untracked(|v| v.is_empty()) {
                return;
            }
            let credentials = state.with_untracked(|s| s.credentials());
            let dst_sign_up = state.with_untracked(|s| s.sign_up);
            api_submit
                .submit(dst_sign_up, credentials)
                .send_web(move |result| async move {
                    match result {
                        Ok(ServerRes::User(user)) => {
                            update_user.run(Some(user));
                            navigate.run(fe_router::home::PATH.to_string());
                        }
                        Ok(res) => {
                            error!("expected a session user, received {res:?}");
                            update_user.run(None);
                            navigate.run(fe_router::authentication::PATH.to_string());
                        }
                        Err(err) => {
                            error!("authentication failed: {err}");
                            update_user.run(None);
                            navigate.run(fe_router::authentication::PATH.to_string());
                        }
                    }
                });
        };

        view! {
            <div class="bg-gray-900 flex flex-col gap-4 px-3 py-4 w-full max-w-[25rem]">
                <div class="text-red-600">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|msg| view! { <h2>{msg}</h2> })
                            .collect_view()
                    }}
                </div>
                <h2 class="text-2xl font-bold">"Please Log in or Sign up!"</h2>
                <h2>{move || mode_labels(state.with(|s| s.sign_up)).heading}</h2>
                <button
                    on:click=on_toggle
                    class="border-2 border-white px-4 py-1 hover:bg-white hover:text-gray-950"
                >
                    {move || mode_labels(state.with(|s| s.sign_up)).toggle}
                </button>
                <form method="POST" action="" on:submit=on_submit class="flex flex-col gap-2">
                    <label for="name">"Username"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        prop:value=move || state.with(|s| s.name.clone())
                        on:input=move |ev| state.update(|s| s.name = event_target_value(&ev))
                        class="border-b-2 border-white"
                    />
                    <Show when=move || state.with(|s| s.email_active())>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="text"
                            prop:value=move || state.with(|s| s.email.clone())
                            on:input=move |ev| state.update(|s| s.email = event_target_value(&ev))
                            class="border-b-2 border-white"
                        />
                    </Show>
                    <input
                        type="submit"
                        value=move || mode_labels(state.with(|s| s.sign_up)).submit
                        class="border-2 border-white mt-2"
                    />
                </form>
            </div>
        }
    }

    #[cfg(test)]
    mod authentication_tests {
        use crate::app::page::authentication::{FormState, mode_labels};
        use pretty_assertions::assert_eq;
        use stagebill_api::auth::{PATH_LOGIN, PATH_USERS, submit_path};
        use stagebill_shared::auth::MSG_EMAIL_INVALID;
        use test_log::test;

        #[test]
        fn test_toggle_keeps_values() {
            let mut state = FormState {
                name: "alice".to_string(),
                email: "not-an-email".to_string(),
                ..Default::default()
            };
            assert!(!state.email_active());
            assert!(state.errors().is_empty());
            assert_eq!(submit_path(state.sign_up), PATH_LOGIN);

            state.toggle_mode();
            assert!(state.email_active());
            assert_eq!(state.name, "alice");
            assert_eq!(state.email, "not-an-email");
            assert_eq!(state.errors(), vec![MSG_EMAIL_INVALID.to_string()]);
            assert_eq!(submit_path(state.sign_up), PATH_USERS);

            state.toggle_mode();
            assert!(!state.email_active());
            assert_eq!(state.name, "alice");
            assert_eq!(state.email, "not-an-email");
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_credentials_carry_values_as_typed() {
            let state = FormState {
                name: " alice ".to_string(),
                email: String::new(),
                ..Default::default()
            };
            let creds = state.credentials();
            assert_eq!(creds.name, " alice ");
            assert_eq!(creds.email, "");
        }

        #[test]
        fn test_mode_labels() {
            let login = mode_labels(false);
            assert_eq!(login.heading, "Not a member?");
            assert_eq!(login.toggle, "Register now!");
            assert_eq!(login.submit, "Log In!");

            let sign_up = mode_labels(true);
            assert_eq!(sign_up.heading, "Already a member?");
            assert_eq!(sign_up.toggle, "Log In!");
            assert_eq!(sign_up.submit, "Sign Up!");
        }
    }
}
