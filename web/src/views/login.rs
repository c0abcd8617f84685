use api::{AuthResponse, Credentials};
use dioxus::prelude::*;
use ui::icons::FaSeedling;
use ui::{use_api, use_auth, Icon};

use crate::Route;

/// Sign-in page. On success the received token is handed to the session,
/// which resolves the user before we land on the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in: nothing to do here.
    let state = auth.state();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(String::new());
            let credentials = Credentials {
                username: email(),
                password: password(),
            };
            match api.post::<_, AuthResponse>("auth/login/", &credentials).await {
                Ok(resp) => {
                    auth.login(&resp.token).await;
                    submitting.set(false);
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    error.set("Invalid credentials".to_string());
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "flex-center h-screen login-page",
            div { class: "card login-card",
                div { class: "login-brand",
                    Icon { icon: FaSeedling, width: 48, height: 48 }
                    h1 { "Bondeni Farm" }
                    p { "Sign in to manage your farm" }
                }
                form { class: "login-form", onsubmit: handle_submit,
                    label { class: "form-label", "Email"
                        input {
                            class: "input",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "form-label", "Password"
                        input {
                            class: "input",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    if !error().is_empty() {
                        p { class: "error-text", "{error}" }
                    }
                    button {
                        class: "btn btn-primary login-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
