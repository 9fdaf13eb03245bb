//! # Login Page
//!
//! Collects email and password, validates them locally, and exchanges
//! them for a [`Session`](aricon_client::Session). On success the shell
//! switches to the first entity screen.

use aricon_client::ApiClient;
use aricon_crud::{Notifier, Toast};
use aricon_schema::{Credentials, FieldErrors, FieldValue, Record, login_schema};
use dioxus::prelude::*;

use crate::components::{Checkbox, TextInput};
use crate::state::{APP_STATE, ToastSink};

#[component]
pub fn LoginPage() -> Element {
    let base = use_signal(|| consume_context::<ApiClient>());
    let mut form = use_signal(|| login_schema().blank_record());
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let mut set_field = move |name: &str, value: FieldValue| {
        form.write().set(name, value);
        errors.write().clear_field(name);
    };

    let mut submit = move || {
        if *submitting.read() {
            return;
        }
        let credentials = match Credentials::from_form(&form.read()) {
            Ok(credentials) => credentials,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };

        errors.set(FieldErrors::new());
        submitting.set(true);
        let client = base.read().clone();
        spawn(async move {
            let result = client.login(&credentials).await;
            submitting.set(false);
            match result {
                Ok(session) => APP_STATE.write().sign_in(session),
                Err(e) => ToastSink.notify(Toast::error(e.user_message())),
            }
        });
    };

    let draft: Record = form.read().clone();
    let errors_now = errors.read().clone();
    let busy = *submitting.read();
    let robot_checked = matches!(draft.get("robot"), Some(FieldValue::Flag(true)));

    rsx! {
        div {
            class: "login-screen",
            form {
                class: "login-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },

                div {
                    class: "login-brand",
                    h1 { "ARICON Admin Panel" }
                    p { "Sign in to continue" }
                }

                TextInput {
                    value: draft.text("email").to_string(),
                    label: "Email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                    disabled: busy,
                    error: errors_now.first("email").map(str::to_string),
                    on_change: move |v: String| set_field("email", v.into()),
                }

                TextInput {
                    value: draft.text("password").to_string(),
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    error: errors_now.first("password").map(str::to_string),
                    on_change: move |v: String| set_field("password", v.into()),
                    on_enter: move |_| submit(),
                }

                Checkbox {
                    checked: robot_checked,
                    label: "I am not a robot".to_string(),
                    disabled: busy,
                    error: errors_now.first("robot").map(str::to_string),
                    on_change: move |v: bool| set_field("robot", v.into()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
