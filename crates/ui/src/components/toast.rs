//! # Toast Stack
//!
//! Transient notifications in the corner of the window. Each toast removes
//! itself after [`TOAST_DURATION_MS`] or when its close button is clicked.

use aricon_crud::{TOAST_DURATION_MS, Toast};
use dioxus::prelude::*;
use std::time::Duration;

use crate::state::APP_STATE;

/// All visible toasts, newest at the bottom
#[component]
pub fn ToastStack() -> Element {
    let toasts = APP_STATE.read().toasts.clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let id = toast.id;

    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_DURATION_MS)).await;
            APP_STATE.write().dismiss_toast(id);
        });
    });

    let class = format!("toast {}", toast.level.css_class());
    let icon = toast.level.icon();

    rsx! {
        div {
            class: "{class}",
            role: "status",
            span { class: "toast-icon", "{icon}" }
            div {
                class: "toast-body",
                p { class: "toast-title", "{toast.title}" }
                if let Some(description) = &toast.description {
                    p { class: "toast-description", "{description}" }
                }
            }
            button {
                class: "btn-icon",
                title: "Dismiss",
                onclick: move |_| APP_STATE.write().dismiss_toast(id),
                "✕"
            }
        }
    }
}
