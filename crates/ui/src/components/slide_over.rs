//! # Slide-over Panel
//!
//! A dismissible side panel hosting the add/edit form. Clicking the
//! backdrop or the close button asks the owner to close; the owner decides
//! whether that is allowed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SlideOverProps {
    /// Whether the panel is shown
    pub open: bool,

    /// Panel heading
    pub title: String,

    /// Whether the close controls are disabled
    #[props(default = false)]
    pub locked: bool,

    /// Close requested
    pub on_close: EventHandler<()>,

    pub children: Element,
}

#[component]
pub fn SlideOver(props: SlideOverProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "slide-over-root",
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !props.locked {
                        props.on_close.call(());
                    }
                },
            }
            aside {
                class: "slide-over",
                onclick: move |e| e.stop_propagation(),
                header {
                    class: "slide-over-header",
                    h2 { "{props.title}" }
                    button {
                        class: "btn-icon",
                        title: "Close",
                        disabled: props.locked,
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }
                div {
                    class: "slide-over-body",
                    {props.children}
                }
            }
        }
    }
}
