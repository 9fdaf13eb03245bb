//! # Confirm Delete Dialog Component
//!
//! Modal asking the user to confirm a destructive delete. Nothing is sent
//! until Confirm is clicked; Cancel and the backdrop just dismiss it.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// How the record is named in the message
    pub name: String,

    /// Whether the delete request is outstanding
    #[props(default = false)]
    pub deleting: bool,

    /// Deletion confirmed
    pub on_confirm: EventHandler<()>,

    /// Dialog dismissed
    pub on_cancel: EventHandler<()>,
}

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let deleting = props.deleting;

    rsx! {
        div {
            class: "modal-root",
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !deleting {
                        props.on_cancel.call(());
                    }
                },
            }
            div {
                class: "modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    span { class: "modal-icon", "⚠️" }
                    h2 { "Are you sure?" }
                }
                p {
                    class: "modal-message",
                    "This will permanently delete "
                    strong { "{props.name}" }
                    ". This action cannot be undone."
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| props.on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Confirm" }
                    }
                }
            }
        }
    }
}
