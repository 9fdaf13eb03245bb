//! # Entity Page
//!
//! The one screen every entity type shares. It holds the collection state
//! in a signal and routes each user action through a
//! [`ListController`], which owns persistence, notifications and re-fetch.

use aricon_client::ApiClient;
use aricon_core::{AppConfig, RecordId};
use aricon_crud::{DeleteOutcome, ListController, ListState, Notifier, SubmitOutcome, Toast};
use aricon_schema::EntityKind;
use dioxus::prelude::*;
use tracing::warn;

use crate::components::{ConfirmDeleteDialog, DataTable, EntityForm, SlideOver};
use crate::state::{APP_STATE, SignalStore, ToastSink};

type PageController = ListController<SignalStore, ApiClient, ToastSink>;

/// Controller bound to the current session
fn controller(list: Signal<ListState>, base: Signal<ApiClient>) -> PageController {
    let client = APP_STATE.read().client(&base.read());
    ListController::new(SignalStore(list), client, ToastSink)
}

/// A 401 means the session is no longer accepted
fn sign_out_if_unauthorized(error: &aricon_client::ClientError) {
    if error.is_unauthorized() {
        warn!("Session rejected by the server; signing out");
        APP_STATE.write().sign_out();
    }
}

/// Generic CRUD screen for one entity type
#[component]
pub fn EntityPage(kind: EntityKind) -> Element {
    let config = use_context::<AppConfig>();
    let base = use_signal(|| consume_context::<ApiClient>());
    let mut list = use_signal(move || ListState::new(kind, &config));

    use_hook(move || {
        spawn(async move {
            controller(list, base).mount().await;
        })
    });

    let state = list.read();
    let title = kind.title();
    let singular = kind.singular();
    let icon = kind.icon();
    let count = state.rows().len();
    let filter = state.filter().to_string();
    let panel_title = state.panel().map(|f| f.title());
    let panel_locked = state.is_submitting();
    let pending = state.pending_delete().cloned();
    let deleting = state.is_deleting();
    drop(state);

    rsx! {
        section {
            class: "entity-page",

            header {
                class: "page-header",
                div {
                    class: "page-title",
                    span { class: "page-icon", "{icon}" }
                    h1 { "{title}" }
                    span { class: "badge", "{count}" }
                }
                div {
                    class: "page-actions",
                    input {
                        class: "input search",
                        r#type: "search",
                        placeholder: "Search...",
                        value: "{filter}",
                        oninput: move |e| list.write().set_filter(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| controller(list, base).open_create(),
                        "+ Add {singular}"
                    }
                }
            }

            DataTable {
                list: list,
                on_edit: move |id: RecordId| {
                    if let Err(e) = controller(list, base).open_edit(&id) {
                        warn!("Cannot edit {}: {}", id, e);
                        ToastSink.notify(Toast::error(e.to_string()));
                    }
                },
                on_delete: move |id: RecordId| {
                    if let Err(e) = controller(list, base).request_delete(&id) {
                        warn!("Cannot delete {}: {}", id, e);
                        ToastSink.notify(Toast::error(e.to_string()));
                    }
                },
                on_retry: move |_| {
                    spawn(async move {
                        controller(list, base).refresh().await;
                    });
                },
            }

            SlideOver {
                open: panel_title.is_some(),
                title: panel_title.unwrap_or_default(),
                locked: panel_locked,
                on_close: move |_| {
                    controller(list, base).close_panel();
                },
                EntityForm {
                    list: list,
                    on_submit: move |_| {
                        spawn(async move {
                            let outcome = controller(list, base).submit().await;
                            if let SubmitOutcome::Failed(e) = outcome {
                                sign_out_if_unauthorized(&e);
                            }
                        });
                    },
                    on_cancel: move |_| {
                        controller(list, base).close_panel();
                    },
                }
            }

            if let Some(pending) = pending {
                ConfirmDeleteDialog {
                    name: pending.name,
                    deleting: deleting,
                    on_confirm: move |_| {
                        spawn(async move {
                            let outcome = controller(list, base).confirm_delete().await;
                            if let DeleteOutcome::Failed(e) = outcome {
                                sign_out_if_unauthorized(&e);
                            }
                        });
                    },
                    on_cancel: move |_| controller(list, base).cancel_delete(),
                }
            }
        }
    }
}
