//! # Data Table Component
//!
//! Renders one entity collection from its [`ListState`]: a selection
//! column, one sortable column per field, and an actions column. While the
//! first fetch is outstanding a skeleton is shown; a failed fetch shows a
//! notice with a retry button.

use aricon_core::RecordId;
use aricon_crud::{ListState, LoadState, TableColumn, cell_text};
use dioxus::prelude::*;

/// Rows in the loading skeleton
const SKELETON_ROWS: usize = 5;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Collection state of the screen
    pub list: Signal<ListState>,

    /// Edit clicked on a row
    pub on_edit: EventHandler<RecordId>,

    /// Delete clicked on a row
    pub on_delete: EventHandler<RecordId>,

    /// Retry after a failed fetch
    pub on_retry: EventHandler<()>,
}

/// Table of the loaded collection
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut list = props.list;
    let state = list.read();
    let columns = state.columns();

    match state.collection() {
        LoadState::Loading => {
            return rsx! { TableSkeleton { columns: columns.len() } };
        }
        LoadState::Failed(message) => {
            let message = message.clone();
            let title = state.kind().title();
            return rsx! {
                div {
                    class: "notice notice-error",
                    p { "Failed to load {title}: {message}" }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| props.on_retry.call(()),
                        "Retry"
                    }
                }
            };
        }
        LoadState::Loaded(_) => {}
    }

    let rows = state.rows().to_vec();
    let order = state.visible();
    let all_selected = state.all_rows_selected();
    let schema = state.schema().clone();
    let lookups = state.lookups().clone();
    let sort = state.sort().clone();
    let selection = state.selection().clone();
    let refreshing = state.is_refreshing();
    let empty_label = state.kind().title().to_lowercase();
    let column_count = columns.len();
    drop(state);

    rsx! {
        div {
            class: if refreshing { "table-container is-refreshing" } else { "table-container" },
            table {
                class: "data-table",
                thead {
                    tr {
                        for column in columns.iter().cloned() {
                            {match column {
                                TableColumn::Select => rsx! {
                                    th {
                                        key: "__select",
                                        class: "col-select",
                                        input {
                                            r#type: "checkbox",
                                            checked: all_selected,
                                            onchange: move |_| list.write().toggle_all_rows(),
                                        }
                                    }
                                },
                                TableColumn::Field { name, label, sortable } => {
                                    let indicator = sort
                                        .direction_for(&name)
                                        .map(|d| d.indicator())
                                        .unwrap_or("");
                                    let sort_name = name.clone();
                                    rsx! {
                                        th {
                                            key: "{name}",
                                            class: if sortable { "sortable" } else { "" },
                                            onclick: move |_| {
                                                if sortable {
                                                    list.write().toggle_sort(&sort_name);
                                                }
                                            },
                                            "{label} "
                                            span { class: "sort-indicator", "{indicator}" }
                                        }
                                    }
                                }
                                TableColumn::Actions => rsx! {
                                    th { key: "__actions", class: "col-actions", "Actions" }
                                },
                            }}
                        }
                    }
                }
                tbody {
                    if order.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                class: "empty-state",
                                "No {empty_label} records found"
                            }
                        }
                    }
                    for index in order {
                        {
                            let row = &rows[index];
                            let id = row.id.clone().unwrap_or_else(|| RecordId::new(""));
                            let checked = selection.is_selected(&id);
                            let cells: Vec<(String, String)> = schema
                                .fields
                                .iter()
                                .filter(|f| f.in_table)
                                .map(|f| (f.name.clone(), cell_text(f, row, &lookups)))
                                .collect();
                            let toggle_id = id.clone();
                            let edit_id = id.clone();
                            let delete_id = id.clone();
                            rsx! {
                                tr {
                                    key: "{id}",
                                    class: if checked { "is-selected" } else { "" },
                                    td {
                                        class: "col-select",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked,
                                            onchange: move |_| list.write().toggle_row(&toggle_id),
                                        }
                                    }
                                    for (name, text) in cells {
                                        td { key: "{name}", "{text}" }
                                    }
                                    td {
                                        class: "col-actions",
                                        button {
                                            class: "btn btn-secondary btn-sm",
                                            onclick: move |_| props.on_edit.call(edit_id.clone()),
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-danger btn-sm",
                                            onclick: move |_| {
                                                props.on_delete.call(delete_id.clone())
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder rows shown while loading
#[component]
pub fn TableSkeleton(columns: usize) -> Element {
    rsx! {
        div {
            class: "table-container",
            table {
                class: "data-table skeleton",
                tbody {
                    for row in 0..SKELETON_ROWS {
                        tr {
                            key: "{row}",
                            for col in 0..columns {
                                td { key: "{col}", div { class: "skeleton-bar" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
