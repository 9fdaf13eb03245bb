//! # Entity Form Component
//!
//! Renders the open [`FormState`](aricon_crud::FormState) of a screen: one
//! control per schema field, inline messages, and the Cancel / submit
//! buttons. Persistence is delegated to the page through `on_submit`.

use aricon_core::FieldKind;
use aricon_crud::ListState;
use aricon_schema::{FieldSpec, FieldValue, Lookups, Record};
use dioxus::prelude::*;

use super::inputs::{Checkbox, MultiSelect, Select, SelectOption, TextInput};

#[derive(Props, Clone, PartialEq)]
pub struct EntityFormProps {
    /// Collection state holding the open form
    pub list: Signal<ListState>,

    /// Submit clicked
    pub on_submit: EventHandler<()>,

    /// Cancel clicked
    pub on_cancel: EventHandler<()>,
}

/// Add/edit form for the open panel
#[component]
pub fn EntityForm(props: EntityFormProps) -> Element {
    let list = props.list;
    let state = list.read();
    let Some(form) = state.panel() else {
        return rsx! {};
    };

    let fields = form.schema().fields.clone();
    let draft = form.draft().clone();
    let errors = form.errors().clone();
    let disabled = form.controls_disabled();
    let submit_label = form.submit_label();
    let lookups = state.lookups().clone();
    drop(state);

    rsx! {
        form {
            class: "entity-form",
            onsubmit: move |e| {
                e.prevent_default();
                props.on_submit.call(());
            },

            for field in fields {
                FieldInput {
                    key: "{field.name}",
                    error: errors.first(&field.name).map(str::to_string),
                    value: draft.clone(),
                    lookups: lookups.clone(),
                    disabled: disabled,
                    list: list,
                    field: field.clone(),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: disabled,
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: disabled,
                    "{submit_label}"
                }
            }
        }
    }
}

/// One control bound to a field of the draft
#[component]
fn FieldInput(
    field: FieldSpec,
    value: Record,
    lookups: Lookups,
    error: Option<String>,
    disabled: bool,
    list: Signal<ListState>,
) -> Element {
    let mut list = list;
    let name = field.name.clone();
    let label = Some(field.label.clone());
    let help_text = field.help_text.clone();
    let current = value.text(&name).to_string();

    match field.kind {
        FieldKind::Reference => {
            let options = field
                .lookup
                .map(|source| lookups.choices(source))
                .unwrap_or_default()
                .into_iter()
                .map(|c| SelectOption::new(c.value, c.label))
                .collect::<Vec<_>>();
            rsx! {
                Select {
                    value: current,
                    options: options,
                    label: label,
                    placeholder: field.placeholder.clone(),
                    help_text: help_text,
                    error: error,
                    required: field.required,
                    disabled: disabled,
                    on_change: move |v: String| list.write().set_field(&name, v),
                }
            }
        }
        FieldKind::Choice => {
            let options = field
                .options
                .iter()
                .map(|c| SelectOption::new(c.value.clone(), c.label.clone()))
                .collect::<Vec<_>>();
            let placeholder = format!("Select {}", field.label.to_lowercase());
            rsx! {
                Select {
                    value: current,
                    options: options,
                    label: label,
                    placeholder: Some(placeholder),
                    help_text: help_text,
                    error: error,
                    required: field.required,
                    disabled: disabled,
                    on_change: move |v: String| list.write().set_field(&name, v),
                }
            }
        }
        FieldKind::MultiChoice => {
            let options = field
                .options
                .iter()
                .map(|c| SelectOption::new(c.value.clone(), c.label.clone()))
                .collect::<Vec<_>>();
            rsx! {
                MultiSelect {
                    values: value.list(&field.name),
                    options: options,
                    label: label,
                    help_text: help_text,
                    error: error,
                    required: field.required,
                    disabled: disabled,
                    on_change: move |v: Vec<String>| list.write().set_field(&name, v),
                }
            }
        }
        FieldKind::Checkbox => {
            let checked = matches!(value.get(&field.name), Some(FieldValue::Flag(true)));
            rsx! {
                Checkbox {
                    checked: checked,
                    label: label,
                    error: error,
                    disabled: disabled,
                    on_change: move |v: bool| list.write().set_field(&name, v),
                }
            }
        }
        _ => rsx! {
            TextInput {
                value: current,
                label: label,
                placeholder: field.placeholder.clone(),
                help_text: help_text,
                error: error,
                required: field.required,
                disabled: disabled,
                input_type: field.kind.input_type().to_string(),
                max_length: field.max_length(),
                on_change: move |v: String| list.write().set_field(&name, v),
            }
        },
    }
}
