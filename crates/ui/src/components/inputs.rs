//! # Input Components
//!
//! Form controls used by the entity form and the login page.
//!
//! - **TextInput**: single-line text, email, phone, password, date and time
//! - **Select**: dropdown selection with a placeholder option
//! - **Checkbox**: boolean checkbox
//! - **MultiSelect**: checkbox group for multi-choice fields
//!
//! Every control renders its label, a required marker, and either the
//! first validation message or the help text underneath.
//!

use dioxus::prelude::*;

// ============================================================================
// Shared pieces
// ============================================================================

#[component]
fn FieldLabel(text: String, required: bool) -> Element {
    rsx! {
        label {
            class: "field-label",
            "{text}"
            if required {
                span { class: "field-required", "*" }
            }
        }
    }
}

#[component]
fn FieldFooter(error: Option<String>, help_text: Option<String>) -> Element {
    rsx! {
        if let Some(error) = error {
            p { class: "field-error", "{error}" }
        } else if let Some(help) = help_text {
            p { class: "field-help", "{help}" }
        }
    }
}

fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{base} has-error")
    } else {
        base.to_string()
    }
}

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, tel, password, date, time)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Maximum length
    #[props(default)]
    pub max_length: Option<usize>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = control_class("input", props.error.is_some());

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                maxlength: props.max_length.map(|l| l.to_string()),
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select and MultiSelect components
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = control_class("input select", props.error.is_some());

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if props.options.is_empty() {
                p { class: "field-help", "No options available" }
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        div {
            class: "input-group",
            label {
                class: if props.disabled { "checkbox is-disabled" } else { "checkbox" },
                input {
                    r#type: "checkbox",
                    checked: props.checked,
                    disabled: props.disabled,
                    onchange: move |_| {
                        if !props.disabled {
                            props.on_change.call(!props.checked);
                        }
                    },
                }
                if let Some(label) = &props.label {
                    span { "{label}" }
                }
            }
            FieldFooter { error: props.error.clone(), help_text: None }
        }
    }
}

// ============================================================================
// Multi Select Component
// ============================================================================

/// Properties for MultiSelect component
#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectProps {
    /// Selected values
    pub values: Vec<String>,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler, called with the full new selection
    #[props(default)]
    pub on_change: EventHandler<Vec<String>>,
}

/// Checkbox group for picking several options
#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            div {
                class: control_class("multi-select", props.error.is_some()),
                for option in props.options.iter().cloned() {
                    {
                        let checked = props.values.contains(&option.value);
                        let values = props.values.clone();
                        rsx! {
                            label {
                                key: "{option.value}",
                                class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    disabled: props.disabled,
                                    onchange: move |_| {
                                        props.on_change.call(toggle_value(&values, &option.value));
                                    },
                                }
                                span { "{option.label}" }
                            }
                        }
                    }
                }
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

/// Selection after flipping one value, keeping the existing order
pub fn toggle_value(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option() {
        let opt = SelectOption::new("razorpay", "Razorpay");
        assert_eq!(opt.value, "razorpay");
        assert_eq!(opt.label, "Razorpay");
    }

    #[test]
    fn test_control_class() {
        assert_eq!(control_class("input", false), "input");
        assert_eq!(control_class("input", true), "input has-error");
    }

    #[test]
    fn test_toggle_value() {
        let values = vec!["hotel".to_string(), "team".to_string()];
        assert_eq!(toggle_value(&values, "hotel"), vec!["team".to_string()]);
        assert_eq!(
            toggle_value(&values, "faculty"),
            vec!["hotel".to_string(), "team".to_string(), "faculty".to_string()]
        );
    }
}
