//! Core types used throughout the admin panel
//!
//! This module contains the small value types shared by the schema,
//! client, CRUD engine and UI crates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Record Identifiers
// ============================================================================

/// Identifier assigned to a record by the backing store.
///
/// The client never generates or mutates these; it only carries them from
/// a fetched row into an edit form and back into an update or delete call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a server-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Field Kinds
// ============================================================================

/// How a field is entered and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form single line text
    #[default]
    Text,
    /// Email address
    Email,
    /// Digits-only phone number
    Phone,
    /// Secret text, never echoed
    Password,
    /// Calendar date (`YYYY-MM-DD`)
    Date,
    /// 24-hour clock time (`HH:MM`)
    Time,
    /// Identifier of a record from a lookup list
    Reference,
    /// Exactly one of a fixed set of options
    Choice,
    /// Any subset of a fixed set of options
    MultiChoice,
    /// Boolean confirmation
    Checkbox,
}

impl FieldKind {
    /// HTML input type used when rendering the field
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Checkbox => "checkbox",
            _ => "text",
        }
    }

    /// Whether the value is picked from a list instead of typed
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            FieldKind::Reference | FieldKind::Choice | FieldKind::MultiChoice
        )
    }

    /// Whether the field holds several values
    pub fn is_multi(&self) -> bool {
        matches!(self, FieldKind::MultiChoice)
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone",
            FieldKind::Password => "Password",
            FieldKind::Date => "Date",
            FieldKind::Time => "Time",
            FieldKind::Reference => "Reference",
            FieldKind::Choice => "Choice",
            FieldKind::MultiChoice => "Multiple Choice",
            FieldKind::Checkbox => "Checkbox",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Validation Rules
// ============================================================================

/// Validation rules that can be applied to a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Validation {
    /// Field must have a non-blank value
    Required,
    /// Minimum trimmed length in characters
    MinLength(usize),
    /// Maximum trimmed length in characters
    MaxLength(usize),
    /// Valid email address
    Email,
    /// All digits, with a digit count in `min..=max`
    Digits { min: usize, max: usize },
    /// Calendar date
    Date,
    /// 24-hour `HH:MM` time
    Time24,
    /// Value must be in a list
    OneOf(Vec<String>),
    /// At least one value must be selected
    NonEmptyList,
    /// Checkbox must be ticked
    Checked,
}

impl Validation {
    /// User-facing message for a violation of this rule on `label`
    pub fn error_message(&self, label: &str) -> String {
        match self {
            Validation::Required => format!("{} cannot be empty.", label),
            Validation::MinLength(n) => {
                format!("{} must be at least {} characters.", label, n)
            }
            Validation::MaxLength(n) => format!("{} cannot exceed {} characters.", label, n),
            Validation::Email => "Please enter a valid email address.".to_string(),
            Validation::Digits { min, max } if min == max => {
                format!("{} must be {} digits.", label, min)
            }
            Validation::Digits { min, max } => {
                format!("{} must be between {} and {} digits.", label, min, max)
            }
            Validation::Date => "Invalid date format.".to_string(),
            Validation::Time24 => "Time must be in HH:MM format.".to_string(),
            Validation::OneOf(_) => format!("Please select a {}.", label.to_lowercase()),
            Validation::NonEmptyList => {
                format!("Please select at least one {}.", label.to_lowercase())
            }
            Validation::Checked => format!("{} must be confirmed.", label),
        }
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validation::Required => write!(f, "required"),
            Validation::MinLength(n) => write!(f, "min_length({})", n),
            Validation::MaxLength(n) => write!(f, "max_length({})", n),
            Validation::Email => write!(f, "email"),
            Validation::Digits { min, max } => write!(f, "digits({}..={})", min, max),
            Validation::Date => write!(f, "date"),
            Validation::Time24 => write!(f, "time24"),
            Validation::OneOf(values) => write!(f, "one_of({:?})", values),
            Validation::NonEmptyList => write!(f, "non_empty"),
            Validation::Checked => write!(f, "checked"),
        }
    }
}

// ============================================================================
// Notification Levels
// ============================================================================

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// CSS modifier class
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Icon shown next to the title
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✕",
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Direction of an active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next state in the ascending → descending → unsorted cycle
    pub fn cycle(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        }
    }

    /// Header indicator
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
