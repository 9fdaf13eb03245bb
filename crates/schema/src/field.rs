//! Field definitions for entity schemas
//!
//! A `FieldSpec` describes one domain field of an entity: its wire name,
//! label, input kind, requiredness and validation rules. Constructors attach
//! the rules implied by the kind, so `FieldSpec::date(..)` always carries a
//! calendar-date check and `FieldSpec::time(..)` a 24-hour check.

use aricon_core::{FieldKind, Validation};
use serde::{Deserialize, Serialize};

// ============================================================================
// LookupSource
// ============================================================================

/// A secondary collection used to populate a reference dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    Faculty,
    Events,
    Teams,
}

impl LookupSource {
    /// Key used for endpoint overrides in configuration
    pub fn slug(&self) -> &'static str {
        match self {
            LookupSource::Faculty => "faculty",
            LookupSource::Events => "events",
            LookupSource::Teams => "team",
        }
    }

    /// Default collection path
    pub fn default_path(&self) -> &'static str {
        match self {
            LookupSource::Faculty => "/api/faculty",
            LookupSource::Events => "/api/events",
            LookupSource::Teams => "/api/admin/teams",
        }
    }

    /// Key of the row attribute shown as the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            LookupSource::Faculty => "facultyName",
            LookupSource::Events => "eventName",
            LookupSource::Teams => "name",
        }
    }

    /// Noun used in placeholders and notices
    pub fn noun(&self) -> &'static str {
        match self {
            LookupSource::Faculty => "faculty",
            LookupSource::Events => "event",
            LookupSource::Teams => "team member",
        }
    }
}

// ============================================================================
// ChoiceOption
// ============================================================================

/// A fixed option of a choice field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Definition of one domain field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key used in the JSON payload
    pub name: String,

    /// Label shown in forms, table headers and messages
    pub label: String,

    /// Input kind
    pub kind: FieldKind,

    /// Whether a value must be supplied
    pub required: bool,

    /// Rules checked once a value is present
    pub rules: Vec<Validation>,

    /// Placeholder text for the input
    pub placeholder: Option<String>,

    /// Help text rendered under the input
    pub help_text: Option<String>,

    /// Options for `Choice` and `MultiChoice` fields
    pub options: Vec<ChoiceOption>,

    /// Collection feeding a `Reference` field
    pub lookup: Option<LookupSource>,

    /// Whether the field gets a table column
    pub in_table: bool,

    /// Whether its table column can be sorted
    pub sortable: bool,
}

impl FieldSpec {
    /// Create a new field with no rules
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            rules: Vec::new(),
            placeholder: None,
            help_text: None,
            options: Vec::new(),
            lookup: None,
            in_table: true,
            sortable: true,
        }
    }

    /// Single line text
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Email address
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email).with_rule(Validation::Email)
    }

    /// Digits-only phone number with a digit-count bound
    pub fn phone(
        name: impl Into<String>,
        label: impl Into<String>,
        min: usize,
        max: usize,
    ) -> Self {
        Self::new(name, label, FieldKind::Phone).with_rule(Validation::Digits { min, max })
    }

    /// Password input, excluded from tables
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password).hidden_in_table()
    }

    /// Calendar date
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date).with_rule(Validation::Date)
    }

    /// 24-hour time
    pub fn time(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Time).with_rule(Validation::Time24)
    }

    /// Identifier picked from a lookup collection
    pub fn reference(
        name: impl Into<String>,
        label: impl Into<String>,
        source: LookupSource,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Reference);
        field.placeholder = Some(format!("Select {}", source.noun()));
        field.lookup = Some(source);
        field
    }

    /// One value out of a fixed set
    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        let values = options.iter().map(|o| o.value.clone()).collect();
        let mut field =
            Self::new(name, label, FieldKind::Choice).with_rule(Validation::OneOf(values));
        field.options = options;
        field
    }

    /// Any subset of a fixed set
    pub fn multi_choice(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        let values = options.iter().map(|o| o.value.clone()).collect();
        let mut field =
            Self::new(name, label, FieldKind::MultiChoice).with_rule(Validation::OneOf(values));
        field.options = options;
        field.sortable = false;
        field
    }

    /// Boolean confirmation
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox).hidden_in_table()
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum length in characters
    pub fn min_len(self, n: usize) -> Self {
        self.with_rule(Validation::MinLength(n))
    }

    /// Maximum length in characters
    pub fn max_len(self, n: usize) -> Self {
        self.with_rule(Validation::MaxLength(n))
    }

    /// Append a validation rule
    pub fn with_rule(mut self, rule: Validation) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the help text
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Leave the field out of the table
    pub fn hidden_in_table(mut self) -> Self {
        self.in_table = false;
        self.sortable = false;
        self
    }

    /// Keep the column but disable sorting on it
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Largest length allowed by a `MaxLength` rule
    pub fn max_length(&self) -> Option<usize> {
        self.rules.iter().find_map(|rule| match rule {
            Validation::MaxLength(n) => Some(*n),
            Validation::Digits { max, .. } => Some(*max),
            _ => None,
        })
    }

    /// Message reported when a required value is missing
    pub fn required_message(&self) -> String {
        match self.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Phone | FieldKind::Password => {
                Validation::Required.error_message(&self.label)
            }
            FieldKind::MultiChoice => Validation::NonEmptyList.error_message(&self.label),
            FieldKind::Checkbox => Validation::Checked.error_message(&self.label),
            FieldKind::Date | FieldKind::Time | FieldKind::Reference | FieldKind::Choice => {
                format!("{} is required.", self.label)
            }
        }
    }

    /// Label of a choice option, falling back to the raw value
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_constructors_attach_rules() {
        assert_eq!(FieldSpec::date("d", "Date").rules, vec![Validation::Date]);
        assert_eq!(FieldSpec::time("t", "Time").rules, vec![Validation::Time24]);
        assert_eq!(
            FieldSpec::phone("m", "Mobile", 10, 10).rules,
            vec![Validation::Digits { min: 10, max: 10 }]
        );
    }

    #[test]
    fn test_builder_chain() {
        let field = FieldSpec::text("hotelName", "Hotel name")
            .required()
            .max_len(50)
            .placeholder("Enter hotel name");

        assert!(field.required);
        assert_eq!(field.max_length(), Some(50));
        assert_eq!(field.placeholder.as_deref(), Some("Enter hotel name"));
        assert!(field.in_table);
    }

    #[test]
    fn test_reference_field() {
        let field = FieldSpec::reference("facultyName", "Faculty name", LookupSource::Faculty);
        assert_eq!(field.kind, FieldKind::Reference);
        assert_eq!(field.lookup, Some(LookupSource::Faculty));
        assert_eq!(field.placeholder.as_deref(), Some("Select faculty"));
    }

    #[test]
    fn test_required_messages_by_kind() {
        let name = FieldSpec::text("name", "Name").required();
        assert_eq!(name.required_message(), "Name cannot be empty.");

        let date = FieldSpec::date("arrivalDate", "Arrival date").required();
        assert_eq!(date.required_message(), "Arrival date is required.");
    }

    #[test]
    fn test_option_label_fallback() {
        let field = FieldSpec::choice(
            "gateway",
            "Gateway",
            vec![ChoiceOption::new("payu", "PayU")],
        );
        assert_eq!(field.option_label("payu"), "PayU");
        assert_eq!(field.option_label("other"), "other");
    }

    #[test]
    fn test_lookup_sources() {
        assert_eq!(LookupSource::Events.default_path(), "/api/events");
        assert_eq!(LookupSource::Teams.label_key(), "name");
        assert_eq!(LookupSource::Faculty.slug(), "faculty");
    }
}
