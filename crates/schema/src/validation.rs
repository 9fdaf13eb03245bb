//! Schema validation for entity records
//!
//! `Schema::validate` is pure: it takes a candidate record and returns either
//! a `ValidRecord` (trimmed and normalized) or `FieldErrors`, a map from
//! field name to the ordered list of violation messages. The identifier is
//! never inspected, so the same schema serves create and edit submissions.

use crate::field::FieldSpec;
use crate::record::{FieldValue, Record};
use aricon_core::{FieldKind, RecordId, Validation};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static TIME_24H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("time pattern compiles")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// ============================================================================
// FieldErrors
// ============================================================================

/// Violations keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// The message shown for a field (first violation wins)
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All messages for a field in rule order
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a field has any violation
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Names of the failing fields
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Drop the violations of one field
    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|m| format!("{}: {}", field, m))
            })
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// CrossRule
// ============================================================================

/// A rule relating two fields of the same record
///
/// Ordering rules only fire when both fields passed their own checks.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossRule {
    /// `field` must not sort before `other`
    NotBefore {
        field: String,
        other: String,
        message: String,
    },
    /// `field` must sort strictly after `other`
    After {
        field: String,
        other: String,
        message: String,
    },
    /// `field` is required when `other` equals `value`
    RequiredWhen {
        field: String,
        other: String,
        value: String,
        message: String,
    },
}

impl CrossRule {
    pub fn not_before(field: &str, other: &str, message: &str) -> Self {
        CrossRule::NotBefore {
            field: field.to_string(),
            other: other.to_string(),
            message: message.to_string(),
        }
    }

    pub fn after(field: &str, other: &str, message: &str) -> Self {
        CrossRule::After {
            field: field.to_string(),
            other: other.to_string(),
            message: message.to_string(),
        }
    }

    pub fn required_when(field: &str, other: &str, value: &str, message: &str) -> Self {
        CrossRule::RequiredWhen {
            field: field.to_string(),
            other: other.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    fn check(&self, record: &Record, errors: &mut FieldErrors) {
        match self {
            CrossRule::NotBefore {
                field,
                other,
                message,
            } => {
                if comparable(record, errors, field, other)
                    && record.text(field) < record.text(other)
                {
                    errors.add(field.clone(), message.clone());
                }
            }
            CrossRule::After {
                field,
                other,
                message,
            } => {
                if comparable(record, errors, field, other)
                    && record.text(field) <= record.text(other)
                {
                    errors.add(field.clone(), message.clone());
                }
            }
            CrossRule::RequiredWhen {
                field,
                other,
                value,
                message,
            } => {
                let blank = record.get(field).is_none_or(FieldValue::is_blank);
                if record.text(other) == value.as_str() && blank && !errors.has(field) {
                    errors.add(field.clone(), message.clone());
                }
            }
        }
    }
}

fn comparable(record: &Record, errors: &FieldErrors, a: &str, b: &str) -> bool {
    !errors.has(a)
        && !errors.has(b)
        && !record.text(a).is_empty()
        && !record.text(b).is_empty()
}

// ============================================================================
// ValidRecord
// ============================================================================

/// A record that passed its schema, with normalized values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord(Record);

impl ValidRecord {
    pub fn record(&self) -> &Record {
        &self.0
    }

    pub fn id(&self) -> Option<&RecordId> {
        self.0.id.as_ref()
    }

    pub fn into_inner(self) -> Record {
        self.0
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Declarative rules for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Entity label used in error reports
    pub entity: String,

    /// Domain fields in form order
    pub fields: Vec<FieldSpec>,

    /// Rules spanning several fields
    pub cross_rules: Vec<CrossRule>,
}

impl Schema {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fields: Vec::new(),
            cross_rules: Vec::new(),
        }
    }

    /// Append a field
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a cross-field rule
    pub fn rule(mut self, rule: CrossRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    /// Look up a field by wire name
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Empty record with every field present
    pub fn blank_record(&self) -> Record {
        Record::blank(&self.fields)
    }

    /// Validate a candidate record
    pub fn validate(&self, candidate: &Record) -> Result<ValidRecord, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut normalized = Record {
            id: candidate.id.clone(),
            values: BTreeMap::new(),
        };

        for field in &self.fields {
            let value = candidate
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| FieldValue::blank_for(field.kind));
            let value = normalize(field.kind, value);

            if value.is_blank() {
                if field.required {
                    errors.add(field.name.clone(), field.required_message());
                }
            } else {
                for rule in &field.rules {
                    if let Some(message) = check_rule(rule, field, &value) {
                        errors.add(field.name.clone(), message);
                    }
                }
            }

            normalized.set(field.name.clone(), value);
        }

        for rule in &self.cross_rules {
            rule.check(&normalized, &mut errors);
        }

        if errors.is_empty() {
            Ok(ValidRecord(normalized))
        } else {
            Err(errors)
        }
    }

    /// Messages for a single field, used for inline feedback while typing
    pub fn validate_field(&self, candidate: &Record, name: &str) -> Vec<String> {
        match self.validate(candidate) {
            Ok(_) => Vec::new(),
            Err(errors) => errors.messages(name).to_vec(),
        }
    }
}

fn normalize(kind: FieldKind, value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) => {
            let trimmed = s.trim();
            let text = match kind {
                FieldKind::Password => s,
                FieldKind::Date => parse_date(trimmed)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| trimmed.to_string()),
                _ => trimmed.to_string(),
            };
            FieldValue::Text(text)
        }
        FieldValue::List(items) => FieldValue::List(
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        flag => flag,
    }
}

/// Parse an ISO calendar date, accepting a full RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Whether a value is a 24-hour `HH:MM` time
pub fn is_time_24h(value: &str) -> bool {
    TIME_24H.is_match(value)
}

/// Whether a value looks like an email address
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Check one rule against a present value, returning the violation message
pub fn check_rule(rule: &Validation, field: &FieldSpec, value: &FieldValue) -> Option<String> {
    let text = value.as_text();
    let failed = match rule {
        Validation::Required => value.is_blank(),
        Validation::MinLength(n) => text.chars().count() < *n,
        Validation::MaxLength(n) => text.chars().count() > *n,
        Validation::Email => !is_email(text),
        Validation::Digits { min, max } => {
            let count = text.chars().count();
            !text.chars().all(|c| c.is_ascii_digit()) || count < *min || count > *max
        }
        Validation::Date => parse_date(text).is_none(),
        Validation::Time24 => !is_time_24h(text),
        Validation::OneOf(allowed) => match value {
            FieldValue::List(items) => items.iter().any(|item| !allowed.contains(item)),
            _ => !allowed.iter().any(|a| a == text),
        },
        Validation::NonEmptyList => value.is_blank(),
        Validation::Checked => !matches!(value, FieldValue::Flag(true)),
    };

    failed.then(|| rule.error_message(&field.label))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ChoiceOption, FieldSpec};
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::new("Session")
            .field(FieldSpec::text("topic", "Session topic").required().max_len(10))
            .field(FieldSpec::date("day", "Session date").required())
            .field(FieldSpec::time("start", "Start time").required())
            .field(FieldSpec::time("end", "End time").required())
            .rule(CrossRule::after("end", "start", "End time must be after start time."))
    }

    fn valid() -> Record {
        Record::new()
            .with("topic", "  Keynote ")
            .with("day", "2026-10-19")
            .with("start", "09:00")
            .with("end", "10:30")
    }

    #[test]
    fn test_valid_record_is_trimmed() {
        let valid = schema().validate(&valid()).unwrap();
        assert_eq!(valid.record().text("topic"), "Keynote");
    }

    #[test]
    fn test_missing_required_field_is_attributed() {
        let errors = schema().validate(&valid().with("day", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first("day"), Some("Session date is required."));
    }

    #[test]
    fn test_time_boundaries() {
        for bad in ["24:00", "9:30", "13:60", "12:5", "ab:cd"] {
            assert!(!is_time_24h(bad), "{bad} should be rejected");
        }
        for good in ["00:00", "23:59", "09:30"] {
            assert!(is_time_24h(good), "{good} should be accepted");
        }
    }

    #[test]
    fn test_dates_use_calendar_parsing() {
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("2026-02-30").is_none());
        assert!(parse_date("2026-02-28").is_some());
        assert_eq!(
            parse_date("2026-10-19T08:30:00Z"),
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
    }

    #[test]
    fn test_timestamp_is_normalized_to_date() {
        let valid = schema()
            .validate(&valid().with("day", "2026-10-19T08:30:00.000Z"))
            .unwrap();
        assert_eq!(valid.record().text("day"), "2026-10-19");
    }

    #[test]
    fn test_messages_are_ordered_per_field() {
        let schema = Schema::new("Team").field(
            FieldSpec::phone("mobile", "Mobile number", 10, 10).max_len(5),
        );
        let errors = schema
            .validate(&Record::new().with("mobile", "12345678"))
            .unwrap_err();
        assert_eq!(
            errors.messages("mobile"),
            &[
                "Mobile number must be 10 digits.".to_string(),
                "Mobile number cannot exceed 5 characters.".to_string(),
            ]
        );
        assert_eq!(errors.first("mobile"), Some("Mobile number must be 10 digits."));
    }

    #[test]
    fn test_identifier_is_exempt() {
        let with_id = valid().with_id("");
        let valid = schema().validate(&with_id).unwrap();
        assert_eq!(valid.id(), Some(&RecordId::new("")));
    }

    #[test]
    fn test_after_rule() {
        let errors = schema()
            .validate(&valid().with("end", "09:00"))
            .unwrap_err();
        assert_eq!(errors.first("end"), Some("End time must be after start time."));

        // Ordering is skipped when a side already failed
        let errors = schema()
            .validate(&valid().with("start", "9:00").with("end", "08:00"))
            .unwrap_err();
        assert!(errors.has("start"));
        assert!(!errors.has("end"));
    }

    #[test]
    fn test_required_when_rule() {
        let options = vec![
            ChoiceOption::new("razorpay", "Razorpay"),
            ChoiceOption::new("payu", "PayU"),
        ];
        let schema = Schema::new("Gateway")
            .field(FieldSpec::choice("gateway", "Gateway", options).required())
            .field(FieldSpec::choice(
                "mmid",
                "MMID",
                vec![ChoiceOption::new("mmid1", "MMID 1")],
            ))
            .rule(CrossRule::required_when(
                "mmid",
                "gateway",
                "razorpay",
                "Please select an MMID for Razorpay.",
            ));

        let errors = schema
            .validate(&Record::new().with("gateway", "razorpay"))
            .unwrap_err();
        assert_eq!(errors.first("mmid"), Some("Please select an MMID for Razorpay."));

        assert!(schema.validate(&Record::new().with("gateway", "payu")).is_ok());
        assert!(
            schema
                .validate(&Record::new().with("gateway", "razorpay").with("mmid", "mmid1"))
                .is_ok()
        );
    }

    #[test]
    fn test_multi_choice_rules() {
        let schema = Schema::new("Assign").field(
            FieldSpec::multi_choice(
                "items",
                "Module",
                vec![ChoiceOption::new("hotel", "Hotel")],
            )
            .required(),
        );

        let errors = schema.validate(&Record::new()).unwrap_err();
        assert_eq!(errors.first("items"), Some("Please select at least one module."));

        let errors = schema
            .validate(&Record::new().with("items", vec!["spa".to_string()]))
            .unwrap_err();
        assert_eq!(errors.first("items"), Some("Please select a module."));
    }

    #[test]
    fn test_validate_field_isolates_messages() {
        let messages = schema().validate_field(&valid().with("topic", ""), "topic");
        assert_eq!(messages, vec!["Session topic cannot be empty.".to_string()]);
        assert!(schema().validate_field(&valid().with("topic", ""), "day").is_empty());
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Please enter a valid email address.");
        errors.add("email", "Email cannot exceed 50 characters.");
        assert_eq!(errors.to_string(), "email: Please enter a valid email address.");
        errors.clear_field("email");
        assert!(errors.is_empty());
    }
}
