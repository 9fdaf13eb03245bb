//! Flat records exchanged between forms, tables and the API
//!
//! A `Record` is a map from wire field name to `FieldValue` plus an optional
//! server-assigned identifier. The identifier is carried separately from the
//! domain values so that it can never be mistaken for a field to validate or
//! to submit in a create payload.

use crate::field::FieldSpec;
use crate::validation::parse_date;
use aricon_core::{AdminError, AdminResult, FieldKind, Identifiable, RecordId};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Wire key of the record identifier
pub const ID_KEY: &str = "_id";

// ============================================================================
// FieldValue
// ============================================================================

/// Value of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    /// Empty value appropriate for a field kind
    pub fn blank_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::MultiChoice => FieldValue::List(Vec::new()),
            FieldKind::Checkbox => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Whether the value counts as "not supplied"
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
            FieldValue::Flag(b) => !b,
        }
    }

    /// Text content, or the first item of a list
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::List(items) => items.first().map(String::as_str).unwrap_or(""),
            FieldValue::Flag(_) => "",
        }
    }

    /// Value as a JSON node
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Flag(b) => Value::Bool(*b),
        }
    }

    /// Text rendering for table cells and sorting
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
        }
    }

    /// Read a JSON node into a value for the given kind
    ///
    /// Populated references (`{"_id": .., ...}`) collapse to their identifier.
    /// Dates sent as full timestamps are cut to `YYYY-MM-DD`.
    pub fn from_json(kind: FieldKind, node: &Value) -> Self {
        match kind {
            FieldKind::Date => {
                let text = scalar_text(node);
                match parse_date(text.trim()) {
                    Some(date) => FieldValue::Text(date.format("%Y-%m-%d").to_string()),
                    None => FieldValue::Text(text),
                }
            }
            FieldKind::MultiChoice => match node {
                Value::Array(items) => FieldValue::List(items.iter().map(scalar_text).collect()),
                Value::Null => FieldValue::List(Vec::new()),
                other => FieldValue::List(vec![scalar_text(other)]),
            },
            FieldKind::Checkbox => FieldValue::Flag(node.as_bool().unwrap_or(false)),
            _ => FieldValue::Text(scalar_text(node)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

fn scalar_text(node: &Value) -> String {
    match node {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => map
            .get(ID_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::Array(items) => items.first().map(scalar_text).unwrap_or_default(),
    }
}

// ============================================================================
// Record
// ============================================================================

/// A flat entity record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Server-assigned identifier, absent until persisted
    pub id: Option<RecordId>,

    /// Domain values keyed by wire name
    pub values: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank record with one empty value per field
    pub fn blank(fields: &[FieldSpec]) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name.clone(), FieldValue::blank_for(f.kind)))
            .collect();
        Self { id: None, values }
    }

    /// Builder-style identifier
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a value, empty when missing
    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// List value, empty when missing
    pub fn list(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(FieldValue::List(items)) => items.clone(),
            Some(FieldValue::Text(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// Display text of a value, empty when missing
    pub fn display(&self, name: &str) -> String {
        self.values
            .get(name)
            .map(FieldValue::display)
            .unwrap_or_default()
    }

    /// Read a row object, keeping only the given fields
    pub fn from_json(fields: &[FieldSpec], node: &Value) -> AdminResult<Self> {
        let object = node
            .as_object()
            .ok_or_else(|| AdminError::validation(format!("expected a JSON object, got {node}")))?;

        let id = object
            .get(ID_KEY)
            .map(scalar_text)
            .filter(|s| !s.is_empty())
            .map(RecordId::from);

        let values = fields
            .iter()
            .map(|f| {
                let value = object
                    .get(&f.name)
                    .map(|n| FieldValue::from_json(f.kind, n))
                    .unwrap_or_else(|| FieldValue::blank_for(f.kind));
                (f.name.clone(), value)
            })
            .collect();

        Ok(Self { id, values })
    }

    /// Domain values as a JSON object, without the identifier
    pub fn to_json(&self, fields: &[FieldSpec]) -> Value {
        let mut map = Map::new();
        for field in fields {
            let value = self
                .values
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| FieldValue::blank_for(field.kind));
            map.insert(field.name.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

impl Identifiable for Record {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

// ============================================================================
// Tests
// ============================================================================
