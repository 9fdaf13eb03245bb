//! Lookup lists backing reference dropdowns
//!
//! A lookup list maps record identifiers of a secondary collection to the
//! label shown for them, so a logistics row referencing faculty `64f1..`
//! can be displayed as "Dr. Rao".

use crate::field::{ChoiceOption, LookupSource};
use crate::record::ID_KEY;
use aricon_core::{AdminError, AdminResult};
use serde_json::Value;
use std::collections::HashMap;

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub id: String,
    pub label: String,
}

/// Options loaded from one lookup source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupList {
    pub source: LookupSource,
    pub options: Vec<LookupOption>,
}

impl LookupList {
    /// An empty list, used when loading failed
    pub fn empty(source: LookupSource) -> Self {
        Self {
            source,
            options: Vec::new(),
        }
    }

    /// Build the list from a collection payload
    ///
    /// Rows without an identifier are skipped; rows without a label fall
    /// back to showing their identifier.
    pub fn from_json(source: LookupSource, node: &Value) -> AdminResult<Self> {
        let rows = node.as_array().ok_or_else(|| {
            AdminError::validation(format!("{} lookup is not a list", source.noun()))
        })?;

        let options = rows
            .iter()
            .filter_map(|row| {
                let id = row.get(ID_KEY)?.as_str()?.to_string();
                let label = row
                    .get(source.label_key())
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| id.clone());
                Some(LookupOption { id, label })
            })
            .collect();

        Ok(Self { source, options })
    }

    /// Label for an identifier, falling back to the identifier itself
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
            .unwrap_or(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }

    /// Options in the shape used by select inputs
    pub fn as_choices(&self) -> Vec<ChoiceOption> {
        self.options
            .iter()
            .map(|o| ChoiceOption::new(o.id.clone(), o.label.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// All lookup lists loaded for one screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookups {
    lists: HashMap<LookupSource, LookupList>,
}

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a list
    pub fn insert(&mut self, list: LookupList) {
        self.lists.insert(list.source, list);
    }

    pub fn get(&self, source: LookupSource) -> Option<&LookupList> {
        self.lists.get(&source)
    }

    /// Display label for a referenced identifier
    pub fn label<'a>(&'a self, source: LookupSource, id: &'a str) -> &'a str {
        match self.lists.get(&source) {
            Some(list) => list.label_for(id),
            None => id,
        }
    }

    /// Select options for a source, empty when not loaded
    pub fn choices(&self, source: LookupSource) -> Vec<ChoiceOption> {
        self.lists
            .get(&source)
            .map(LookupList::as_choices)
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
