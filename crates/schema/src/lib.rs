//! # ARICON Schema
//!
//! Declarative entity schemas for the ARICON admin panel.
//!
//! ## Features
//!
//! - `FieldSpec` builders carrying input kind, labels and rules
//! - Flat `Record`s with the `_id` identifier kept apart from domain values
//! - Pure `Schema::validate` producing per-field messages
//! - The `EntityKind` catalogue with endpoints and wire encodings
//! - Lookup lists resolving references to display labels
//!

pub mod entities;
pub mod field;
pub mod login;
pub mod lookup;
pub mod record;
pub mod validation;

pub use entities::{EntityKind, Endpoints, GATEWAYS, MODULES, RAZORPAY_MMIDS, lookup_path, row_id};
pub use field::{ChoiceOption, FieldSpec, LookupSource};
pub use login::{Credentials, login_schema};
pub use lookup::{LookupList, LookupOption, Lookups};
pub use record::{FieldValue, ID_KEY, Record};
pub use validation::{
    CrossRule, FieldErrors, Schema, ValidRecord, check_rule, is_email, is_time_24h, parse_date,
};
