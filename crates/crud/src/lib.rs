//! # ARICON CRUD
//!
//! Headless engine behind every entity screen of the admin panel.
//!
//! One generic controller serves all entity types: the entity's schema,
//! endpoints and lookup lists come from [`aricon_schema::EntityKind`], and
//! the controller alone owns persistence, notification and re-fetch.
//!
//! ## Features
//!
//! - Table model with a selection column, three-state sorting and filtering
//! - Form state machine with inline field errors and an in-flight token
//! - Delete confirmation that issues no request until confirmed
//! - Toast notifications through a pluggable [`Notifier`]
//!

pub mod controller;
pub mod form;
pub mod list;
pub mod notify;
pub mod table;

pub use controller::{DeleteOutcome, ListController, StateStore, SubmitOutcome};
pub use form::{FormMode, FormPhase, FormState, Request, SubmitBlocked, Submission};
pub use list::{ListState, LoadState, PendingDelete};
pub use notify::{Notifier, TOAST_DURATION_MS, Toast, ToastLog, format_timestamp};
pub use table::{RowSelection, SortState, TableColumn, cell_text, columns_for, record_label};
