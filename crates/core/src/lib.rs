//! # ARICON Core
//!
//! Core types, traits, errors and configuration for the ARICON admin panel.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: record identifiers, field kinds, validation rules, toast levels
//! - **Traits**: common behaviors like `Validatable` and `Identifiable`
//! - **Errors**: unified error handling with `AdminError` and `AdminResult`
//! - **Config**: layered `AppConfig` (defaults, TOML file, environment)
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::AppConfig;
pub use error::{AdminError, AdminResult, ResultExt};
pub use traits::{Identifiable, Named, Validatable};
pub use types::{FieldKind, RecordId, SortDirection, ToastLevel, Validation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
