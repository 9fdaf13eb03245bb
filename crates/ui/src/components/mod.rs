//! # UI Components
//!
//! Building blocks for the entity screens and the login page.

pub mod confirm_delete;
pub mod data_table;
pub mod entity_form;
pub mod inputs;
pub mod slide_over;
pub mod toast;

pub use confirm_delete::ConfirmDeleteDialog;
pub use data_table::{DataTable, TableSkeleton};
pub use entity_form::EntityForm;
pub use inputs::{Checkbox, MultiSelect, Select, SelectOption, TextInput, toggle_value};
pub use slide_over::SlideOver;
pub use toast::ToastStack;
