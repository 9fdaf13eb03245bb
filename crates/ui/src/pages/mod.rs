//! # Pages
//!
//! - **EntityPage**: the generic CRUD screen, one per entity type
//! - **LoginPage**: sign-in gate shown without a session

pub mod entity_page;
pub mod login;

pub use entity_page::EntityPage;
pub use login::LoginPage;
