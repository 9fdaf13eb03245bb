//! # ARICON Client
//!
//! API access helper for the ARICON admin panel.
//!
//! This crate issues JSON requests against the backing REST service and
//! normalizes every outcome into either the response payload or a
//! [`ClientError`] carrying the server-supplied message.
//!
//! ## Features
//!
//! - `ApiClient` over `reqwest` with a bounded request timeout
//! - Explicit `Session` object carrying the bearer credential
//! - Envelope unwrapping (`{ success, data, message }`)
//! - `EntityBackend` trait so the CRUD engine can run without a network
//!

pub mod api;
pub mod backend;
pub mod error;
pub mod response;
pub mod session;

pub use api::ApiClient;
pub use backend::{EntityBackend, Operation};
pub use error::ClientError;
pub use response::{Envelope, fallback_message, normalize_response};
pub use session::{LOGIN_PATH, Session, session_from_login};
