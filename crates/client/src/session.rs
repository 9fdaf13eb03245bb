//! Signed-in session
//!
//! A `Session` holds the bearer credential returned by the login endpoint.
//! It is an explicit value owned by whoever signed in and handed to the
//! [`ApiClient`](crate::ApiClient); dropping it signs the user out.

use crate::error::ClientError;
use crate::response::{Envelope, fallback_message};
use serde_json::Value;

/// Path of the login endpoint
pub const LOGIN_PATH: &str = "/api/users/login";

/// An authenticated session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    email: String,
}

impl Session {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }

    /// Bearer credential attached to requests
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Email the session was opened with
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Read the access token out of a login response
///
/// The token sits at the top level (`accessToken`) or inside `data`.
pub fn session_from_login(status: u16, body: &[u8], email: &str) -> Result<Session, ClientError> {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    if !(200..300).contains(&status) {
        let message = Envelope::from_value(&value)
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| {
                if status == 401 {
                    "Invalid credentials".to_string()
                } else {
                    fallback_message(status)
                }
            });
        return Err(ClientError::api(status, message));
    }

    let token = value
        .get("accessToken")
        .or_else(|| value.get("data").and_then(|d| d.get("accessToken")))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::Parse("login response has no accessToken".to_string()))?;

    Ok(Session::new(token, email))
}
