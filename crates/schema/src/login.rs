//! Sign-in form schema

use crate::field::FieldSpec;
use crate::record::Record;
use crate::validation::{FieldErrors, Schema};
use serde::Serialize;

/// Email and password submitted to the login endpoint
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate a login form draft and extract the credentials
    pub fn from_form(form: &Record) -> Result<Self, FieldErrors> {
        let valid = login_schema().validate(form)?;
        let record = valid.record();
        Ok(Self::new(record.text("email"), record.text("password")))
    }
}

/// Fields of the login form
pub fn login_schema() -> Schema {
    Schema::new("Login")
        .field(FieldSpec::email("email", "Email").required().placeholder("you@example.com"))
        .field(
            FieldSpec::password("password", "Password")
                .required()
                .min_len(8)
                .max_len(20),
        )
        .field(FieldSpec::checkbox("robot", "I am not a robot").required())
}
