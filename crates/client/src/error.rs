//! Errors raised by the API access helper

use thiserror::Error;

/// Errors that can occur when talking to the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, TLS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The server answered with a non-success status or `success: false`.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or a generic fallback.
        message: String,
    },

    /// The response body could not be understood.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A mutation was attempted without a signed-in session.
    #[error("Not signed in")]
    NotAuthenticated,
}

impl ClientError {
    /// Create an `Api` error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify a transport failure from `reqwest`.
    pub fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    /// Whether the call never got a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Whether the credential was missing or rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::Api { status: 401, .. }
        )
    }

    /// Whether this is a "not found" (404) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Get the user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Unable to connect to the server. Please check your connection.".to_string()
            }
            Self::Timeout(_) => "Request timed out. Please try again.".to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Parse(_) => "Received an unexpected response from the server.".to_string(),
            Self::NotAuthenticated => "Your session has ended. Please sign in again.".to_string(),
        }
    }
}
