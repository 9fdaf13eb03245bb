//! HTTP implementation of the API access helper

use crate::backend::{EntityBackend, Operation};
use crate::error::ClientError;
use crate::response::normalize_response;
use crate::session::{LOGIN_PATH, Session, session_from_login};
use aricon_core::AppConfig;
use aricon_schema::Credentials;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info, warn};

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the backing REST API.
///
/// Every request carries the configured timeout. Mutations require a
/// session; reads attach the credential when one is present.
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new(&config)?.with_session(Some(session));
/// let rows = client.fetch("/api/hotel-details").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL of the backend API.
    base_url: String,
    /// Request timeout in seconds, reported in timeout errors.
    timeout_secs: u64,
    /// Signed-in session, if any.
    session: Option<Session>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout_secs: config.request_timeout_secs,
            session: None,
        })
    }

    /// Attach or detach a session.
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    /// Drop the session.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// The current session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, operation: Operation, path: &str) -> RequestBuilder {
        let method = match operation {
            Operation::Read => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        };
        let mut req = self.client.request(method, self.url(path));
        if let Some(session) = &self.session {
            req = req.bearer_auth(session.token());
        }
        req
    }

    async fn read_body(
        &self,
        response: reqwest::Response,
    ) -> Result<(u16, Vec<u8>), ClientError> {
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(&e, self.timeout_secs))?;
        Ok((status, bytes.to_vec()))
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        info!("Signing in as {}", credentials.email);

        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e, self.timeout_secs))?;

        let (status, body) = self.read_body(response).await?;
        let session = session_from_login(status, &body, &credentials.email);
        match &session {
            Ok(_) => info!("Signed in as {}", credentials.email),
            Err(e) => warn!("Sign-in failed for {}: {}", credentials.email, e),
        }
        session
    }
}

impl EntityBackend for ApiClient {
    async fn send(
        &self,
        operation: Operation,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        if operation.is_mutation() && self.session.is_none() {
            warn!("{} {} refused: no session", operation, path);
            return Err(ClientError::NotAuthenticated);
        }

        debug!("{} {}", operation, path);
        let mut req = self.builder(operation, path);
        if let Some(body) = &body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e, self.timeout_secs))?;
        let (status, bytes) = self.read_body(response).await?;
        debug!("{} {} -> {}", operation, path, status);

        normalize_response(status, &bytes)
    }
}
