//! The seam between the CRUD engine and the network
//!
//! The list controller only ever talks to an [`EntityBackend`]. The
//! production implementation is [`ApiClient`](crate::ApiClient); tests plug
//! in an in-memory backend that records every call.

use crate::error::ClientError;
use serde_json::Value;

/// Request semantics of one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// HTTP method name
    pub fn method(&self) -> &'static str {
        match self {
            Operation::Read => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }

    /// Whether the call changes server state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Read)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method())
    }
}

/// Something that can execute entity requests
#[allow(async_fn_in_trait)]
pub trait EntityBackend {
    /// Issue one request and return the normalized payload
    async fn send(
        &self,
        operation: Operation,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError>;

    /// Read a collection
    async fn fetch(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Operation::Read, path, None).await
    }

    /// Create a record
    async fn create(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send(Operation::Create, path, Some(body)).await
    }

    /// Replace a record
    async fn update(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send(Operation::Update, path, Some(body)).await
    }

    /// Delete a record
    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Operation::Delete, path, None).await
    }
}

impl<B: EntityBackend> EntityBackend for &B {
    async fn send(
        &self,
        operation: Operation,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        (**self).send(operation, path, body).await
    }
}
