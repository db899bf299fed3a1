//! Vector index error types.
//!
//! This module defines the error types that can occur while talking to the
//! vector index, on either the control plane or the data plane.

use thiserror::Error;

/// Errors that can occur during vector index operations.
#[derive(Debug, Clone, Error)]
pub enum VectorIndexError {
    /// Failed to reach the service, or the client could not be built.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service rejected the API key.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The service answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    RequestError { status: u16, body: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to create the index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// The named index does not exist.
    #[error("Index not found: {0}")]
    NotFound(String),
}

impl VectorIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::AuthenticationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Map a non-success HTTP status and its body to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::AuthenticationError(body),
            _ => Self::RequestError { status, body },
        }
    }
}
