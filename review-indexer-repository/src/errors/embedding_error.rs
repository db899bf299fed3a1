//! Embedding error types.

use thiserror::Error;

/// Errors that can occur while computing an embedding.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingError {
    /// Failed to reach the service, or the client could not be built.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service rejected the API key.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The service answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    RequestError { status: u16, body: String },

    /// The response could not be parsed or carried no embedding.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The embedding has the wrong number of dimensions.
    #[error("Embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl EmbeddingError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::AuthenticationError(msg.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
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
