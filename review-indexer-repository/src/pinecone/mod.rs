//! Pinecone implementation of the vector index interfaces.
//!
//! Talks to the Pinecone REST API directly: the control plane at a fixed
//! controller URL, and each index's data plane at the host the control plane
//! reports for it.

mod client;
mod index;

pub use client::PineconeClient;
pub use index::PineconeIndex;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::errors::VectorIndexError;

/// Default control-plane URL.
pub const DEFAULT_CONTROLLER_URL: &str = "https://api.pinecone.io";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2024-07";

async fn send(request: RequestBuilder) -> Result<Response, VectorIndexError> {
    request
        .send()
        .await
        .map_err(|e| VectorIndexError::connection(e.to_string()))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, VectorIndexError> {
    response
        .json::<T>()
        .await
        .map_err(|e| VectorIndexError::parse(e.to_string()))
}

/// Drain a failed response into an error, keeping the body for context.
async fn error_for_response(response: Response) -> VectorIndexError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(status = %status, body = %body, "Pinecone request failed");
    VectorIndexError::from_status(status.as_u16(), body)
}
