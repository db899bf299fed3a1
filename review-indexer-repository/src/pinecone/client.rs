//! Pinecone control-plane client.
//!
//! This module provides the concrete implementation of `VectorIndexAdmin`
//! using the Pinecone REST API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use url::Url;

use super::{error_for_response, parse_json, send, PineconeIndex, API_VERSION};
use crate::errors::VectorIndexError;
use crate::interfaces::{VectorIndex, VectorIndexAdmin};
use crate::types::{IndexDescription, IndexSpec, Metric, ServerlessSpec};

#[derive(Debug, Deserialize)]
struct ListIndexesResponse {
    #[serde(default)]
    indexes: Vec<IndexDescription>,
}

#[derive(Debug, Serialize)]
struct CreateIndexRequest<'a> {
    name: &'a str,
    dimension: usize,
    metric: Metric,
    spec: CreateIndexPlacement<'a>,
}

#[derive(Debug, Serialize)]
struct CreateIndexPlacement<'a> {
    serverless: &'a ServerlessSpec,
}

impl<'a> From<&'a IndexSpec> for CreateIndexRequest<'a> {
    fn from(spec: &'a IndexSpec) -> Self {
        Self {
            name: &spec.name,
            dimension: spec.dimension,
            metric: spec.metric,
            spec: CreateIndexPlacement {
                serverless: &spec.serverless,
            },
        }
    }
}

/// Pinecone control-plane client.
///
/// Holds one `reqwest::Client` with the API key and version headers baked in.
/// Index handles returned by [`VectorIndexAdmin::connect`] share it.
///
/// # Example
///
/// ```ignore
/// let client = PineconeClient::new(DEFAULT_CONTROLLER_URL, &api_key)?;
/// let indexes = client.list_indexes().await?;
/// ```
pub struct PineconeClient {
    http: reqwest::Client,
    controller_url: String,
}

impl PineconeClient {
    /// Create a new client for the given control-plane URL.
    ///
    /// # Arguments
    ///
    /// * `controller_url` - Control-plane URL (e.g., "https://api.pinecone.io")
    /// * `api_key` - Pinecone API key, sent as-is
    ///
    /// # Returns
    ///
    /// * `Ok(PineconeClient)` - A new client instance. No request has been made yet.
    /// * `Err(VectorIndexError)` - If the URL is malformed or the HTTP client cannot be built
    pub fn new(controller_url: &str, api_key: &str) -> Result<Self, VectorIndexError> {
        let parsed_url = Url::parse(controller_url).map_err(|e| {
            VectorIndexError::connection(format!("Invalid controller URL {}: {}", controller_url, e))
        })?;

        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            VectorIndexError::authentication("API key contains characters not allowed in a header")
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("api-key", key);
        headers.insert("x-pinecone-api-version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| VectorIndexError::connection(e.to_string()))?;

        info!(controller_url = %parsed_url, "Created Pinecone client");

        Ok(Self {
            http,
            controller_url: parsed_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.controller_url, path)
    }
}

/// A rejected create becomes an `IndexCreationError`; authentication and
/// transport failures keep their own kind.
fn creation_error(name: &str, error: VectorIndexError) -> VectorIndexError {
    match error {
        VectorIndexError::RequestError { status, body } => VectorIndexError::index_creation(
            format!("Create index {} failed with status {}: {}", name, status, body),
        ),
        other => other,
    }
}

fn describe_error(name: &str, error: VectorIndexError) -> VectorIndexError {
    match error {
        VectorIndexError::RequestError { status: 404, .. } => VectorIndexError::not_found(name),
        other => other,
    }
}

#[async_trait]
impl VectorIndexAdmin for PineconeClient {
    #[instrument(skip(self))]
    async fn list_indexes(&self) -> Result<Vec<IndexDescription>, VectorIndexError> {
        let response = send(self.http.get(self.endpoint("indexes"))).await?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        let listed: ListIndexesResponse = parse_json(response).await?;
        debug!(count = listed.indexes.len(), "Listed indexes");
        Ok(listed.indexes)
    }

    #[instrument(skip(self, spec), fields(name = %spec.name, dimension = spec.dimension))]
    async fn create_index(&self, spec: &IndexSpec) -> Result<IndexDescription, VectorIndexError> {
        let response = send(
            self.http
                .post(self.endpoint("indexes"))
                .json(&CreateIndexRequest::from(spec)),
        )
        .await?;

        if !response.status().is_success() {
            return Err(creation_error(&spec.name, error_for_response(response).await));
        }

        let description: IndexDescription = parse_json(response).await?;
        info!(name = %description.name, state = %description.status.state, "Index created");
        Ok(description)
    }

    #[instrument(skip(self))]
    async fn describe_index(&self, name: &str) -> Result<IndexDescription, VectorIndexError> {
        let response = send(self.http.get(self.endpoint(&format!("indexes/{}", name)))).await?;

        if !response.status().is_success() {
            return Err(describe_error(name, error_for_response(response).await));
        }

        parse_json(response).await
    }

    fn connect(
        &self,
        description: &IndexDescription,
    ) -> Result<Arc<dyn VectorIndex>, VectorIndexError> {
        let index = PineconeIndex::new(self.http.clone(), &description.name, &description.host)?;
        Ok(Arc::new(index))
    }
}
