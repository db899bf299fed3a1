//! OpenAI embeddings client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use url::Url;

use crate::errors::EmbeddingError;
use crate::interfaces::EmbeddingProvider;
use review_indexer_shared::EMBEDDING_DIMENSION;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embedding provider backed by the OpenAI `/embeddings` endpoint.
///
/// Sends one text per request and expects exactly one embedding back.
pub struct OpenAiEmbedder {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    /// Create a new embedder.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL (e.g., "https://api.openai.com/v1")
    /// * `api_key` - OpenAI API key, sent as a bearer token
    /// * `model` - Embedding model identifier
    pub fn new(base_url: &str, api_key: &str, model: impl Into<String>) -> Result<Self, EmbeddingError> {
        let parsed_url = Url::parse(base_url).map_err(|e| {
            EmbeddingError::connection(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            EmbeddingError::authentication("API key contains characters not allowed in a header")
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::connection(e.to_string()))?;

        let model = model.into();
        info!(base_url = %parsed_url, model = %model, "Created OpenAI embedder");

        Ok(Self {
            http,
            endpoint: format!("{}/embeddings", parsed_url.as_str().trim_end_matches('/')),
            model,
            dimension: EMBEDDING_DIMENSION,
        })
    }

    /// Pull the single embedding out of a response and check its length.
    fn extract_embedding(
        response: EmbeddingResponse,
        expected: usize,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::invalid_response("Response contained no embeddings"))?;

        if embedding.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            });
        }

        Ok(embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, text), fields(model = %self.model, bytes = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbeddingRequest {
            input: text,
            model: &self.model,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Embedding request failed");
            return Err(EmbeddingError::from_status(status.as_u16(), body));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::invalid_response(e.to_string()))?;

        Self::extract_embedding(parsed, self.dimension)
    }
}
