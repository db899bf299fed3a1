//! Embedding provider trait definition.

use async_trait::async_trait;

use crate::errors::EmbeddingError;

/// Computes embeddings for text, one text per call.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Identifier of the model used to compute embeddings.
    fn model(&self) -> &str;

    /// Embed a single piece of text.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<f32>)` - The embedding, already checked against the expected dimension
    /// * `Err(EmbeddingError)` - If the request fails or the response is unusable
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}
