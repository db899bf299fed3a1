//! Vector index trait definitions.
//!
//! The vector index is split in two the same way the service is: an admin
//! (control-plane) interface for listing, creating and describing indexes,
//! and a per-index (data-plane) interface for writing vectors and reading
//! statistics.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::VectorIndexError;
use crate::types::{IndexDescription, IndexSpec, UpsertSummary};
use review_indexer_shared::{EmbeddingVector, IndexStats};

/// Abstract interface for index management operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so they can be shared behind an `Arc`.
#[async_trait]
pub trait VectorIndexAdmin: Send + Sync {
    /// List every index visible to the configured API key.
    async fn list_indexes(&self) -> Result<Vec<IndexDescription>, VectorIndexError>;

    /// Create a new index.
    ///
    /// # Arguments
    ///
    /// * `spec` - Name, dimension, metric and placement of the index
    ///
    /// # Returns
    ///
    /// * `Ok(IndexDescription)` - The index as the service reports it right after creation.
    ///   It is usually not ready yet.
    /// * `Err(VectorIndexError)` - If creation fails, including when the name is already taken
    async fn create_index(&self, spec: &IndexSpec) -> Result<IndexDescription, VectorIndexError>;

    /// Describe a single index by name.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexDescription)` - Current description, including host and readiness
    /// * `Err(VectorIndexError::NotFound)` - If no index has that name
    async fn describe_index(&self, name: &str) -> Result<IndexDescription, VectorIndexError>;

    /// Open a data-plane handle to a described index.
    ///
    /// No request is made; a bad host only shows up on first use.
    fn connect(
        &self,
        description: &IndexDescription,
    ) -> Result<Arc<dyn VectorIndex>, VectorIndexError>;
}

/// Abstract interface for a single vector index.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert or overwrite vectors by id in one request.
    ///
    /// # Arguments
    ///
    /// * `vectors` - Vectors to write. Existing entries with the same id are replaced.
    /// * `namespace` - Namespace to write into
    async fn upsert(
        &self,
        vectors: &[EmbeddingVector],
        namespace: &str,
    ) -> Result<UpsertSummary, VectorIndexError>;

    /// Fetch aggregate statistics for the whole index.
    async fn describe_index_stats(&self) -> Result<IndexStats, VectorIndexError>;
}
