//! Writer module for the review indexer ingest.
//!
//! Upserts embedding vectors into the provisioned index and reads back the
//! index statistics.

use std::collections::HashSet;
use tracing::{info, instrument, warn};

use crate::errors::IngestError;
use review_indexer_repository::VectorIndex;
use review_indexer_shared::{EmbeddingVector, IndexStats};

/// Outcome of a write.
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    /// Vectors the index reported as upserted.
    pub upserted: u64,
    /// Vectors dropped because a later vector had the same id.
    pub duplicates_collapsed: usize,
    /// Index statistics read after the upsert.
    pub stats: IndexStats,
}

/// Writer that sends all vectors to one namespace in a single request.
pub struct IndexWriter {
    namespace: String,
}

impl IndexWriter {
    /// Create a writer targeting `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Upsert `vectors` and fetch index statistics.
    ///
    /// Vectors sharing an id are collapsed to the last one before sending, so
    /// the later record wins. An empty input skips the upsert but still reads
    /// the statistics.
    #[instrument(skip(self, index, vectors), fields(namespace = %self.namespace, count = vectors.len()))]
    pub async fn write(
        &self,
        index: &dyn VectorIndex,
        vectors: Vec<EmbeddingVector>,
    ) -> Result<WriteOutcome, IngestError> {
        let total = vectors.len();
        let vectors = Self::keep_last_by_id(vectors);
        let duplicates_collapsed = total - vectors.len();

        if duplicates_collapsed > 0 {
            warn!(
                duplicates = duplicates_collapsed,
                "Duplicate vector ids, keeping the last occurrence of each"
            );
        }

        let upserted = if vectors.is_empty() {
            info!("No vectors to upsert, skipping");
            0
        } else {
            let summary = index
                .upsert(&vectors, &self.namespace)
                .await
                .map_err(IngestError::write)?;
            info!(upserted = summary.upserted_count, "Upserted vectors");
            summary.upserted_count
        };

        let stats = index
            .describe_index_stats()
            .await
            .map_err(IngestError::write)?;

        Ok(WriteOutcome {
            upserted,
            duplicates_collapsed,
            stats,
        })
    }

    /// Drop every vector whose id appears again later, keeping input order
    /// among the survivors.
    fn keep_last_by_id(vectors: Vec<EmbeddingVector>) -> Vec<EmbeddingVector> {
        let mut seen = HashSet::with_capacity(vectors.len());
        let mut kept: Vec<EmbeddingVector> = vectors
            .into_iter()
            .rev()
            .filter(|v| seen.insert(v.id.clone()))
            .collect();
        kept.reverse();
        kept
    }
}
