//! Embedding processor implementation.
//!
//! Embeds each review's text and packages it with the record's metadata.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::IngestError;
use review_indexer_repository::EmbeddingProvider;
use review_indexer_shared::{EmbeddingVector, ReviewRecord};

/// Processor that embeds review records.
///
/// The processor:
/// - Sends one embedding request per record, in input order
/// - Waits for each request before sending the next
/// - Stops at the first failure
pub struct EmbeddingProcessor {
    provider: Arc<dyn EmbeddingProvider>,
}

impl EmbeddingProcessor {
    /// Create a new processor backed by `provider`.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Embed every record.
    ///
    /// # Returns
    ///
    /// One vector per record, in the same order, with the record's professor
    /// as id and its review, subject and stars as metadata.
    #[instrument(skip(self, records), fields(record_count = records.len(), model = %self.provider.model()))]
    pub async fn process(
        &self,
        records: &[ReviewRecord],
    ) -> Result<Vec<EmbeddingVector>, IngestError> {
        let mut vectors = Vec::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            debug!(position, professor = %record.professor, "Embedding review");

            let values = self.provider.embed(&record.review).await.map_err(|source| {
                IngestError::EmbeddingError {
                    position,
                    professor: record.professor.clone(),
                    source,
                }
            })?;

            vectors.push(EmbeddingVector::from_record(record, values));
        }

        info!(count = vectors.len(), "Embedded reviews");
        Ok(vectors)
    }
}
