//! Orchestrator module for the review indexer ingest.
//!
//! Runs provisioner, loader, processor and writer in sequence.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::IngestError;
use crate::loader::ReviewLoader;
use crate::processor::EmbeddingProcessor;
use crate::provisioner::IndexProvisioner;
use crate::writer::IndexWriter;
use review_indexer_repository::IndexSpec;
use review_indexer_shared::IndexStats;

/// Report of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub index_name: String,
    /// Whether the index was created by this run.
    pub index_created: bool,
    pub namespace: String,
    pub records_read: usize,
    pub vectors_embedded: usize,
    pub vectors_upserted: u64,
    pub duplicates_collapsed: usize,
    /// Index statistics read after the upsert.
    pub stats: IndexStats,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Orchestrator that runs the ingest once.
///
/// There are no retries and no partial commits: the first failing stage ends
/// the run, and nothing is written unless every record was embedded.
pub struct Orchestrator {
    spec: IndexSpec,
    loader: ReviewLoader,
    provisioner: IndexProvisioner,
    processor: EmbeddingProcessor,
    writer: IndexWriter,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        spec: IndexSpec,
        loader: ReviewLoader,
        provisioner: IndexProvisioner,
        processor: EmbeddingProcessor,
        writer: IndexWriter,
    ) -> Self {
        Self {
            spec,
            loader,
            provisioner,
            processor,
            writer,
        }
    }

    /// Run the ingest.
    #[instrument(skip(self), fields(index = %self.spec.name, namespace = %self.writer.namespace()))]
    pub async fn run(&self) -> Result<IngestSummary, IngestError> {
        let started_at = Utc::now();
        info!(path = %self.loader.path().display(), "Starting review ingest");

        let provisioned = self.provisioner.provision(&self.spec).await?;

        let collection = self.loader.load()?;
        let records_read = collection.len();

        let vectors = self.processor.process(&collection.reviews).await?;
        let vectors_embedded = vectors.len();

        let outcome = self
            .writer
            .write(provisioned.index.as_ref(), vectors)
            .await?;

        let finished_at = Utc::now();
        info!(
            records = records_read,
            upserted = outcome.upserted,
            namespace_count = outcome.stats.namespace_count(self.writer.namespace()),
            total = outcome.stats.total_vector_count,
            elapsed_ms = (finished_at - started_at).num_milliseconds(),
            "Review ingest complete"
        );

        Ok(IngestSummary {
            index_name: provisioned.description.name,
            index_created: provisioned.created,
            namespace: self.writer.namespace().to_string(),
            records_read,
            vectors_embedded,
            vectors_upserted: outcome.upserted,
            duplicates_collapsed: outcome.duplicates_collapsed,
            stats: outcome.stats,
            started_at,
            finished_at,
        })
    }
}
