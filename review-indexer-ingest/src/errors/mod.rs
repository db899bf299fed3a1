//! Error types for the review indexer ingest.

use std::path::PathBuf;

use review_indexer_repository::{EmbeddingError, VectorIndexError};
use thiserror::Error;

/// Errors that can occur in the review indexer ingest.
///
/// Every variant is fatal to the run.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The reviews file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reviews file is not valid JSON or a record is missing a field.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Listing, creating, describing or connecting to the index failed.
    #[error("Provision error: {0}")]
    ProvisionError(#[source] VectorIndexError),

    /// The existing index cannot hold vectors of the configured dimension.
    #[error("Index {index} has dimension {actual:?}, expected {expected}")]
    SchemaMismatch {
        index: String,
        expected: usize,
        actual: Option<usize>,
    },

    /// The index did not become ready in time.
    #[error("Index {index} not ready after {waited_secs}s")]
    IndexNotReady { index: String, waited_secs: u64 },

    /// Embedding a record failed.
    #[error("Failed to embed record {position} ({professor}): {source}")]
    EmbeddingError {
        position: usize,
        professor: String,
        #[source]
        source: EmbeddingError,
    },

    /// Upserting vectors or reading index stats failed.
    #[error("Write error: {0}")]
    WriteError(#[source] VectorIndexError),
}

impl IngestError {
    /// Create a load error.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LoadError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a provision error.
    pub fn provision(source: VectorIndexError) -> Self {
        Self::ProvisionError(source)
    }

    /// Create a write error.
    pub fn write(source: VectorIndexError) -> Self {
        Self::WriteError(source)
    }
}
