//! Loader module for the review indexer ingest.
//!
//! Reads the whole reviews file into memory in one go.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::errors::IngestError;
use review_indexer_shared::ReviewCollection;

/// Loader that reads review records from a JSON file.
///
/// The file must hold an object with a `reviews` array whose entries carry
/// `professor`, `subject`, `stars` and `review`.
#[derive(Debug, Clone)]
pub struct ReviewLoader {
    path: PathBuf,
}

impl ReviewLoader {
    /// Create a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the reviews file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<ReviewCollection, IngestError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| IngestError::load(&self.path, e))?;

        let collection = Self::parse(&contents).map_err(|e| match e {
            IngestError::ParseError(msg) => {
                IngestError::parse(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;

        info!(count = collection.len(), "Loaded reviews");
        Ok(collection)
    }

    /// Parse reviews from an in-memory JSON document.
    pub fn parse(contents: &str) -> Result<ReviewCollection, IngestError> {
        serde_json::from_str(contents).map_err(|e| IngestError::parse(e.to_string()))
    }
}
