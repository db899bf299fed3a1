//! # Review Indexer
//!
//! Main library for the professor review indexer.
//!
//! This crate provides the entry point, configuration and dependency wiring
//! for a single ingest run.

pub mod config;
pub mod logging;

pub use config::{ConfigError, Dependencies, IndexerConfig};

use review_indexer_ingest::IngestError;
use thiserror::Error;

/// Errors that can end an indexer run.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// A remote client could not be constructed.
    #[error("Setup error: {0}")]
    SetupError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),

    /// Failed to render the final statistics.
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}

impl IndexerError {
    /// Create a setup error.
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::SetupError(msg.into())
    }
}
