//! # Review Indexer Ingest
//!
//! This crate provides the ingest components that turn a file of professor
//! reviews into vectors stored in a remote vector index.
//!
//! ## Architecture
//!
//! The ingest runs four stages in a straight line:
//!
//! 1. **Provisioner**: Ensures the target index exists and opens a handle to it
//! 2. **Loader**: Reads review records from disk
//! 3. **Processor**: Embeds each review, one request per record
//! 4. **Writer**: Upserts every vector in one request and reads back index stats
//!
//! The **Orchestrator** runs them in order and aborts on the first error.

pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod provisioner;
pub mod writer;

#[cfg(test)]
mod mocks;

pub use errors::IngestError;
pub use orchestrator::{IngestSummary, Orchestrator};
