//! Processor module for the review indexer ingest.
//!
//! Turns review records into embedding vectors.

mod embedding_processor;

pub use embedding_processor::EmbeddingProcessor;
