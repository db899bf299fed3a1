//! # Review Indexer Shared
//!
//! Plain data types passed between the review indexer crates: the review
//! records read from disk, the embedding vectors derived from them, and the
//! statistics reported back by the vector index.

mod review;
mod stats;
mod vector;

pub use review::{ReviewCollection, ReviewRecord};
pub use stats::{IndexStats, NamespaceStats};
pub use vector::{EmbeddingVector, VectorMetadata};

/// Length of every embedding vector written to the index.
pub const EMBEDDING_DIMENSION: usize = 1536;
