//! # Review Indexer Repository
//!
//! This crate provides traits and implementations for the two remote services
//! the review indexer talks to: the vector index that stores embeddings, and
//! the embedding service that computes them. It includes definitions for
//! errors, interfaces, and concrete REST implementations for Pinecone and
//! OpenAI.

pub mod errors;
pub mod interfaces;
pub mod openai;
pub mod pinecone;
pub mod types;

pub use errors::{EmbeddingError, VectorIndexError};
pub use interfaces::{EmbeddingProvider, VectorIndex, VectorIndexAdmin};
pub use openai::OpenAiEmbedder;
pub use pinecone::{PineconeClient, PineconeIndex};
pub use types::{IndexDescription, IndexSpec, IndexStatus, Metric, ServerlessSpec, UpsertSummary};
