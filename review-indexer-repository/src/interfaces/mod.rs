//! Interface definitions for the remote services.
//!
//! These traits allow the ingest stages to be wired against the real REST
//! clients in production and against in-memory mocks in tests.

mod embedding_provider;
mod vector_index;

pub use embedding_provider::EmbeddingProvider;
pub use vector_index::{VectorIndex, VectorIndexAdmin};
