//! Error types for the review indexer repository.

mod embedding_error;
mod vector_index_error;

pub use embedding_error::EmbeddingError;
pub use vector_index_error::VectorIndexError;
