//! OpenAI implementation of the embedding provider.

mod client;

pub use client::OpenAiEmbedder;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default embedding model. Produces 1536-dimensional vectors.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
