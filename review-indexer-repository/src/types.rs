//! Request and response types for vector index operations.

use serde::{Deserialize, Serialize};

use review_indexer_shared::EMBEDDING_DIMENSION;

/// Similarity metric used by an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cosine,
    Euclidean,
    Dotproduct,
    /// Any metric this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Cloud placement of a serverless index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerlessSpec {
    pub cloud: String,
    pub region: String,
}

impl Default for ServerlessSpec {
    fn default() -> Self {
        Self {
            cloud: "aws".to_string(),
            region: "us-east-1".to_string(),
        }
    }
}

/// Everything needed to create an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub name: String,
    pub dimension: usize,
    pub metric: Metric,
    pub serverless: ServerlessSpec,
}

impl IndexSpec {
    /// A cosine index sized for [`EMBEDDING_DIMENSION`] on the default
    /// serverless placement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: EMBEDDING_DIMENSION,
            metric: Metric::Cosine,
            serverless: ServerlessSpec::default(),
        }
    }

    /// Set the serverless cloud and region.
    pub fn with_serverless(mut self, cloud: impl Into<String>, region: impl Into<String>) -> Self {
        self.serverless = ServerlessSpec {
            cloud: cloud.into(),
            region: region.into(),
        };
        self
    }
}

/// Readiness of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IndexStatus {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub state: String,
}

impl IndexStatus {
    pub fn ready() -> Self {
        Self {
            ready: true,
            state: "Ready".to_string(),
        }
    }

    pub fn initializing() -> Self {
        Self {
            ready: false,
            state: "Initializing".to_string(),
        }
    }
}

/// An index as described by the control plane.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexDescription {
    pub name: String,
    /// Absent for index types that carry no fixed dimension.
    #[serde(default)]
    pub dimension: Option<usize>,
    pub metric: Metric,
    /// Data-plane host the index is served from.
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub status: IndexStatus,
}

/// Result of an upsert call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSummary {
    #[serde(default)]
    pub upserted_count: u64,
}
