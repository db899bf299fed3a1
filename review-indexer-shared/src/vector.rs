//! Embedding vectors ready to be written to the vector index.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::ReviewRecord;

/// Metadata stored alongside each vector. Exactly the review, subject and
/// star rating of the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMetadata {
    pub review: String,
    pub subject: String,
    pub stars: Number,
}

/// An embedding tagged with the professor it belongs to.
///
/// Serializes to the `{id, values, metadata}` shape the index expects in an
/// upsert request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingVector {
    /// The source record's professor identifier.
    pub id: String,
    /// The embedding itself.
    pub values: Vec<f32>,
    pub metadata: VectorMetadata,
}

impl EmbeddingVector {
    /// Package an embedding computed from `record`'s review text.
    pub fn from_record(record: &ReviewRecord, values: Vec<f32>) -> Self {
        Self {
            id: record.professor.clone(),
            values,
            metadata: VectorMetadata {
                review: record.review.clone(),
                subject: record.subject.clone(),
                stars: record.stars.clone(),
            },
        }
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}
