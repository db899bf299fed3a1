//! Pinecone data-plane client for a single index.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

use super::{error_for_response, parse_json, send};
use crate::errors::VectorIndexError;
use crate::interfaces::VectorIndex;
use crate::types::UpsertSummary;
use review_indexer_shared::{EmbeddingVector, IndexStats};

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [EmbeddingVector],
    namespace: &'a str,
}

/// Handle to one Pinecone index, addressed by its data-plane host.
pub struct PineconeIndex {
    http: reqwest::Client,
    name: String,
    base_url: String,
}

impl PineconeIndex {
    /// Create a handle for the index served at `host`.
    ///
    /// A bare host gets an `https://` scheme. A host that already carries a
    /// scheme (as local emulators report) is used as given.
    pub(crate) fn new(
        http: reqwest::Client,
        name: &str,
        host: &str,
    ) -> Result<Self, VectorIndexError> {
        if host.trim().is_empty() {
            return Err(VectorIndexError::connection(format!(
                "Index {} has no data-plane host",
                name
            )));
        }

        let base_url = Self::base_url(host);
        Url::parse(&base_url).map_err(|e| {
            VectorIndexError::connection(format!("Invalid host {} for index {}: {}", host, name, e))
        })?;

        Ok(Self {
            http,
            name: name.to_string(),
            base_url,
        })
    }

    fn base_url(host: &str) -> String {
        let host = host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Name of the index this handle writes to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    #[instrument(skip(self, vectors), fields(index = %self.name, count = vectors.len()))]
    async fn upsert(
        &self,
        vectors: &[EmbeddingVector],
        namespace: &str,
    ) -> Result<UpsertSummary, VectorIndexError> {
        let body = UpsertRequest { vectors, namespace };
        let response = send(self.http.post(self.endpoint("vectors/upsert")).json(&body)).await?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        let summary: UpsertSummary = parse_json(response).await?;
        debug!(upserted = summary.upserted_count, "Upsert complete");
        Ok(summary)
    }

    #[instrument(skip(self), fields(index = %self.name))]
    async fn describe_index_stats(&self) -> Result<IndexStats, VectorIndexError> {
        let response = send(
            self.http
                .post(self.endpoint("describe_index_stats"))
                .json(&json!({})),
        )
        .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        parse_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_indexer_shared::ReviewRecord;

    #[test]
    fn test_base_url_adds_scheme() {
        assert_eq!(
            PineconeIndex::base_url("rag-x.svc.pinecone.io"),
            "https://rag-x.svc.pinecone.io"
        );
    }

    #[test]
    fn test_base_url_keeps_existing_scheme() {
        assert_eq!(
            PineconeIndex::base_url("http://localhost:5081/"),
            "http://localhost:5081"
        );
    }

    #[test]
    fn test_endpoints() {
        let index =
            PineconeIndex::new(reqwest::Client::new(), "rag", "rag-x.svc.pinecone.io").unwrap();

        assert_eq!(index.name(), "rag");
        assert_eq!(
            index.endpoint("vectors/upsert"),
            "https://rag-x.svc.pinecone.io/vectors/upsert"
        );
        assert_eq!(
            index.endpoint("describe_index_stats"),
            "https://rag-x.svc.pinecone.io/describe_index_stats"
        );
    }

    #[test]
    fn test_empty_host_is_rejected() {
        let result = PineconeIndex::new(reqwest::Client::new(), "rag", "");
        assert!(matches!(result, Err(VectorIndexError::ConnectionError(_))));
    }

    #[test]
    fn test_upsert_request_body() {
        let record = ReviewRecord::new("Dr. A", "Math", 5, "Great!");
        let vectors = vec![EmbeddingVector::from_record(&record, vec![0.5, 0.25])];
        let body = serde_json::to_value(UpsertRequest {
            vectors: &vectors,
            namespace: "ns1",
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "vectors": [{
                    "id": "Dr. A",
                    "values": [0.5, 0.25],
                    "metadata": {"review": "Great!", "subject": "Math", "stars": 5}
                }],
                "namespace": "ns1"
            })
        );
    }

    #[test]
    fn test_parse_upsert_response() {
        let summary: UpsertSummary = serde_json::from_value(json!({"upsertedCount": 3})).unwrap();
        assert_eq!(summary.upserted_count, 3);
    }
}
