//! In-memory stand-ins for the remote services, shared by the stage tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use review_indexer_repository::{
    EmbeddingError, EmbeddingProvider, IndexDescription, IndexSpec, IndexStatus, Metric,
    UpsertSummary, VectorIndex, VectorIndexAdmin, VectorIndexError,
};
use review_indexer_shared::{
    EmbeddingVector, IndexStats, NamespaceStats, EMBEDDING_DIMENSION,
};

pub fn description(name: &str, dimension: usize, ready: bool) -> IndexDescription {
    IndexDescription {
        name: name.to_string(),
        dimension: Some(dimension),
        metric: Metric::Cosine,
        host: format!("{}.mock.local", name),
        status: if ready {
            IndexStatus::ready()
        } else {
            IndexStatus::initializing()
        },
    }
}

/// Embedder that returns a constant vector per text and records every call.
pub struct MockEmbedder {
    pub texts: Mutex<Vec<String>>,
    fail_at: Option<usize>,
    dimension: usize,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            fail_at: None,
            dimension: EMBEDDING_DIMENSION,
        }
    }

    /// Fail the call at zero-based `position`.
    pub fn failing_at(position: usize) -> Self {
        Self {
            fail_at: Some(position),
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.texts.lock().unwrap().len()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    fn model(&self) -> &str {
        "mock-embedding"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let position = {
            let mut texts = self.texts.lock().unwrap();
            texts.push(text.to_string());
            texts.len() - 1
        };

        if self.fail_at == Some(position) {
            return Err(EmbeddingError::from_status(500, "Mock failure"));
        }

        Ok(vec![text.len() as f32; self.dimension])
    }
}

/// Vector index that keeps vectors in memory, keyed by namespace then id.
pub struct MockVectorIndex {
    pub namespaces: Mutex<BTreeMap<String, BTreeMap<String, EmbeddingVector>>>,
    pub upsert_calls: AtomicUsize,
    should_fail: bool,
}

impl MockVectorIndex {
    pub fn new() -> Self {
        Self {
            namespaces: Mutex::new(BTreeMap::new()),
            upsert_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn get(&self, namespace: &str, id: &str) -> Option<EmbeddingVector> {
        self.namespaces
            .lock()
            .unwrap()
            .get(namespace)
            .and_then(|ns| ns.get(id).cloned())
    }

    pub fn count(&self, namespace: &str) -> usize {
        self.namespaces
            .lock()
            .unwrap()
            .get(namespace)
            .map(|ns| ns.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl VectorIndex for MockVectorIndex {
    async fn upsert(
        &self,
        vectors: &[EmbeddingVector],
        namespace: &str,
    ) -> Result<UpsertSummary, VectorIndexError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(VectorIndexError::from_status(500, "Mock failure"));
        }

        let mut namespaces = self.namespaces.lock().unwrap();
        let entries = namespaces.entry(namespace.to_string()).or_default();
        for vector in vectors {
            entries.insert(vector.id.clone(), vector.clone());
        }

        Ok(UpsertSummary {
            upserted_count: vectors.len() as u64,
        })
    }

    async fn describe_index_stats(&self) -> Result<IndexStats, VectorIndexError> {
        let namespaces = self.namespaces.lock().unwrap();
        let per_namespace: BTreeMap<String, NamespaceStats> = namespaces
            .iter()
            .map(|(name, entries)| {
                (
                    name.clone(),
                    NamespaceStats {
                        vector_count: entries.len() as u64,
                    },
                )
            })
            .collect();
        let total = per_namespace.values().map(|ns| ns.vector_count).sum();

        Ok(IndexStats {
            namespaces: per_namespace,
            dimension: EMBEDDING_DIMENSION,
            index_fullness: 0.0,
            total_vector_count: total,
        })
    }
}

/// Control plane that tracks indexes in memory.
///
/// A created index reports not-ready until it has been described
/// `ready_after` times.
pub struct MockAdmin {
    pub indexes: Mutex<Vec<IndexDescription>>,
    pub created: Mutex<Vec<IndexSpec>>,
    pub describe_calls: AtomicUsize,
    pub index: Arc<MockVectorIndex>,
    ready_after: usize,
    fail_list: bool,
}

impl MockAdmin {
    pub fn new(index: Arc<MockVectorIndex>) -> Self {
        Self {
            indexes: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            describe_calls: AtomicUsize::new(0),
            index,
            ready_after: 0,
            fail_list: false,
        }
    }

    pub fn with_existing(self, description: IndexDescription) -> Self {
        self.indexes.lock().unwrap().push(description);
        self
    }

    pub fn ready_after(mut self, describes: usize) -> Self {
        self.ready_after = describes;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

#[async_trait]
impl VectorIndexAdmin for MockAdmin {
    async fn list_indexes(&self) -> Result<Vec<IndexDescription>, VectorIndexError> {
        if self.fail_list {
            return Err(VectorIndexError::from_status(401, "Invalid API key"));
        }
        Ok(self.indexes.lock().unwrap().clone())
    }

    async fn create_index(&self, spec: &IndexSpec) -> Result<IndexDescription, VectorIndexError> {
        self.created.lock().unwrap().push(spec.clone());
        let created = description(&spec.name, spec.dimension, self.ready_after == 0);
        self.indexes.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn describe_index(&self, name: &str) -> Result<IndexDescription, VectorIndexError> {
        let calls = self.describe_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut indexes = self.indexes.lock().unwrap();
        let found = indexes
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| VectorIndexError::not_found(name))?;

        if calls >= self.ready_after {
            found.status = IndexStatus::ready();
        }
        Ok(found.clone())
    }

    fn connect(
        &self,
        _description: &IndexDescription,
    ) -> Result<Arc<dyn VectorIndex>, VectorIndexError> {
        let index: Arc<dyn VectorIndex> = self.index.clone();
        Ok(index)
    }
}
