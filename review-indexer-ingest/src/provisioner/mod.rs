//! Provisioner module for the review indexer ingest.
//!
//! Makes sure the target index exists, is ready and has the right shape,
//! then hands back a data-plane handle to it.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::errors::IngestError;
use review_indexer_repository::{IndexDescription, IndexSpec, VectorIndex, VectorIndexAdmin};

/// Configuration for the index provisioner.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// Delay between readiness checks.
    pub poll_interval: Duration,
    /// How long to wait for a new index to become ready.
    pub ready_timeout: Duration,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            ready_timeout: Duration::from_secs(300),
        }
    }
}

/// A ready index and a handle for writing to it.
pub struct ProvisionedIndex {
    pub description: IndexDescription,
    /// Whether this run created the index.
    pub created: bool,
    pub index: Arc<dyn VectorIndex>,
}

/// Provisioner that ensures the target index exists.
///
/// Not safe against concurrent runs: two runs can both see the index missing
/// and both try to create it. The second create fails.
pub struct IndexProvisioner {
    admin: Arc<dyn VectorIndexAdmin>,
    config: ProvisionerConfig,
}

impl IndexProvisioner {
    /// Create a new provisioner with default configuration.
    pub fn new(admin: Arc<dyn VectorIndexAdmin>) -> Self {
        Self {
            admin,
            config: ProvisionerConfig::default(),
        }
    }

    /// Create a new provisioner with custom configuration.
    pub fn with_config(admin: Arc<dyn VectorIndexAdmin>, config: ProvisionerConfig) -> Self {
        Self { admin, config }
    }

    /// Ensure the index described by `spec` exists and open it.
    ///
    /// Lists indexes by name and issues a single create call only when the
    /// name is absent. A freshly created (or otherwise not yet ready) index is
    /// polled until it reports ready.
    #[instrument(skip(self, spec), fields(index = %spec.name))]
    pub async fn provision(&self, spec: &IndexSpec) -> Result<ProvisionedIndex, IngestError> {
        let existing = self
            .admin
            .list_indexes()
            .await
            .map_err(IngestError::provision)?
            .into_iter()
            .find(|index| index.name == spec.name);

        let (mut description, created) = match existing {
            Some(description) => {
                info!("Using existing index");
                (description, false)
            }
            None => {
                info!(
                    dimension = spec.dimension,
                    metric = ?spec.metric,
                    cloud = %spec.serverless.cloud,
                    region = %spec.serverless.region,
                    "Index not found, creating"
                );
                let description = self
                    .admin
                    .create_index(spec)
                    .await
                    .map_err(IngestError::provision)?;
                (description, true)
            }
        };

        if description.dimension != Some(spec.dimension) {
            return Err(IngestError::SchemaMismatch {
                index: spec.name.clone(),
                expected: spec.dimension,
                actual: description.dimension,
            });
        }

        if !description.status.ready {
            description = self.wait_until_ready(&spec.name).await?;
        }

        let index = self
            .admin
            .connect(&description)
            .map_err(IngestError::provision)?;

        Ok(ProvisionedIndex {
            description,
            created,
            index,
        })
    }

    /// Poll the index description until it reports ready or the timeout passes.
    async fn wait_until_ready(&self, name: &str) -> Result<IndexDescription, IngestError> {
        let started = Instant::now();

        loop {
            let description = self
                .admin
                .describe_index(name)
                .await
                .map_err(IngestError::provision)?;

            if description.status.ready {
                info!(waited_ms = started.elapsed().as_millis() as u64, "Index is ready");
                return Ok(description);
            }

            if started.elapsed() >= self.config.ready_timeout {
                warn!(state = %description.status.state, "Gave up waiting for index");
                return Err(IngestError::IndexNotReady {
                    index: name.to_string(),
                    waited_secs: started.elapsed().as_secs(),
                });
            }

            debug!(state = %description.status.state, "Index not ready yet");
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
