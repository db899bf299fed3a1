//! Dependency initialization and wiring for the review indexer.

use std::sync::Arc;
use tracing::info;

use crate::config::IndexerConfig;
use crate::IndexerError;
use review_indexer_ingest::{
    loader::ReviewLoader,
    orchestrator::Orchestrator,
    processor::EmbeddingProcessor,
    provisioner::{IndexProvisioner, ProvisionerConfig},
    writer::IndexWriter,
};
use review_indexer_repository::{OpenAiEmbedder, PineconeClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Build the remote clients and pipeline stages from `config`.
    ///
    /// No remote call is made here; credentials are first exercised when the
    /// orchestrator lists indexes.
    pub fn new(config: &IndexerConfig) -> Result<Self, IndexerError> {
        info!(
            controller_url = %config.controller_url,
            openai_base_url = %config.openai_base_url,
            index = %config.index_name,
            namespace = %config.namespace,
            "Initializing dependencies"
        );

        let pinecone = PineconeClient::new(&config.controller_url, &config.pinecone_api_key)
            .map_err(|e| IndexerError::setup(format!("Failed to create Pinecone client: {}", e)))?;

        let embedder = OpenAiEmbedder::new(
            &config.openai_base_url,
            &config.openai_api_key,
            config.embedding_model.clone(),
        )
        .map_err(|e| IndexerError::setup(format!("Failed to create OpenAI embedder: {}", e)))?;

        let provisioner = IndexProvisioner::with_config(
            Arc::new(pinecone),
            ProvisionerConfig {
                ready_timeout: config.ready_timeout,
                ..ProvisionerConfig::default()
            },
        );

        let orchestrator = Orchestrator::new(
            config.index_spec(),
            ReviewLoader::new(&config.reviews_path),
            provisioner,
            EmbeddingProcessor::new(Arc::new(embedder)),
            IndexWriter::new(config.namespace.clone()),
        );

        Ok(Self { orchestrator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IndexerConfig {
        IndexerConfig::from_lookup(|key: &str| match key {
            "PINECONE_API_KEY" => Some("pc-key".to_string()),
            "OPENAI_API_KEY" => Some("sk-key".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_wiring_makes_no_remote_calls() {
        assert!(Dependencies::new(&config()).is_ok());
    }

    #[test]
    fn test_bad_api_key_is_a_setup_error() {
        let mut config = config();
        config.openai_api_key = "sk\nkey".to_string();

        let result = Dependencies::new(&config);
        assert!(matches!(result, Err(IndexerError::SetupError(_))));
    }
}
