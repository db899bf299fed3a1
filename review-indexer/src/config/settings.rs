//! Environment-driven configuration.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use review_indexer_repository::openai::{DEFAULT_BASE_URL, DEFAULT_EMBEDDING_MODEL};
use review_indexer_repository::pinecone::DEFAULT_CONTROLLER_URL;
use review_indexer_repository::IndexSpec;
use thiserror::Error;
use url::Url;

/// Default path of the reviews file.
const DEFAULT_REVIEWS_PATH: &str = "reviews.json";

/// Default vector index name.
const DEFAULT_INDEX_NAME: &str = "rag";

/// Default namespace vectors are written to.
const DEFAULT_NAMESPACE: &str = "ns1";

/// Default serverless cloud for a new index.
const DEFAULT_CLOUD: &str = "aws";

/// Default serverless region for a new index.
const DEFAULT_REGION: &str = "us-east-1";

/// Default time to wait for a new index to become ready.
const DEFAULT_READY_TIMEOUT_SECS: u64 = 300;

/// Errors that can occur while reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing required environment variable {0}")]
    MissingVar(String),

    /// A variable is set to an unusable value.
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl ConfigError {
    fn invalid(var: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var: var.to_string(),
            reason: reason.into(),
        }
    }
}

/// Everything a run needs, read once at startup.
#[derive(Clone)]
pub struct IndexerConfig {
    pub pinecone_api_key: String,
    pub openai_api_key: String,
    pub reviews_path: PathBuf,
    pub index_name: String,
    pub namespace: String,
    pub cloud: String,
    pub region: String,
    pub controller_url: String,
    pub openai_base_url: String,
    pub embedding_model: String,
    pub ready_timeout: Duration,
}

impl IndexerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `PINECONE_API_KEY`: Pinecone API key (required)
    /// - `OPENAI_API_KEY`: OpenAI API key (required)
    /// - `REVIEWS_PATH`: Reviews file (default: reviews.json)
    /// - `PINECONE_INDEX_NAME`: Index name (default: rag)
    /// - `PINECONE_NAMESPACE`: Namespace (default: ns1)
    /// - `PINECONE_CLOUD` / `PINECONE_REGION`: Placement of a new index (default: aws / us-east-1)
    /// - `PINECONE_CONTROLLER_URL`: Control-plane URL (default: https://api.pinecone.io)
    /// - `OPENAI_BASE_URL`: OpenAI API base URL (default: https://api.openai.com/v1)
    /// - `OPENAI_EMBEDDING_MODEL`: Embedding model (default: text-embedding-ada-002)
    /// - `INDEX_READY_TIMEOUT_SECS`: Wait limit for a new index (default: 300)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let pinecone_api_key = required("PINECONE_API_KEY")?;
        let openai_api_key = required("OPENAI_API_KEY")?;

        let controller_url = or_default("PINECONE_CONTROLLER_URL", DEFAULT_CONTROLLER_URL);
        validate_url("PINECONE_CONTROLLER_URL", &controller_url)?;

        let openai_base_url = or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL);
        validate_url("OPENAI_BASE_URL", &openai_base_url)?;

        let ready_timeout = match lookup("INDEX_READY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::invalid("INDEX_READY_TIMEOUT_SECS", e.to_string())
            })?,
            None => DEFAULT_READY_TIMEOUT_SECS,
        };

        let index_name = or_default("PINECONE_INDEX_NAME", DEFAULT_INDEX_NAME);
        if index_name.trim().is_empty() {
            return Err(ConfigError::invalid("PINECONE_INDEX_NAME", "must not be empty"));
        }

        Ok(Self {
            pinecone_api_key,
            openai_api_key,
            reviews_path: PathBuf::from(or_default("REVIEWS_PATH", DEFAULT_REVIEWS_PATH)),
            index_name,
            namespace: or_default("PINECONE_NAMESPACE", DEFAULT_NAMESPACE),
            cloud: or_default("PINECONE_CLOUD", DEFAULT_CLOUD),
            region: or_default("PINECONE_REGION", DEFAULT_REGION),
            controller_url,
            openai_base_url,
            embedding_model: or_default("OPENAI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            ready_timeout: Duration::from_secs(ready_timeout),
        })
    }

    /// The index the run writes to, as it would be created.
    pub fn index_spec(&self) -> IndexSpec {
        IndexSpec::new(&self.index_name).with_serverless(&self.cloud, &self.region)
    }
}

impl fmt::Debug for IndexerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexerConfig")
            .field("pinecone_api_key", &"<redacted>")
            .field("openai_api_key", &"<redacted>")
            .field("reviews_path", &self.reviews_path)
            .field("index_name", &self.index_name)
            .field("namespace", &self.namespace)
            .field("cloud", &self.cloud)
            .field("region", &self.region)
            .field("controller_url", &self.controller_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("embedding_model", &self.embedding_model)
            .field("ready_timeout", &self.ready_timeout)
            .finish()
    }
}

fn validate_url(var: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::invalid(var, format!("{}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", "pc-key"),
            ("OPENAI_API_KEY", "sk-key"),
        ]))
        .unwrap();

        assert_eq!(config.reviews_path, PathBuf::from("reviews.json"));
        assert_eq!(config.index_name, "rag");
        assert_eq!(config.namespace, "ns1");
        assert_eq!(config.controller_url, "https://api.pinecone.io");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.embedding_model, "text-embedding-ada-002");
        assert_eq!(config.ready_timeout, Duration::from_secs(300));

        let spec = config.index_spec();
        assert_eq!(spec.name, "rag");
        assert_eq!(spec.dimension, 1536);
        assert_eq!(spec.serverless.cloud, "aws");
        assert_eq!(spec.serverless.region, "us-east-1");
    }

    #[test]
    fn test_missing_pinecone_key() {
        let result = IndexerConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-key")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar("PINECONE_API_KEY".to_string())
        );
    }

    #[test]
    fn test_missing_openai_key() {
        let result = IndexerConfig::from_lookup(lookup(&[("PINECONE_API_KEY", "pc-key")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar("OPENAI_API_KEY".to_string())
        );
    }

    #[test]
    fn test_empty_key_is_passed_through() {
        let config = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", ""),
            ("OPENAI_API_KEY", "sk-key"),
        ]))
        .unwrap();
        assert_eq!(config.pinecone_api_key, "");
    }

    #[test]
    fn test_overrides() {
        let config = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", "pc-key"),
            ("OPENAI_API_KEY", "sk-key"),
            ("REVIEWS_PATH", "data/reviews.json"),
            ("PINECONE_INDEX_NAME", "professors"),
            ("PINECONE_NAMESPACE", "spring"),
            ("PINECONE_CLOUD", "gcp"),
            ("PINECONE_REGION", "us-central1"),
            ("INDEX_READY_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.reviews_path, PathBuf::from("data/reviews.json"));
        assert_eq!(config.namespace, "spring");
        assert_eq!(config.ready_timeout, Duration::from_secs(30));

        let spec = config.index_spec();
        assert_eq!(spec.name, "professors");
        assert_eq!(spec.serverless.cloud, "gcp");
        assert_eq!(spec.serverless.region, "us-central1");
    }

    #[test]
    fn test_invalid_timeout() {
        let result = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", "pc-key"),
            ("OPENAI_API_KEY", "sk-key"),
            ("INDEX_READY_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { ref var, .. }) if var == "INDEX_READY_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_url() {
        let result = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", "pc-key"),
            ("OPENAI_API_KEY", "sk-key"),
            ("OPENAI_BASE_URL", "not a url"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { ref var, .. }) if var == "OPENAI_BASE_URL"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = IndexerConfig::from_lookup(lookup(&[
            ("PINECONE_API_KEY", "pc-secret"),
            ("OPENAI_API_KEY", "sk-secret"),
        ]))
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("pc-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
