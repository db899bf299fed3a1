//! Configuration and dependency wiring for the review indexer.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{ConfigError, IndexerConfig};
