use std::process;
use tracing::{error, info};

use review_indexer::{logging, Dependencies, IndexerConfig, IndexerError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenv::dotenv();
    logging::init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "Review indexer failed");
        eprintln!("Error: {}", e);

        let mut source = std::error::Error::source(&e);
        while let Some(err) = source {
            eprintln!("  Caused by: {}", err);
            source = err.source();
        }

        process::exit(1);
    }
}

async fn run() -> Result<(), IndexerError> {
    let config = IndexerConfig::from_env()?;
    info!(config = ?config, "Loaded configuration");

    let dependencies = Dependencies::new(&config)?;
    let summary = dependencies.orchestrator.run().await?;

    println!("{}", serde_json::to_string_pretty(&summary.stats)?);
    Ok(())
}
