//! qsearch API server binary

use std::sync::Arc;

use anyhow::Context;
use qsearch_api::{ApiServer, AppState};
use qsearch_config::ConfigManager;
use qsearch_core::IndexSchema;
use qsearch_index::{ensure_index_exists, IndexClient, TypesenseClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigManager::new()
        .load()
        .context("Failed to load configuration")?;

    let endpoint = config.typesense.endpoint()?;
    let api_key = config.typesense.api_key()?;
    tracing::info!(endpoint = %endpoint, environment = ?config.server.environment, "Starting qsearch API");

    let client = TypesenseClient::connect(endpoint, api_key, config.http.to_http_config())
        .context("Failed to build Typesense client")?
        .with_search_deadline(config.typesense.search_deadline());
    let index: Arc<dyn IndexClient> = Arc::new(client);

    // Nothing is served until the collection exists
    let schema = IndexSchema::questions();
    ensure_index_exists(index.as_ref(), &schema)
        .await
        .with_context(|| format!("Failed to provision collection '{}'", schema.name))?;

    let server = ApiServer::new(AppState::new(index), &config.server);
    server.run().await.context("Server error")?;

    Ok(())
}
