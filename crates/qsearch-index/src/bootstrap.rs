//! Startup provisioning of the search collection

use qsearch_core::IndexSchema;
use tracing::info;

use crate::{client::IndexClient, error::Result};

/// What the bootstrap had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Collection was already provisioned; nothing was sent
    AlreadyExists,
    /// Collection was missing and has been created
    Created,
}

/// Make sure `schema` exists in the backend, creating it if absent.
///
/// Runs once before the listener binds. "Not ready" answers are retried by the
/// client's transport; an `Err` here means retries ran out or the backend
/// refused, and startup must stop.
pub async fn ensure_index_exists(client: &dyn IndexClient, schema: &IndexSchema) -> Result<BootstrapOutcome> {
    if client.collection_exists(&schema.name).await? {
        info!("Collection '{}' already exists", schema.name);
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    info!("Creating collection '{}'", schema.name);
    client.create_collection(schema).await?;
    info!("Collection '{}' created", schema.name);

    Ok(BootstrapOutcome::Created)
}
