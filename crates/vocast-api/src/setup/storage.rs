//! Blob storage setup

use anyhow::{Context, Result};
use std::sync::Arc;
use vocast_core::Config;
use vocast_storage::{create_blob_storage, BlobStorage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn BlobStorage>> {
    let storage = create_blob_storage(config)
        .await
        .context("Failed to initialize blob storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Blob storage initialized"
    );
    Ok(storage)
}
