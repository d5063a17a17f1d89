//! Application setup and initialization
//!
//! Initialization logic lives here rather than in main.rs so tests can
//! assemble pieces of it over in-memory backends.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use vocast_core::Config;
use vocast_db::PgVoiceoverStore;

use crate::state::AppState;

/// Initialize the entire application: config validation, database pool and
/// migrations, blob storage, state, and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let blob_storage = storage::setup_storage(&config).await?;
    let voiceovers = Arc::new(PgVoiceoverStore::new(pool));

    let state = Arc::new(AppState::new(config.clone(), blob_storage, voiceovers));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
