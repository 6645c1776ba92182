//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store is held as a trait object so handlers do not
//! depend on the backend selected at build time.

use std::sync::Arc;

use gamehaven_core::storage::GameRepository;

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The catalog store.
    pub games: Arc<dyn GameRepository>,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    /// Opens the SQLite database at `config.sqlite_path`, creating it if needed.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo = crate::storage::SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Self::new(Arc::new(repo)))
    }

    /// Keeps the catalog in memory; built without the `sqlite` feature.
    #[cfg(not(feature = "sqlite"))]
    pub async fn from_config(_config: &Config) -> anyhow::Result<Self> {
        tracing::info!("Using in-memory storage");
        Ok(Self::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
