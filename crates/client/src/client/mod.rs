//! HTTP client for the gamehaven API.

pub mod games;
pub mod health;

use async_trait::async_trait;
use serde_json::Value;

use gamehaven_core::catalog::{Game, GameFilter, NewGame, SchemaError};

use crate::error::{ClientError, Result};

/// The catalog operations the query cache needs from a backend.
///
/// Implemented by [`GameHavenClient`] over HTTP; tests substitute fakes.
#[async_trait]
pub trait GameApi: Send + Sync + 'static {
    /// List games matching the filter, in catalog order.
    async fn list_games(&self, filter: &GameFilter) -> Result<Vec<Game>>;

    /// Get a game by id. A missing game is `Ok(None)`.
    async fn get_game(&self, id: i64) -> Result<Option<Game>>;

    /// Create a game and return the stored record.
    async fn create_game(&self, game: &NewGame) -> Result<Game>;
}

/// HTTP client for the gamehaven API.
#[derive(Debug, Clone)]
pub struct GameHavenClient {
    client: reqwest::Client,
    base_url: String,
}

impl GameHavenClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read a success body and validate it, or turn the status into an error.
    async fn handle_response<T>(
        &self,
        response: reqwest::Response,
        validate: impl FnOnce(&Value) -> std::result::Result<T, SchemaError>,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body: Value = response.json().await?;
            Ok(validate(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
