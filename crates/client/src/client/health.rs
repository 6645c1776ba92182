//! Health check operations.

use serde::{Deserialize, Serialize};

use super::GameHavenClient;
use crate::error::{ClientError, Result};

/// Server health as reported by `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub games: usize,
}

impl GameHavenClient {
    /// Check server and store health.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Liveness probe; true when the server answered 200.
    pub async fn livez(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }
}
