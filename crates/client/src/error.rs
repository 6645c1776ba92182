//! Client error types.

use std::sync::Arc;

use gamehaven_core::catalog::SchemaError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a rejected request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ServerError { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A failed fetch as seen through the query cache.
///
/// Cloneable so every caller that shared a request observes the same error.
#[derive(Error, Debug, Clone)]
#[error(transparent)]
pub struct FetchError(Arc<ClientError>);

impl FetchError {
    /// The underlying client error.
    pub fn inner(&self) -> &ClientError {
        &self.0
    }
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        Self(Arc::new(err))
    }
}
