use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Not-found error for a game id.
    pub fn game_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Game",
            id: id.to_string(),
        }
    }

    /// HTTP status a handler answers with: 404 for a missing entity, 500 for
    /// any store failure.
    ///
    /// ```
    /// use gamehaven_core::storage::RepositoryError;
    ///
    /// assert_eq!(RepositoryError::game_not_found(7).status_code(), 404);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::ConnectionFailed(_) | Self::QueryFailed(_) | Self::InvalidData(_) => 500,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
