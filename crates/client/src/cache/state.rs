use crate::error::FetchError;

/// What a watcher currently knows about a query.
#[derive(Debug, Clone)]
pub enum QueryState<T> {
    /// The fetch has not resolved yet.
    Loading,
    /// The fetch succeeded.
    Ready(T),
    /// The fetch failed; reported once, never retried.
    Failed(FetchError),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for QueryState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => QueryState::Ready(value),
            Err(err) => QueryState::Failed(err),
        }
    }
}
