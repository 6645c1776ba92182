use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value that does not match the catalog schema.
///
/// Only the first failing field is reported. `field` is the dotted path of
/// the offending value (`"title"`, `"2.createdAt"`) or empty when the value
/// itself has the wrong shape.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} at '{field}'")]
pub struct SchemaError {
    pub message: String,
    pub field: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Prefixes the field path, used when validating nested values.
    pub fn nested_in(mut self, parent: impl std::fmt::Display) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}

/// Errors that can occur when parsing list query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryParamsError {
    #[error("Query parameter '{0}' was given more than once")]
    Repeated(String),
    #[error("Query parameter '{0}' must be a plain string")]
    Nested(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::new("Required", "title");
        assert_eq!(error.to_string(), "Required at 'title'");
    }

    #[test]
    fn test_schema_error_nested_path() {
        let error = SchemaError::new("Required", "createdAt").nested_in(2);
        assert_eq!(error.field, "2.createdAt");

        let error = SchemaError::new("Expected object, received string", "").nested_in(0);
        assert_eq!(error.field, "0");
    }

    #[test]
    fn test_query_params_error_display() {
        assert_eq!(
            QueryParamsError::Repeated("search".to_string()).to_string(),
            "Query parameter 'search' was given more than once"
        );
        assert_eq!(
            QueryParamsError::Nested("category".to_string()).to_string(),
            "Query parameter 'category' must be a plain string"
        );
    }
}
