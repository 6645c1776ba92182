//! JSON output formatting.

use serde::Serialize;

/// Format a value as compact JSON, one document per line.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
