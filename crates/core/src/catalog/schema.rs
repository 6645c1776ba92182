//! The catalog schema, asserted by both sides of the wire.
//!
//! The server validates request bodies with [`validate_new_game`]; the client
//! validates response bodies with [`validate_game`] and
//! [`validate_game_list`]. Validation stops at the first failing field, in
//! declaration order. Unknown keys are ignored.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::error::SchemaError;
use super::types::{Game, NewGame};

type Object = Map<String, Value>;

/// Validates an insertion candidate.
///
/// `isFeatured` may be missing or null, both meaning `false`. The title must
/// contain something other than whitespace.
pub fn validate_new_game(value: &Value) -> Result<NewGame, SchemaError> {
    let object = expect_object(value)?;

    let title = required_string(object, "title")?;
    if title.trim().is_empty() {
        return Err(SchemaError::new("Title must not be empty", "title"));
    }

    Ok(NewGame {
        title,
        description: required_string(object, "description")?,
        url: required_string(object, "url")?,
        thumbnail: required_string(object, "thumbnail")?,
        game_type: required_string(object, "type")?,
        category: required_string(object, "category")?,
        is_featured: optional_bool(object, "isFeatured")?.unwrap_or(false),
    })
}

/// Validates a stored game as returned by the server.
pub fn validate_game(value: &Value) -> Result<Game, SchemaError> {
    let object = expect_object(value)?;

    Ok(Game {
        id: required_integer(object, "id")?,
        title: required_string(object, "title")?,
        description: required_string(object, "description")?,
        url: required_string(object, "url")?,
        thumbnail: required_string(object, "thumbnail")?,
        game_type: required_string(object, "type")?,
        category: required_string(object, "category")?,
        is_featured: required_bool(object, "isFeatured")?,
        created_at: required_timestamp(object, "createdAt")?,
    })
}

/// Validates a list response; failures report the element index in the path.
pub fn validate_game_list(value: &Value) -> Result<Vec<Game>, SchemaError> {
    let Value::Array(items) = value else {
        return Err(type_mismatch("array", value, ""));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_game(item).map_err(|e| e.nested_in(index)))
        .collect()
}

fn expect_object(value: &Value) -> Result<&Object, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch("object", value, ""))
}

fn required<'a>(object: &'a Object, field: &str) -> Result<&'a Value, SchemaError> {
    object
        .get(field)
        .ok_or_else(|| SchemaError::new("Required", field))
}

fn required_string(object: &Object, field: &str) -> Result<String, SchemaError> {
    match required(object, field)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_mismatch("string", other, field)),
    }
}

fn required_bool(object: &Object, field: &str) -> Result<bool, SchemaError> {
    match required(object, field)? {
        Value::Bool(b) => Ok(*b),
        other => Err(type_mismatch("boolean", other, field)),
    }
}

fn optional_bool(object: &Object, field: &str) -> Result<Option<bool>, SchemaError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(type_mismatch("boolean", other, field)),
    }
}

fn required_integer(object: &Object, field: &str) -> Result<i64, SchemaError> {
    match required(object, field)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| SchemaError::new("Expected integer, received float", field)),
        other => Err(type_mismatch("number", other, field)),
    }
}

fn required_timestamp(object: &Object, field: &str) -> Result<DateTime<Utc>, SchemaError> {
    match required(object, field)? {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| SchemaError::new("Invalid datetime", field)),
        other => Err(type_mismatch("string", other, field)),
    }
}

fn type_mismatch(expected: &str, received: &Value, field: &str) -> SchemaError {
    SchemaError::new(
        format!("Expected {expected}, received {}", json_type_name(received)),
        field,
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
