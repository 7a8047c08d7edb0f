//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! [`Todo`]. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use todos_core::storage::RepositoryError;
use todos_core::Todo;

/// Name of the table's partition key attribute.
pub const PARTITION_KEY: &str = "id";

/// Convert a Todo to a DynamoDB item.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(PARTITION_KEY.to_string(), AttributeValue::S(todo.id.clone()));
    item.insert("title".to_string(), AttributeValue::S(todo.title.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(todo.description.clone()),
    );
    item.insert(
        "completed".to_string(),
        AttributeValue::Bool(todo.completed),
    );
    item.insert(
        "created_at".to_string(),
        AttributeValue::S(format_datetime(&todo.created_at)),
    );
    item.insert(
        "updated_at".to_string(),
        AttributeValue::S(format_datetime(&todo.updated_at)),
    );

    item
}

/// Convert a DynamoDB item to a Todo.
///
/// A missing `description` reads as empty; every other attribute is
/// required.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: get_string(item, PARTITION_KEY)?,
        title: get_string(item, "title")?,
        description: get_optional_string(item, "description").unwrap_or_default(),
        completed: get_bool(item, "completed")?,
        created_at: get_datetime(item, "created_at")?,
        updated_at: get_datetime(item, "updated_at")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// RFC 3339 with nanoseconds, so stored timestamps round-trip exactly.
fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    get_optional_string(item, key)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
