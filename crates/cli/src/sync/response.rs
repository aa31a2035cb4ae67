// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of todo service response bodies.

use serde_json::Value;
use td_core::{Item, SyncError};

/// Decodes a `GET /todos` body.
///
/// Accepts `{"todos": [...]}` or a bare array. Any other well-formed shape
/// is treated as an empty list. Elements that are not items are dropped.
pub fn decode_list(body: &str) -> Result<Vec<Item>, SyncError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body).map_err(|e| SyncError::Decode {
        message: format!("invalid JSON in item list: {}", e),
    })?;

    let elements = match value {
        Value::Array(elements) => elements,
        Value::Object(mut map) => match map.remove("todos") {
            Some(Value::Array(elements)) => elements,
            _ => {
                tracing::warn!("item list has no 'todos' array; treating as empty");
                return Ok(Vec::new());
            }
        },
        other => {
            tracing::warn!(kind = value_kind(&other), "unexpected item list shape; treating as empty");
            return Ok(Vec::new());
        }
    };

    let mut items = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Item>(element) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!(index, error = %e, "dropping malformed item"),
        }
    }
    Ok(items)
}

/// Decodes the single item returned by create and update.
pub fn decode_item(body: &str) -> Result<Item, SyncError> {
    serde_json::from_str(body).map_err(|e| SyncError::Decode {
        message: format!("invalid item: {}", e),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
