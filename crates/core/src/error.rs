// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for td-core operations.
//!
//! [`SyncError`] is the tagged failure kind written into the collection
//! status. Its `Display` output is the only place human-readable failure text
//! is produced.

use thiserror::Error;

/// Input rejected before any mutation is attempted.
///
/// These never reach the error status; the core reports them as skipped
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text cannot be empty")]
    Empty,

    #[error("text too long ({actual} chars, max {max})")]
    TooLong { actual: usize, max: usize },

    #[error("text is unchanged")]
    Unchanged,
}

/// A failure reported by, or on the way to, the item store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// No response was received at all.
    #[error("network error: {message}\n  hint: this is likely a CORS or connectivity issue")]
    Transport { message: String },

    /// The store answered with a non-success status.
    #[error("{}", collaborator_message(*status, reason, body.as_deref()))]
    Rejected {
        status: u16,
        reason: String,
        body: Option<String>,
    },

    /// Some deletes of a bulk clear failed; the successful ones were applied.
    #[error("could not clear {failed} of {} completed items", failed + succeeded)]
    PartialBulkFailure { failed: usize, succeeded: usize },

    /// A success response whose body could not be understood.
    #[error("unexpected response: {message}")]
    Decode { message: String },

    /// The local store could not persist or read its file.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl SyncError {
    /// Shorthand for a rejection without a response body.
    pub fn rejected(status: u16, reason: impl Into<String>) -> Self {
        SyncError::Rejected {
            status,
            reason: reason.into(),
            body: None,
        }
    }

    /// HTTP status carried by a rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Builds the message for a rejected request.
///
/// Most to least specific: an `error` or `message` field of a JSON body, the
/// raw body text, then `HTTP <status>: <reason>`. Well-known statuses get a
/// hint line but keep the underlying detail.
pub fn collaborator_message(status: u16, reason: &str, body: Option<&str>) -> String {
    let detail = body
        .and_then(body_message)
        .unwrap_or_else(|| format!("HTTP {}: {}", status, reason));

    match status {
        403 => format!(
            "access forbidden: {}\n  hint: check the endpoint's CORS and access configuration",
            detail
        ),
        404 => format!(
            "endpoint not found: {}\n  hint: verify the API base URL",
            detail
        ),
        500..=599 => format!("server error: {}", detail),
        _ => detail,
    }
}

fn body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(trimmed) {
        for key in ["error", "message"] {
            if let Some(serde_json::Value::String(s)) = map.get(key) {
                if !s.is_empty() {
                    return Some(s.clone());
                }
            }
        }
    }

    Some(trimmed.to_string())
}

/// All possible errors that can occur in td-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid filter: '{0}'\n  hint: valid filters are: all, active, completed")]
    InvalidFilter(String),

    #[error("item id cannot be empty")]
    EmptyId,

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for td-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
