// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use td_core::SyncError;
use thiserror::Error;

/// All possible errors that can occur in the tdrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("todo not found: {0}\n  hint: run 'td list' to see current ids")]
    ItemNotFound(String),

    #[error("ambiguous id '{prefix}' matches {matches} todos\n  hint: use more characters of the id")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("invalid backend: '{0}'\n  hint: valid backends are: remote, local")]
    InvalidBackend(String),

    #[error("invalid deployment type: '{0}'\n  hint: valid types are: api-gateway, lambda-url")]
    InvalidDeployment(String),

    #[error("invalid environment: '{0}'\n  hint: valid environments are: development, production, lambda")]
    InvalidProfile(String),

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no state directory available\n  hint: pass --state-dir or set TD_STATE_DIR")]
    NoStateDir,

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Core(td_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tdrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<td_core::Error> for Error {
    fn from(e: td_core::Error) -> Self {
        match e {
            td_core::Error::Sync(e) => Error::Sync(e),
            td_core::Error::Io(e) => Error::Io(e),
            td_core::Error::Json(e) => Error::Json(e),
            other => Error::Core(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
