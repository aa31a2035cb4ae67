// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod rm;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod toggle;

use td_core::{ItemId, ItemStore, Outcome, SkipReason, TodoSync};

use crate::config::{RetryConfig, Settings};
use crate::error::{Error, Result};
use crate::sync::Backend;

/// Helper to open the configured backend.
pub fn open(settings: &Settings) -> Result<TodoSync<Backend>> {
    Ok(TodoSync::new(Backend::open(settings)?))
}

/// Fetch the collection, retrying failures with exponential backoff.
pub async fn load<S: ItemStore>(sync: &TodoSync<S>, retry: &RetryConfig) -> Outcome {
    let mut outcome = sync.fetch_all().await;
    let mut attempt = 0;

    while outcome.is_failed() && attempt < retry.max_retries {
        attempt += 1;
        let delay = retry.delay(attempt);
        tracing::info!(attempt, ?delay, "retrying load");
        tokio::time::sleep(delay).await;
        outcome = sync.retry().await;
    }
    outcome
}

/// Load before a mutation. Mutating a list that could not be read is refused.
pub async fn load_for_update<S: ItemStore>(sync: &TodoSync<S>, retry: &RetryConfig) -> Result<()> {
    match load(sync, retry).await {
        Outcome::Failed(e) => Err(Error::Sync(e)),
        _ => Ok(()),
    }
}

/// Find an item by exact id or unique id prefix.
pub fn resolve_id<S: ItemStore>(sync: &TodoSync<S>, raw: &ItemId) -> Result<ItemId> {
    let items = sync.state().items();
    if items.iter().any(|i| i.id == *raw) {
        return Ok(raw.clone());
    }

    let mut matches = items
        .into_iter()
        .filter(|i| i.id.as_str().starts_with(raw.as_str()))
        .map(|i| i.id);
    match (matches.next(), matches.count()) {
        (Some(id), 0) => Ok(id),
        (Some(_), rest) => Err(Error::AmbiguousId {
            prefix: raw.to_string(),
            matches: rest + 1,
        }),
        (None, _) => Err(Error::ItemNotFound(raw.to_string())),
    }
}

/// Convert the outcome of a mutation into a command result.
///
/// Returns `Ok(false)` when there was nothing to do. Rejected input is a
/// quiet no-op, like a form that refuses to submit.
pub fn check(outcome: Outcome) -> Result<bool> {
    match outcome {
        Outcome::Applied => Ok(true),
        Outcome::Failed(e) => Err(Error::Sync(e)),
        Outcome::Skipped(SkipReason::UnknownItem(id)) => Err(Error::ItemNotFound(id.to_string())),
        Outcome::Skipped(
            SkipReason::Invalid(_) | SkipReason::NothingToClear | SkipReason::NoError,
        ) => Ok(false),
    }
}
