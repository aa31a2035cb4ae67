// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization core.
//!
//! Every user-facing operation follows the same shape:
//!
//! 1. Validate input; invalid input is a silent no-op.
//! 2. Clear the previous error (fetch-all also marks the state loading).
//! 3. Make one store call.
//! 4. On success, write the store's answer into the collection.
//! 5. On failure, record the error and leave the collection alone.
//!
//! Updates are confirmed, never optimistic: local state changes only after
//! the store has answered. Operations may overlap and complete in any
//! order; each one writes only the items it owns, and a response for an
//! item that has since disappeared is dropped.

use futures_util::future::join_all;

use crate::error::{SyncError, ValidationError};
use crate::item::{Item, ItemId};
use crate::state::{CollectionState, Status};
use crate::store::ItemStore;
use crate::validate::{validate_rename, validate_text};

/// Why an operation did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Invalid(ValidationError),
    /// The id is not (or no longer) in the collection.
    UnknownItem(ItemId),
    NothingToClear,
    /// Retry was requested without a recorded error.
    NoError,
}

/// Result of one operation, mirroring what was written to the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
    Failed(SyncError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Owns the collection state and the only write path into it.
pub struct TodoSync<S: ItemStore> {
    store: S,
    state: CollectionState,
}

impl<S: ItemStore> TodoSync<S> {
    pub fn new(store: S) -> Self {
        TodoSync {
            store,
            state: CollectionState::new(),
        }
    }

    /// Read access for presentation layers.
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the collection with the store's full list.
    pub async fn fetch_all(&self) -> Outcome {
        self.state.set_status(Status::Loading);

        match self.store.list_all().await {
            Ok(items) => {
                let count = items.len();
                let duplicates = self.state.replace_all(items);
                if duplicates > 0 {
                    tracing::warn!(duplicates, "store returned duplicate ids; kept last occurrence");
                }
                self.state.set_status(Status::Idle);
                tracing::info!(count, "fetched items");
                Outcome::Applied
            }
            Err(e) => self.fail("fetch_all", e),
        }
    }

    /// Re-run [`fetch_all`](Self::fetch_all) if an error is recorded.
    pub async fn retry(&self) -> Outcome {
        if self.state.status().error().is_none() {
            return skip("retry", SkipReason::NoError);
        }
        self.fetch_all().await
    }

    pub async fn add(&self, text: &str) -> Outcome {
        self.add_item(text).await.0
    }

    /// Like [`add`](Self::add), also returning the item the store created.
    pub async fn add_item(&self, text: &str) -> (Outcome, Option<Item>) {
        let text = match validate_text(text) {
            Ok(t) => t,
            Err(e) => return (skip("add", SkipReason::Invalid(e)), None),
        };
        self.state.clear_error();

        match self.store.create(&text).await {
            Ok(item) => {
                tracing::info!(id = %item.id, "created item");
                self.state.append(item.clone());
                (Outcome::Applied, Some(item))
            }
            Err(e) => (self.fail("add", e), None),
        }
    }

    /// Flip the completed flag, taking the new state from the store's answer.
    pub async fn toggle(&self, id: &ItemId) -> Outcome {
        let Some(current) = self.state.get(id) else {
            return skip("toggle", SkipReason::UnknownItem(id.clone()));
        };
        self.state.clear_error();
        let _pending = self.state.track(id);

        match self.store.set_completed(id, !current.completed).await {
            Ok(updated) => self.apply_update("toggle", updated),
            Err(e) => self.fail("toggle", e),
        }
    }

    pub async fn rename(&self, id: &ItemId, text: &str) -> Outcome {
        let Some(current) = self.state.get(id) else {
            return skip("rename", SkipReason::UnknownItem(id.clone()));
        };
        let text = match validate_rename(&current.text, text) {
            Ok(t) => t,
            Err(e) => return skip("rename", SkipReason::Invalid(e)),
        };
        self.state.clear_error();
        let _pending = self.state.track(id);

        match self.store.rename(id, &text).await {
            Ok(updated) => self.apply_update("rename", updated),
            Err(e) => self.fail("rename", e),
        }
    }

    pub async fn delete(&self, id: &ItemId) -> Outcome {
        if self.state.get(id).is_none() {
            return skip("delete", SkipReason::UnknownItem(id.clone()));
        }
        self.state.clear_error();
        let _pending = self.state.track(id);

        match self.store.delete(id).await {
            Ok(()) => {
                self.state.remove(id);
                tracing::info!(id = %id, "deleted item");
                Outcome::Applied
            }
            Err(e) => self.fail("delete", e),
        }
    }

    /// Delete every completed item with one concurrent delete each.
    ///
    /// All deletes run to completion; only the ones that succeeded are
    /// removed, and any failures are recorded as one aggregate error.
    pub async fn clear_completed(&self) -> Outcome {
        let completed: Vec<ItemId> = self
            .state
            .items()
            .into_iter()
            .filter(|i| i.completed)
            .map(|i| i.id)
            .collect();
        if completed.is_empty() {
            return skip("clear_completed", SkipReason::NothingToClear);
        }
        self.state.clear_error();
        let _pending: Vec<_> = completed.iter().map(|id| self.state.track(id)).collect();

        let results = join_all(completed.iter().map(|id| self.store.delete(id))).await;

        let mut removed = Vec::with_capacity(completed.len());
        let mut failed = 0;
        for (id, result) in completed.iter().zip(results) {
            match result {
                Ok(()) => removed.push(id.clone()),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(id = %id, error = %e, "failed to delete completed item");
                }
            }
        }
        self.state.remove_all(&removed);
        tracing::info!(removed = removed.len(), failed, "cleared completed items");

        if failed > 0 {
            return self.fail(
                "clear_completed",
                SyncError::PartialBulkFailure {
                    failed,
                    succeeded: removed.len(),
                },
            );
        }
        Outcome::Applied
    }

    fn apply_update(&self, op: &'static str, item: Item) -> Outcome {
        let id = item.id.clone();
        if self.state.replace(item) {
            tracing::info!(op, id = %id, "updated item");
            Outcome::Applied
        } else {
            // Deleted while the request was in flight.
            tracing::debug!(op, id = %id, "dropping response for missing item");
            Outcome::Skipped(SkipReason::UnknownItem(id))
        }
    }

    fn fail(&self, op: &'static str, error: SyncError) -> Outcome {
        tracing::debug!(op, error = %error, "operation failed");
        self.state.set_status(Status::Failed(error.clone()));
        Outcome::Failed(error)
    }
}

fn skip(op: &'static str, reason: SkipReason) -> Outcome {
    tracing::debug!(op, ?reason, "skipped");
    Outcome::Skipped(reason)
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
