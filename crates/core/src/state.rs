// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory item collection and its load/error status.
//!
//! Anyone may read; only the sync core writes. Every write happens under a
//! single lock acquisition, so readers never observe half of a mutation.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SyncError;
use crate::item::{Item, ItemId};

/// Load/error status of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    /// A fetch-all is in flight.
    Loading,
    /// The last surfaced failure.
    Failed(SyncError),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn error(&self) -> Option<&SyncError> {
        match self {
            Status::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A consistent copy of the items and status taken under one lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub status: Status,
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    status: Status,
    /// In-flight operation count per item.
    pending: HashMap<ItemId, usize>,
}

/// The authoritative in-memory list.
#[derive(Debug, Default)]
pub struct CollectionState {
    inner: Mutex<Inner>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot {
            items: inner.items.clone(),
            status: inner.status.clone(),
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    pub fn status(&self) -> Status {
        self.lock().status.clone()
    }

    pub fn get(&self, id: &ItemId) -> Option<Item> {
        self.lock().items.iter().find(|i| &i.id == id).cloned()
    }

    /// Returns true while an operation on `id` is in flight.
    ///
    /// Presentation layers use this to disable the item's controls.
    pub fn is_pending(&self, id: &ItemId) -> bool {
        self.lock().pending.contains_key(id)
    }

    pub(crate) fn set_status(&self, status: Status) {
        self.lock().status = status;
    }

    /// Drop a surfaced failure; an in-flight load stays visible.
    pub(crate) fn clear_error(&self) {
        let mut inner = self.lock();
        if matches!(inner.status, Status::Failed(_)) {
            inner.status = Status::Idle;
        }
    }

    /// Replace the whole collection, dropping earlier duplicates of an id.
    ///
    /// Returns the number of duplicates dropped.
    pub(crate) fn replace_all(&self, items: Vec<Item>) -> usize {
        let total = items.len();
        let items = dedup_keep_last(items);
        let duplicates = total - items.len();
        self.lock().items = items;
        duplicates
    }

    /// Append a newly created item, or replace it in place if the id is
    /// already present.
    pub(crate) fn append(&self, item: Item) {
        let mut inner = self.lock();
        if let Some(slot) = inner.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        } else {
            inner.items.push(item);
        }
    }

    /// Replace the item with the same id. Missing ids are left missing.
    pub(crate) fn replace(&self, item: Item) -> bool {
        let mut inner = self.lock();
        match inner.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&self, id: &ItemId) -> bool {
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|i| &i.id != id);
        inner.items.len() != before
    }

    /// Remove every listed id in one step; returns how many were present.
    pub(crate) fn remove_all(&self, ids: &[ItemId]) -> usize {
        let ids: HashSet<&ItemId> = ids.iter().collect();
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|i| !ids.contains(&i.id));
        before - inner.items.len()
    }

    /// Mark `id` as having an operation in flight until the guard drops.
    pub(crate) fn track(&self, id: &ItemId) -> PendingGuard<'_> {
        *self.lock().pending.entry(id.clone()).or_insert(0) += 1;
        PendingGuard {
            state: self,
            id: id.clone(),
        }
    }

    fn untrack(&self, id: &ItemId) {
        let mut inner = self.lock();
        if let Some(count) = inner.pending.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                inner.pending.remove(id);
            }
        }
    }
}

/// Clears an item's pending mark when dropped.
pub(crate) struct PendingGuard<'a> {
    state: &'a CollectionState,
    id: ItemId,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.untrack(&self.id);
    }
}

fn dedup_keep_last(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut kept: Vec<Item> = items
        .into_iter()
        .rev()
        .filter(|i| seen.insert(i.id.clone()))
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
