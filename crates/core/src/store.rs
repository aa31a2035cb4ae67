// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Item store abstraction.
//!
//! Provides a trait-based seam between the sync core and whatever persists
//! items:
//! - The HTTP client for the remote todo service
//! - [`LocalStore`](crate::local::LocalStore) for the local-only mode
//! - Mock stores for unit testing
//!
//! Implementations hold no per-call state, so every method takes `&self`
//! and calls may overlap.

use std::future::Future;
use std::pin::Pin;

use crate::error::SyncError;
use crate::item::{Item, ItemId};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, SyncError>;

/// Boxed future returned by [`ItemStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// One remote call per method.
pub trait ItemStore: Send + Sync {
    /// Fetch every item, in store order.
    fn list_all(&self) -> StoreFuture<'_, Vec<Item>>;

    /// Create an item from already-validated text.
    ///
    /// The returned item, including its id and timestamps, is authoritative.
    fn create<'a>(&'a self, text: &'a str) -> StoreFuture<'a, Item>;

    /// Set the completed flag and return the updated item.
    fn set_completed<'a>(&'a self, id: &'a ItemId, completed: bool) -> StoreFuture<'a, Item>;

    /// Replace the text and return the updated item.
    fn rename<'a>(&'a self, id: &'a ItemId, text: &'a str) -> StoreFuture<'a, Item>;

    /// Delete one item.
    fn delete<'a>(&'a self, id: &'a ItemId) -> StoreFuture<'a, ()>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
pub(crate) mod tests;
