// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Item store backends.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TodoSync   │────►│   Backend   │────►│  HttpStore  │──► todo service
//! │   (core)    │◄────│   (enum)    │     └─────────────┘
//! └─────────────┘     └─────────────┘     ┌─────────────┐
//!                            └───────────►│ LocalStore  │──► todos.json
//!                                         └─────────────┘
//! ```

mod http;
mod response;

pub use http::HttpStore;
pub use response::{decode_item, decode_list};

use td_core::{Item, ItemId, ItemStore, LocalStore, StoreFuture};

use crate::config::{BackendKind, Settings};
use crate::error::Result;

/// The store selected by configuration.
pub enum Backend {
    Remote(HttpStore),
    Local(LocalStore),
}

impl Backend {
    pub fn open(settings: &Settings) -> Result<Self> {
        match settings.backend {
            BackendKind::Remote => {
                let store = HttpStore::new(&settings.api)?;
                tracing::debug!(url = %store.base_url(), deployment = %store.deployment(), "using remote store");
                Ok(Backend::Remote(store))
            }
            BackendKind::Local => {
                let store = LocalStore::open(&settings.state_dir)?;
                tracing::debug!(path = %store.path().display(), "using local store");
                Ok(Backend::Local(store))
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Remote(_) => BackendKind::Remote,
            Backend::Local(_) => BackendKind::Local,
        }
    }

    /// Where items are stored, for status output.
    pub fn location(&self) -> String {
        match self {
            Backend::Remote(store) => store.base_url().to_string(),
            Backend::Local(store) => store.path().display().to_string(),
        }
    }
}

impl ItemStore for Backend {
    fn list_all(&self) -> StoreFuture<'_, Vec<Item>> {
        match self {
            Backend::Remote(s) => s.list_all(),
            Backend::Local(s) => s.list_all(),
        }
    }

    fn create<'a>(&'a self, text: &'a str) -> StoreFuture<'a, Item> {
        match self {
            Backend::Remote(s) => s.create(text),
            Backend::Local(s) => s.create(text),
        }
    }

    fn set_completed<'a>(&'a self, id: &'a ItemId, completed: bool) -> StoreFuture<'a, Item> {
        match self {
            Backend::Remote(s) => s.set_completed(id, completed),
            Backend::Local(s) => s.set_completed(id, completed),
        }
    }

    fn rename<'a>(&'a self, id: &'a ItemId, text: &'a str) -> StoreFuture<'a, Item> {
        match self {
            Backend::Remote(s) => s.rename(id, text),
            Backend::Local(s) => s.rename(id, text),
        }
    }

    fn delete<'a>(&'a self, id: &'a ItemId) -> StoreFuture<'a, ()> {
        match self {
            Backend::Remote(s) => s.delete(id),
            Backend::Local(s) => s.delete(id),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
