// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local-only item store.
//!
//! Keeps the whole collection as one JSON document under the `todos` key
//! (`<dir>/todos.json`). The file is read once on open and rewritten after
//! every successful mutation. Ids are millisecond timestamps generated here.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::error::{Error, Result, SyncError};
use crate::item::{Item, ItemId};
use crate::store::{ItemStore, StoreFuture, StoreResult};

/// Name the collection is stored under.
pub const STORAGE_KEY: &str = "todos";

struct Inner {
    items: Vec<Item>,
    /// Last id handed out; ids are strictly increasing.
    last_id: u64,
}

/// File-backed [`ItemStore`] for running without a remote service.
pub struct LocalStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl LocalStore {
    /// Open (or start) the collection stored in `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", STORAGE_KEY));
        let items = load(&path)?;
        let last_id = items
            .iter()
            .filter_map(|i| i.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        tracing::debug!(path = %path.display(), count = items.len(), "opened local store");
        Ok(LocalStore {
            path,
            inner: Mutex::new(Inner { items, last_id }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to a copy of the collection, persist it, then commit.
    ///
    /// A failed write leaves both the file and memory untouched.
    fn mutate<T>(&self, f: impl FnOnce(&mut Inner) -> StoreResult<T>) -> StoreResult<T> {
        let mut inner = self.lock();
        let mut next = Inner {
            items: inner.items.clone(),
            last_id: inner.last_id,
        };
        let out = f(&mut next)?;
        save(&self.path, &next.items).map_err(|e| SyncError::Storage {
            message: e.to_string(),
        })?;
        *inner = next;
        Ok(out)
    }
}

impl Inner {
    fn next_id(&mut self) -> StoreResult<ItemId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| SyncError::Storage {
                message: format!("item ids exhausted after {}", self.last_id),
            })?;
        self.last_id = now.max(after_last);
        Ok(ItemId::from(self.last_id))
    }

    fn find_mut(&mut self, id: &ItemId) -> StoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(not_found)
    }
}

fn not_found() -> SyncError {
    SyncError::Rejected {
        status: 404,
        reason: "Not Found".to_string(),
        body: Some("Todo not found".to_string()),
    }
}

fn load(path: &Path) -> Result<Vec<Item>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content)
        .map_err(|e| Error::CorruptedData(format!("{}: {}", path.display(), e)))
}

fn save(path: &Path, items: &[Item]) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let mut file = File::create(&tmp)?;
    serde_json::to_writer_pretty(&mut file, items)?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl ItemStore for LocalStore {
    fn list_all(&self) -> StoreFuture<'_, Vec<Item>> {
        Box::pin(async move { Ok(self.lock().items.clone()) })
    }

    fn create<'a>(&'a self, text: &'a str) -> StoreFuture<'a, Item> {
        Box::pin(async move {
            self.mutate(|inner| {
                let item = Item::new(inner.next_id()?, text, Utc::now());
                inner.items.push(item.clone());
                Ok(item)
            })
        })
    }

    fn set_completed<'a>(&'a self, id: &'a ItemId, completed: bool) -> StoreFuture<'a, Item> {
        Box::pin(async move {
            self.mutate(|inner| {
                let item = inner.find_mut(id)?;
                item.completed = completed;
                item.updated_at = Some(Utc::now());
                Ok(item.clone())
            })
        })
    }

    fn rename<'a>(&'a self, id: &'a ItemId, text: &'a str) -> StoreFuture<'a, Item> {
        Box::pin(async move {
            self.mutate(|inner| {
                let item = inner.find_mut(id)?;
                item.text = text.to_string();
                item.updated_at = Some(Utc::now());
                Ok(item.clone())
            })
        })
    }

    fn delete<'a>(&'a self, id: &'a ItemId) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.mutate(|inner| {
                let before = inner.items.len();
                inner.items.retain(|i| &i.id != id);
                if inner.items.len() == before {
                    return Err(not_found());
                }
                Ok(())
            })
        })
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
