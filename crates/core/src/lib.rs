// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! td-core: Shared library for the td todo client
//!
//! This crate provides the item model, the in-memory collection state, the
//! synchronization core that keeps it consistent with an item store, and the
//! pure view projections used by presentation layers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    View     │◄────│  Collection │◄────│  TodoSync   │
//! │ (projection)│     │    State    │     │   (core)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  ItemStore  │  HTTP or local file
//!                                         │   (trait)   │
//!                                         └─────────────┘
//! ```

pub mod error;
pub mod item;
pub mod local;
pub mod state;
pub mod store;
pub mod sync;
pub mod validate;
pub mod view;

pub use error::{Error, Result, SyncError, ValidationError};
pub use item::{Filter, Item, ItemId};
pub use local::LocalStore;
pub use state::{CollectionState, Snapshot, Status};
pub use store::{ItemStore, StoreFuture, StoreResult};
pub use sync::{Outcome, SkipReason, TodoSync};
pub use view::{Counts, Screen};
