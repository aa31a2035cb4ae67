// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pure derivations over the collection for presentation layers.
//!
//! Nothing here mutates state; every value is recomputed from a
//! [`Snapshot`] on each read.

use serde::Serialize;

use crate::item::{Filter, Item};
use crate::state::{Snapshot, Status};

/// Counts over the whole collection, independent of the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.active + self.completed
    }

    /// Whether a "clear completed" action has anything to do.
    pub fn can_clear(&self) -> bool {
        self.completed > 0
    }

    /// Footer text, e.g. "1 item left" or "3 items left".
    pub fn items_left_label(&self) -> String {
        let noun = if self.active == 1 { "item" } else { "items" };
        format!("{} {} left", self.active, noun)
    }
}

/// Items visible under `filter`, in collection order.
pub fn filtered(items: &[Item], filter: Filter) -> Vec<&Item> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

pub fn counts(items: &[Item]) -> Counts {
    let completed = items.iter().filter(|i| i.completed).count();
    Counts {
        active: items.len() - completed,
        completed,
    }
}

/// What a presentation layer should render.
///
/// Loading and error screens replace the list entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Loading,
    /// The last failure plus a retry affordance.
    Error { message: String },
    /// No items and no error.
    Empty,
    List {
        items: Vec<&'a Item>,
        counts: Counts,
        filter: Filter,
    },
}

pub fn screen(snapshot: &Snapshot, filter: Filter) -> Screen<'_> {
    match &snapshot.status {
        Status::Loading => Screen::Loading,
        Status::Failed(e) => Screen::Error {
            message: e.to_string(),
        },
        Status::Idle if snapshot.items.is_empty() => Screen::Empty,
        Status::Idle => Screen::List {
            items: filtered(&snapshot.items, filter),
            counts: counts(&snapshot.items),
            filter,
        },
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
