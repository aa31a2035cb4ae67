// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use td_core::view::counts;
use td_core::{ItemStore, TodoSync};

use crate::config::RetryConfig;
use crate::error::Result;

use super::{check, load_for_update};

/// Delete every completed item.
///
/// Deletes that succeed stay deleted even when others fail; the failure is
/// reported with the number of items that could not be cleared.
pub async fn run<S: ItemStore>(
    sync: &TodoSync<S>,
    retry: &RetryConfig,
    out: &mut impl Write,
) -> Result<()> {
    load_for_update(sync, retry).await?;
    let before = counts(&sync.state().items());

    if check(sync.clear_completed().await)? {
        let noun = if before.completed == 1 { "todo" } else { "todos" };
        writeln!(out, "cleared {} completed {}", before.completed, noun)?;
    } else {
        writeln!(out, "no completed todos to clear")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
