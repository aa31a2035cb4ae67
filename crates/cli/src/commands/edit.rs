// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use td_core::{ItemId, ItemStore, TodoSync};

use crate::config::RetryConfig;
use crate::display::format_item_line;
use crate::error::Result;

use super::{check, load_for_update, resolve_id};

/// Replace an item's text. Text identical to the current text is a no-op.
pub async fn run<S: ItemStore>(
    sync: &TodoSync<S>,
    retry: &RetryConfig,
    id: &ItemId,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    load_for_update(sync, retry).await?;
    let id = resolve_id(sync, id)?;

    let changed = check(sync.rename(&id, text).await)?;
    if let Some(item) = sync.state().get(&id) {
        if changed {
            writeln!(out, "{}", format_item_line(&item))?;
        } else {
            writeln!(out, "unchanged {}", format_item_line(&item))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
