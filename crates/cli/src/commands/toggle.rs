// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use td_core::{ItemId, ItemStore, TodoSync};

use crate::config::RetryConfig;
use crate::display::format_item_line;
use crate::error::Result;

use super::{check, load_for_update, resolve_id};

pub async fn run<S: ItemStore>(
    sync: &TodoSync<S>,
    retry: &RetryConfig,
    id: &ItemId,
    out: &mut impl Write,
) -> Result<()> {
    load_for_update(sync, retry).await?;
    let id = resolve_id(sync, id)?;

    check(sync.toggle(&id).await)?;
    if let Some(item) = sync.state().get(&id) {
        writeln!(out, "{}", format_item_line(&item))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "toggle_tests.rs"]
mod tests;
