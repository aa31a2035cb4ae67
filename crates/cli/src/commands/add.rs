// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use td_core::{ItemStore, TodoSync};

use crate::cli::OutputFormat;
use crate::display::format_item_line;
use crate::error::Result;

use super::check;

/// Create one item. No prior load is needed; the store's answer is shown.
///
/// Invalid text prints nothing.
pub async fn run<S: ItemStore>(
    sync: &TodoSync<S>,
    text: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (outcome, created) = sync.add_item(text).await;
    if !check(outcome)? {
        return Ok(());
    }

    let Some(item) = created else {
        return Ok(());
    };
    match format {
        OutputFormat::Text => writeln!(out, "added {}", format_item_line(&item))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
