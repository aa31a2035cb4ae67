// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use td_core::view;
use td_core::{Filter, ItemStore, TodoSync};

use crate::cli::OutputFormat;
use crate::config::{DeploymentType, RetryConfig};
use crate::display::{deployment_hint, render_screen, ScreenJson};
use crate::error::Result;

use super::load;

/// Print the collection under `filter`.
///
/// A failed load still renders (as the error screen); the return value
/// reports whether the list could be read.
pub async fn run<S: ItemStore>(
    sync: &TodoSync<S>,
    retry: &RetryConfig,
    filter: Filter,
    format: OutputFormat,
    deployment: Option<DeploymentType>,
    out: &mut impl Write,
) -> Result<bool> {
    let loaded = !load(sync, retry).await.is_failed();
    let snapshot = sync.state().snapshot();
    let screen = view::screen(&snapshot, filter);

    match format {
        OutputFormat::Text => {
            let hint = snapshot
                .status
                .error()
                .zip(deployment)
                .and_then(|(e, d)| deployment_hint(e, d));
            for line in render_screen(&screen, hint) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let json = ScreenJson::from_screen(screen, filter);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }

    Ok(loaded)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
