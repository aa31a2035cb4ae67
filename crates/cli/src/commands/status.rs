// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;
use td_core::view::counts;
use td_core::{Counts, TodoSync};

use crate::cli::OutputFormat;
use crate::config::{BackendKind, DeploymentType, Settings};
use crate::display::deployment_hint;
use crate::error::Result;
use crate::sync::Backend;

use super::load;

#[derive(Serialize)]
struct StatusReport {
    backend: BackendKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment: Option<DeploymentType>,
    location: String,
    state_dir: String,
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    counts: Counts,
}

/// Report the configured backend and whether its list can be read.
pub async fn run(
    sync: &TodoSync<Backend>,
    settings: &Settings,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let reachable = !load(sync, &settings.retry).await.is_failed();
    let snapshot = sync.state().snapshot();
    let backend = sync.store().kind();
    let deployment = (backend == BackendKind::Remote).then_some(settings.api.deployment);

    let report = StatusReport {
        backend,
        deployment,
        location: sync.store().location(),
        state_dir: settings.state_dir.display().to_string(),
        reachable,
        error: snapshot.status.error().map(|e| e.to_string()),
        counts: counts(&snapshot.items),
    };

    match format {
        OutputFormat::Text => {
            match report.deployment {
                Some(d) => writeln!(out, "backend:   {} ({})", report.backend, d)?,
                None => writeln!(out, "backend:   {}", report.backend)?,
            }
            writeln!(out, "location:  {}", report.location)?;
            writeln!(out, "state dir: {}", report.state_dir)?;
            match (&report.error, snapshot.status.error()) {
                (Some(message), Some(e)) => {
                    writeln!(out, "error:     {}", message)?;
                    if let Some(hint) = deployment.and_then(|d| deployment_hint(e, d)) {
                        writeln!(out, "  hint: {}", hint)?;
                    }
                }
                _ => writeln!(
                    out,
                    "todos:     {} ({} active, {} completed)",
                    report.counts.total(),
                    report.counts.active,
                    report.counts.completed
                )?,
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }

    Ok(reachable)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
