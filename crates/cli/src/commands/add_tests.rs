// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{local_sync, output, ScriptedStore};
use td_core::validate::MAX_TEXT_LENGTH;
use td_core::SyncError;
use tempfile::TempDir;

#[tokio::test]
async fn test_add_prints_item() {
    let dir = TempDir::new().unwrap();
    let sync = local_sync(&dir);

    let mut out = Vec::new();
    run(&sync, "  Buy milk ", OutputFormat::Text, &mut out).await.unwrap();

    assert!(output(out).starts_with("added [ ] Buy milk  ("));
    assert_eq!(sync.state().items()[0].text, "Buy milk");
}

#[tokio::test]
async fn test_add_json() {
    let dir = TempDir::new().unwrap();
    let sync = local_sync(&dir);

    let mut out = Vec::new();
    run(&sync, "Walk", OutputFormat::Json, &mut out).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
    assert_eq!(json["text"], "Walk");
    assert_eq!(json["completed"], false);
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_add_too_long_is_noop() {
    let dir = TempDir::new().unwrap();
    let sync = local_sync(&dir);
    run(&sync, "Existing", OutputFormat::Text, &mut Vec::new()).await.unwrap();

    let mut out = Vec::new();
    let text = "x".repeat(MAX_TEXT_LENGTH + 1);
    run(&sync, &text, OutputFormat::Text, &mut out).await.unwrap();
    assert!(out.is_empty());
    assert_eq!(sync.state().items().len(), 1);
}

#[tokio::test]
async fn test_add_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = ScriptedStore::open(&dir);
    store.set_down(SyncError::Transport {
        message: "connection refused".into(),
    });
    let sync = TodoSync::new(store);

    let mut out = Vec::new();
    let err = run(&sync, "Buy milk", OutputFormat::Text, &mut out).await.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
    assert!(sync.state().items().is_empty());
}
