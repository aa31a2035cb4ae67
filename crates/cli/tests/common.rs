// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `td` with a clean environment and its state in `temp`.
pub fn td(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("td");
    for var in [
        "TD_API_URL",
        "TD_API_TYPE",
        "TD_API_GATEWAY_URL",
        "TD_ENV",
        "TD_BACKEND",
        "TD_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("TD_STATE_DIR", temp.path());
    cmd
}

/// `td --local` rooted in `temp`.
pub fn td_local(temp: &TempDir) -> Command {
    let mut cmd = td(temp);
    cmd.arg("--local");
    cmd
}

/// Add a todo in local mode and return its id.
pub fn add_local(temp: &TempDir, text: &str) -> String {
    let output = td_local(temp)
        .args(["add", text, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_str().unwrap().to_string()
}
