// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filter directives come from `TD_LOG`, then `RUST_LOG`, defaulting to
//! warnings only so normal command output stays clean.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::new(directives(
        env::log_filter(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    ));

    // A subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn directives(td_log: Option<String>, rust_log: Option<String>) -> String {
    td_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
