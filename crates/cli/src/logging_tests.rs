// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    default = { None, None, "warn" },
    rust_log = { None, Some("debug"), "debug" },
    td_log_wins = { Some("tdrs=trace"), Some("debug"), "tdrs=trace" },
    blank_rust_log = { None, Some("  "), "warn" },
)]
fn test_directives(td_log: Option<&str>, rust_log: Option<&str>, expected: &str) {
    assert_eq!(
        directives(td_log.map(String::from), rust_log.map(String::from)),
        expected
    );
}

#[test]
fn test_init_twice_is_harmless() {
    init();
    init();
    tracing::debug!("still running");
}
