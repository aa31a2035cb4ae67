// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const TD_API_URL: &str = "TD_API_URL";
    pub const TD_API_TYPE: &str = "TD_API_TYPE";
    pub const TD_API_GATEWAY_URL: &str = "TD_API_GATEWAY_URL";
    pub const TD_ENV: &str = "TD_ENV";
    pub const TD_BACKEND: &str = "TD_BACKEND";
    pub const TD_STATE_DIR: &str = "TD_STATE_DIR";
    pub const TD_LOG: &str = "TD_LOG";
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `TD_API_URL` if set.
pub fn api_url() -> Option<String> {
    non_empty(vars::TD_API_URL)
}

/// Returns the value of `TD_API_TYPE` if set.
pub fn api_type() -> Option<String> {
    non_empty(vars::TD_API_TYPE)
}

/// Returns the value of `TD_API_GATEWAY_URL` if set.
pub fn api_gateway_url() -> Option<String> {
    non_empty(vars::TD_API_GATEWAY_URL)
}

/// Returns the value of `TD_ENV` if set.
pub fn profile() -> Option<String> {
    non_empty(vars::TD_ENV)
}

/// Returns the value of `TD_BACKEND` if set.
pub fn backend() -> Option<String> {
    non_empty(vars::TD_BACKEND)
}

/// Returns the value of `TD_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    non_empty(vars::TD_STATE_DIR).map(PathBuf::from)
}

/// Returns the value of `TD_LOG` if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::TD_LOG)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
