// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tdrs - command-line client for a remote todo list.
//!
//! This crate wires the `td` binary to the [`td_core`] synchronization
//! core: configuration, the HTTP and local item stores, and the commands.
//!
//! # Main Components
//!
//! - [`Settings`] - Resolved configuration (flags, environment, `config.toml`)
//! - [`sync::Backend`] - The selected item store ([`sync::HttpStore`] or a local file)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = tdrs::Cli::parse();
//! let code = tdrs::run(cli).await?;
//! ```

mod cli;
mod commands;
mod display;
mod logging;

pub mod config;
pub mod env;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{ApiConfig, BackendKind, Config, DeploymentType, EnvOverrides, Settings};
pub use error::{Error, Result};
pub use logging::init as init_logging;

use std::process::ExitCode;

/// Run one command to completion.
///
/// Errors are returned for the caller to print; a list that could not be
/// loaded is rendered and reported through the exit code instead.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let env = EnvOverrides::from_env();
    let settings = Settings::resolve(cli.state_dir, cli.local, &env)?;
    tracing::debug!(backend = %settings.backend, state_dir = %settings.state_dir.display(), "resolved settings");

    let sync = commands::open(&settings)?;
    let retry = &settings.retry;
    let deployment = (settings.backend == BackendKind::Remote).then_some(settings.api.deployment);
    let mut out = std::io::stdout().lock();

    let ok = match cli.command {
        Command::List { filter, output } => {
            commands::list::run(&sync, retry, filter, output, deployment, &mut out).await?
        }
        Command::Add { text, output } => {
            commands::add::run(&sync, &text, output, &mut out).await?;
            true
        }
        Command::Toggle { id } => {
            commands::toggle::run(&sync, retry, &id, &mut out).await?;
            true
        }
        Command::Edit { id, text } => {
            commands::edit::run(&sync, retry, &id, &text, &mut out).await?;
            true
        }
        Command::Rm { id } => {
            commands::rm::run(&sync, retry, &id, &mut out).await?;
            true
        }
        Command::ClearCompleted => {
            commands::clear::run(&sync, retry, &mut out).await?;
            true
        }
        Command::Status { output } => {
            commands::status::run(&sync, &settings, output, &mut out).await?
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
