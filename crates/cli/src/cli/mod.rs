// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use td_core::validate::validate_text;
use td_core::{Filter, ItemId};

/// Parse todo text: trimmed, non-empty and within the length limit.
fn todo_text(s: &str) -> Result<String, String> {
    validate_text(s).map_err(|e| e.to_string())
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    s.parse().map_err(|e: td_core::Error| e.to_string())
}

fn parse_id(s: &str) -> Result<ItemId, String> {
    s.parse().map_err(|e: td_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "td")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A todo list kept in sync with a remote todo service")]
#[command(
    long_about = "A todo list kept in sync with a remote todo service.\n\n\
    Changes are applied only after the service confirms them. Use --local to keep\n\
    the list in a JSON file instead."
)]
pub struct Cli {
    /// Use the local todos.json instead of the remote service
    #[arg(long, global = true)]
    pub local: bool,

    /// Directory holding config.toml and local data
    #[arg(long, global = true, value_name = "path")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List todos
    #[command(alias = "ls")]
    List {
        /// Which todos to show (all, active, completed)
        #[arg(long, short, default_value = "all", value_parser = parse_filter)]
        filter: Filter,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a todo
    Add {
        /// Todo text (trimmed, at most 200 characters)
        #[arg(value_parser = todo_text)]
        text: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Mark a todo done, or not done again
    Toggle {
        /// Todo id, or a unique prefix of it
        #[arg(value_parser = parse_id)]
        id: ItemId,
    },

    /// Change a todo's text
    Edit {
        /// Todo id, or a unique prefix of it
        #[arg(value_parser = parse_id)]
        id: ItemId,

        /// New text
        #[arg(value_parser = todo_text)]
        text: String,
    },

    /// Delete a todo
    #[command(alias = "delete")]
    Rm {
        /// Todo id, or a unique prefix of it
        #[arg(value_parser = parse_id)]
        id: ItemId,
    },

    /// Delete all completed todos
    ClearCompleted,

    /// Show the configured backend and whether it is reachable
    Status {
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
