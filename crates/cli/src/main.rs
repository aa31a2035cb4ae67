// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

use clap::Parser;
use tdrs::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tdrs::init_logging();
    let cli = Cli::parse();
    match tdrs::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
