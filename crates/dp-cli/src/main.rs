//! dp - deal pipeline CLI
//!
//! Drives the pipeline board against the deal-storage API.
//!
//! # Examples
//!
//! ```bash
//! # High-value fintech deals, pretty-printed
//! dp board --sector Fintech --value High --pretty
//!
//! # Drag a deal into committed, third slot
//! dp move d1 --to committed --index 2
//! ```

mod cli;
mod commands;

use crate::cli::Cli;

use dp_cli::{Client, LogNotifier, PipelineSession, logger};
use dp_config::Config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let client = match Client::from_config(&config.api) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut session = PipelineSession::new(client, LogNotifier, config.board.failure_policy);

    let result = commands::run(cli.command, &mut session).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
