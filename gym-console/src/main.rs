//! gym - Membership admin console
//!
//! An interactive terminal console over the membership REST API: manage
//! the plan catalog, register customers, assign or renew memberships,
//! and check assignment status.
//!
//! # Examples
//!
//! ```bash
//! # Open the plan catalog editor (the default view)
//! gym
//!
//! # Register a customer against an explicit server
//! gym --server http://localhost:8000 register
//!
//! # Store the API token used by the authorized endpoints
//! gym token set <value>
//! ```

mod cli;
mod commands;
mod logger;
mod prompt;
mod token_commands;
mod views;

use crate::{cli::Cli, commands::Commands};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use gym_client::ApiClient;
use gym_config::{Config, CredentialFile, LogLevel};
use gym_views::RefreshSignal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Token storage is local file work; no config load, logger, or
    // client needed.
    if let Some(Commands::Token { action }) = &cli.command {
        return match token_commands::run(action) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Log level: explicit flag > config/env
    let log_level: LogLevel = match cli.log_level.as_deref() {
        Some(name) => name.parse().unwrap_or_default(),
        None => config.logging.level,
    };
    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(log_level, log_file, config.logging.colored) {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    // The credential is read once here and injected; nothing reads it
    // ambiently per request.
    let token = match CredentialFile::load() {
        Ok(file) => file.map(|f| f.token),
        Err(e) => {
            eprintln!("Error reading stored token: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Server address: explicit flag > config/env
    let base_url = cli.server.unwrap_or_else(|| config.api.base_url.clone());

    let client = match ApiClient::with_timeout(
        &base_url,
        token.as_deref(),
        Duration::from_secs(config.api.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let signal = RefreshSignal::new();

    match cli.command.unwrap_or(Commands::Plans) {
        Commands::Plans => views::plans::run(&client).await,
        Commands::Register => views::register::run(&client, &signal).await,
        Commands::Assign => views::assign::run(&client, &signal).await,
        Commands::Status => views::status::run(&client, &signal).await,
        // Handled before the logger and client exist
        Commands::Token { .. } => {}
    }

    ExitCode::SUCCESS
}
