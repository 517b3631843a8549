// ABOUTME: FitTrack CLI - command-line access to the admin gate and request validators
// ABOUTME: Checks admin status of an access token and validates JSON payloads from files or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
//!
//! Usage:
//! ```bash
//! # Check whether an access token belongs to an admin
//! fittrack-cli verify-admin --token eyJhbGciOi...
//!
//! # Validate a profile update read from a file
//! fittrack-cli validate profile --file profile.json
//!
//! # Validate a workout read from stdin
//! echo '{"name":"Run","durationMinutes":30,"workoutType":"cardio","date":"2025-03-01"}' \
//!     | fittrack-cli validate workout
//! ```
//!
//! Both commands exit with status 0 on success (admin granted, payload
//! valid) and 1 otherwise.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fittrack::{errors::AppResult, logging::LoggingConfig};
use tracing::debug;

use commands::validate::PayloadKind;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack access layer CLI",
    long_about = "Check admin authorization against the hosted backend and validate request payloads."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check whether an access token belongs to an admin
    VerifyAdmin {
        /// Access token issued by the hosted backend
        #[arg(long, env = "FITTRACK_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Validate a request payload
    Validate {
        /// Payload kind
        #[arg(value_enum)]
        kind: PayloadKind,

        /// JSON file to read (reads stdin when omitted)
        #[arg(long, short = 'f')]
        file: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("FitTrack CLI");

    let success = match cli.command {
        Command::VerifyAdmin { token } => commands::verify::verify_admin(&token).await?,
        Command::Validate { kind, file } => commands::validate::validate(kind, file).await?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
