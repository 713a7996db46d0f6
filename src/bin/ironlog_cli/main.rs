// ABOUTME: Ironlog CLI - command-line access to the workout insight engine
// ABOUTME: Generates insight reports, imports workout history, and classifies exercise names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Ironlog CLI
//!
//! Usage:
//! ```bash
//! # Load exercises and sets from a JSON export
//! ironlog-cli import --file history.json
//!
//! # Print the insight report for a user as JSON
//! ironlog-cli report --user 7f0c2a56-5f5e-4a7e-9c4b-0a6f1c1d2e3f
//!
//! # Report as of a fixed instant
//! ironlog-cli report --user 7f0c2a56-5f5e-4a7e-9c4b-0a6f1c1d2e3f --now 2025-03-01T12:00:00Z
//!
//! # Show the muscle groups an exercise name maps to
//! ironlog-cli classify "Incline Bench Press"
//! ```

mod commands;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use ironlog::config::AppConfig;
use ironlog::store::SqliteWorkoutStore;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "Ironlog workout insight CLI",
    long_about = "Compute personal records, streaks, recovery, overload trends and focus suggestions from logged sets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the insight report for a user as JSON
    Report {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Instant to compute the report for (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Import exercises and sets from a JSON file
    Import {
        /// Path to a `{ "exercises": [...], "sets": [...] }` document
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the muscle groups an exercise name trains
    Classify {
        /// Exercise name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config.logging.init()?;

    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    match cli.command {
        Command::Classify { name } => commands::classify::run(&name)?,
        Command::Report { user, now } => {
            let store = connect(&config).await?;
            commands::report::run(store, config.insights, user, now.unwrap_or_else(Utc::now))
                .await?;
        }
        Command::Import { file } => {
            let store = connect(&config).await?;
            commands::import::run(&store, &file).await?;
        }
    }

    Ok(())
}

async fn connect(config: &AppConfig) -> Result<SqliteWorkoutStore> {
    debug!(database_url = %config.database_url, "Opening workout store");
    SqliteWorkoutStore::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))
}
