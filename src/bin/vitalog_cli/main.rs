// ABOUTME: Vitalog CLI - command-line surface for the local health-tracking data layer
// ABOUTME: Handles accounts, daily metric logging, history views, export, and reminder settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health
//!
//! Usage:
//! ```bash
//! # Register and start a session
//! vitalog-cli account register --name Dana --email dana@example.com --password hunter2
//!
//! # Log today's metrics
//! vitalog-cli log steps 7500
//! vitalog-cli log sleep 7.5
//!
//! # Today's snapshot and recent history
//! vitalog-cli today
//! vitalog-cli history --days 7
//!
//! # Export all history as CSV
//! vitalog-cli export --output health.csv
//!
//! # Reminder settings
//! vitalog-cli settings show
//! vitalog-cli settings set --water off --sleep-time 21:30
//! ```

mod commands;

use clap::{Parser, Subcommand};
use vitalog::config::AppConfig;
use vitalog::errors::AppResult;
use vitalog::logging::LoggingConfig;
use vitalog::store::DataStore;

#[derive(Parser)]
#[command(
    name = "vitalog-cli",
    about = "Vitalog health tracking CLI",
    long_about = "Command-line surface for the Vitalog data layer: accounts, daily metric logging, history, export, and reminder settings."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage URL override (memory:// or a data directory path)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Account management commands
    Account {
        #[command(subcommand)]
        action: commands::AccountCommand,
    },

    /// Log one observation of a metric for today
    Log {
        /// Metric kind: steps, water, sleep, meals, heart-rate, mood
        kind: String,
        /// Observed value
        value: f64,
    },

    /// Show today's snapshot against the daily targets
    Today,

    /// Show history and summary statistics for a recent period
    History {
        /// Number of days back from today, inclusive
        #[arg(long, default_value_t = 7)]
        days: u64,
    },

    /// Export all logged history as CSV
    Export {
        /// File to write; prints to stdout when omitted
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Delete every record of the active account
    Clear {
        /// Confirm the irreversible deletion
        #[arg(long)]
        yes: bool,
    },

    /// Reminder settings commands
    Settings {
        #[command(subcommand)]
        action: commands::SettingsCommand,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(error) = logging.init() {
        eprintln!("Failed to initialize logging: {error}");
    }

    let storage_url = match cli.storage_url {
        Some(url) => url,
        None => AppConfig::from_env()?.storage_url,
    };
    let store = DataStore::open(&storage_url).await?;

    match cli.command {
        Command::Account { action } => commands::account(&store, action).await,
        Command::Log { kind, value } => commands::log_metric(&store, &kind, value).await,
        Command::Today => commands::today(&store).await,
        Command::History { days } => commands::history(&store, days).await,
        Command::Export { output } => commands::export(&store, output).await,
        Command::Clear { yes } => commands::clear(&store, yes).await,
        Command::Settings { action } => commands::settings(&store, action).await,
    }
}
