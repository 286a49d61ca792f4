//! Timeline - terminal tic-tac-toe with move history and time travel.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::UiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = UiConfig::load(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    if cli.no_mouse {
        config = config.without_mouse();
    }

    initialize_tracing(&config)?;
    info!(?config, "Starting timeline");

    tui::run(&config)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn initialize_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
