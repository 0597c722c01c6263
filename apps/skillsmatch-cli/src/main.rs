//! # SkillsMatch CLI
//!
//! Terminal client for the SkillsMatch marketplace backend.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod state;
mod telemetry;
mod views;

use cli::Cli;
use commands::Output;
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().with_overrides(cli.api_url, cli.session_file);
    if cli.verbose {
        config.telemetry = config.telemetry.verbose();
    }
    telemetry::init_telemetry(&config.telemetry);

    tracing::debug!(
        base_url = %config.api.base_url,
        session_file = %config.session_file.display(),
        "Configuration loaded"
    );

    let state = AppState::new(&config)?;
    commands::run(&state, cli.command, Output { json: cli.json }).await
}
