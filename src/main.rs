//! tictactoe_web - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_web::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Serve { port, host } => run_server(config.with_listener(host, port)).await,
        Command::Tui { player_x, player_o } => run_tui(config.with_players(player_x, player_o)),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tictactoe_web=debug"))
}

/// Run the HTTP server
async fn run_server(config: AppConfig) -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    info!("Starting tic-tac-toe web server");
    tictactoe_web::web::serve(config).await
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen
fn run_tui(config: AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.tui_log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tictactoe_web::tui::run_tui(&config)
}
