//! Command-line interface for tictactoe_web.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players, in the browser or the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_web")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the game page over HTTP
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Play in the terminal, both players on one keyboard
    Tui {
        /// Name of the X player
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the O player
        #[arg(long)]
        player_o: Option<String>,
    },
}
