//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Games**: the rules engine ([`Board`] and [`Game`])
//! - **Web**: axum server rendering the game page plus a JSON API
//! - **TUI**: hot-seat terminal front end
//! - **Config**: TOML settings shared by both front ends
//!
//! # Example
//!
//! ```
//! use tictactoe_web::{Game, TurnEvent};
//!
//! let mut game = Game::start("Ann", "Bob");
//! let event = game.play_turn(4).unwrap();
//! assert!(matches!(event, TurnEvent::Continued { .. }));
//! assert_eq!(game.current_player().name(), "Bob");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod tui;
pub mod web;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ServerConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Game, GameError, GameErrorKind, GameStatus, Marker, Player, Position, TurnEvent,
    rules,
};
