//! Tic-tac-toe rules engine.

mod board;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{GameError, GameErrorKind};
pub use game::{Game, GameStatus, TurnEvent};
pub use position::Position;
pub use types::{Cell, Marker, Player};
