//! Turn and outcome logic.

use super::board::Board;
use super::error::GameError;
use super::position::Position;
use super::rules;
use super::types::{Marker, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won(Marker),
    /// The board filled with no line.
    Tie,
}

/// What happened in response to a move or restart.
///
/// Adapters decide how to show these; the engine never prints.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEvent {
    /// Move placed, play passes to `next`.
    #[display("{}'s turn", next.name())]
    Continued {
        /// Player who moves next.
        next: Player,
    },
    /// Target cell already holds a marker.
    #[display("Cell is already taken. Try again.")]
    CellOccupied,
    /// Move completed a line.
    #[display("{} wins!", winner.name())]
    Won {
        /// Player who completed the line.
        winner: Player,
    },
    /// Move filled the board without a line.
    #[display("It's a tie!")]
    Tie,
    /// Move attempted after the game finished.
    #[display("Game is over. Restart to play again.")]
    GameOver,
    /// Board cleared and turn order reset.
    #[display("Game restarted. {}'s turn", first.name())]
    Restarted {
        /// Player who moves first.
        first: Player,
    },
}

impl TurnEvent {
    /// Checks if this event ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnEvent::Won { .. } | TurnEvent::Tie)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: usize,
    status: GameStatus,
}

impl Game {
    /// Starts a game: `name1` plays X and moves first, `name2` plays O.
    #[instrument(
        skip(name1, name2),
        fields(player_x = %name1.as_ref(), player_o = %name2.as_ref())
    )]
    pub fn start(name1: impl AsRef<str>, name2: impl AsRef<str>) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            players: [
                Player::new(name1.as_ref().to_string(), Marker::X),
                Player::new(name2.as_ref().to_string(), Marker::O),
            ],
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Plays the current player's marker at `position` (0-8).
    ///
    /// Occupied cells and moves after the game finished are reported as
    /// events and change nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is outside 0-8.
    /// The error records the location of the call to `play_turn`.
    #[track_caller]
    pub fn play_turn(&mut self, position: usize) -> Result<TurnEvent, GameError> {
        let pos = Position::try_from(position).inspect_err(|e| {
            warn!(player = %self.current_player(), error = %e, "Rejected move outside the board");
        })?;
        Ok(self.play(pos))
    }

    /// Plays the current player's marker at an already validated position.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play(&mut self, pos: Position) -> TurnEvent {
        if self.is_over() {
            debug!("Move attempted after game over");
            return TurnEvent::GameOver;
        }

        let marker = *self.current_player().marker();
        if !self.board.place(pos, marker) {
            debug!("Move rejected, cell occupied");
            return TurnEvent::CellOccupied;
        }

        if rules::has_line(&self.board, marker) {
            self.status = GameStatus::Won(marker);
            let winner = self.current_player().clone();
            info!(winner = %winner, "Game won");
            return TurnEvent::Won { winner };
        }

        if self.board.is_full() {
            self.status = GameStatus::Tie;
            info!("Game tied");
            return TurnEvent::Tie;
        }

        self.turn = 1 - self.turn;
        let next = self.current_player().clone();
        debug!(next = %next, "Turn passed");
        TurnEvent::Continued { next }
    }

    /// Clears the board and hands the first move back to player X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> TurnEvent {
        self.board.reset();
        self.turn = 0;
        self.status = GameStatus::InProgress;
        info!("Game restarted");
        TurnEvent::Restarted {
            first: self.current_player().clone(),
        }
    }

    /// Player whose turn it is. Only meaningful while the game is active.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Checks if the game has finished.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(marker) => self.players.iter().find(|p| *p.marker() == marker),
            _ => None,
        }
    }

    /// Status line for the current state, without reference to the last event.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player().name()),
            GameStatus::Won(_) => match self.winner() {
                Some(winner) => format!("{} wins!", winner.name()),
                None => "Game over!".to_string(),
            },
            GameStatus::Tie => "It's a tie!".to_string(),
        }
    }
}
