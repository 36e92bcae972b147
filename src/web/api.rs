//! JSON request and response types plus error mapping.

use super::sessions::GameSession;
use crate::games::tictactoe::{GameError, Player, TurnEvent};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `POST /api/games/{id}/moves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Position on board (0-8, where 0=top-left, 8=bottom-right).
    pub position: usize,
}

/// Body of `POST /api/games` and the page's new-game form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGameRequest {
    /// Game id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Name of the X player.
    #[serde(default)]
    pub player_x: String,
    /// Name of the O player.
    #[serde(default)]
    pub player_o: String,
}

/// Read-only view of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Session ID.
    pub id: String,
    /// Cell symbols in row-major order; empty cells are `""`.
    pub board: Vec<String>,
    /// Both players, X first.
    pub players: Vec<Player>,
    /// Player to move, absent once the game is over.
    pub current_player: Option<Player>,
    /// Whether the game has finished.
    pub over: bool,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Positions still open for play; empty once the game is over.
    pub open: Vec<usize>,
    /// Status line.
    pub message: String,
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let game = &session.game;
        Self {
            id: session.id.clone(),
            board: game
                .board()
                .read()
                .iter()
                .map(|c| c.symbol().to_string())
                .collect(),
            players: game.players().to_vec(),
            current_player: (!game.is_over()).then(|| game.current_player().clone()),
            over: game.is_over(),
            winner: game.winner().cloned(),
            open: if game.is_over() {
                Vec::new()
            } else {
                game.board().empty_positions().into_iter().map(|p| p.to_index()).collect()
            },
            message: session.message(),
        }
    }
}

/// Result of a move or restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    /// What happened.
    pub event: TurnEvent,
    /// Human-readable form of `event`.
    pub message: String,
    /// Game after the event.
    pub state: GameSnapshot,
}

impl EventResponse {
    /// Pairs an event with the session it produced.
    pub fn new(event: TurnEvent, session: &GameSession) -> Self {
        Self {
            message: event.to_string(),
            event,
            state: GameSnapshot::from(session),
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Description of the failure.
    pub error: String,
}

/// Failures surfaced by web handlers.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// No game with this id.
    #[display("Game '{}' not found", _0)]
    NotFound(#[error(not(source))] String),
    /// Id outside `[A-Za-z0-9_-]` or longer than 64 characters.
    #[display("Invalid game id {:?}: use 1-64 characters of A-Z, a-z, 0-9, '_' or '-'", _0)]
    InvalidId(#[error(not(source))] String),
    /// Rules engine rejected the request. Only the kind reaches the client.
    #[display("{}", _0.kind)]
    Game(GameError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Game(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        match &self {
            ApiError::Game(err) => warn!(status = %status, error = %err, "Request failed"),
            _ => warn!(status = %status, error = %self, "Request failed"),
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
