//! HTTP handlers.

use super::AppState;
use super::api::{ApiError, EventResponse, GameSnapshot, MoveRequest, NewGameRequest};
use super::render;
use super::sessions::{GameSession, is_valid_game_id};
use crate::games::tictactoe::TurnEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::{Form, Json};
use serde_json::{Value, json};
use tracing::{info, instrument};

fn page_url(id: &str) -> String {
    format!("/games/{}", id)
}

/// Rejects ids that could not be placed in a URL as-is.
fn checked_id(id: String) -> Result<String, ApiError> {
    if is_valid_game_id(&id) {
        Ok(id)
    } else {
        Err(ApiError::InvalidId(id))
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "tictactoe_web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /` sends the browser to the default game.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&page_url(state.config.server().default_game()))
}

/// `GET /games/{id}` renders the page.
///
/// Only the configured default game is started on first visit; other ids
/// must be created through a form or the API.
#[instrument(skip(state))]
pub async fn show_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = checked_id(id)?;
    let session = if id == *state.config.server().default_game() {
        state.sessions.get_or_create(&id)
    } else {
        state.sessions.get(&id).ok_or(ApiError::NotFound(id))?
    };
    Ok(Html(render::game_page(&session)))
}

/// `POST /games/{id}/cells/{position}` plays a cell clicked on the page.
#[instrument(skip(state))]
pub async fn click_cell(
    State(state): State<AppState>,
    Path((id, position)): Path<(String, usize)>,
) -> Result<Redirect, ApiError> {
    let id = checked_id(id)?;
    play(&state, &id, position)?;
    Ok(Redirect::to(&page_url(&id)))
}

/// `POST /games/{id}/restart` from the page's restart button.
#[instrument(skip(state))]
pub async fn click_restart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = checked_id(id)?;
    restart(&state, &id)?;
    Ok(Redirect::to(&page_url(&id)))
}

/// `POST /games/{id}/new` from the page's new-game form.
#[instrument(skip(state, form))]
pub async fn submit_new_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<NewGameRequest>,
) -> Result<Redirect, ApiError> {
    let session = new_game(&state, NewGameRequest { id: Some(id), ..form })?;
    Ok(Redirect::to(&page_url(&session.id)))
}

/// `GET /api/games` lists game ids.
#[instrument(skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.sessions.list())
}

/// `POST /api/games` starts (or replaces) a game.
#[instrument(skip(state, req))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(req): Json<NewGameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = new_game(&state, req)?;
    Ok((StatusCode::CREATED, Json(GameSnapshot::from(&session))))
}

/// `GET /api/games/{id}` returns the current state.
#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let id = checked_id(id)?;
    let session = state.sessions.get(&id).ok_or(ApiError::NotFound(id))?;
    Ok(Json(GameSnapshot::from(&session)))
}

/// `POST /api/games/{id}/moves` plays a turn.
#[instrument(skip(state))]
pub async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = checked_id(id)?;
    let (event, session) = play(&state, &id, req.position)?;
    Ok(Json(EventResponse::new(event, &session)))
}

/// `POST /api/games/{id}/restart` restarts a game.
#[instrument(skip(state))]
pub async fn restart_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = checked_id(id)?;
    let (event, session) = restart(&state, &id)?;
    Ok(Json(EventResponse::new(event, &session)))
}

fn play(
    state: &AppState,
    id: &str,
    position: usize,
) -> Result<(TurnEvent, GameSession), ApiError> {
    let (result, session) = state
        .sessions
        .update(id, |session| {
            let result = session.game.play_turn(position);
            if let Ok(event) = &result {
                session.last_event = Some(event.clone());
            }
            result
        })
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    let event = result?;
    info!(game_id = id, position, event = %event, "Move handled");
    Ok((event, session))
}

fn restart(
    state: &AppState,
    id: &str,
) -> Result<(TurnEvent, GameSession), ApiError> {
    let (event, session) = state
        .sessions
        .update(id, |session| {
            let event = session.game.restart();
            session.last_event = Some(event.clone());
            event
        })
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    info!(game_id = id, "Game restarted");
    Ok((event, session))
}

fn new_game(state: &AppState, req: NewGameRequest) -> Result<GameSession, ApiError> {
    let (default_x, default_o) = state.sessions.default_players();
    let player_x = non_blank(&req.player_x).unwrap_or(default_x).to_string();
    let player_o = non_blank(&req.player_o).unwrap_or(default_o).to_string();
    let id = req
        .id
        .filter(|id| !id.trim().is_empty())
        .map(checked_id)
        .transpose()?;
    Ok(state.sessions.create(id, &player_x, &player_o))
}

fn non_blank(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}
