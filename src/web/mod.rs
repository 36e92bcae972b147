//! Browser front end: serves the game page and a JSON API.

mod api;
mod render;
mod routes;
mod sessions;

pub use api::{ApiError, ErrorBody, EventResponse, GameSnapshot, MoveRequest, NewGameRequest};
pub use render::{escape_html, game_page};
pub use sessions::{GameId, GameSession, MAX_GAME_ID_LEN, SessionManager, is_valid_game_id};

use crate::config::AppConfig;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live games.
    pub sessions: SessionManager,
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds state with an empty session registry.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionManager::new(
            config.player_x().clone(),
            config.player_o().clone(),
            *config.server().max_games(),
        );
        Self {
            sessions,
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health_check))
        .route("/games/{id}", get(routes::show_game))
        .route("/games/{id}/cells/{position}", post(routes::click_cell))
        .route("/games/{id}/restart", post(routes::click_restart))
        .route("/games/{id}/new", post(routes::submit_new_game))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(routes::list_games).post(routes::create_game))
        .route("/games/{id}", get(routes::get_game))
        .route("/games/{id}/moves", post(routes::make_move))
        .route("/games/{id}/restart", post(routes::restart_game))
}

/// Binds the configured address and serves until the process exits.
#[instrument(
    skip(config),
    fields(host = %config.server().host(), port = *config.server().port())
)]
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server().host(), config.server().port());
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Server ready, open the address in a browser");

    axum::serve(listener, app).await?;
    Ok(())
}
