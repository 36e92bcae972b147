//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use crate::web::is_valid_game_id;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings shared by the web and terminal front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the player who plays X and moves first.
    player_x: String,

    /// Name of the player who plays O.
    player_o: String,

    /// HTTP server settings.
    server: ServerConfig,

    /// File the terminal UI writes its log to.
    tui_log_file: PathBuf,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    host: String,

    /// Port to bind to.
    port: u16,

    /// Game id that `/` redirects to. The only id started on first visit.
    default_game: String,

    /// Most games kept at once; the oldest is dropped to make room.
    max_games: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_x: "Player 1".to_string(),
            player_o: "Player 2".to_string(),
            server: ServerConfig::default(),
            tui_log_file: PathBuf::from("tictactoe_tui.log"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            default_game: "default".to_string(),
            max_games: 1000,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the player names, ignoring `None`.
    pub fn with_players(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }

    /// Overrides the listener address, ignoring `None`.
    pub fn with_listener(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_x.trim().is_empty() || self.player_o.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if !is_valid_game_id(&self.server.default_game) {
            return Err(ConfigError::new(
                "server.default_game must be 1-64 characters of [A-Za-z0-9_-]".to_string(),
            ));
        }
        if self.server.max_games == 0 {
            return Err(ConfigError::new("server.max_games must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
