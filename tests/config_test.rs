//! Tests for loading configuration.

use std::io::Write;
use tictactoe_web::AppConfig;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.player_x(), "Player 1");
    assert_eq!(config.player_o(), "Player 2");
    assert_eq!(*config.server().port(), 3000);
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_x = "Ann"

[server]
port = 8080
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_x(), "Ann");
    assert_eq!(config.player_o(), "Player 2");
    assert_eq!(*config.server().port(), 8080);
    assert_eq!(config.server().host(), "127.0.0.1");
}

#[test]
fn blank_names_are_rejected() {
    let err = AppConfig::from_toml(r#"player_o = "  ""#).unwrap_err();
    assert!(err.message.contains("must not be empty"));
}

#[test]
fn malformed_toml_is_rejected() {
    let err = AppConfig::from_toml("player_x = ").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn cli_overrides_apply() {
    let config = AppConfig::default()
        .with_players(Some("Ann".to_string()), None)
        .with_listener(None, Some(9000));
    assert_eq!(config.player_x(), "Ann");
    assert_eq!(config.player_o(), "Player 2");
    assert_eq!(*config.server().port(), 9000);
}

#[test]
fn default_game_must_be_url_safe() {
    let err = AppConfig::from_toml("[server]\ndefault_game = \"a/b\"").unwrap_err();
    assert!(err.message.starts_with("server.default_game"));

    let config = AppConfig::from_toml("[server]\ndefault_game = \"lobby-1\"").unwrap();
    assert_eq!(config.server().default_game(), "lobby-1");
    assert_eq!(*config.server().max_games(), 1000);
}

#[test]
fn zero_max_games_is_rejected() {
    let err = AppConfig::from_toml("[server]\nmax_games = 0").unwrap_err();
    assert!(err.message.contains("max_games"));
}
