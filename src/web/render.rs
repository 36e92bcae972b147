//! HTML rendering for the game page.

use super::sessions::GameSession;
use crate::games::tictactoe::Position;
use std::fmt::Write;

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page for one game.
///
/// The session id goes into form actions unencoded, so it must pass
/// [`is_valid_game_id`](super::is_valid_game_id).
pub fn game_page(session: &GameSession) -> String {
    let id = escape_html(&session.id);
    let [player_x, player_o] = session.game.players();
    let mut html = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Tic Tac Toe</title>
<style>#gameboard {{ display: grid; grid-template-columns: repeat(3, 4rem); gap: 4px; }} .cell {{ width: 4rem; height: 4rem; font-size: 2rem; }}</style>
</head>
<body>
<h1>Tic Tac Toe</h1>
<p id="players">{x_name} (X) vs {o_name} (O)</p>
<div id="gameboard">
"#,
        x_name = escape_html(player_x.name()),
        o_name = escape_html(player_o.name()),
    );

    for pos in Position::ALL {
        let index = pos.to_index();
        let _ = writeln!(
            html,
            r#"<form method="post" action="/games/{id}/cells/{index}"><button class="cell" type="submit" data-index="{index}" title="{label}">{symbol}</button></form>"#,
            label = pos.label(),
            symbol = session.game.board().cell(pos).symbol(),
        );
    }

    let _ = write!(
        html,
        r#"</div>
<p id="message">{message}</p>
<form method="post" action="/games/{id}/restart"><button id="restart" type="submit">Restart</button></form>
<form method="post" action="/games/{id}/new">
<label>Player X <input name="player_x" value="{x_name}"></label>
<label>Player O <input name="player_o" value="{o_name}"></label>
<button type="submit">New game</button>
</form>
</body>
</html>
"#,
        message = escape_html(&session.message()),
        x_name = escape_html(player_x.name()),
        o_name = escape_html(player_o.name()),
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Game;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn page_lists_nine_cells_and_status() {
        let mut game = Game::start("Ann", "<Bob>");
        game.play_turn(0).unwrap();
        let session = GameSession::new("g1".to_string(), game);
        let html = game_page(&session);

        assert_eq!(html.matches(r#"class="cell""#).count(), 9);
        assert!(html.contains(r#"action="/games/g1/cells/8""#));
        assert!(html.contains(r#"data-index="0" title="Top-left">X</button>"#));
        assert!(html.contains("&lt;Bob&gt;&#39;s turn"));
        assert!(!html.contains("<Bob>"));
    }
}
