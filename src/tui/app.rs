//! Application state and logic.

use super::input::Action;
use crate::games::tictactoe::{Game, Position, TurnEvent};
use tracing::debug;

/// Hot-seat terminal app: both players share the keyboard.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a freshly started game.
    pub fn new(player_x: &str, player_o: &str) -> Self {
        let game = Game::start(player_x, player_o);
        let status_message = game.status_message();
        Self {
            game,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a key action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Play(pos) => {
                self.cursor = pos;
                let event = self.game.play(pos);
                self.show(event);
            }
            Action::Restart => {
                let event = self.game.restart();
                self.show(event);
            }
            Action::Quit => self.should_quit = true,
            Action::Ignore => {}
        }
    }

    fn show(&mut self, event: TurnEvent) {
        self.status_message = if event.is_terminal() {
            format!("{} Press 'r' to restart or 'q' to quit.", event)
        } else {
            event.to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Marker};

    #[test]
    fn play_updates_board_and_status() {
        let mut app = App::new("Ann", "Bob");
        assert_eq!(app.status_message(), "Ann's turn");

        app.handle_action(Action::Play(Position::TopLeft));
        assert_eq!(app.game().board().cell(Position::TopLeft), Cell::Marked(Marker::X));
        assert_eq!(app.status_message(), "Bob's turn");
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle_action(Action::Play(Position::TopLeft));
        assert_eq!(app.status_message(), "Cell is already taken. Try again.");
    }

    #[test]
    fn win_message_mentions_restart() {
        let mut app = App::new("Ann", "Bob");
        for index in [0, 3, 1, 4, 2] {
            let pos = Position::from_index(index).unwrap();
            app.handle_action(Action::Play(pos));
        }
        assert!(app.game().is_over());
        assert_eq!(app.status_message(), "Ann wins! Press 'r' to restart or 'q' to quit.");

        app.handle_action(Action::Restart);
        assert_eq!(app.status_message(), "Game restarted. Ann's turn");
        assert_eq!(app.game().board().occupied(), 0);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new("Ann", "Bob");
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
