//! Keyboard handling.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    MoveCursor(Position),
    /// Play the given cell.
    Play(Position),
    /// Restart the game.
    Restart,
    /// Leave the UI.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c) => match Position::from_digit_key(c) {
            Some(pos) => Action::Play(pos),
            None => Action::Ignore,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys; edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
