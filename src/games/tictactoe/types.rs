//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The symbol a player writes on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Marker {
    /// Marker of the first player.
    X,
    /// Marker of the second player.
    O,
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Text shown for this cell; empty cells render as an empty string.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Marked(Marker::X) => "X",
            Cell::Marked(Marker::O) => "O",
        }
    }
}

/// A named participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), "");
        assert_eq!(Cell::Marked(Marker::X).symbol(), "X");
        assert_eq!(Cell::Marked(Marker::O).symbol(), "O");
    }

    #[test]
    fn player_display_includes_marker() {
        let player = Player::new("Ada".to_string(), Marker::X);
        assert_eq!(player.to_string(), "Ada (X)");
        assert_eq!(player.name(), "Ada");
    }
}
