//! The 3x3 grid.

use super::position::Position;
use super::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only ever move from [`Cell::Empty`] to a marker; the only way back
/// is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all cells as a read-only view.
    pub fn read(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Writes `marker` into an empty cell.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// already occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            debug!(?cell, "Cell already occupied");
            return false;
        }
        *cell = Cell::Marked(marker);
        true
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions still open for play.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect()
    }
}

/// Renders the grid with 1-based hints in empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Marked(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_hints_and_markers() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::X);
        board.place(Position::TopLeft, Marker::O);
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn empty_positions_shrink_as_cells_fill() {
        let mut board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        board.place(Position::BottomRight, Marker::O);
        assert!(!board.empty_positions().contains(&Position::BottomRight));
        assert_eq!(board.occupied(), 1);
    }
}
