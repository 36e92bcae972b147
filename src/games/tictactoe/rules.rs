//! Win and tie evaluation.

use super::board::Board;
use super::position::Position;
use super::types::{Cell, Marker};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first pattern fully owned by `marker`.
#[instrument(skip(board))]
pub fn winning_pattern(board: &Board, marker: Marker) -> Option<[Position; 3]> {
    WIN_PATTERNS
        .into_iter()
        .find(|pattern| pattern.iter().all(|&pos| board.cell(pos) == Cell::Marked(marker)))
}

/// Checks if `marker` owns any winning line.
pub fn has_line(board: &Board, marker: Marker) -> bool {
    winning_pattern(board, marker).is_some()
}

/// A tie is a full board with no line for either marker.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && !has_line(board, Marker::X) && !has_line(board, Marker::O)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
            match c {
                'X' => {
                    board.place(pos, Marker::X);
                }
                'O' => {
                    board.place(pos, Marker::O);
                }
                _ => {}
            }
        }
        board
    }

    #[test]
    fn every_pattern_wins() {
        for pattern in WIN_PATTERNS {
            let mut board = Board::new();
            for pos in pattern {
                board.place(pos, Marker::O);
            }
            assert_eq!(winning_pattern(&board, Marker::O), Some(pattern));
            assert!(!has_line(&board, Marker::X));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let board = board_from("XXO......");
        assert!(!has_line(&board, Marker::X));
        assert!(!has_line(&board, Marker::O));
    }

    #[test]
    fn full_board_without_line_is_tie() {
        let board = board_from("XOXXOOOXX");
        assert!(is_tie(&board));
    }

    #[test]
    fn full_board_with_line_is_not_tie() {
        let board = board_from("XXXOOXOXO");
        assert!(!is_tie(&board));
    }
}
