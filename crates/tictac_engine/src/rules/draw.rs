//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameOutcome, Mark};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let layout = [
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::X),
            (1, 2, Mark::X),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::O),
        ];
        for (row, col, mark) in layout {
            board.place(row, col, mark).unwrap();
        }

        assert!(is_draw(&board));
        assert_eq!(super::super::evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for (row, col, mark) in [
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ] {
            board.place(row, col, mark).unwrap();
        }
        assert!(!is_draw(&board));
    }
}
