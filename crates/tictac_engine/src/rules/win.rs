//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, GameOutcome, Mark};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then the main diagonal,
/// then the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_coords(line: [(usize, usize); 3]) -> [Coord; 3] {
    line.map(|(row, col)| Coord::ALL[row * 3 + col])
}

/// Returns the first completed line and its owner.
fn first_completed(board: &Board) -> Option<(Mark, [Coord; 3])> {
    LINES.into_iter().map(line_coords).find_map(|[a, b, c]| {
        let cell = board.cell(a);
        match cell {
            Cell::Occupied(mark) if cell == board.cell(b) && cell == board.cell(c) => {
                Some((mark, [a, b, c]))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) holding
/// three equal marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    first_completed(board).map(|(mark, _)| mark)
}

/// Returns the coordinates of the winning line, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Coord; 3]> {
    first_completed(board).map(|(_, line)| line)
}

/// Classifies the board as won, drawn or still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::Won(mark)
    } else if super::is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in moves {
            board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[(0, 2, Mark::O), (1, 2, Mark::O), (2, 2, Mark::O)]);
        assert_eq!(evaluate(&board), GameOutcome::Won(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(
            winning_line(&board),
            Some([
                Coord::new(0, 2).unwrap(),
                Coord::CENTER,
                Coord::new(2, 0).unwrap(),
            ])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(&[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::O)]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X O X / O X O / O X X
        let board = board_from(&[
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::X),
            (1, 2, Mark::O),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::X),
        ]);
        assert_eq!(evaluate(&board), GameOutcome::Won(Mark::X));
    }
}
