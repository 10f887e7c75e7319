//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer in computer modes).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Content of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// A validated (row, col) position on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = EngineError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Every coordinate in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// The middle of the board.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// The four corners.
    pub const CORNERS: [Coord; 4] = [
        Coord::at(0, 0),
        Coord::at(0, 2),
        Coord::at(2, 0),
        Coord::at(2, 2),
    ];

    /// The four edge midpoints.
    pub const EDGES: [Coord; 4] = [
        Coord::at(0, 1),
        Coord::at(1, 0),
        Coord::at(1, 2),
        Coord::at(2, 1),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, rejecting anything off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row > 2 || col > 2 {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Checks whether the cell at (row, col) is empty.
    #[instrument(skip(self))]
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        let coord = Coord::new(row, col)?;
        Ok(self.cell(coord) == Cell::Empty)
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .into_iter()
            .filter(|&coord| self.cell(coord) == Cell::Empty)
            .collect()
    }

    /// Places a mark on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        let coord = Coord::new(row, col)?;
        self.place_at(coord, mark)
    }

    /// Places a mark at an already-validated coordinate.
    pub fn place_at(&mut self, coord: Coord, mark: Mark) -> Result<(), EngineError> {
        if self.cell(coord) != Cell::Empty {
            return Err(EngineError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[coord.row][coord.col] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `coord`.
    ///
    /// Used for look-ahead; the receiver is left untouched.
    pub fn with_mark(&self, coord: Coord, mark: Mark) -> Result<Board, EngineError> {
        let mut trial = self.clone();
        trial.place_at(coord, mark)?;
        Ok(trial)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        Coord::ALL
            .into_iter()
            .all(|coord| self.cell(coord) != Cell::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        Coord::ALL
            .into_iter()
            .filter(|&coord| self.cell(coord) == Cell::Occupied(mark))
            .count()
    }

    /// Read-only snapshot of the grid for rendering.
    pub fn grid(&self) -> [[Cell; 3]; 3] {
        self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result classification of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game is won or drawn.
    pub fn is_finished(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "Player {mark} wins!"),
            GameOutcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coord::new(2, 2).is_ok());
        assert_eq!(
            Coord::new(3, 1),
            Err(EngineError::InvalidCoordinate { row: 3, col: 1 })
        );
        assert!(Board::new().is_empty(0, 3).is_err());
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let coord: Coord = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(coord, Coord::new(2, 1).unwrap());

        let err = serde_json::from_str::<Coord>(r#"{"row":3,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(0, 1, Mark::X).unwrap();
        board.place(2, 2, Mark::O).unwrap();

        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], Coord::new(0, 0).unwrap());
        assert_eq!(empty[1], Coord::new(0, 2).unwrap());
        assert_eq!(empty[6], Coord::new(2, 1).unwrap());
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(1, 1, Mark::X).unwrap();

        let result = board.place(1, 1, Mark::O);
        assert_eq!(result, Err(EngineError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(board.cell(Coord::CENTER), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let trial = board.with_mark(Coord::CENTER, Mark::O).unwrap();

        assert!(board.is_empty(1, 1).unwrap());
        assert!(!trial.is_empty(1, 1).unwrap());
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();

        assert_eq!(board.to_string(), "  0 1 2\n0 X . .\n1 . O .\n2 . . .\n");
    }
}
