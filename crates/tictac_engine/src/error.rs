//! Error types for the game engine.

/// Error that can occur when querying the board or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameFinished,

    /// A consistency check failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cell() {
        let err = EngineError::CellOccupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "Cell (1, 2) is already occupied");

        let err = EngineError::InvalidCoordinate { row: 3, col: 0 };
        assert!(err.to_string().contains("(3, 0)"));
    }
}
