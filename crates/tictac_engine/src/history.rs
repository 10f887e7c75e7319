//! Move recording for history and analysis display.
//!
//! Moves are domain events: once appended to the log they are never
//! mutated, and the log only shrinks when a game is reset.

use crate::types::{Coord, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A placed mark: the `sequence`-th move of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Move {
    /// 1-based position in the game's move order.
    sequence: usize,
    /// The mark that was placed.
    mark: Mark,
    /// Where it was placed.
    coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {}", self.sequence, self.mark, self.coord)
    }
}

/// Append-only ordered log of the current game's moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a move, numbering it after the moves already logged.
    #[instrument(skip(self))]
    pub fn append(&mut self, mark: Mark, coord: Coord) -> Move {
        let recorded = Move {
            sequence: self.moves.len() + 1,
            mark,
            coord,
        };
        self.moves.push(recorded);
        debug!(sequence = recorded.sequence, "Move recorded");
        recorded
    }

    /// The full log in insertion order.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves recorded.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true when no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Empties the log.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
