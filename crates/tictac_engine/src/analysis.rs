//! Per-game analysis: move counts and a position heat map.

use crate::history::Move;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Summary of the moves played so far in a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Analysis {
    /// Moves played by X.
    x_moves: u32,
    /// Moves played by O.
    o_moves: u32,
    /// How many moves landed on each cell, indexed `[row][col]`.
    heatmap: [[u32; 3]; 3],
}

impl Analysis {
    /// Builds the analysis from a move history.
    #[instrument(skip(moves), fields(len = moves.len()))]
    pub fn from_history(moves: &[Move]) -> Self {
        let mut analysis = Self::default();
        for played in moves {
            match played.mark() {
                Mark::X => analysis.x_moves += 1,
                Mark::O => analysis.o_moves += 1,
            }
            analysis.heatmap[played.coord().row()][played.coord().col()] += 1;
        }
        analysis
    }

    /// Moves played by `mark`.
    pub fn moves_by(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_moves,
            Mark::O => self.o_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MoveLog;
    use crate::types::Coord;

    #[test]
    fn test_counts_and_heatmap() {
        let mut log = MoveLog::new();
        log.append(Mark::X, Coord::CENTER);
        log.append(Mark::O, Coord::new(0, 0).unwrap());
        log.append(Mark::X, Coord::new(2, 1).unwrap());

        let analysis = Analysis::from_history(log.history());
        assert_eq!(analysis.moves_by(Mark::X), 2);
        assert_eq!(analysis.moves_by(Mark::O), 1);
        assert_eq!(analysis.heatmap()[1][1], 1);
        assert_eq!(analysis.heatmap()[0][0], 1);
        assert_eq!(analysis.heatmap()[2][1], 1);
        assert_eq!(analysis.heatmap()[0][1], 0);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(Analysis::from_history(&[]), Analysis::default());
    }
}
