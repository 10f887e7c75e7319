//! Computer opponents.
//!
//! Each difficulty is a [`Strategy`]. Random tie-breaks draw from an
//! injected RNG so callers can make play reproducible by seeding it.

mod easy;
mod hard;

pub use easy::Easy;
pub use hard::Hard;

use crate::types::{Board, Coord, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Trait for move-selection strategies.
pub trait Strategy {
    /// Picks a cell for `me` to play, or `None` when the board is full.
    fn choose_move(
        &self,
        board: &Board,
        me: Mark,
        opponent: Mark,
        rng: &mut dyn RngCore,
    ) -> Option<Coord>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}

/// Computer skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Fixed-priority heuristic.
    Hard,
}

/// A computer opponent playing at a fixed difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
}

impl ComputerPlayer {
    fn strategy(&self) -> &'static dyn Strategy {
        match self.difficulty {
            Difficulty::Easy => &Easy,
            Difficulty::Hard => &Hard,
        }
    }

    /// Chooses the computer's next cell.
    #[instrument(skip(self, board, rng), fields(difficulty = %self.difficulty))]
    pub fn choose_move(
        &self,
        board: &Board,
        me: Mark,
        opponent: Mark,
        rng: &mut dyn RngCore,
    ) -> Option<Coord> {
        let strategy = self.strategy();
        let choice = strategy.choose_move(board, me, opponent, rng);
        debug!(strategy = strategy.name(), choice = ?choice, "Computer chose move");
        choice
    }
}
