//! Win/draw counters that outlive individual games.

use crate::types::{GameOutcome, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Aggregate results across every game finished in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Statistics {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    ties: u32,
}

impl Statistics {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.ties += 1,
            GameOutcome::InProgress => return,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, ties = self.ties, "Statistics updated");
    }

    /// Total number of finished games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}
