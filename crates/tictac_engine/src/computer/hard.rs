//! Heuristic computer player.
//!
//! Rules, first match wins: take a winning cell, block the opponent's
//! winning cell, take the center, take a random corner, take a random edge.
//! This is greedy and can be beaten by a fork.

use super::Strategy;
use crate::rules::check_winner;
use crate::types::{Board, Coord, Mark};
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::debug;

/// Fixed-priority heuristic player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hard;

/// First empty cell (row-major) where `mark` would complete a line.
fn completing_cell(board: &Board, mark: Mark) -> Option<Coord> {
    board.empty_cells().into_iter().find(|&coord| {
        board
            .with_mark(coord, mark)
            .is_ok_and(|trial| check_winner(&trial) == Some(mark))
    })
}

fn random_empty(board: &Board, candidates: &[Coord], rng: &mut dyn RngCore) -> Option<Coord> {
    let open: Vec<Coord> = candidates
        .iter()
        .copied()
        .filter(|&coord| board.cell(coord).mark().is_none())
        .collect();
    open.choose(rng).copied()
}

impl Strategy for Hard {
    fn choose_move(
        &self,
        board: &Board,
        me: Mark,
        opponent: Mark,
        rng: &mut dyn RngCore,
    ) -> Option<Coord> {
        if let Some(coord) = completing_cell(board, me) {
            debug!(%coord, "Taking winning cell");
            return Some(coord);
        }
        if let Some(coord) = completing_cell(board, opponent) {
            debug!(%coord, "Blocking opponent");
            return Some(coord);
        }
        if board.cell(Coord::CENTER).mark().is_none() {
            return Some(Coord::CENTER);
        }
        random_empty(board, &Coord::CORNERS, rng).or_else(|| random_empty(board, &Coord::EDGES, rng))
    }

    fn name(&self) -> &'static str {
        "hard"
    }
}
