//! Random computer player.

use super::Strategy;
use crate::types::{Board, Coord, Mark};
use rand::RngCore;
use rand::seq::SliceRandom;

/// Picks uniformly among the empty cells. No look-ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Easy;

impl Strategy for Easy {
    fn choose_move(
        &self,
        board: &Board,
        _me: Mark,
        _opponent: Mark,
        rng: &mut dyn RngCore,
    ) -> Option<Coord> {
        board.empty_cells().choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "easy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for coord in Coord::ALL {
            board.place_at(coord, mark).unwrap();
            mark = mark.opponent();
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Easy.choose_move(&board, Mark::O, Mark::X, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut board = Board::new();
        let last = Coord::new(2, 1).unwrap();
        let mut mark = Mark::X;
        for coord in Coord::ALL.into_iter().filter(|&c| c != last) {
            board.place_at(coord, mark).unwrap();
            mark = mark.opponent();
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            Easy.choose_move(&board, Mark::O, Mark::X, &mut rng),
            Some(last)
        );
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let first = Easy.choose_move(&board, Mark::O, Mark::X, &mut StdRng::seed_from_u64(42));
        let second = Easy.choose_move(&board, Mark::O, Mark::X, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
