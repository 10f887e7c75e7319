//! First-class invariants for a game in play.
//!
//! Checked after every placement; a failure is reported as
//! [`EngineError::InvariantViolation`](crate::EngineError) instead of
//! letting a corrupted session keep running.

use crate::rules;
use crate::session::GameSession;
use crate::types::{GameOutcome, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, returning the descriptions of those violated.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(I1::description());
        }
        if !I2::holds(state) {
            violations.push(I2::description());
        }
        if !I3::holds(state) {
            violations.push(I3::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every mark on the board has exactly one recorded move.
pub struct MarksMatchHistory;

impl Invariant<GameSession> for MarksMatchHistory {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let placed = board.count(Mark::X) + board.count(Mark::O);
        placed == session.history().len()
            && session
                .history()
                .iter()
                .all(|played| board.cell(*played.coord()).mark() == Some(*played.mark()))
    }

    fn description() -> &'static str {
        "Marks on the board match the move history"
    }
}

/// Invariant: moves alternate X, O, X, ... and the mark to move follows on.
pub struct AlternatingTurns;

impl Invariant<GameSession> for AlternatingTurns {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let alternates = history.iter().enumerate().all(|(index, played)| {
            let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
            *played.mark() == expected
        });
        if !alternates {
            return false;
        }
        if session.outcome().is_finished() {
            return true;
        }
        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        session.current_mark() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

/// Invariant: the cached outcome matches the board, so a full board is
/// never reported as in progress.
pub struct OutcomeMatchesBoard;

impl Invariant<GameSession> for OutcomeMatchesBoard {
    fn holds(session: &GameSession) -> bool {
        let outcome = session.outcome();
        outcome == rules::evaluate(session.board())
            && !(session.board().is_full() && outcome == GameOutcome::InProgress)
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}

/// All invariants of a game session.
pub type SessionInvariants = (MarksMatchHistory, AlternatingTurns, OutcomeMatchesBoard);
