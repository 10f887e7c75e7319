//! Tictac engine - pure tic-tac-toe game logic.
//!
//! The engine owns everything with algorithmic content: the board, win and
//! draw detection, the move log, the two computer strategies and the
//! session state machine that ties them together. Rendering is left to the
//! caller, which reads state back through [`GameSession`]'s accessors.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameMode, GameOutcome, GameSession, Mark};
//!
//! let mut session = GameSession::with_seed(GameMode::VsComputerHard, 7);
//! session.apply_move(0, 0)?;
//!
//! // The heuristic computer answers a corner opening with the center.
//! assert_eq!(session.history().len(), 2);
//! assert_eq!(session.current_mark(), Mark::X);
//! assert_eq!(session.outcome(), GameOutcome::InProgress);
//! # Ok::<(), tictac_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod computer;
mod error;
mod history;
mod invariants;
mod mode;
mod session;
mod stats;
mod types;

pub mod rules;

pub use analysis::Analysis;
pub use computer::{ComputerPlayer, Difficulty, Easy, Hard, Strategy};
pub use error::EngineError;
pub use history::{Move, MoveLog};
pub use invariants::{
    AlternatingTurns, Invariant, InvariantSet, MarksMatchHistory, OutcomeMatchesBoard,
    SessionInvariants,
};
pub use mode::GameMode;
pub use session::{COMPUTER_MARK, GameSession};
pub use stats::Statistics;
pub use types::{Board, Cell, Coord, GameOutcome, Mark};
