//! Game session: turn order, computer replies and statistics.

use crate::analysis::Analysis;
use crate::computer::ComputerPlayer;
use crate::error::EngineError;
use crate::history::{Move, MoveLog};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::mode::GameMode;
use crate::rules;
use crate::stats::Statistics;
use crate::types::{Board, Coord, GameOutcome, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, instrument, warn};

/// The mark the computer plays in computer modes.
pub const COMPUTER_MARK: Mark = Mark::O;

/// One player's session: the game in progress plus results of earlier games.
///
/// The board, move log, mark to move and outcome belong to the current game
/// and are cleared by [`reset`](Self::reset). Statistics survive resets and
/// mode changes.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    log: MoveLog,
    current: Mark,
    outcome: GameOutcome,
    mode: GameMode,
    stats: Statistics,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session whose random choices are seeded from entropy.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Creates a session with reproducible random choices.
    #[instrument]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        info!(%mode, "Creating game session");
        Self {
            board: Board::new(),
            log: MoveLog::new(),
            current: Mark::X,
            outcome: GameOutcome::InProgress,
            mode,
            stats: Statistics::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the mark to move. Only meaningful while in progress.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Returns the moves of the current game in order.
    pub fn history(&self) -> &[Move] {
        self.log.history()
    }

    /// Returns results of every game finished in this session.
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Coordinates of the completed line once the game is won.
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        rules::winning_line(&self.board)
    }

    /// Move counts and heat map for the current game.
    pub fn analysis(&self) -> Analysis {
        Analysis::from_history(self.log.history())
    }

    /// Plays the current mark at (row, col).
    ///
    /// In computer modes the computer's reply is played before returning,
    /// so on success it is the human's turn again or the game is over.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, EngineError> {
        let coord = Coord::new(row, col).inspect_err(|e| warn!(error = %e, "Rejected move"))?;
        self.place(coord)?;

        if let Some(reply) = self.computer_reply() {
            debug_assert!(
                self.board.cell(reply).mark().is_none(),
                "computer chose occupied cell {reply}"
            );
            self.place(reply).inspect_err(|e| {
                error!(%reply, error = %e, "Computer reply failed after human move was applied");
            })?;
        }

        Ok(self.outcome)
    }

    fn place(&mut self, coord: Coord) -> Result<(), EngineError> {
        if self.outcome.is_finished() {
            warn!(%coord, "Move attempted after game over");
            return Err(EngineError::GameFinished);
        }

        let mark = self.current;
        self.board
            .place_at(coord, mark)
            .inspect_err(|e| warn!(error = %e, "Rejected move"))?;
        let recorded = self.log.append(mark, coord);
        self.outcome = rules::evaluate(&self.board);

        info!(%recorded, outcome = %self.outcome, "Move applied");

        if !self.outcome.is_finished() {
            self.current = mark.opponent();
        }

        // Statistics are only touched once the post-move state checks out.
        SessionInvariants::check_all(self).map_err(|violations| {
            EngineError::InvariantViolation(format!("Postcondition failed: {}", violations.join("; ")))
        })?;

        if self.outcome.is_finished() {
            self.stats.record(self.outcome);
            info!(outcome = %self.outcome, moves = self.log.len(), "Game finished");
        }
        Ok(())
    }

    fn computer_reply(&mut self) -> Option<Coord> {
        let difficulty = self.mode.computer()?;
        if self.outcome.is_finished() || self.current != COMPUTER_MARK {
            return None;
        }
        debug!(%difficulty, "Computer to move");
        ComputerPlayer::new(difficulty).choose_move(
            &self.board,
            COMPUTER_MARK,
            COMPUTER_MARK.opponent(),
            &mut self.rng,
        )
    }

    /// Starts a new game. Statistics are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.log.clear();
        self.current = Mark::X;
        self.outcome = GameOutcome::InProgress;
        info!("Game reset");
    }

    /// Switches mode, resetting the game if the mode changed.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }
        info!(to = %mode, "Changing game mode");
        self.mode = mode;
        self.reset();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
