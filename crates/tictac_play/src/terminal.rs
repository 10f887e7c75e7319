//! Line-oriented terminal front end.
//!
//! Reads one command per line, forwards it to the engine and prints the
//! resulting state. All game rules live in `tictac_engine`.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictac_engine::{GameMode, GameOutcome, GameSession, Mark};
use tracing::{debug, info, instrument, warn};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current mark at (row, col).
    Place {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Start a new game, keeping statistics.
    Restart,
    /// Switch game mode.
    Mode(GameMode),
    /// Redraw the board and status.
    Board,
    /// Show the move history.
    History,
    /// Show win/tie counters.
    Stats,
    /// Show moves per player and the position heat map.
    Analysis,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Unrecognised command word.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// `mode` followed by something that is not a mode.
    #[display("Unknown mode: {} (expected one of {})", _0, mode_names())]
    UnknownMode(String),
}

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .collect();

        match words.as_slice() {
            [] => Err(InputError::Empty),
            ["mode", name] => GameMode::from_str(name)
                .map(Input::Mode)
                .map_err(|_| InputError::UnknownMode(name.to_string())),
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(Input::Place { row, col }),
                _ => Err(InputError::Unknown(line.trim().to_string())),
            },
            ["restart" | "reset" | "new"] => Ok(Input::Restart),
            ["board"] => Ok(Input::Board),
            ["history"] => Ok(Input::History),
            ["stats"] => Ok(Input::Stats),
            ["analysis"] => Ok(Input::Analysis),
            ["help" | "?"] => Ok(Input::Help),
            ["quit" | "exit" | "q"] => Ok(Input::Quit),
            _ => Err(InputError::Unknown(line.trim().to_string())),
        }
    }
}

/// Comma-separated list of mode names for messages.
pub fn mode_names() -> String {
    GameMode::all()
        .map(|mode| mode.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

const HELP: &str = "\
Commands:
  <row> <col>     place your mark (rows and columns are 0-2)
  restart         start a new game (statistics are kept)
  mode <name>     switch mode: two-player, easy, hard
  board           show the board
  history         list the moves of this game
  stats           show wins and ties
  analysis        moves per player and position heat map
  quit            leave";

/// Terminal session: a game plus the stream it is rendered to.
pub struct Terminal<W: Write> {
    session: GameSession,
    out: W,
}

impl<W: Write> Terminal<W> {
    /// Creates a terminal front end for a session.
    pub fn new(session: GameSession, out: W) -> Self {
        Self { session, out }
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Processes input lines until `quit` or end of input.
    #[instrument(skip(self, input), fields(mode = %self.session.mode()))]
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Starting terminal game");
        writeln!(self.out, "Tic Tac Toe - {}", self.session.mode().label())?;
        writeln!(self.out, "Type `help` for commands.")?;
        self.render_board()?;

        for line in input.lines() {
            let line = line?;
            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(InputError::Empty) => continue,
                Err(e) => {
                    debug!(error = %e, "Unparsed input");
                    writeln!(self.out, "{e}")?;
                }
            }
        }

        info!(finished = self.session.statistics().total(), "Leaving terminal game");
        Ok(())
    }

    fn handle(&mut self, command: Input) -> Result<()> {
        match command {
            Input::Place { row, col } => match self.session.apply_move(row, col) {
                Ok(_) => self.render_board()?,
                Err(e) => {
                    warn!(row, col, error = %e, "Move rejected");
                    writeln!(self.out, "{e}")?;
                }
            },
            Input::Restart => {
                self.session.reset();
                self.render_board()?;
            }
            Input::Mode(mode) => {
                self.session.set_mode(mode);
                writeln!(self.out, "Mode: {}", mode.label())?;
                self.render_board()?;
            }
            Input::Board => self.render_board()?,
            Input::History => self.render_history()?,
            Input::Stats => self.render_stats()?,
            Input::Analysis => self.render_analysis()?,
            Input::Help => writeln!(self.out, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn render_board(&mut self) -> Result<()> {
        write!(self.out, "{}", self.session.board())?;
        match self.session.outcome() {
            GameOutcome::InProgress => {
                writeln!(self.out, "Current player: {}", self.session.current_mark())?;
            }
            outcome => {
                writeln!(self.out, "{outcome}")?;
                if let Some(line) = self.session.winning_line() {
                    let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                    writeln!(self.out, "Winning line: {}", cells.join(" "))?;
                }
            }
        }
        Ok(())
    }

    fn render_history(&mut self) -> Result<()> {
        if self.session.history().is_empty() {
            writeln!(self.out, "No moves yet.")?;
        }
        for played in self.session.history() {
            writeln!(self.out, "{played}")?;
        }
        Ok(())
    }

    fn render_stats(&mut self) -> Result<()> {
        let stats = self.session.statistics();
        writeln!(self.out, "Player X wins: {}", stats.x_wins())?;
        writeln!(self.out, "Player O wins: {}", stats.o_wins())?;
        writeln!(self.out, "Ties: {}", stats.ties())?;
        Ok(())
    }

    fn render_analysis(&mut self) -> Result<()> {
        if self.session.history().is_empty() {
            writeln!(self.out, "No moves to analyse.")?;
            return Ok(());
        }
        let analysis = self.session.analysis();
        writeln!(
            self.out,
            "Moves per player: X {}, O {}",
            analysis.moves_by(Mark::X),
            analysis.moves_by(Mark::O)
        )?;
        writeln!(self.out, "Board position heat map:")?;
        for row in analysis.heatmap() {
            let counts: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(self.out, "  {}", counts.join(" "))?;
        }
        Ok(())
    }
}
