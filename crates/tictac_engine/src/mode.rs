//! Game modes.

use crate::computer::Difficulty;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Who plays O.
///
/// Parses from and displays as kebab-case: `two-player`, `easy`, `hard`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// Human X against the random computer.
    #[strum(serialize = "easy")]
    #[serde(rename = "easy")]
    VsComputerEasy,
    /// Human X against the heuristic computer.
    #[strum(serialize = "hard")]
    #[serde(rename = "hard")]
    VsComputerHard,
}

impl GameMode {
    /// Every mode, in menu order.
    pub fn all() -> impl Iterator<Item = GameMode> {
        Self::iter()
    }

    /// Returns the computer's difficulty, or `None` for two players.
    #[instrument]
    pub fn computer(self) -> Option<Difficulty> {
        match self {
            Self::TwoPlayer => None,
            Self::VsComputerEasy => Some(Difficulty::Easy),
            Self::VsComputerHard => Some(Difficulty::Hard),
        }
    }

    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "Two Players",
            Self::VsComputerEasy => "vs Computer (Easy)",
            Self::VsComputerHard => "vs Computer (Hard)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_and_display_agree() {
        for mode in GameMode::all() {
            assert_eq!(GameMode::from_str(&mode.to_string()), Ok(mode));
        }
        assert_eq!(GameMode::from_str("two-player"), Ok(GameMode::TwoPlayer));
        assert_eq!(GameMode::from_str("hard"), Ok(GameMode::VsComputerHard));
        assert!(GameMode::from_str("impossible").is_err());
    }

    #[test]
    fn test_computer_difficulty() {
        assert_eq!(GameMode::TwoPlayer.computer(), None);
        assert_eq!(GameMode::VsComputerEasy.computer(), Some(Difficulty::Easy));
        assert_eq!(GameMode::VsComputerHard.computer(), Some(Difficulty::Hard));
    }
}
