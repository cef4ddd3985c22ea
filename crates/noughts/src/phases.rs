//! Game outcome and turn phase.
//!
//! Neither type is stored: both are derived from a board (and, for the phase,
//! the session's configuration) every time they are asked for.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of classifying a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// Every cell is occupied and no line is complete.
    Draw,
    /// The mark completed a line.
    Won(Mark),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
        }
    }
}

/// Whose turn it is in a session, or that the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    HumanToMove,
    /// Waiting for the computer's move.
    ComputerToMove,
    /// Absorbing until the session is reset.
    Terminal(Outcome),
}

impl Phase {
    /// Returns true for [`Phase::Terminal`].
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::HumanToMove => write!(f, "human to move"),
            Phase::ComputerToMove => write!(f, "computer to move"),
            Phase::Terminal(outcome) => write!(f, "game over ({})", outcome),
        }
    }
}
