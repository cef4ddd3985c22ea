//! Moves and the sides that make them.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed on a cell. Sessions keep these as their move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// The cell it went into (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Which participant of a session is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The person at the UI.
    Human,
    /// The move selector.
    Computer,
}

/// A side's request to take a cell, before it is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Who is moving.
    pub side: Side,
    /// Requested cell.
    pub index: usize,
}

impl Placement {
    /// Creates a new placement request.
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}
