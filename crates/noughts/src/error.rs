//! Error types for board, move selection, and session operations.

use super::{Mark, Phase};

/// Error building or mutating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A board needs exactly nine squares.
    #[display("Board needs 9 squares, got {}", _0)]
    WrongLength(usize),

    /// Cell index past 8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for BoardError {}

/// Precondition failure in move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Computer and human were given the same mark.
    #[display("Computer and human cannot both play {}", _0)]
    SameMarks(Mark),
}

impl std::error::Error for SelectError {}

/// Error applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has ended; reset before playing again.
    #[display("Game is already over")]
    GameOver,

    /// The requested side is not the one to move.
    #[display("Not your turn: {}", _0)]
    NotYourTurn(Phase),

    /// Cell index past 8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The selector found no empty cell on a board that is not terminal.
    #[display("No move available")]
    NoMoveAvailable,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// Move selection rejected its inputs.
    #[display("Move selection failed: {}", _0)]
    Select(SelectError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Select(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        Self::Select(err)
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange(index) => Self::OutOfRange(index),
            BoardError::Occupied(index) => Self::SquareOccupied(index),
            BoardError::WrongLength(_) => Self::InvariantViolation(err.to_string()),
        }
    }
}
