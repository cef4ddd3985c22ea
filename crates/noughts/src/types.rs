//! Core domain types for the 3x3 board.

use super::error::BoardError;
use super::phases::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    derive_more::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Moves first.
    #[serde(alias = "x")]
    #[display("X")]
    X,
    /// Moves second.
    #[serde(alias = "o")]
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

/// 3x3 board in row-major order.
///
/// Index layout:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
///
/// The board is a small `Copy` value, so search code works on copies and the
/// caller's board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_CELLS],
        }
    }

    /// Creates a board from nine squares.
    pub fn from_squares(squares: [Square; BOARD_CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for indices past 8 and
    /// [`BoardError::Occupied`] if the cell already holds a mark.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.get(index) {
            None => Err(BoardError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(BoardError::Occupied(index)),
            Some(Square::Empty) => {
                self.squares[index] = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Returns a copy of this board with `mark` at `index`.
    ///
    /// Callers pass indices taken from the board's own empty cells.
    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.squares[index] = Square::Occupied(mark);
        self
    }

    /// Iterates over the indices of empty cells in ascending order.
    pub(crate) fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Counts the occupied cells.
    pub fn filled(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Classifies the board without emitting spans.
    ///
    /// This is the hot path of the search; [`crate::evaluate`] is the
    /// instrumented entry point for callers.
    pub(crate) fn outcome(&self) -> Outcome {
        if let Some(winner) = super::rules::check_winner(self) {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    fn try_from(squares: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; BOARD_CELLS] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength(squares.len()))?;
        Ok(Self { squares })
    }
}

impl fmt::Display for Board {
    /// Renders rows as `X|O|3`, showing empty cells by their 1-based number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
