//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here keeps state, so every
//! function can be called on any nine-cell board, reachable or not.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// Lines are checked in [`LINES`] order and the first complete one decides
/// the winner. A full board with no complete line is a draw.
#[instrument(level = "trace", ret)]
pub fn evaluate(board: &Board) -> Outcome {
    board.outcome()
}

/// Returns the indices of empty cells in ascending order.
#[instrument(level = "trace", ret)]
pub fn available_moves(board: &Board) -> Vec<usize> {
    board.empty_indices().collect()
}
