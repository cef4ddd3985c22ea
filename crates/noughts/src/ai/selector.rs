//! Move selection for the computer player.

use rand::Rng;
use tracing::{debug, instrument};

use super::minimax::score_moves;
use super::{DepthCap, Difficulty};
use crate::error::SelectError;
use crate::{Board, Mark};

/// Chooses the computer's next cell.
///
/// - **Easy**: with probability 0.6 a uniformly random empty cell, otherwise
///   the unbounded search.
/// - **Medium**: the search capped at three plies.
/// - **Hard**: the unbounded search.
///
/// The search scores every empty cell and picks uniformly among the cells
/// that share the best score. All randomness comes from `rng`.
///
/// Returns `Ok(None)` when the board has no empty cell. The board is taken
/// by reference and never modified.
///
/// # Errors
///
/// Returns [`SelectError::SameMarks`] if `computer == human`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn pick_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Option<usize>, SelectError> {
    if computer == human {
        return Err(SelectError::SameMarks(computer));
    }

    let available: Vec<usize> = board.empty_indices().collect();
    if available.is_empty() {
        debug!("No empty cell left");
        return Ok(None);
    }

    let probability = difficulty.random_move_probability();
    if probability > 0.0 && rng.random_bool(probability) {
        let index = available[rng.random_range(0..available.len())];
        debug!(index, "Playing random cell");
        return Ok(Some(index));
    }

    Ok(best_move(board, computer, human, difficulty.depth_cap(), rng))
}

/// Runs the search and breaks ties uniformly at random.
fn best_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    human: Mark,
    cap: DepthCap,
    rng: &mut R,
) -> Option<usize> {
    let scores = score_moves(board, computer, human, cap);
    let best = scores.iter().map(|&(_, score)| score).max()?;
    let ties: Vec<usize> = scores
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(index, _)| index)
        .collect();

    let index = ties[rng.random_range(0..ties.len())];
    debug!(?scores, best, tie_set = ties.len(), index, "Search finished");
    Some(index)
}
