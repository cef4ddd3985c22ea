//! Minimax scoring over immutable boards.
//!
//! Each recursive call receives its own copy of the board, so there is no
//! shared state to restore on the way back up.

use crate::{Board, Mark, Outcome};

use super::DepthCap;

/// Score of a computer win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Score of a human win found at depth 0.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Fixed inputs shared by every node of one search.
#[derive(Debug, Clone, Copy)]
struct Search {
    computer: Mark,
    human: Mark,
    cap: DepthCap,
}

impl Search {
    /// Scores `board` from the computer's point of view.
    ///
    /// `depth` counts plies below the top-level candidate move. Faster
    /// computer wins score higher and faster human wins score lower.
    fn minimax(&self, board: Board, depth: u32, maximizing: bool) -> i32 {
        let plies = depth as i32;
        match board.outcome() {
            Outcome::Won(mark) if mark == self.computer => return WIN_SCORE - plies,
            Outcome::Won(_) => return plies + LOSS_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        if self.cap.reached(depth) {
            return 0;
        }

        let mark = if maximizing {
            self.computer
        } else {
            self.human
        };
        let scores = board
            .empty_indices()
            .map(|index| self.minimax(board.with_mark(index, mark), depth + 1, !maximizing));

        let best = if maximizing { scores.max() } else { scores.min() };
        // A non-terminal board always has an empty cell.
        best.unwrap_or(0)
    }
}

/// Scores every available cell for the computer.
///
/// Each candidate is placed for `computer`, then searched starting at the
/// human's ply with depth 0. Results are in ascending cell order.
pub fn score_moves(board: &Board, computer: Mark, human: Mark, cap: DepthCap) -> Vec<(usize, i32)> {
    let search = Search {
        computer,
        human,
        cap,
    };
    board
        .empty_indices()
        .map(|index| {
            let score = search.minimax(board.with_mark(index, computer), 0, false);
            (index, score)
        })
        .collect()
}
