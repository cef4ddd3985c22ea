//! Computer opponent: difficulty tiers and minimax move selection.

mod difficulty;
mod minimax;
mod selector;

pub use difficulty::{DepthCap, Difficulty};
pub use minimax::{LOSS_SCORE, WIN_SCORE, score_moves};
pub use selector::pick_move;
