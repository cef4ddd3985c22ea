//! History consistent: the move list explains the board exactly.

use super::Invariant;
use crate::{Session, Square};

/// Invariant: every history entry matches its cell, no cell appears twice,
/// and the number of occupied cells equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let history = session.history();

        if board.filled() != history.len() {
            return false;
        }

        let mut seen = [false; 9];
        history.iter().all(|mv| {
            let fresh = !std::mem::replace(&mut seen[mv.index.min(8)], true);
            fresh && board.get(mv.index) == Some(Square::Occupied(mv.mark))
        })
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}
