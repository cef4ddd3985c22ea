//! Mark balance: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{Mark, Session};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Mark::X);
        let o = session.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}
