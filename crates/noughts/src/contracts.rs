//! Contract-based validation for session moves.
//!
//! A contract pairs preconditions, checked before a move is applied, with
//! postconditions relating the session before and after the move.

use super::action::{Placement, Side};
use super::error::SessionError;
use super::invariants::{InvariantSet, SessionInvariants, describe};
use super::{Phase, Session, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`SessionError::GameOver`] in the terminal phase.
    pub fn check(session: &Session) -> Result<(), SessionError> {
        if session.phase().is_terminal() {
            Err(SessionError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the acting side is the one to move.
pub struct SidesTurn;

impl SidesTurn {
    /// Fails with [`SessionError::NotYourTurn`] carrying the current phase.
    pub fn check(side: Side, session: &Session) -> Result<(), SessionError> {
        let phase = session.phase();
        let expected = match side {
            Side::Human => Phase::HumanToMove,
            Side::Computer => Phase::ComputerToMove,
        };
        if phase == expected {
            Ok(())
        } else {
            Err(SessionError::NotYourTurn(phase))
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`SessionError::OutOfRange`] or
    /// [`SessionError::SquareOccupied`].
    pub fn check(index: usize, session: &Session) -> Result<(), SessionError> {
        match session.board().get(index) {
            None => Err(SessionError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(SessionError::SquareOccupied(index)),
            Some(Square::Empty) => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: game not over, side's turn,
/// cell in range and empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates every precondition for a placement.
    #[instrument(skip(session))]
    pub fn check(placement: &Placement, session: &Session) -> Result<(), SessionError> {
        GameNotOver::check(session)?;
        SidesTurn::check(placement.side, session)?;
        CellIsEmpty::check(placement.index, session)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Postconditions:
/// - exactly one cell went from empty to a mark, nothing else changed
/// - every [`SessionInvariants`] member holds
pub struct MoveContract;

impl Contract<Session, Placement> for MoveContract {
    fn pre(session: &Session, placement: &Placement) -> Result<(), SessionError> {
        LegalPlacement::check(placement, session)
    }

    fn post(before: &Session, after: &Session) -> Result<(), SessionError> {
        let before_squares = before.board().squares();
        let after_squares = after.board().squares();
        let kept = before_squares
            .iter()
            .zip(after_squares)
            .all(|(b, a)| *b == Square::Empty || b == a);
        if !kept || after.board().filled() != before.board().filled() + 1 {
            warn!(before = %before.board(), after = %after.board(), "Board not monotonic");
            return Err(SessionError::InvariantViolation(
                "Postcondition failed: exactly one empty cell must be filled".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Session invariants violated");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
