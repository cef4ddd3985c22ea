//! Turn management for one human-versus-computer game session.
//!
//! A [`Session`] is a plain value owned by the UI. It holds the board, the
//! mark to move, the move history and a running tally. The phase and the
//! outcome are recomputed from the board on every query.

use super::action::{Move, Placement, Side};
use super::contracts::{Contract, GameNotOver, MoveContract, SidesTurn};
use super::error::SessionError;
use super::invariants::{InvariantSet, SessionInvariants, describe};
use super::{Board, Difficulty, GameConfig, Mark, Outcome, Phase, pick_move};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Games won, lost and drawn across resets of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome, human: Mark) {
        match outcome {
            Outcome::Won(mark) if mark == human => self.human_wins += 1,
            Outcome::Won(_) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// One game session between a human and the computer.
///
/// Serializes to a plain snapshot for the UI. Deserializing re-checks every
/// session invariant, so a snapshot that no sequence of moves could produce
/// is rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
    pub(crate) tally: Tally,
}

impl Session {
    /// Starts a session with an empty board and X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Current phase, derived from the board and the configured marks.
    pub fn phase(&self) -> Phase {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else if self.to_move == *self.config.human_mark() {
            Phase::HumanToMove
        } else {
            Phase::ComputerToMove
        }
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Results of finished games in this session.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Places the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// Fails without changing the session if the game is over, it is not the
    /// human's turn, or the cell is out of range or occupied.
    #[instrument(skip(self), fields(human = %self.config.human_mark()))]
    pub fn play_human(&mut self, index: usize) -> Result<Phase, SessionError> {
        self.apply(Placement::new(Side::Human, index))
    }

    /// Lets the computer choose and place its mark.
    ///
    /// Returns the chosen cell. The configured difficulty is read on every
    /// call, so [`Session::set_difficulty`] takes effect on the next move.
    ///
    /// # Errors
    ///
    /// Fails without changing the session if the game is over or it is not
    /// the computer's turn.
    #[instrument(skip(self, rng), fields(difficulty = %self.config.difficulty()))]
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<usize, SessionError> {
        GameNotOver::check(self)?;
        SidesTurn::check(Side::Computer, self)?;

        let computer = self.config.computer_mark();
        let human = *self.config.human_mark();
        let index = pick_move(&self.board, computer, human, *self.config.difficulty(), rng)?
            .ok_or(SessionError::NoMoveAvailable)?;

        debug!(index, "Computer chose cell");
        self.apply(Placement::new(Side::Computer, index))?;
        Ok(index)
    }

    /// Clears the board and sets X to move, keeping configuration and tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Phase {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.history.clear();
        let phase = self.phase();
        debug!(%phase, "Session reset");
        phase
    }

    /// Replaces the configuration and starts a fresh game.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, config: GameConfig) -> Phase {
        self.config = config;
        self.reset()
    }

    /// Changes the difficulty without resetting the board.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config = self.config.with_difficulty(difficulty);
    }

    /// Validates and applies a placement, committing only if every
    /// postcondition holds.
    fn apply(&mut self, placement: Placement) -> Result<Phase, SessionError> {
        MoveContract::pre(self, &placement)?;

        let mark = self.to_move;
        let mut next = self.clone();
        next.board.place(placement.index, mark)?;
        next.history.push(Move::new(mark, placement.index));
        next.to_move = mark.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        let outcome = next.board.outcome();
        if outcome.is_terminal() {
            next.tally.record(outcome, *next.config.human_mark());
            info!(%outcome, moves = next.history.len(), "Game over");
        }

        *self = next;
        Ok(self.phase())
    }
}

/// Wire form of a [`Session`] before validation.
#[derive(Deserialize)]
struct SessionSnapshot {
    config: GameConfig,
    board: Board,
    to_move: Mark,
    history: Vec<Move>,
    tally: Tally,
}

impl TryFrom<SessionSnapshot> for Session {
    type Error = SessionError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let session = Self {
            config: snapshot.config,
            board: snapshot.board,
            to_move: snapshot.to_move,
            history: snapshot.history,
            tally: snapshot.tally,
        };

        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Rejected session snapshot");
            SessionError::InvariantViolation(format!("Snapshot rejected: {}", descriptions))
        })?;
        Ok(session)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionRng;

    #[test]
    fn test_starting_phase_follows_human_mark() {
        let x = Session::new(GameConfig::new(Mark::X, Difficulty::Hard));
        assert_eq!(x.phase(), Phase::HumanToMove);

        let o = Session::new(GameConfig::new(Mark::O, Difficulty::Hard));
        assert_eq!(o.phase(), Phase::ComputerToMove);
        assert_eq!(o.to_move(), Mark::X);
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let mut session = Session::default();
        assert_eq!(session.play_human(4), Ok(Phase::ComputerToMove));
        assert_eq!(session.history(), &[Move::new(Mark::X, 4)]);
        assert_eq!(session.to_move(), Mark::O);
    }

    #[test]
    fn test_failed_move_leaves_session_unchanged() {
        let mut session = Session::default();
        session.play_human(4).unwrap();
        let before = session.clone();

        assert_eq!(
            session.play_human(0),
            Err(SessionError::NotYourTurn(Phase::ComputerToMove))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_computer_move_hands_turn_back() {
        let mut session = Session::default();
        session.play_human(4).unwrap();
        let mut rng = SessionRng::new(11);
        let index = session.play_computer(&mut rng).unwrap();
        assert_ne!(index, 4);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.board().get(index), Some(crate::Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_computer_cannot_move_on_human_turn() {
        let mut session = Session::default();
        let mut rng = SessionRng::new(12);
        assert_eq!(
            session.play_computer(&mut rng),
            Err(SessionError::NotYourTurn(Phase::HumanToMove))
        );
    }

    #[test]
    fn test_terminal_is_absorbing_and_tallied() {
        // X on 0 and 1, O on 3 and 4, X (the human) to move.
        let mut session = Session::default();
        session.board = Board::new();
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
            session.board.place(index, mark).unwrap();
            session.history.push(Move::new(mark, index));
        }

        assert_eq!(session.play_human(2), Ok(Phase::Terminal(Outcome::Won(Mark::X))));
        assert_eq!(session.tally().human_wins, 1);
        assert_eq!(session.play_human(5), Err(SessionError::GameOver));

        let mut rng = SessionRng::new(13);
        assert_eq!(session.play_computer(&mut rng), Err(SessionError::GameOver));
        assert_eq!(session.tally().games(), 1);
    }

    #[test]
    fn test_reset_keeps_tally_and_config() {
        let mut session = Session::new(GameConfig::new(Mark::O, Difficulty::Easy));
        session.tally.draws = 2;
        let mut rng = SessionRng::new(14);
        session.play_computer(&mut rng).unwrap();

        assert_eq!(session.reset(), Phase::ComputerToMove);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Mark::X);
        assert!(session.history().is_empty());
        assert_eq!(session.tally().draws, 2);
        assert_eq!(session.config().difficulty(), &Difficulty::Easy);
    }

    #[test]
    fn test_reconfigure_switches_sides() {
        let mut session = Session::default();
        session.play_human(0).unwrap();
        let phase = session.reconfigure(GameConfig::new(Mark::O, Difficulty::Medium));
        assert_eq!(phase, Phase::ComputerToMove);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_snapshot_round_trips_after_moves() {
        let mut session = Session::default();
        session.play_human(4).unwrap();
        let mut rng = SessionRng::new(15);
        session.play_computer(&mut rng).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_snapshot_with_unexplained_mark_rejected() {
        // An X on the board that the history does not account for.
        let mut session = Session::default();
        session.board.place(0, Mark::X).unwrap();
        session.to_move = Mark::O;

        let json = serde_json::to_string(&session).unwrap();
        let err = serde_json::from_str::<Session>(&json).unwrap_err();
        assert!(err.to_string().contains("Move history matches the board"), "{}", err);
    }

    #[test]
    fn test_set_difficulty_keeps_board() {
        let mut session = Session::default();
        session.play_human(0).unwrap();
        session.set_difficulty(Difficulty::Easy);
        assert_eq!(session.config().difficulty(), &Difficulty::Easy);
        assert_eq!(session.history().len(), 1);
    }
}
