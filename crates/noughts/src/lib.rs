//! Noughts - tic-tac-toe core with a minimax computer opponent
//!
//! This library is the game logic behind a browser tic-tac-toe UI. The UI
//! owns a [`Session`] value and calls into the core; rendering and input
//! live entirely on the UI side.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies any board, [`available_moves`] lists
//!   empty cells.
//! - **Move selection**: [`pick_move`] runs random play or minimax depending
//!   on [`Difficulty`].
//! - **Session**: [`Session`] alternates human and computer turns, validates
//!   moves against contracts and keeps a tally across games.
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameConfig, Mark, Phase, Session};
//!
//! let config = GameConfig::new(Mark::X, Difficulty::Hard).with_seed(7);
//! let mut rng = config.rng();
//! let mut session = Session::new(config);
//!
//! assert_eq!(session.play_human(4), Ok(Phase::ComputerToMove));
//! let reply = session.play_computer(&mut rng).expect("computer's turn");
//! assert_ne!(reply, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod config;
mod contracts;
mod error;
mod phases;
mod rng;
mod rules;
mod session;
mod types;

pub mod invariants;

// Crate-level exports - Board types
pub use types::{BOARD_CELLS, Board, Mark, Square};

// Crate-level exports - Outcome and turn phase
pub use phases::{Outcome, Phase};

// Crate-level exports - Rules
pub use rules::{LINES, available_moves, evaluate, is_draw, winning_line};

// Crate-level exports - Move selection
pub use ai::{DepthCap, Difficulty, LOSS_SCORE, WIN_SCORE, pick_move, score_moves};

// Crate-level exports - Session management
pub use action::{Move, Placement, Side};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, LegalPlacement, MoveContract, SidesTurn,
};
pub use session::{Session, Tally};

// Crate-level exports - Configuration, randomness and errors
pub use config::{ConfigError, GameConfig};
pub use error::{BoardError, SelectError, SessionError};
pub use rng::SessionRng;
