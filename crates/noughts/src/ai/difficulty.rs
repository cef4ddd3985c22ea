//! Difficulty tiers and the search policy each one selects.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Chance that the easy tier ignores the search and plays a random cell.
pub const EASY_RANDOM_MOVE_PROBABILITY: f64 = 0.6;

/// Ply cap used by the medium tier.
pub const MEDIUM_DEPTH_CAP: u32 = 3;

/// How strong the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random cell 60% of the time, full search otherwise.
    Easy,
    /// Search capped at three plies; deeper positions score as neutral.
    Medium,
    /// Full search to terminal positions.
    #[default]
    Hard,
}

impl Difficulty {
    /// Depth cap used whenever this tier runs the search.
    pub fn depth_cap(self) -> DepthCap {
        match self {
            Difficulty::Easy | Difficulty::Hard => DepthCap::Unbounded,
            Difficulty::Medium => DepthCap::Plies(MEDIUM_DEPTH_CAP),
        }
    }

    /// Probability of skipping the search for a uniformly random cell.
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_RANDOM_MOVE_PROBABILITY,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }
}

/// Maximum search depth before a non-terminal node scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthCap {
    /// Search until every line ends in a win or a draw.
    Unbounded,
    /// Stop after this many plies below the candidate move.
    Plies(u32),
}

impl DepthCap {
    /// Whether a node at `depth` is cut off.
    pub fn reached(self, depth: u32) -> bool {
        match self {
            DepthCap::Unbounded => false,
            DepthCap::Plies(cap) => depth >= cap,
        }
    }
}
