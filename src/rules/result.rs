//! How a match ended.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryReason {
    /// The VP track reached the victory threshold.
    VictoryPoints,
    /// DEFCON fell to 1; the side that caused it loses.
    NuclearWar,
    /// A scoring card was still held at the end of a turn.
    HeldScoringCard,
    /// Wargames: the game ends and the VP leader wins.
    Wargames,
    FinalScoring,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// `None` for a draw.
    pub winner: Option<Side>,
    pub reason: VictoryReason,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: Option<Side>, reason: VictoryReason) -> Self {
        Self { winner, reason }
    }

    /// Decide a result from the sign of the VP track.
    #[must_use]
    pub fn by_vp(vp: i32, reason: VictoryReason) -> Self {
        let winner = match vp.signum() {
            1 => Some(Side::Ussr),
            -1 => Some(Side::Us),
            _ => None,
        };
        Self { winner, reason }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == Some(side)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(side) => write!(f, "{side} wins ({:?})", self.reason),
            None => write!(f, "draw ({:?})", self.reason),
        }
    }
}
