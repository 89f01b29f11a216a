//! Game result types for scoring.

use crate::player::Role;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The seat that emptied its hand first.
    pub winner: usize,
    /// The winner's role.
    pub winner_role: Role,
    /// The Landlord's seat.
    pub landlord: usize,
    /// Whether the Landlord won.
    pub landlord_won: bool,
    /// The winning auction bid (1..=3).
    pub base_stake: u8,
    /// Cumulative multiplier from grabs and bombs.
    pub multiplier: u32,
    /// `base_stake * multiplier`.
    pub stake: u32,
}
