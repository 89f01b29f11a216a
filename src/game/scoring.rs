use crate::result::GameResult;

use super::{Game, Phase};

impl Game {
    /// Returns the result of a finished game.
    ///
    /// The stake is the winning bid times the multiplier. Returns `None`
    /// until a seat has emptied its hand.
    pub fn game_over_result(&self) -> Option<GameResult> {
        let table = self.table.lock();
        if table.phase != Phase::GameOver {
            return None;
        }

        let winner = table.winner?;
        let landlord = table.landlord?;
        let base_stake = table.auction.high_bid;

        Some(GameResult {
            winner,
            winner_role: table.players[winner].role(),
            landlord,
            landlord_won: winner == landlord,
            base_stake,
            multiplier: table.multiplier,
            stake: u32::from(base_stake) * table.multiplier,
        })
    }
}
