use alloc::vec::Vec;

use crate::ai::{self, AiAction};
use crate::card::Card;
use crate::error::ActionError;

use super::{Game, Phase};

impl Game {
    /// Returns the decision an automated seat would make now.
    ///
    /// Returns `None` for human seats, seats not on turn, and phases with
    /// nothing to decide. The driver feeds the result back through
    /// [`Game::apply`].
    pub fn ai_action(&self, seat: usize) -> Option<AiAction> {
        let mut table = self.table.lock();
        let table = &mut *table;

        let player = table.players.get(seat)?;
        if player.is_human() || table.turn != seat {
            return None;
        }

        match table.phase {
            Phase::Bidding => Some(AiAction::Bid(ai::decide_bid(
                player.hand(),
                table.auction.high_bid,
            ))),
            Phase::Grabbing => Some(AiAction::Grab(ai::should_grab(player.hand()))),
            Phase::Playing => {
                let open = table.last_play.as_ref().map(|last| &last.pattern);
                let play = ai::decide_play(
                    player.hand(),
                    open,
                    self.options.cooperative_pass,
                    &mut table.rng,
                );
                Some(play.map_or(AiAction::Pass, AiAction::Play))
            }
            Phase::Init | Phase::Dealing | Phase::GameOver => None,
        }
    }

    /// Suggests a play for the seat on turn, if it is human-driven.
    ///
    /// Uses the same lead and follow heuristics as the automated seats,
    /// without the random cooperative pass. Returns `None` outside the playing
    /// phase, when the seat on turn is automated, or when the suggestion is
    /// to pass.
    pub fn get_hint(&self) -> Option<Vec<Card>> {
        let table = self.table.lock();
        if table.phase != Phase::Playing {
            return None;
        }

        let player = table.players.get(table.turn)?;
        if !player.is_human() {
            return None;
        }

        let hand = player.hand();
        match &table.last_play {
            None => Some(ai::lead(hand)),
            Some(last) => ai::follow(hand, &last.pattern),
        }
    }

    /// Applies a decision for `seat` through the matching action.
    ///
    /// # Errors
    ///
    /// Returns the underlying action's error.
    pub fn apply(&self, seat: usize, action: &AiAction) -> Result<(), ActionError> {
        match action {
            AiAction::Bid(amount) => self.bid(seat, *amount)?,
            AiAction::Grab(accept) => self.grab(seat, *accept)?,
            AiAction::Play(cards) => self.play_cards(seat, cards)?,
            AiAction::Pass => self.pass(seat)?,
        }
        Ok(())
    }
}
