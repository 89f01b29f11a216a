use alloc::vec::Vec;

use tracing::debug;

use crate::card::{self, Card};
use crate::error::DealError;
use crate::options::SEATS;

use super::{Game, Phase, Table};

/// Cards dealt to the seats; the rest are the bottom cards.
const DEALT: usize = 51;

impl Table {
    /// Deals `deck` round-robin from the current (starting) seat and moves
    /// to bidding. `deck` must be a full deck.
    fn deal(&mut self, deck: &[Card]) {
        let mut hands: [Vec<Card>; SEATS] = Default::default();
        for (i, card) in deck.iter().take(DEALT).enumerate() {
            hands[(self.turn + i) % SEATS].push(*card);
        }
        for (player, cards) in self.players.iter_mut().zip(&hands) {
            player.receive_cards(cards);
        }
        self.bottom = deck[DEALT..].to_vec();
        self.phase = Phase::Bidding;

        debug!(start_seat = self.turn, "cards dealt, bidding opens");
    }
}

impl Game {
    /// Starts a new game: resets the table and deals a fresh shuffled deck.
    pub fn start_new_game(&self) {
        let mut table = self.table.lock();
        table.reset();
        let deck = card::shuffled(&card::new_deck(), &mut table.rng);
        table.deal(&deck);
    }

    /// Shuffles a fresh deck and deals 17 cards to each seat, keeping 3 as
    /// bottom cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state (call
    /// [`Game::reset`] first).
    pub fn deal_cards(&self) -> Result<(), DealError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }

        let deck = card::shuffled(&card::new_deck(), &mut table.rng);
        table.deal(&deck);

        Ok(())
    }

    /// Deals a caller-arranged deck instead of a shuffled one.
    ///
    /// Card `i` of the first 51 goes to seat `(start + i) % 3`, where `start`
    /// is [`Game::current_seat`]; the last three become the bottom cards.
    /// Useful for replays and scripted scenarios.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or `deck` is not
    /// exactly one full deck.
    pub fn deal_from(&self, deck: &[Card]) -> Result<(), DealError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }
        if !card::is_full_deck(deck) {
            return Err(DealError::InvalidDeck);
        }

        table.deal(deck);

        Ok(())
    }
}
