//! Game engine and state management.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::options::{GameOptions, SEATS};
use crate::player::Player;

mod actions;
mod assist;
mod auction;
mod deal;
mod scoring;
pub mod state;

pub use state::{Auction, LastPlay, Phase};

/// Returns the seat after `seat`.
const fn next_seat(seat: usize) -> usize {
    (seat + 1) % SEATS
}

/// Mutable table state, guarded as one unit so every action is applied
/// atomically.
struct Table {
    phase: Phase,
    players: [Player; SEATS],
    bottom: Vec<Card>,
    turn: usize,
    last_play: Option<LastPlay>,
    passes: u8,
    auction: Auction,
    multiplier: u32,
    landlord: Option<usize>,
    winner: Option<usize>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Clears every seat and picks a random starting seat for the next deal.
    fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.turn = self.rng.random_range(0..SEATS);
        self.bottom.clear();
        self.last_play = None;
        self.passes = 0;
        self.auction = Auction::default();
        self.multiplier = 1;
        self.landlord = None;
        self.winner = None;
        self.phase = Phase::Dealing;
    }
}

/// A Landlord table engine: three seats, the auction, trick play and scoring.
///
/// All actions take `&self`; the table state sits behind one lock, so each
/// call runs to completion against a consistent state. Actions are only
/// accepted from the seat whose turn it is, in the matching [`Phase`].
pub struct Game {
    options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// The seed drives the shuffle, the starting seat and the AI's random
    /// choices, so equal seeds replay identically.
    ///
    /// # Example
    ///
    /// ```
    /// use landlord::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Init);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = core::array::from_fn(|seat| {
            Player::new(seat, options.names[seat].clone(), options.human[seat])
        });

        Self {
            table: Mutex::new(Table {
                phase: Phase::Init,
                players,
                bottom: Vec::new(),
                turn: 0,
                last_play: None,
                passes: 0,
                auction: Auction::default(),
                multiplier: 1,
                landlord: None,
                winner: None,
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
            options,
        }
    }

    /// Resets the table for a new deal and moves to [`Phase::Dealing`].
    ///
    /// Hands, roles, the auction and the multiplier are cleared and a random
    /// starting seat is drawn.
    pub fn reset(&self) {
        self.table.lock().reset();
    }

    /// Returns the table options.
    ///
    /// Seat control is changed through [`Game::set_human`], which keeps the
    /// options and the seats in step.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Marks a seat as human- or AI-driven.
    pub fn set_human(&mut self, seat: usize, human: bool) {
        if let Some(player) = self.table.get_mut().players.get_mut(seat) {
            player.set_human(human);
        }
        if let Some(flag) = self.options.human.get_mut(seat) {
            *flag = human;
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().phase
    }

    /// Returns the seat whose turn it is.
    pub fn current_seat(&self) -> usize {
        self.table.lock().turn
    }

    /// Returns a snapshot of a seat.
    pub fn player(&self, seat: usize) -> Option<Player> {
        self.table.lock().players.get(seat).cloned()
    }

    /// Returns the cards held by a seat.
    pub fn hand(&self, seat: usize) -> Option<Vec<Card>> {
        self.table
            .lock()
            .players
            .get(seat)
            .map(|p| p.cards().to_vec())
    }

    /// Returns the number of cards held by each seat.
    pub fn card_counts(&self) -> [usize; SEATS] {
        let table = self.table.lock();
        core::array::from_fn(|seat| table.players[seat].card_count())
    }

    /// Returns the first human seat, if any.
    pub fn human_seat(&self) -> Option<usize> {
        self.table.lock().players.iter().position(Player::is_human)
    }

    /// Returns the three bottom cards (empty before dealing).
    ///
    /// They stay visible after being handed to the Landlord.
    pub fn bottom_cards(&self) -> Vec<Card> {
        self.table.lock().bottom.clone()
    }

    /// Returns the open trick, if any.
    pub fn last_play(&self) -> Option<LastPlay> {
        self.table.lock().last_play.clone()
    }

    /// Returns the number of consecutive passes on the open trick.
    pub fn pass_count(&self) -> u8 {
        self.table.lock().passes
    }

    /// Returns the auction bookkeeping.
    pub fn auction(&self) -> Auction {
        self.table.lock().auction
    }

    /// Returns the highest auction bid so far.
    pub fn high_bid(&self) -> u8 {
        self.table.lock().auction.high_bid
    }

    /// Returns the cumulative stake multiplier.
    pub fn multiplier(&self) -> u32 {
        self.table.lock().multiplier
    }

    /// Returns the Landlord's seat once the auction has resolved.
    pub fn landlord(&self) -> Option<usize> {
        self.table.lock().landlord
    }

    /// Returns the winning seat once the game is over.
    pub fn winner(&self) -> Option<usize> {
        self.table.lock().winner
    }
}
