use tracing::{debug, trace};

use crate::card::{self, Card};
use crate::error::PlayError;
use crate::options::SEATS;
use crate::pattern::{self, PatternKind};

use super::{Game, LastPlay, Phase, Table, next_seat};

impl Table {
    fn ensure_turn(&self, seat: usize) -> Result<(), PlayError> {
        if self.phase != Phase::Playing {
            return Err(PlayError::InvalidState);
        }
        if seat >= SEATS {
            return Err(PlayError::SeatNotFound);
        }
        if self.turn != seat {
            return Err(PlayError::NotYourTurn);
        }
        Ok(())
    }

    fn pass(&mut self, seat: usize) -> Result<(), PlayError> {
        let leader = match &self.last_play {
            Some(last) if last.seat != seat => last.seat,
            _ => return Err(PlayError::CannotPass),
        };

        self.passes += 1;
        trace!(seat, passes = self.passes, "pass");

        // Both opponents passed: the leader starts a fresh trick.
        if usize::from(self.passes) >= SEATS - 1 {
            self.last_play = None;
            self.passes = 0;
            self.turn = leader;
            debug!(seat = leader, "trick closed, leader to lead again");
        } else {
            self.turn = next_seat(seat);
        }

        Ok(())
    }
}

impl Game {
    /// Plays cards from `seat`'s hand. An empty slice passes.
    ///
    /// On an open trick the play must beat it. A bomb doubles the multiplier
    /// and the joker bomb quadruples it. Emptying the hand ends the game with
    /// `seat` as the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, the seat is out
    /// of range or not on turn, a card is not held, the cards do not form a
    /// valid pattern, or the pattern does not beat the open trick. Passing
    /// fails as in [`Game::pass`].
    pub fn play_cards(&self, seat: usize, cards: &[Card]) -> Result<(), PlayError> {
        let mut table = self.table.lock();
        table.ensure_turn(seat)?;

        if cards.is_empty() {
            return table.pass(seat);
        }

        if !table.players[seat].hand().contains_all(cards) {
            return Err(PlayError::CardNotHeld);
        }

        let pattern = pattern::classify(cards).ok_or(PlayError::InvalidPattern)?;

        if let Some(last) = &table.last_play {
            if !pattern::can_beat(cards, &last.cards) {
                return Err(PlayError::CannotBeat);
            }
        }

        table.players[seat].play_cards(cards);
        table.last_play = Some(LastPlay {
            seat,
            cards: card::sorted(cards),
            pattern,
        });
        table.passes = 0;

        match pattern.kind {
            PatternKind::Bomb => table.multiplier *= 2,
            PatternKind::JokerBomb => table.multiplier *= 4,
            _ => {}
        }
        trace!(seat, kind = pattern.kind.name(), value = pattern.value, "play");

        if !table.players[seat].has_cards() {
            table.winner = Some(seat);
            table.phase = Phase::GameOver;
            debug!(seat, multiplier = table.multiplier, "game over");
            return Ok(());
        }

        table.turn = next_seat(seat);

        Ok(())
    }

    /// Passes on the open trick.
    ///
    /// After the two other seats pass in a row, the trick closes and its
    /// leader leads again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, the seat is out
    /// of range or not on turn, or there is no open trick to pass on (no play
    /// yet, or the seat led it).
    pub fn pass(&self, seat: usize) -> Result<(), PlayError> {
        let mut table = self.table.lock();
        table.ensure_turn(seat)?;
        table.pass(seat)
    }
}
