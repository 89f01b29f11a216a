use tracing::{debug, trace};

use crate::ai::MAX_BID;
use crate::error::{BidError, GrabError};
use crate::options::SEATS;
use crate::player::Role;

use super::{Game, Phase, Table, next_seat};

impl Table {
    /// Makes `seat` the Landlord, hands over the bottom cards and opens play
    /// with the Landlord to lead.
    fn set_landlord(&mut self, seat: usize) {
        for (i, player) in self.players.iter_mut().enumerate() {
            player.set_role(if i == seat { Role::Landlord } else { Role::Farmer });
        }
        let bottom = self.bottom.clone();
        self.players[seat].receive_cards(&bottom);

        self.landlord = Some(seat);
        self.turn = seat;
        self.phase = Phase::Playing;
        self.last_play = None;
        self.passes = 0;

        debug!(
            seat,
            high_bid = self.auction.high_bid,
            multiplier = self.multiplier,
            "landlord assigned"
        );
    }
}

impl Game {
    /// Bids `amount` for the Landlord seat; 0 passes.
    ///
    /// A bid of 3 wins the auction immediately. Once all three seats have
    /// answered, the grab round opens at seat 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in bidding state, the seat is out
    /// of range or not on turn, or `amount` exceeds 3. Returns
    /// [`BidError::NoBids`] when this was the third pass in a row: the table
    /// has then been reset to [`Phase::Dealing`] and must be dealt again.
    pub fn bid(&self, seat: usize, amount: u8) -> Result<(), BidError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Bidding {
            return Err(BidError::InvalidState);
        }
        if seat >= SEATS {
            return Err(BidError::SeatNotFound);
        }
        if table.turn != seat {
            return Err(BidError::NotYourTurn);
        }
        if amount > MAX_BID {
            return Err(BidError::InvalidAmount);
        }

        if amount > table.auction.high_bid {
            table.auction.high_bid = amount;
            table.auction.high_bidder = Some(seat);
        }
        table.players[seat].set_bid(amount);
        table.auction.bids_seen += 1;
        trace!(seat, amount, "bid");

        if amount == MAX_BID {
            table.set_landlord(seat);
            return Ok(());
        }

        table.turn = next_seat(seat);

        if usize::from(table.auction.bids_seen) >= SEATS {
            if table.auction.high_bid == 0 {
                debug!("no seat bid, resetting for a redeal");
                table.reset();
                return Err(BidError::NoBids);
            }

            table.phase = Phase::Grabbing;
            table.turn = 0;
            table.auction.grabs_seen = 0;
            table.auction.last_grabber = None;
            debug!(
                high_bid = table.auction.high_bid,
                high_bidder = ?table.auction.high_bidder,
                "bidding closed, grab round opens"
            );
        }

        Ok(())
    }

    /// Grabs (or declines) the Landlord seat. Each grab doubles the
    /// multiplier.
    ///
    /// After all three seats answer, the last seat that grabbed becomes
    /// Landlord, or the high bidder if nobody did.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in grabbing state, or the seat is
    /// out of range or not on turn.
    pub fn grab(&self, seat: usize, accept: bool) -> Result<(), GrabError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Grabbing {
            return Err(GrabError::InvalidState);
        }
        if seat >= SEATS {
            return Err(GrabError::SeatNotFound);
        }
        if table.turn != seat {
            return Err(GrabError::NotYourTurn);
        }

        if accept {
            table.auction.last_grabber = Some(seat);
            table.multiplier *= 2;
        }
        table.auction.grabs_seen += 1;
        table.turn = next_seat(seat);
        trace!(seat, accept, multiplier = table.multiplier, "grab");

        if usize::from(table.auction.grabs_seen) >= SEATS {
            let landlord = table.auction.last_grabber.or(table.auction.high_bidder);
            if let Some(landlord) = landlord {
                table.set_landlord(landlord);
            }
        }

        Ok(())
    }
}
