//! Game phase and trick types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::pattern::Pattern;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Table created, nothing dealt yet.
    Init,
    /// Waiting for the deck to be shuffled and dealt.
    Dealing,
    /// Seats bid for the Landlord seat.
    Bidding,
    /// Every seat may grab the Landlord seat, doubling the multiplier.
    Grabbing,
    /// Trick play.
    Playing,
    /// A seat has emptied its hand.
    GameOver,
}

/// The open trick: the last accepted play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastPlay {
    /// Seat that played it.
    pub seat: usize,
    /// Cards played, ascending by rank.
    pub cards: Vec<Card>,
    /// Their classification.
    pub pattern: Pattern,
}

/// Auction bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Auction {
    /// Highest amount bid so far (0 if nobody bid).
    pub high_bid: u8,
    /// Seat holding the highest bid.
    pub high_bidder: Option<usize>,
    /// Bids (including passes) received this round.
    pub bids_seen: u8,
    /// Grab responses received.
    pub grabs_seen: u8,
    /// Most recent seat that chose to grab.
    pub last_grabber: Option<usize>,
}
