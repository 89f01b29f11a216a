//! Error types for game operations.
//!
//! Every rejected action leaves the table untouched, except
//! [`BidError::NoBids`], which reports that the auction was void and the
//! table has been reset for a fresh deal.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The supplied deck is not exactly one full 54-card deck.
    #[error("deck is not a full 54-card deck")]
    InvalidDeck,
}

/// Errors that can occur during the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// Invalid game state for bidding.
    #[error("invalid game state for bidding")]
    InvalidState,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Bid amount above the maximum of 3.
    #[error("bid amount must be between 0 and 3")]
    InvalidAmount,
    /// All three seats passed; the table was reset for a redeal.
    #[error("no seat bid; the table must be redealt")]
    NoBids,
}

/// Errors that can occur during the grab round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrabError {
    /// Invalid game state for grabbing.
    #[error("invalid game state for grabbing")]
    InvalidState,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
}

/// Errors that can occur when playing cards or passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// A submitted card is not in the seat's hand (or was submitted twice).
    #[error("card not held")]
    CardNotHeld,
    /// The cards do not form a recognized pattern.
    #[error("cards do not form a valid pattern")]
    InvalidPattern,
    /// The pattern does not beat the open trick.
    #[error("play does not beat the open trick")]
    CannotBeat,
    /// The seat must lead: there is no open trick, or the seat owns it.
    #[error("cannot pass on an own or empty trick")]
    CannotPass,
}

/// Any rejected action, as returned by [`crate::Game::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The bid was rejected.
    #[error(transparent)]
    Bid(#[from] BidError),
    /// The grab was rejected.
    #[error(transparent)]
    Grab(#[from] GrabError),
    /// The play or pass was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
}
