//! Seat state: hand, role, and auction bookkeeping.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// A seat's role for the current deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// The auction has not resolved yet.
    #[default]
    Unknown,
    /// Won the auction; plays alone and receives the bottom cards.
    Landlord,
    /// One of the two allied seats against the Landlord.
    Farmer,
}

/// One of the three seats at the table.
///
/// Human and AI seats share this type; they differ only in which driver
/// supplies their actions.
#[derive(Debug, Clone)]
pub struct Player {
    seat: usize,
    name: String,
    is_human: bool,
    hand: Hand,
    role: Role,
    bid: u8,
}

impl Player {
    /// Creates an empty seat.
    #[must_use]
    pub const fn new(seat: usize, name: String, is_human: bool) -> Self {
        Self {
            seat,
            name,
            is_human,
            hand: Hand::new(),
            role: Role::Unknown,
            bid: 0,
        }
    }

    /// Seat index (0..3).
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether a human drives this seat.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.is_human
    }

    /// Marks the seat as human- or AI-driven.
    pub const fn set_human(&mut self, is_human: bool) {
        self.is_human = is_human;
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards in hand, ascending by rank.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Receives a batch of cards.
    pub fn receive_cards(&mut self, cards: &[Card]) {
        self.hand.add_cards(cards);
    }

    /// Removes played cards from the hand.
    ///
    /// Returns `false` and leaves the hand unchanged if any card is not held.
    pub fn play_cards(&mut self, cards: &[Card]) -> bool {
        self.hand.remove_cards(cards)
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether any cards remain.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Sets the role.
    pub const fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Returns whether this seat is the Landlord.
    #[must_use]
    pub const fn is_landlord(&self) -> bool {
        matches!(self.role, Role::Landlord)
    }

    /// The last auction amount recorded (0 means passed).
    #[must_use]
    pub const fn bid(&self) -> u8 {
        self.bid
    }

    /// Records an auction amount.
    pub const fn set_bid(&mut self, amount: u8) {
        self.bid = amount;
    }

    /// Clears hand, role and bid for a new deal.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.role = Role::Unknown;
        self.bid = 0;
    }
}
