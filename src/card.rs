//! Card types and deck utilities.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Card suit.
///
/// Suit never affects ordering; it only matters for card identity and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// The special suit shared by both jokers.
    Joker,
}

impl Suit {
    /// The four ordinary suits in deck order.
    pub const ORDINARY: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the display glyph for the suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Joker => "",
        }
    }
}

/// Rank of a Jack.
pub const RANK_JACK: u8 = 11;
/// Rank of a Queen.
pub const RANK_QUEEN: u8 = 12;
/// Rank of a King.
pub const RANK_KING: u8 = 13;
/// Rank of an Ace; the highest rank allowed in a run.
pub const RANK_ACE: u8 = 14;
/// Rank of a "2", ranked above the Ace.
pub const RANK_TWO: u8 = 15;
/// Rank of the small joker.
pub const RANK_SMALL_JOKER: u8 = 16;
/// Rank of the big joker.
pub const RANK_BIG_JOKER: u8 = 17;
/// Lowest rank in the deck ("3").
pub const RANK_LOWEST: u8 = 3;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 54;

/// A playing card.
///
/// The rank is on a single ordered scale: 3..=10 map to themselves, J=11,
/// Q=12, K=13, A=14, "2"=15, small joker=16, big joker=17. Two cards are the
/// same card only when both suit and rank match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A card ranked outside
    /// 3..=17 can be built, but [`classify`](crate::pattern::classify)
    /// rejects any set containing one.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The small joker.
    #[must_use]
    pub const fn small_joker() -> Self {
        Self::new(Suit::Joker, RANK_SMALL_JOKER)
    }

    /// The big joker.
    #[must_use]
    pub const fn big_joker() -> Self {
        Self::new(Suit::Joker, RANK_BIG_JOKER)
    }

    /// Returns whether this card is one of the two jokers.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns whether the card is drawn in red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        match self.suit {
            Suit::Hearts | Suit::Diamonds => true,
            Suit::Joker => self.rank == RANK_SMALL_JOKER,
            Suit::Spades | Suit::Clubs => false,
        }
    }

    /// Returns the face label of the card.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.rank {
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            RANK_JACK => "J",
            RANK_QUEEN => "Q",
            RANK_KING => "K",
            RANK_ACE => "A",
            RANK_TWO => "2",
            RANK_SMALL_JOKER => "small",
            RANK_BIG_JOKER => "big",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            RANK_SMALL_JOKER if self.is_joker() => f.write_str("small joker"),
            RANK_BIG_JOKER if self.is_joker() => f.write_str("big joker"),
            _ => write!(f, "{}{}", self.suit.glyph(), self.label()),
        }
    }
}

/// Compares two cards by rank only.
#[must_use]
pub fn compare_rank(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank)
}

/// Creates the 54 distinct cards of a deck in a fixed order.
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ORDINARY {
        for rank in RANK_LOWEST..=RANK_TWO {
            cards.push(Card::new(suit, rank));
        }
    }
    cards.push(Card::small_joker());
    cards.push(Card::big_joker());

    cards
}

/// Returns a uniformly shuffled copy of `cards`.
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.shuffle(rng);
    out
}

/// Returns a copy of `cards` sorted ascending by rank.
///
/// The sort is stable, so cards of equal rank keep their relative order.
#[must_use]
pub fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.sort_by(compare_rank);
    out
}

/// Returns whether `cards` is exactly one full deck: 54 cards, no duplicates.
#[must_use]
pub fn is_full_deck(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    new_deck().iter().all(|card| cards.contains(card))
}
