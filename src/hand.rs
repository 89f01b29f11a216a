//! Sorted hand representation and rank bookkeeping.

use alloc::vec::Vec;

use crate::card::{Card, RANK_BIG_JOKER, compare_rank};

/// Number of slots in a [`RankCounts`] table (indexable by every rank up to
/// the big joker).
const RANK_SLOTS: usize = RANK_BIG_JOKER as usize + 1;

/// Per-rank card counts for a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCounts([u8; RANK_SLOTS]);

impl RankCounts {
    /// Counts the cards of each rank in `cards`.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut counts = [0u8; RANK_SLOTS];
        for card in cards {
            if let Some(slot) = counts.get_mut(card.rank as usize) {
                *slot += 1;
            }
        }
        Self(counts)
    }

    /// Returns the number of cards of `rank`.
    #[must_use]
    pub fn get(&self, rank: u8) -> u8 {
        self.0.get(rank as usize).copied().unwrap_or(0)
    }

    /// Iterates `(rank, count)` ascending by rank, skipping absent ranks.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(rank, &count)| (rank as u8, count))
    }

    /// Returns the distinct ranks present, ascending.
    #[must_use]
    pub fn ranks(&self) -> Vec<u8> {
        self.iter().map(|(rank, _)| rank).collect()
    }

    /// Returns the ranks held exactly `count` times, ascending.
    #[must_use]
    pub fn ranks_with(&self, count: u8) -> Vec<u8> {
        self.iter()
            .filter(|&(_, c)| c == count)
            .map(|(rank, _)| rank)
            .collect()
    }

    /// Returns the number of distinct ranks held exactly `count` times.
    #[must_use]
    pub fn groups_of(&self, count: u8) -> usize {
        self.iter().filter(|&(_, c)| c == count).count()
    }

    /// Returns the largest group size.
    #[must_use]
    pub fn max_group(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// A seat's hand, always kept sorted ascending by rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`, sorted.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        hand.add_cards(cards);
        hand
    }

    /// Appends a batch of cards and restores rank order.
    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.cards.sort_by(compare_rank);
    }

    /// Removes each card in `cards` by exact suit and rank match.
    ///
    /// Returns `false` without touching the hand if any card is not held
    /// (counting duplicates in the request).
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }
        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        true
    }

    /// Returns whether every card in `cards` is held, each at most once.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().enumerate().all(|(i, card)| {
            let requested = cards[..=i].iter().filter(|c| *c == card).count();
            let held = self.cards.iter().filter(|c| *c == card).count();
            requested <= held
        })
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards of one rank, in hand order.
    #[must_use]
    pub fn cards_of_rank(&self, rank: u8) -> Vec<Card> {
        self.cards.iter().filter(|c| c.rank == rank).copied().collect()
    }

    /// Returns the cards whose rank lies in `min..=max`.
    #[must_use]
    pub fn cards_in_range(&self, min: u8, max: u8) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| (min..=max).contains(&c.rank))
            .copied()
            .collect()
    }

    /// Returns the per-rank counts of the hand.
    #[must_use]
    pub fn rank_counts(&self) -> RankCounts {
        RankCounts::of(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
