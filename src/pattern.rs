//! Play pattern classification and comparison.
//!
//! [`classify`] turns an unordered set of cards into a [`Pattern`] (or
//! rejects it), and [`can_beat`] is the legality gate for answering an open
//! trick.

use core::cmp::Ordering;

use crate::card::{Card, RANK_ACE, RANK_BIG_JOKER, RANK_LOWEST, RANK_SMALL_JOKER};
use crate::hand::RankCounts;

/// Kind of a recognized play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// One card.
    Single,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// A triple plus one extra card.
    TripleWithSingle,
    /// A triple plus a pair.
    TripleWithPair,
    /// Five or more consecutive ranks, one card each, up to the Ace.
    Straight,
    /// Three or more consecutive pairs, up to the Ace.
    StraightOfPairs,
    /// Two or more consecutive triples, up to the Ace.
    Airplane,
    /// An airplane plus one extra card per triple.
    AirplaneWithSingles,
    /// An airplane plus one pair per triple.
    AirplaneWithPairs,
    /// Four cards of one rank.
    Bomb,
    /// Four of a kind plus two extra cards.
    FourWithTwoSingles,
    /// Four of a kind plus two pairs.
    FourWithTwoPairs,
    /// Both jokers.
    JokerBomb,
}

impl PatternKind {
    /// Returns whether this kind is a trump play (bomb or joker bomb).
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb | Self::JokerBomb)
    }

    /// Returns a short lowercase name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Pair => "pair",
            Self::Triple => "triple",
            Self::TripleWithSingle => "triple with single",
            Self::TripleWithPair => "triple with pair",
            Self::Straight => "straight",
            Self::StraightOfPairs => "straight of pairs",
            Self::Airplane => "airplane",
            Self::AirplaneWithSingles => "airplane with singles",
            Self::AirplaneWithPairs => "airplane with pairs",
            Self::Bomb => "bomb",
            Self::FourWithTwoSingles => "four with two singles",
            Self::FourWithTwoPairs => "four with two pairs",
            Self::JokerBomb => "joker bomb",
        }
    }
}

/// A classified play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// The kind of play.
    pub kind: PatternKind,
    /// Primary comparison value: the lowest rank of the backbone.
    pub value: u8,
    /// Number of backbone units (1 for simple plays, run length otherwise).
    pub length: u8,
}

impl Pattern {
    const fn new(kind: PatternKind, value: u8, length: usize) -> Self {
        Self {
            kind,
            value,
            length: length as u8,
        }
    }
}

/// Returns whether `ranks` is strictly consecutive and tops out at the Ace.
fn is_run(ranks: &[u8]) -> bool {
    ranks.windows(2).all(|w| w[1] == w[0] + 1) && ranks.last().is_some_and(|&r| r <= RANK_ACE)
}

/// Returns whether every present rank is held exactly `count` times.
fn all_groups_of(counts: &RankCounts, count: u8) -> bool {
    counts.iter().all(|(_, c)| c == count)
}

/// Classifies a set of cards. Returns `None` if it is not a legal play.
///
/// Input order does not matter. Any card with a rank outside the deck's
/// `3..=17` scale makes the whole set invalid.
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Pattern> {
    use PatternKind as K;

    let count = cards.len();
    if count == 0 {
        return None;
    }
    if cards
        .iter()
        .any(|card| !(RANK_LOWEST..=RANK_BIG_JOKER).contains(&card.rank))
    {
        return None;
    }

    let counts = RankCounts::of(cards);
    let ranks = counts.ranks();
    let lowest = *ranks.first()?;
    let max_group = counts.max_group();

    if count == 2 && counts.get(RANK_SMALL_JOKER) == 1 && counts.get(RANK_BIG_JOKER) == 1 {
        return Some(Pattern::new(K::JokerBomb, RANK_BIG_JOKER, 1));
    }

    match (count, max_group) {
        (1, _) => return Some(Pattern::new(K::Single, lowest, 1)),
        (2, 2) => return Some(Pattern::new(K::Pair, lowest, 1)),
        (3, 3) => return Some(Pattern::new(K::Triple, lowest, 1)),
        (4, 4) => return Some(Pattern::new(K::Bomb, lowest, 1)),
        (4, 3) => {
            let triple = *counts.ranks_with(3).first()?;
            return Some(Pattern::new(K::TripleWithSingle, triple, 1));
        }
        (5, 3) if counts.groups_of(2) == 1 => {
            let triple = *counts.ranks_with(3).first()?;
            return Some(Pattern::new(K::TripleWithPair, triple, 1));
        }
        _ => {}
    }

    if count >= 5 && all_groups_of(&counts, 1) && is_run(&ranks) {
        return Some(Pattern::new(K::Straight, lowest, count));
    }

    if count >= 6 && count % 2 == 0 && all_groups_of(&counts, 2) && is_run(&ranks) {
        return Some(Pattern::new(K::StraightOfPairs, lowest, count / 2));
    }

    if count >= 6 && count % 3 == 0 && all_groups_of(&counts, 3) && is_run(&ranks) {
        return Some(Pattern::new(K::Airplane, lowest, count / 3));
    }

    let triples = counts.ranks_with(3);

    if count >= 8 && count % 4 == 0 && triples.len() == count / 4 && is_run(&triples) {
        return Some(Pattern::new(K::AirplaneWithSingles, triples[0], triples.len()));
    }

    if count >= 10
        && count % 5 == 0
        && triples.len() == count / 5
        && counts.iter().all(|(_, c)| c == 2 || c == 3)
        && is_run(&triples)
    {
        return Some(Pattern::new(K::AirplaneWithPairs, triples[0], triples.len()));
    }

    let fours = counts.ranks_with(4);
    match (count, fours.as_slice()) {
        (6, &[four]) => Some(Pattern::new(K::FourWithTwoSingles, four, 1)),
        (8, &[four]) if counts.groups_of(2) == 2 => {
            Some(Pattern::new(K::FourWithTwoPairs, four, 1))
        }
        _ => None,
    }
}

/// Compares two classified plays.
///
/// The joker bomb outranks everything, and a bomb outranks any non-bomb.
/// Otherwise the plays must share kind and length; `None` means they are
/// not comparable, which never counts as beating.
#[must_use]
pub fn compare(a: &Pattern, b: &Pattern) -> Option<Ordering> {
    use PatternKind::{Bomb, JokerBomb};

    match (a.kind, b.kind) {
        (JokerBomb, JokerBomb) => Some(Ordering::Equal),
        (JokerBomb, _) => Some(Ordering::Greater),
        (_, JokerBomb) => Some(Ordering::Less),
        (Bomb, other) if other != Bomb => Some(Ordering::Greater),
        (other, Bomb) if other != Bomb => Some(Ordering::Less),
        (ka, kb) if ka != kb || a.length != b.length => None,
        _ => Some(a.value.cmp(&b.value)),
    }
}

/// Returns whether `cards` may be played on top of `open`.
///
/// Anything valid may lead an empty trick. An unrecognized open trick is
/// beaten by any valid play.
#[must_use]
pub fn can_beat(cards: &[Card], open: &[Card]) -> bool {
    if open.is_empty() {
        return true;
    }
    let Some(ours) = classify(cards) else {
        return false;
    };
    let Some(theirs) = classify(open) else {
        return true;
    };
    compare(&ours, &theirs) == Some(Ordering::Greater)
}
