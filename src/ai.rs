//! Heuristic decisions for automated seats and hints.
//!
//! Every function is stateless: it looks at one seat's hand and the public
//! trick state. The only randomness is the cooperative pass in
//! [`decide_play`], drawn from the caller's generator.
//!
//! The heuristics are fast, not strong. In particular, composite tricks
//! (straight of pairs, triples with attachments, airplanes, four with
//! attachments) are only ever answered with a bomb when three or fewer
//! cards remain.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, RANK_ACE, RANK_BIG_JOKER, RANK_SMALL_JOKER, RANK_TWO};
use crate::hand::Hand;
use crate::pattern::{Pattern, PatternKind};

/// Highest auction amount; bidding it wins the auction outright.
pub const MAX_BID: u8 = 3;

/// Minimum hand strength for an AI seat to grab.
pub const GRAB_THRESHOLD: u32 = 12;

/// Chance that an AI seat with more than [`COOPERATIVE_MIN_CARDS`] cards
/// declines to answer a trick.
pub const COOPERATIVE_PASS_CHANCE: f64 = 0.3;

/// Hands at or below this size always try to answer.
pub const COOPERATIVE_MIN_CARDS: usize = 5;

/// Shortest legal straight.
const MIN_STRAIGHT: usize = 5;

/// A decision for one seat, fed back into the game by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiAction {
    /// Bid this amount (0 passes the auction).
    Bid(u8),
    /// Grab the Landlord seat (`true`) or decline.
    Grab(bool),
    /// Play these cards.
    Play(Vec<Card>),
    /// Pass on the open trick.
    Pass,
}

/// Scores hand strength for the auction.
///
/// Each "2" counts 3, each joker 4, each four-of-a-kind 6, each triple 2 and
/// each pair 1.
#[must_use]
pub fn bid_score(hand: &Hand) -> u32 {
    let counts = hand.rank_counts();

    let twos = u32::from(counts.get(RANK_TWO)) * 3;
    let jokers = u32::from(counts.get(RANK_SMALL_JOKER) + counts.get(RANK_BIG_JOKER)) * 4;
    let bombs = counts.groups_of(4) as u32 * 6;
    let triples = counts.groups_of(3) as u32 * 2;
    let pairs = counts.groups_of(2) as u32;

    twos + jokers + bombs + triples + pairs
}

/// Chooses an auction amount given the current high bid (0 passes).
#[must_use]
pub fn decide_bid(hand: &Hand, current_high: u8) -> u8 {
    let score = bid_score(hand);

    if score >= 15 {
        MAX_BID
    } else if score >= 10 && current_high < 2 {
        2
    } else if score >= 7 && current_high == 0 {
        1
    } else {
        0
    }
}

/// Returns whether the seat should grab the Landlord seat.
#[must_use]
pub fn should_grab(hand: &Hand) -> bool {
    bid_score(hand) >= GRAB_THRESHOLD
}

/// Chooses a play, or `None` to pass.
///
/// With no open trick this always leads. On an open trick, when
/// `cooperative` is set and the seat holds more than
/// [`COOPERATIVE_MIN_CARDS`] cards, it passes outright with probability
/// [`COOPERATIVE_PASS_CHANCE`] before looking for an answer.
pub fn decide_play<R: Rng>(
    hand: &Hand,
    open: Option<&Pattern>,
    cooperative: bool,
    rng: &mut R,
) -> Option<Vec<Card>> {
    let Some(open) = open else {
        return Some(lead(hand));
    };

    if cooperative
        && hand.len() > COOPERATIVE_MIN_CARDS
        && rng.random_bool(COOPERATIVE_PASS_CHANCE)
    {
        return None;
    }

    follow(hand, open)
}

/// Chooses a play for an empty trick.
///
/// Preference: the last card; the lowest unpaired card; the lowest pair; the
/// lowest triple; the shortest, lowest straight; the lowest card.
#[must_use]
pub fn lead(hand: &Hand) -> Vec<Card> {
    let cards = hand.cards();
    if cards.len() == 1 {
        return cards.to_vec();
    }

    let counts = hand.rank_counts();
    if let Some(single) = cards.iter().find(|c| counts.get(c.rank) == 1) {
        return alloc::vec![*single];
    }

    for width in [2, 3] {
        if let Some(group) = lowest_group(hand, width, 0) {
            return group;
        }
    }

    if let Some(straight) = find_straight(hand) {
        return straight;
    }

    cards.first().map(|c| alloc::vec![*c]).unwrap_or_default()
}

/// Chooses an answer to an open trick, or `None` to pass.
#[must_use]
pub fn follow(hand: &Hand, open: &Pattern) -> Option<Vec<Card>> {
    match open.kind {
        PatternKind::Single => hand
            .cards()
            .iter()
            .find(|c| c.rank > open.value)
            .map(|c| alloc::vec![*c])
            .or_else(|| find_bomb(hand, 0)),
        PatternKind::Pair => lowest_group(hand, 2, open.value).or_else(|| find_bomb(hand, 0)),
        PatternKind::Triple => lowest_group(hand, 3, open.value).or_else(|| find_bomb(hand, 0)),
        PatternKind::Bomb | PatternKind::JokerBomb => find_bomb(hand, open.value),
        PatternKind::Straight => find_beat_straight(hand, open.value, usize::from(open.length))
            .or_else(|| find_bomb(hand, 0)),
        PatternKind::StraightOfPairs
        | PatternKind::TripleWithSingle
        | PatternKind::TripleWithPair
        | PatternKind::Airplane
        | PatternKind::AirplaneWithSingles
        | PatternKind::AirplaneWithPairs
        | PatternKind::FourWithTwoSingles
        | PatternKind::FourWithTwoPairs => {
            if hand.len() <= 3 {
                find_bomb(hand, 0)
            } else {
                None
            }
        }
    }
}

/// Finds the lowest four-of-a-kind strictly above `floor`, falling back to
/// the joker bomb when both jokers are held.
#[must_use]
pub fn find_bomb(hand: &Hand, floor: u8) -> Option<Vec<Card>> {
    let counts = hand.rank_counts();

    if let Some((rank, _)) = counts.iter().find(|&(rank, count)| count == 4 && rank > floor) {
        return Some(hand.cards_of_rank(rank));
    }

    if counts.get(RANK_SMALL_JOKER) > 0 && counts.get(RANK_BIG_JOKER) > 0 {
        let small = hand.cards_of_rank(RANK_SMALL_JOKER);
        let big = hand.cards_of_rank(RANK_BIG_JOKER);
        return Some(small.into_iter().take(1).chain(big.into_iter().take(1)).collect());
    }

    None
}

/// Lowest rank above `floor` held at least `width` times, as `width` cards.
fn lowest_group(hand: &Hand, width: u8, floor: u8) -> Option<Vec<Card>> {
    let (rank, _) = hand
        .rank_counts()
        .iter()
        .find(|&(rank, count)| count >= width && rank > floor)?;

    Some(
        hand.cards_of_rank(rank)
            .into_iter()
            .take(usize::from(width))
            .collect(),
    )
}

/// Distinct ranks that may appear in a run, ascending.
fn run_ranks(hand: &Hand) -> Vec<u8> {
    hand.rank_counts()
        .ranks()
        .into_iter()
        .filter(|&rank| rank <= RANK_ACE)
        .collect()
}

/// One card of each rank in `ranks`, taking the first held card of each.
fn pick_run(hand: &Hand, ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .filter_map(|&rank| hand.cards().iter().find(|c| c.rank == rank).copied())
        .collect()
}

fn is_consecutive(ranks: &[u8]) -> bool {
    ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Shortest straight first, lowest start within each length.
fn find_straight(hand: &Hand) -> Option<Vec<Card>> {
    let ranks = run_ranks(hand);

    (MIN_STRAIGHT..=ranks.len()).find_map(|len| {
        ranks
            .windows(len)
            .find(|window| is_consecutive(window))
            .map(|window| pick_run(hand, window))
    })
}

/// Lowest straight of exactly `length` cards starting above `value`.
fn find_beat_straight(hand: &Hand, value: u8, length: usize) -> Option<Vec<Card>> {
    if length == 0 {
        return None;
    }
    let ranks = run_ranks(hand);

    ranks
        .windows(length)
        .find(|window| window[0] > value && is_consecutive(window))
        .map(|window| pick_run(hand, window))
}
