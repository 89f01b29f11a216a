//! Game integration tests.

use std::collections::HashSet;

use landlord::card::{self, RANK_ACE, RANK_TWO};
use landlord::{
    ActionError, AiAction, BidError, Card, DealError, Game, GameOptions, GrabError, PatternKind,
    Phase, PlayError, Role, SEATS, Suit,
};

const S: Suit = Suit::Spades;
const H: Suit = Suit::Hearts;
const C: Suit = Suit::Clubs;
const D: Suit = Suit::Diamonds;

const fn c(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

const fn seat(start: usize, offset: usize) -> usize {
    (start + offset) % SEATS
}

/// Spade straight 3..A, four 2s, three 4s and the five of hearts.
///
/// The last three (♣4, ♦4, ♥5) end up as the bottom cards.
fn landlord_cards() -> Vec<Card> {
    let mut cards: Vec<Card> = (3..=RANK_ACE).map(|rank| c(S, rank)).collect();
    cards.extend([c(S, RANK_TWO), c(H, RANK_TWO), c(C, RANK_TWO), c(D, RANK_TWO)]);
    cards.extend([c(H, 4), c(C, 4), c(D, 4), c(H, 5)]);
    cards
}

/// Deals so the starting seat holds the first 17 of `landlord` and the
/// bottom holds the last 3. The other 34 cards go, in deck order, 17 to the
/// next seat and 17 to the one after.
///
/// With [`landlord_cards`] the next seat holds ♥3 ♥6..♥A ♣3 ♣5..♣10 and the
/// seat after holds ♣J..♣A ♦3 ♦5..♦A and both jokers.
fn rigged(options: GameOptions, landlord: &[Card]) -> (Game, usize) {
    let game = Game::new(options, 3);
    game.reset();
    let start = game.current_seat();

    let rest: Vec<Card> = card::new_deck()
        .into_iter()
        .filter(|card| !landlord.contains(card))
        .collect();
    let hands = [&landlord[..17], &rest[..17], &rest[17..]];

    let mut deck = Vec::with_capacity(card::DECK_SIZE);
    let mut next = [0usize; SEATS];
    for i in 0..51 {
        let offset = i % SEATS;
        deck.push(hands[offset][next[offset]]);
        next[offset] += 1;
    }
    deck.extend_from_slice(&landlord[17..]);

    game.deal_from(&deck).unwrap();
    (game, start)
}

/// Rigged deal with the starting seat bidding 3.
fn rigged_playing() -> (Game, usize) {
    let (game, start) = rigged(GameOptions::default(), &landlord_cards());
    game.bid(start, 3).unwrap();
    (game, start)
}

#[test]
fn deal_conserves_all_54_cards() {
    let game = Game::new(GameOptions::default(), 11);
    assert_eq!(game.phase(), Phase::Init);
    game.start_new_game();
    assert_eq!(game.phase(), Phase::Bidding);
    assert_eq!(game.card_counts(), [17, 17, 17]);

    let mut all: Vec<Card> = (0..SEATS).flat_map(|s| game.hand(s).unwrap()).collect();
    all.extend(game.bottom_cards());
    let distinct: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(all.len(), 54);
    assert_eq!(distinct.len(), 54);
    assert!(card::is_full_deck(&all));

    for s in 0..SEATS {
        let hand = game.hand(s).unwrap();
        assert!(hand.windows(2).all(|w| w[0].rank <= w[1].rank));
    }
}

#[test]
fn seeded_games_replay_identically() {
    let a = Game::new(GameOptions::default(), 1234);
    let b = Game::new(GameOptions::default(), 1234);
    a.start_new_game();
    b.start_new_game();

    assert_eq!(a.current_seat(), b.current_seat());
    for s in 0..SEATS {
        assert_eq!(a.hand(s), b.hand(s));
    }
    assert_eq!(a.bottom_cards(), b.bottom_cards());
}

#[test]
fn bid_of_three_wins_auction_immediately() {
    let (game, start) = rigged(GameOptions::default(), &landlord_cards());
    assert_eq!(game.phase(), Phase::Bidding);
    assert_eq!(game.game_over_result(), None);

    game.bid(start, 3).unwrap();

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.landlord(), Some(start));
    assert_eq!(game.current_seat(), start);
    assert_eq!(game.multiplier(), 1);
    assert_eq!(game.last_play(), None);

    let counts = game.card_counts();
    assert_eq!(counts[start], 20);
    assert_eq!(counts[seat(start, 1)], 17);
    assert_eq!(counts[seat(start, 2)], 17);
    assert_eq!(counts.iter().sum::<usize>(), 54);

    let mut landlord_hand = game.hand(start).unwrap();
    let mut expected = landlord_cards();
    landlord_hand.sort_by_key(|c| (c.rank, c.suit as u8));
    expected.sort_by_key(|c| (c.rank, c.suit as u8));
    assert_eq!(landlord_hand, expected);

    assert_eq!(game.player(start).unwrap().role(), Role::Landlord);
    assert_eq!(game.player(seat(start, 1)).unwrap().role(), Role::Farmer);
    assert_eq!(game.player(seat(start, 2)).unwrap().role(), Role::Farmer);
    assert_eq!(game.bottom_cards().len(), 3);
}

#[test]
fn all_pass_resets_for_redeal() {
    let game = Game::new(GameOptions::default(), 21);
    game.start_new_game();
    let start = game.current_seat();

    game.bid(start, 0).unwrap();
    game.bid(seat(start, 1), 0).unwrap();
    assert_eq!(game.bid(seat(start, 2), 0), Err(BidError::NoBids));

    assert_eq!(game.phase(), Phase::Dealing);
    assert_eq!(game.card_counts(), [0, 0, 0]);
    assert_eq!(game.high_bid(), 0);

    game.deal_cards().unwrap();
    assert_eq!(game.phase(), Phase::Bidding);
    assert_eq!(game.card_counts(), [17, 17, 17]);
}

#[test]
fn grab_round_gives_seat_to_last_grabber() {
    let game = Game::new(GameOptions::default(), 5);
    game.start_new_game();
    let start = game.current_seat();

    game.bid(start, 1).unwrap();
    game.bid(seat(start, 1), 2).unwrap();
    game.bid(seat(start, 2), 0).unwrap();

    assert_eq!(game.phase(), Phase::Grabbing);
    assert_eq!(game.current_seat(), 0);
    assert_eq!(game.high_bid(), 2);
    assert_eq!(game.auction().high_bidder, Some(seat(start, 1)));
    assert_eq!(game.player(start).unwrap().bid(), 1);

    game.grab(0, true).unwrap();
    assert_eq!(game.multiplier(), 2);
    game.grab(1, false).unwrap();
    game.grab(2, true).unwrap();

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.landlord(), Some(2));
    assert_eq!(game.current_seat(), 2);
    assert_eq!(game.multiplier(), 4);
    assert_eq!(game.card_counts()[2], 20);
}

#[test]
fn no_grab_keeps_high_bidder() {
    let game = Game::new(GameOptions::default(), 6);
    game.start_new_game();
    let start = game.current_seat();

    game.bid(start, 0).unwrap();
    game.bid(seat(start, 1), 1).unwrap();
    game.bid(seat(start, 2), 0).unwrap();

    for s in 0..SEATS {
        game.grab(s, false).unwrap();
    }

    assert_eq!(game.landlord(), Some(seat(start, 1)));
    assert_eq!(game.multiplier(), 1);
    assert_eq!(game.current_seat(), seat(start, 1));
}

#[test]
fn lower_bid_does_not_take_the_lead() {
    let game = Game::new(GameOptions::default(), 8);
    game.start_new_game();
    let start = game.current_seat();

    game.bid(start, 2).unwrap();
    game.bid(seat(start, 1), 1).unwrap();

    assert_eq!(game.high_bid(), 2);
    assert_eq!(game.auction().high_bidder, Some(start));
    assert_eq!(game.player(seat(start, 1)).unwrap().bid(), 1);
}

#[test]
fn auction_rejects_bad_calls() {
    let game = Game::new(GameOptions::default(), 9);
    assert_eq!(game.bid(0, 1), Err(BidError::InvalidState));
    assert_eq!(game.deal_cards(), Err(DealError::InvalidState));

    game.reset();
    let mut short = card::new_deck();
    short.pop();
    assert_eq!(game.deal_from(&short), Err(DealError::InvalidDeck));

    game.deal_cards().unwrap();
    let start = game.current_seat();

    assert_eq!(game.deal_cards(), Err(DealError::InvalidState));
    assert_eq!(game.bid(seat(start, 1), 1), Err(BidError::NotYourTurn));
    assert_eq!(game.bid(7, 1), Err(BidError::SeatNotFound));
    assert_eq!(game.bid(start, 4), Err(BidError::InvalidAmount));
    assert_eq!(game.grab(start, true), Err(GrabError::InvalidState));
    assert_eq!(game.pass(start), Err(PlayError::InvalidState));

    game.bid(start, 1).unwrap();
    game.bid(seat(start, 1), 0).unwrap();
    game.bid(seat(start, 2), 0).unwrap();

    assert_eq!(game.grab(1, true), Err(GrabError::NotYourTurn));
    assert_eq!(game.grab(3, true), Err(GrabError::SeatNotFound));
    assert_eq!(game.bid(0, 1), Err(BidError::InvalidState));
    assert_eq!(game.multiplier(), 1);
}

#[test]
fn landlord_cannot_pass_before_leading() {
    let (game, start) = rigged_playing();

    assert_eq!(game.pass(start), Err(PlayError::CannotPass));
    assert_eq!(game.play_cards(start, &[]), Err(PlayError::CannotPass));
    assert_eq!(game.current_seat(), start);
}

#[test]
fn two_passes_return_trick_to_leader() {
    let (game, start) = rigged_playing();
    let next = seat(start, 1);
    let after = seat(start, 2);

    game.play_cards(start, &[c(S, 3)]).unwrap();
    game.play_cards(next, &[c(H, 6)]).unwrap();

    game.pass(after).unwrap();
    assert_eq!(game.current_seat(), start);
    assert_eq!(game.pass_count(), 1);
    assert_eq!(game.last_play().map(|p| p.seat), Some(next));

    game.play_cards(start, &[]).unwrap();
    assert_eq!(game.current_seat(), next);
    assert_eq!(game.pass_count(), 0);
    assert_eq!(game.last_play(), None);

    assert_eq!(game.pass(next), Err(PlayError::CannotPass));
    game.play_cards(next, &[c(H, 3)]).unwrap();
    assert_eq!(game.current_seat(), after);
}

#[test]
fn rejected_plays_leave_state_untouched() {
    let (game, start) = rigged_playing();
    let next = seat(start, 1);

    game.play_cards(start, &[c(S, 5)]).unwrap();
    let counts = game.card_counts();
    let last = game.last_play();

    assert_eq!(
        game.play_cards(start, &[c(S, 6)]),
        Err(PlayError::NotYourTurn)
    );
    assert_eq!(game.play_cards(9, &[c(S, 6)]), Err(PlayError::SeatNotFound));
    assert_eq!(
        game.play_cards(next, &[c(S, 4)]),
        Err(PlayError::CardNotHeld)
    );
    assert_eq!(
        game.play_cards(next, &[c(H, 6), c(H, 6)]),
        Err(PlayError::CardNotHeld)
    );
    assert_eq!(
        game.play_cards(next, &[c(H, 3), c(H, 6)]),
        Err(PlayError::InvalidPattern)
    );
    assert_eq!(
        game.play_cards(next, &[c(H, 3)]),
        Err(PlayError::CannotBeat)
    );
    assert_eq!(
        game.play_cards(next, &[c(H, 3), c(C, 3)]),
        Err(PlayError::CannotBeat)
    );

    assert_eq!(game.card_counts(), counts);
    assert_eq!(game.last_play(), last);
    assert_eq!(game.current_seat(), next);
    assert_eq!(game.multiplier(), 1);
}

#[test]
fn bombs_scale_the_multiplier() {
    let (game, start) = rigged_playing();
    let twos = [c(S, RANK_TWO), c(H, RANK_TWO), c(C, RANK_TWO), c(D, RANK_TWO)];

    game.play_cards(start, &twos).unwrap();
    assert_eq!(game.multiplier(), 2);
    assert_eq!(
        game.last_play().map(|p| p.pattern.kind),
        Some(PatternKind::Bomb)
    );

    game.pass(seat(start, 1)).unwrap();
    game.play_cards(seat(start, 2), &[Card::big_joker(), Card::small_joker()])
        .unwrap();
    assert_eq!(game.multiplier(), 8);
    assert_eq!(
        game.last_play().map(|p| p.pattern.kind),
        Some(PatternKind::JokerBomb)
    );
}

#[test]
fn landlord_wins_and_scores() {
    let (game, start) = rigged_playing();
    let straight: Vec<Card> = (3..=RANK_ACE).map(|rank| c(S, rank)).collect();
    let twos = [c(S, RANK_TWO), c(H, RANK_TWO), c(C, RANK_TWO), c(D, RANK_TWO)];
    let last = [c(H, 4), c(C, 4), c(D, 4), c(H, 5)];

    game.play_cards(start, &straight).unwrap();
    game.pass(seat(start, 1)).unwrap();
    game.pass(seat(start, 2)).unwrap();

    game.play_cards(start, &twos).unwrap();
    game.pass(seat(start, 1)).unwrap();
    game.pass(seat(start, 2)).unwrap();
    assert_eq!(game.game_over_result(), None);

    game.play_cards(start, &last).unwrap();

    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(start));
    assert_eq!(game.current_seat(), start);

    let result = game.game_over_result().unwrap();
    assert_eq!(result.winner, start);
    assert_eq!(result.winner_role, Role::Landlord);
    assert!(result.landlord_won);
    assert_eq!(result.base_stake, 3);
    assert_eq!(result.multiplier, 2);
    assert_eq!(result.stake, 6);

    assert_eq!(
        game.play_cards(seat(start, 1), &[c(H, 3)]),
        Err(PlayError::InvalidState)
    );
}

#[test]
fn hint_follows_the_human_seat() {
    let options = GameOptions::default();
    let (mut game, start) = rigged(options, &landlord_cards());
    game.set_human(0, false);
    game.set_human(start, true);
    assert_eq!(game.human_seat(), Some(start));
    assert_eq!(game.get_hint(), None);

    game.bid(start, 3).unwrap();
    assert_eq!(game.get_hint(), Some(vec![c(S, 3)]));

    game.play_cards(start, &[c(S, 3)]).unwrap();
    assert_eq!(game.get_hint(), None);

    game.play_cards(seat(start, 1), &[c(H, 6)]).unwrap();
    game.pass(seat(start, 2)).unwrap();
    assert_eq!(game.get_hint(), Some(vec![c(S, 7)]));
}

#[test]
fn hint_serves_every_human_seat() {
    let options = GameOptions::default()
        .with_human_seat(1, true)
        .with_human_seat(2, true);
    let (game, start) = rigged(options, &landlord_cards());
    assert_eq!(game.human_seat(), Some(0));

    game.bid(start, 3).unwrap();
    assert_eq!(game.get_hint(), Some(vec![c(S, 3)]));

    game.play_cards(start, &[c(S, 3)]).unwrap();
    assert_eq!(game.current_seat(), seat(start, 1));
    assert_eq!(game.get_hint(), Some(vec![c(C, 5)]));

    game.play_cards(seat(start, 1), &[c(H, 6)]).unwrap();
    assert_eq!(game.get_hint(), Some(vec![c(D, 7)]));
}

#[test]
fn set_human_keeps_options_and_seats_in_step() {
    let mut game = Game::new(GameOptions::default(), 4);
    game.set_human(0, false);
    game.set_human(2, true);

    assert_eq!(game.options().human, [false, false, true]);
    assert_eq!(game.human_seat(), Some(2));
    assert!(game.player(2).unwrap().is_human());
    assert!(!game.player(0).unwrap().is_human());
}

#[test]
fn ai_action_only_for_automated_seat_on_turn() {
    let (mut game, start) = rigged(GameOptions::default(), &landlord_cards());
    game.set_human(0, false);
    game.set_human(start, true);

    assert_eq!(game.ai_action(start), None);
    assert_eq!(game.ai_action(seat(start, 1)), None);
    assert_eq!(game.ai_action(7), None);

    game.bid(start, 1).unwrap();
    let action = game.ai_action(seat(start, 1));
    assert!(matches!(action, Some(AiAction::Bid(_))));
}

#[test]
fn ai_answers_and_passes_through_apply() {
    let options = GameOptions::default()
        .with_human_seat(0, false)
        .with_cooperative_pass(false);
    let (game, start) = rigged(options, &landlord_cards());
    game.bid(start, 3).unwrap();

    game.play_cards(start, &[c(S, 9)]).unwrap();

    // Next seat holds ♥10 as its lowest card above 9.
    let action = game.ai_action(seat(start, 1)).unwrap();
    assert_eq!(action, AiAction::Play(vec![c(H, 10)]));
    game.apply(seat(start, 1), &action).unwrap();

    let landlord_bomb = [c(S, RANK_TWO), c(H, RANK_TWO), c(C, RANK_TWO), c(D, RANK_TWO)];
    let after = seat(start, 2);
    game.pass(after).unwrap();
    game.play_cards(start, &landlord_bomb).unwrap();

    // A bomb from the Landlord can only be answered by the joker bomb.
    let action = game.ai_action(seat(start, 1)).unwrap();
    assert_eq!(action, AiAction::Pass);
    game.apply(seat(start, 1), &action).unwrap();

    let action = game.ai_action(after).unwrap();
    assert_eq!(
        action,
        AiAction::Play(vec![Card::small_joker(), Card::big_joker()])
    );
    game.apply(after, &action).unwrap();
    assert_eq!(game.multiplier(), 8);

    assert_eq!(
        game.apply(start, &AiAction::Grab(true)),
        Err(ActionError::Grab(GrabError::InvalidState))
    );
}

#[test]
fn automated_games_run_to_completion() {
    for seed in 0..25 {
        let options = GameOptions::default().with_human_seat(0, false);
        let game = Game::new(options, seed);
        game.start_new_game();

        let mut multiplier = game.multiplier();
        let mut saw_full_table = false;

        for _ in 0..2_000 {
            match game.phase() {
                Phase::GameOver => break,
                Phase::Dealing => {
                    game.deal_cards().unwrap();
                    multiplier = 1;
                    continue;
                }
                Phase::Playing if game.last_play().is_none() && !saw_full_table => {
                    let counts = game.card_counts();
                    let landlord = game.landlord().unwrap();
                    assert_eq!(counts[landlord], 20);
                    assert_eq!(counts.iter().sum::<usize>(), 54);
                    saw_full_table = true;
                }
                _ => {}
            }

            let seat = game.current_seat();
            let action = game.ai_action(seat).expect("automated seat on turn");
            match game.apply(seat, &action) {
                Ok(()) | Err(ActionError::Bid(BidError::NoBids)) => {}
                Err(err) => panic!("seed {seed}: {action:?} rejected: {err}"),
            }

            let now = game.multiplier();
            if game.phase() != Phase::Dealing {
                assert!(
                    now == multiplier || now == multiplier * 2 || now == multiplier * 4,
                    "seed {seed}: multiplier jumped {multiplier} -> {now}"
                );
                multiplier = now;
            }
        }

        assert_eq!(game.phase(), Phase::GameOver, "seed {seed} did not finish");
        let result = game.game_over_result().unwrap();
        assert_eq!(game.hand(result.winner).unwrap().len(), 0);
        assert!((1..=3).contains(&result.base_stake));
        assert_eq!(result.stake, u32::from(result.base_stake) * result.multiplier);
        assert_eq!(result.landlord_won, result.winner == result.landlord);
        assert!(result.multiplier.is_power_of_two());
    }
}
