//! CLI Landlord example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use landlord::{ActionError, BidError, Card, Game, GameOptions, Phase, Role, SEATS};

fn main() {
    println!("Landlord CLI example (type 'quit' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = Game::new(options, seed);

    let Some(human) = game.human_seat() else {
        return;
    };

    loop {
        game.start_new_game();

        while !matches!(game.phase(), Phase::GameOver) {
            if game.phase() == Phase::Dealing {
                println!("Nobody bid. Redealing.");
                if let Err(err) = game.deal_cards() {
                    println!("Deal error: {err}");
                    return;
                }
                continue;
            }

            let seat = game.current_seat();
            if seat == human {
                if !human_turn(&game, human) {
                    return;
                }
            } else {
                ai_turn(&game, seat);
            }
        }

        print_result(&game, human);

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => break,
        }
    }
}

fn ai_turn(game: &Game, seat: usize) {
    let name = seat_name(game, seat);
    let Some(action) = game.ai_action(seat) else {
        return;
    };

    match game.apply(seat, &action) {
        Ok(()) => match game.last_play() {
            Some(last) if last.seat == seat && game.phase() == Phase::Playing => {
                println!("{name} plays {}", format_cards(&last.cards));
            }
            _ => println!("{name}: {action:?}"),
        },
        Err(ActionError::Bid(BidError::NoBids)) => println!("{name} passes."),
        Err(ActionError::Play(err)) => {
            // A rejected play falls back to a pass, or the lowest card on a
            // fresh trick.
            println!("{name} play rejected: {err}");
            if game.pass(seat).is_err() {
                let lowest = game.hand(seat).and_then(|cards| cards.first().copied());
                if let Some(card) = lowest {
                    let _ = game.play_cards(seat, &[card]);
                }
            }
        }
        Err(err) => println!("{name} error: {err}"),
    }
}

/// Runs one prompt for the human seat. Returns `false` on quit.
fn human_turn(game: &Game, seat: usize) -> bool {
    print_table(game, seat);

    match game.phase() {
        Phase::Bidding => {
            let high = game.high_bid();
            let input = prompt_line(&format!("Bid (0 to pass, {}-3): ", high + 1));
            if input == "quit" {
                return false;
            }
            match input.parse::<u8>() {
                Ok(amount) => match game.bid(seat, amount) {
                    Ok(()) => {}
                    Err(BidError::NoBids) => println!("Everyone passed."),
                    Err(err) => println!("Bid error: {err}"),
                },
                Err(_) => println!("Please enter a number."),
            }
        }
        Phase::Grabbing => {
            let input = prompt_line("Grab the Landlord seat? (y/n): ");
            if input == "quit" {
                return false;
            }
            let accept = matches!(input.as_str(), "y" | "yes");
            if let Err(err) = game.grab(seat, accept) {
                println!("Grab error: {err}");
            }
        }
        Phase::Playing => {
            let input = prompt_line("Cards (e.g. '3 3 j'), [p]ass, [h]int: ");
            match input.as_str() {
                "quit" => return false,
                "p" | "pass" => {
                    if let Err(err) = game.pass(seat) {
                        println!("Play error: {err}");
                    }
                }
                "h" | "hint" => match game.get_hint() {
                    Some(cards) => println!("Hint: {}", format_cards(&cards)),
                    None => println!("Hint: pass"),
                },
                _ => {
                    let hand = game.hand(seat).unwrap_or_default();
                    match parse_cards(&input, &hand) {
                        Some(cards) => {
                            if let Err(err) = game.play_cards(seat, &cards) {
                                println!("Play error: {err}");
                            }
                        }
                        None => println!("You do not hold those cards."),
                    }
                }
            }
        }
        Phase::Init | Phase::Dealing | Phase::GameOver => {}
    }

    true
}

/// Maps space-separated labels onto distinct cards from `hand`.
fn parse_cards(input: &str, hand: &[Card]) -> Option<Vec<Card>> {
    let mut available = hand.to_vec();
    let mut picked = Vec::new();

    for token in input.split_whitespace() {
        let index = available
            .iter()
            .position(|card| card.label().eq_ignore_ascii_case(token))?;
        picked.push(available.remove(index));
    }

    if picked.is_empty() { None } else { Some(picked) }
}

fn print_table(game: &Game, seat: usize) {
    println!();
    let counts = game.card_counts();
    for (other, count) in counts.iter().enumerate().take(SEATS) {
        if other == seat {
            continue;
        }
        let role = game
            .player(other)
            .map_or(Role::Unknown, |player| player.role());
        println!("{} ({role:?}): {count} card(s)", seat_name(game, other));
    }

    let bottom = game.bottom_cards();
    if game.landlord().is_some() && !bottom.is_empty() {
        println!("Bottom: {}", format_cards(&bottom));
    }
    println!(
        "Bid {} | multiplier x{}",
        game.high_bid(),
        game.multiplier()
    );

    if let Some(last) = game.last_play() {
        println!(
            "On the table: {} ({}) by {}",
            format_cards(&last.cards),
            last.pattern.kind.name(),
            seat_name(game, last.seat)
        );
    }

    let hand = game.hand(seat).unwrap_or_default();
    println!("Your hand: {}", format_cards(&hand));
}

fn print_result(game: &Game, human: usize) {
    let Some(result) = game.game_over_result() else {
        return;
    };

    println!();
    println!(
        "{} wins as {:?}.",
        seat_name(game, result.winner),
        result.winner_role
    );
    println!(
        "Stake: {} x {} = {}",
        result.base_stake, result.multiplier, result.stake
    );

    let human_is_landlord = human == result.landlord;
    if human_is_landlord == result.landlord_won {
        println!("{}", colorize("You win.", "32"));
    } else {
        println!("{}", colorize("You lose.", "31"));
    }
}

fn seat_name(game: &Game, seat: usize) -> String {
    game.player(seat)
        .map_or_else(|| format!("Seat {seat}"), |player| player.name().to_string())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("quit"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
