//! A rule engine for three-player Landlord with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow: the
//! deal, the auction and grab round, trick play with pattern checking, and
//! scoring. The [`ai`] module holds the heuristics used for automated seats
//! and for hints.
//!
//! The engine never drives itself. A driver polls [`Game::phase`] and
//! [`Game::current_seat`] after every action and, for automated seats,
//! feeds [`Game::ai_action`] back through [`Game::apply`].
//!
//! # Example
//!
//! ```
//! use landlord::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default().with_human_seat(0, false), 42);
//! game.start_new_game();
//!
//! while !matches!(game.phase(), Phase::GameOver | Phase::Dealing) {
//!     let seat = game.current_seat();
//!     let Some(action) = game.ai_action(seat) else { break };
//!     if game.apply(seat, &action).is_err() {
//!         break;
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pattern;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use ai::AiAction;
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BidError, DealError, GrabError, PlayError};
pub use game::{Auction, Game, LastPlay, Phase};
pub use hand::{Hand, RankCounts};
pub use options::{GameOptions, SEATS};
pub use pattern::{Pattern, PatternKind, can_beat, classify, compare};
pub use player::{Player, Role};
pub use result::GameResult;
