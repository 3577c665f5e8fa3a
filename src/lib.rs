//! A Go Boom card game engine with optional `no_std` support.
//!
//! Four seats play tricks from a standard 52-card deck. Each card played
//! must match the suit or rank of the trick's lead card; a seat that cannot
//! follow draws from the stock until it can. The highest card of the lead
//! suit wins the trick, and a round ends when a hand runs out. Tricks won
//! accumulate across rounds until a score threshold ends the match.
//!
//! The crate provides a [`Game`] type that deals rounds and applies player
//! [`Command`]s, returning the [`GameEvent`]s each one caused.
//!
//! # Example
//!
//! ```
//! use goboom::{Command, Game, MatchOptions};
//!
//! let mut game = Game::new(MatchOptions::default(), 42);
//! let seat = game.state().current_player();
//!
//! let command = match game.state().legal_plays(seat).first() {
//!     Some(&card) => Command::Play(card),
//!     None => Command::Draw,
//! };
//! let events = game.apply(command).unwrap();
//! assert!(!events.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
mod save;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use command::Command;
pub use deck::Deck;
pub use error::{ActionError, CorruptSave, DeckError, HandError, ParseError};
pub use event::{GameEvent, RoundEnd};
pub use game::{Game, GameState, MatchState, Player};
pub use hand::Hand;
pub use options::{GameOverRule, MatchOptions};
pub use trick::{Play, SEATS, Trick};
