//! A King of the Beards (*Roi des Barbus*) card game engine with optional
//! `no_std` support.
//!
//! Players are registered in a [`PlayerRoster`], a 52-card deck is shuffled,
//! and players take turns drawing cards that each trigger a drinking rule.
//! The [`Game`] type owns the deck and the turn rotation; [`rules`] maps
//! every card to its instruction.
//!
//! # Example
//!
//! ```
//! use kotb::{Game, GameOptions, GameState, PlayerRoster};
//!
//! let roster = PlayerRoster::from_names(["Alice", "Bob"]).unwrap();
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start(roster).unwrap();
//!
//! let outcome = game.draw().unwrap();
//! println!("{}: {}", outcome.card, outcome.card.rule(game.options().locale));
//! assert_eq!(game.advance(), Ok(GameState::AwaitingDraw { player: 1 }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod roster;
pub mod rules;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, build_deck, shuffle};
pub use error::{AdvanceError, DrawError, RosterError, StartError};
pub use game::{Game, GameState};
pub use options::{GameOptions, Locale};
pub use result::{DrawOutcome, Snapshot};
pub use roster::PlayerRoster;
pub use rules::{rule_for, rule_for_symbol, rule_text, rules_summary};
