//! A cribbage hand scoring and discard selection engine with optional
//! `no_std` support.
//!
//! The crate scores hands and cribs with [`score_hand`], enumerates card
//! subsets with [`unique_combinations`], and lets a computer player pick
//! its crib discards by exact expected value with [`choose_discards`].
//! [`Game`] drives the deal, discard, cut and show of a two-seat game.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, score_hand};
//!
//! let hand: Hand = "4S 4H 5D 6C".parse().unwrap();
//! let shared: Card = "3S".parse().unwrap();
//! let score = score_hand(&hand, shared).unwrap();
//! assert_eq!(score.run_points(), 8);
//! assert_eq!(score.total(), 14);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combination;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use combination::{Combination, binomial, unique_combinations};
pub use deck::{Deck, remaining_deck};
pub use discard::{DiscardOption, choose_discards, evaluate_discards, select_discard};
pub use error::{
    CardError, CombinationError, DifficultyError, DiscardError, GameError, HandError, ScoreError,
};
pub use game::{Game, GameState, Seat};
pub use hand::Hand;
pub use options::{Difficulty, GameOptions};
pub use result::{HandScore, ShowResult};
pub use score::{Run, ScoreBreakdown, score_cards, score_hand};
