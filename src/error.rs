//! Error types for scoring, discard selection, and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of `A`, `2`..`10`, `J`, `Q`, `K`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four suits.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when building or changing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is already in the hand.
    #[error("card is already in the hand")]
    DuplicateCard,
    /// The card is not in the hand.
    #[error("card is not in the hand")]
    CardNotFound,
    /// A card in the input could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when enumerating combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// Length bounds are reversed or exceed the number of cards.
    #[error("invalid combination range {min_len}..={max_len} for {len} cards")]
    InvalidRange {
        /// Requested minimum length.
        min_len: usize,
        /// Requested maximum length.
        max_len: usize,
        /// Number of cards available.
        len: usize,
    },
}

/// Errors that can occur while scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A scored hand must hold exactly four cards.
    #[error("expected 4 held cards, found {0}")]
    HandSize(usize),
    /// The shared card is also one of the held cards.
    #[error("shared card {0} is already in the hand")]
    SharedCardInHand(Card),
    /// The same card is held more than once.
    #[error("card {0} is held more than once")]
    DuplicateCard(Card),
    /// An internal count invariant was violated.
    #[error("expected at most {expected} combination(s), found {found}")]
    CombinationCountMismatch {
        /// Expected count.
        expected: usize,
        /// Count actually found.
        found: usize,
    },
}

/// Errors that can occur while choosing discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Discards are chosen from exactly six cards.
    #[error("expected 6 cards to discard from, found {0}")]
    HandSize(usize),
    /// The available deck contains a card from the hand.
    #[error("card {0} is both in the hand and in the available deck")]
    DeckOverlap(Card),
    /// The available deck lists the same card more than once.
    #[error("card {0} appears more than once in the available deck")]
    DuplicateCard(Card),
    /// The available deck cannot supply a crib and a shared card.
    #[error("not enough cards in the available deck")]
    NotEnoughCards,
    /// The six cards did not produce the expected number of keeps.
    #[error("expected {expected} keep combinations, found {found}")]
    CombinationCountMismatch {
        /// Expected count.
        expected: usize,
        /// Count actually found.
        found: usize,
    },
    /// Scoring a candidate failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// Enumerating candidates failed.
    #[error(transparent)]
    Range(#[from] CombinationError),
}

/// Errors that can occur when parsing a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DifficultyError {
    /// The tier name is not recognized.
    #[error("unrecognized difficulty tier")]
    InvalidDifficulty,
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Discarded cards must be two distinct cards from the hand.
    #[error("discards must be two distinct cards from the hand")]
    InvalidDiscard,
    /// This seat has already discarded.
    #[error("seat has already discarded")]
    AlreadyDiscarded,
    /// The computer could not choose a discard.
    #[error(transparent)]
    Discard(#[from] DiscardError),
    /// Scoring a hand at the show failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
