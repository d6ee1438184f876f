//! Hand and crib representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{HandError, ScoreError};
use crate::score::{ScoreBreakdown, score_hand};

/// An unordered collection of distinct cards.
///
/// A hand flagged as a crib only scores a flush when the shared card matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether this hand is the crib.
    is_crib: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            is_crib: false,
        }
    }

    /// Creates a new empty crib.
    #[must_use]
    pub const fn crib() -> Self {
        Self {
            cards: Vec::new(),
            is_crib: true,
        }
    }

    /// Creates a hand from the given cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if a card appears twice.
    pub fn from_cards<I>(cards: I, is_crib: bool) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut hand = Self {
            cards: Vec::new(),
            is_crib,
        };
        for card in cards {
            hand.add_card(card)?;
        }
        Ok(hand)
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the card is already held.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(&card) {
            return Err(HandError::DuplicateCard);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes a card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not held.
    pub fn remove_card(&mut self, card: &Card) -> Result<(), HandError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(HandError::CardNotFound)?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns whether the card is in the hand.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether this hand is the crib.
    #[must_use]
    pub const fn is_crib(&self) -> bool {
        self.is_crib
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

    /// Drops every card not in `keep`.
    pub(crate) fn keep_only(&mut self, keep: &[Card]) {
        self.cards.retain(|c| keep.contains(c));
    }

    /// Clears the hand for a new deal. The crib flag is kept.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Scores the hand against the shared card.
    ///
    /// The hand itself is not modified.
    ///
    /// # Errors
    ///
    /// See [`score_hand`].
    pub fn score(&self, shared: Card) -> Result<ScoreBreakdown, ScoreError> {
        score_hand(self, shared)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace separated cards into a (non-crib) hand.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Hand;
    ///
    /// let hand: Hand = "5H 5C 5S JD".parse().unwrap();
    /// assert_eq!(hand.len(), 4);
    /// assert!(!hand.is_crib());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::from_cards(cards, false)
    }
}
