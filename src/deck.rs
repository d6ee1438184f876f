//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::HandError;

/// A single deck of cards. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck, suit by suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, the first one on top.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if a card appears twice.
    pub fn from_cards<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut deck = Self { cards: Vec::new() };
        for card in cards {
            deck.add_card(card)?;
        }
        Ok(deck)
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Returns a card to the bottom of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the card is already in the deck.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.contains(&card) {
            return Err(HandError::DuplicateCard);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes a specific card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not in the deck.
    pub fn remove_card(&mut self, card: &Card) -> Result<(), HandError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(HandError::CardNotFound)?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns the cards left in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns every card of a full deck except `exclude`, in deck order.
///
/// This is the deck an automated player searches over: the cards it
/// cannot see.
///
/// # Example
///
/// ```
/// use cribrs::{Hand, remaining_deck};
///
/// let hand: Hand = "AH 2H 3H 4H 5H 6H".parse().unwrap();
/// assert_eq!(remaining_deck(hand.cards()).len(), 46);
/// ```
#[must_use]
pub fn remaining_deck(exclude: &[Card]) -> Vec<Card> {
    Deck::new()
        .cards
        .into_iter()
        .filter(|card| !exclude.contains(card))
        .collect()
}
