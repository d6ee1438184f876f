//! Enumeration of unique card combinations.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::CombinationError;

/// A subset of cards borrowed from a source slice.
///
/// Two combinations are equal when they hold the same set of cards,
/// whatever order they were enumerated in.
#[derive(Debug, Clone)]
pub struct Combination<'a> {
    cards: Vec<&'a Card>,
}

impl<'a> Combination<'a> {
    fn from_indices(source: &'a [Card], idx: &[usize]) -> Self {
        Self {
            cards: idx.iter().map(|&i| &source[i]).collect(),
        }
    }

    /// Returns the cards in enumeration order.
    #[must_use]
    pub fn cards(&self) -> &[&'a Card] {
        &self.cards
    }

    /// Iterates over the cards by value.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|&&c| c)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the combination is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Set key of the combination: one bit per card identifier.
    #[must_use]
    pub fn key(&self) -> u64 {
        self.cards
            .iter()
            .fold(0, |key, card| key | (1_u64 << card.index()))
    }

    /// Copies the cards out into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl PartialEq for Combination<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Combination<'_> {}

impl Index<usize> for Combination<'_> {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        self.cards[index]
    }
}

/// Iterator over the `k`-subsets of a slice, as index vectors in
/// lexicographic order.
#[derive(Debug)]
struct IndexCombinations {
    n: usize,
    idx: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idx: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.idx.clone();

        // Find the rightmost index that can still move forward.
        let k = self.idx.len();
        let mut level = k;
        while level > 0 && self.idx[level - 1] == self.n - k + level - 1 {
            level -= 1;
        }
        if level == 0 {
            self.done = true;
        } else {
            self.idx[level - 1] += 1;
            for i in level..k {
                self.idx[i] = self.idx[i - 1] + 1;
            }
        }

        Some(current)
    }
}

/// Returns every unique combination of `cards` with a length in
/// `min_len..=max_len`.
///
/// Combinations are grouped by ascending length and, within a length, in
/// lexicographic order of their positions in `cards`. When `cards` holds
/// equal cards more than once, only the first combination of each card set
/// is kept.
///
/// # Errors
///
/// Returns [`CombinationError::InvalidRange`] if `min_len > max_len` or
/// `max_len > cards.len()`.
///
/// # Example
///
/// ```
/// use cribrs::{Hand, unique_combinations};
///
/// let hand: Hand = "AH 2C 3D 4S".parse().unwrap();
/// let pairs = unique_combinations(hand.cards(), 2, 2).unwrap();
/// assert_eq!(pairs.len(), 6);
/// ```
pub fn unique_combinations(
    cards: &[Card],
    min_len: usize,
    max_len: usize,
) -> Result<Vec<Combination<'_>>, CombinationError> {
    if min_len > max_len || max_len > cards.len() {
        return Err(CombinationError::InvalidRange {
            min_len,
            max_len,
            len: cards.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut combinations = Vec::new();
    for k in min_len..=max_len {
        for idx in IndexCombinations::new(cards.len(), k) {
            let combination = Combination::from_indices(cards, &idx);
            if seen.insert(combination.key()) {
                combinations.push(combination);
            }
        }
    }

    Ok(combinations)
}

/// Binomial coefficient `C(n, k)`.
#[must_use]
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::deck::Deck;

    fn cards(n: usize) -> Vec<Card> {
        Deck::new().cards()[..n].to_vec()
    }

    #[test]
    fn counts_match_binomial() {
        let cards = cards(6);
        for k in 0..=6 {
            let combos = unique_combinations(&cards, k, k).unwrap();
            assert_eq!(combos.len(), binomial(6, k), "k = {k}");
        }
        let all = unique_combinations(&cards, 1, 5).unwrap();
        assert_eq!(all.len(), 62);
    }

    #[test]
    fn no_two_combinations_share_a_set() {
        let cards = cards(7);
        let combos = unique_combinations(&cards, 0, 7).unwrap();
        let mut keys: Vec<u64> = combos.iter().map(Combination::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), combos.len());
        assert_eq!(combos.len(), 128);
    }

    #[test]
    fn order_is_lexicographic_and_stable() {
        let cards = cards(4);
        let combos = unique_combinations(&cards, 2, 2).unwrap();
        let got: Vec<Vec<Card>> = combos.iter().map(Combination::to_vec).collect();
        let expected = vec![
            vec![cards[0], cards[1]],
            vec![cards[0], cards[2]],
            vec![cards[0], cards[3]],
            vec![cards[1], cards[2]],
            vec![cards[1], cards[3]],
            vec![cards[2], cards[3]],
        ];
        assert_eq!(got, expected);

        let again = unique_combinations(&cards, 2, 2).unwrap();
        assert_eq!(combos, again);
    }

    #[test]
    fn repeated_cards_are_deduplicated() {
        let five = Card::new(Rank::Five, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Spades);
        let cards = [five, five, king];
        let combos = unique_combinations(&cards, 1, 2).unwrap();
        // {5}, {K}, {5, 5} collapses to {5}, {5, K}.
        assert_eq!(combos.len(), 3);
        assert_eq!(combos[0].to_vec(), vec![five]);
        assert_eq!(combos[1].to_vec(), vec![king]);
        assert_eq!(combos[2].to_vec(), vec![five, king]);
    }

    #[test]
    fn equality_ignores_order() {
        let cards = cards(2);
        let reversed = [cards[1], cards[0]];
        let a = unique_combinations(&cards, 2, 2).unwrap();
        let b = unique_combinations(&reversed, 2, 2).unwrap();
        assert_eq!(a[0], b[0]);
        assert_ne!(a[0].to_vec(), b[0].to_vec());
    }

    #[test]
    fn invalid_ranges() {
        let cards = cards(3);
        assert_eq!(
            unique_combinations(&cards, 2, 1).unwrap_err(),
            CombinationError::InvalidRange {
                min_len: 2,
                max_len: 1,
                len: 3
            }
        );
        assert!(unique_combinations(&cards, 0, 4).is_err());
        assert!(unique_combinations(&[], 0, 0).is_ok());
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(6, 4), 15);
        assert_eq!(binomial(46, 3), 15_180);
        assert_eq!(binomial(52, 0), 1);
        assert_eq!(binomial(3, 4), 0);
    }
}
