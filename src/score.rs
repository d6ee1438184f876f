//! Hand scoring: fifteens, pairs, runs, flushes and nobs.

use crate::card::{Card, Rank};
use crate::error::ScoreError;
use crate::hand::Hand;

/// Number of held cards in a scored hand or crib.
pub const HELD_CARDS: usize = 4;

/// A run of consecutive ranks and how many distinct ways it can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Number of consecutive ranks in the run.
    pub length: u8,
    /// Product of the card counts of each rank in the run.
    pub multiplicity: u8,
}

impl Run {
    /// Points for the run, counting every duplicate.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.length as u32 * self.multiplicity as u32
    }
}

/// Points earned by a hand, broken down by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreBreakdown {
    /// Number of card subsets summing to fifteen.
    pub fifteens: u8,
    /// Number of pairs of equal rank.
    pub pairs: u8,
    /// The run of three or more, if any.
    pub run: Option<Run>,
    /// Four held cards share a suit and the shared card does not.
    pub four_card_flush: bool,
    /// All five cards share a suit.
    pub five_card_flush: bool,
    /// Held jack matching the shared card's suit.
    pub nobs: u8,
}

impl ScoreBreakdown {
    /// Points from fifteens.
    #[must_use]
    pub const fn fifteen_points(&self) -> u32 {
        2 * self.fifteens as u32
    }

    /// Points from pairs.
    #[must_use]
    pub const fn pair_points(&self) -> u32 {
        2 * self.pairs as u32
    }

    /// Points from runs.
    #[must_use]
    pub const fn run_points(&self) -> u32 {
        match self.run {
            Some(run) => run.points(),
            None => 0,
        }
    }

    /// Points from flushes.
    #[must_use]
    pub const fn flush_points(&self) -> u32 {
        if self.five_card_flush {
            5
        } else if self.four_card_flush {
            4
        } else {
            0
        }
    }

    /// Points from nobs.
    #[must_use]
    pub const fn nobs_points(&self) -> u32 {
        self.nobs as u32
    }

    /// Total points for the hand.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteen_points()
            + self.pair_points()
            + self.run_points()
            + self.flush_points()
            + self.nobs_points()
    }
}

/// Scores a hand or crib against the shared card.
///
/// The hand is read, never modified: the shared card is combined with the
/// held cards in a separate evaluation set.
///
/// # Errors
///
/// See [`score_cards`].
///
/// # Example
///
/// ```
/// use cribrs::{Card, Hand, score_hand};
///
/// let hand: Hand = "5H 5C 5S JD".parse().unwrap();
/// let shared: Card = "5D".parse().unwrap();
/// assert_eq!(score_hand(&hand, shared).unwrap().total(), 29);
/// ```
pub fn score_hand(hand: &Hand, shared: Card) -> Result<ScoreBreakdown, ScoreError> {
    score_cards(hand.cards(), shared, hand.is_crib())
}

/// Scores four held cards against the shared card.
///
/// # Errors
///
/// Returns [`ScoreError::HandSize`] unless exactly four cards are held,
/// [`ScoreError::DuplicateCard`] if a held card is repeated,
/// [`ScoreError::SharedCardInHand`] if the shared card is also held, and
/// [`ScoreError::CombinationCountMismatch`] if more than one run is found.
pub fn score_cards(held: &[Card], shared: Card, is_crib: bool) -> Result<ScoreBreakdown, ScoreError> {
    let held: &[Card; HELD_CARDS] = held
        .try_into()
        .map_err(|_| ScoreError::HandSize(held.len()))?;
    let mut seen = 0_u64;
    for &card in held {
        let bit = 1_u64 << card.index();
        if seen & bit != 0 {
            return Err(ScoreError::DuplicateCard(card));
        }
        seen |= bit;
    }
    if held.contains(&shared) {
        return Err(ScoreError::SharedCardInHand(shared));
    }

    let cards = [held[0], held[1], held[2], held[3], shared];
    let (four_card_flush, five_card_flush) = flushes(held, shared, is_crib);

    Ok(ScoreBreakdown {
        fifteens: fifteens(&cards),
        pairs: pairs(&cards),
        run: run(&cards)?,
        four_card_flush,
        five_card_flush,
        nobs: nobs(held, shared),
    })
}

/// Every non-empty subset of the five-card evaluation set, as a bitmask of
/// positions.
const SUBSETS: core::ops::RangeInclusive<u8> = 1..=(1 << 5) - 1;

fn fifteens(cards: &[Card; 5]) -> u8 {
    let values = cards.map(Card::value);
    SUBSETS
        .filter(|&mask| {
            let sum: u8 = values
                .iter()
                .enumerate()
                .filter(|&(position, _)| mask & (1 << position) != 0)
                .map(|(_, &value)| value)
                .sum();
            sum == 15
        })
        .count() as u8
}

/// Cards per rank order, indexed by [`Rank::order`].
fn rank_counts(cards: &[Card]) -> [u8; 14] {
    let mut counts = [0; 14];
    for card in cards {
        counts[usize::from(card.order())] += 1;
    }
    counts
}

fn pairs(cards: &[Card]) -> u8 {
    rank_counts(cards)
        .iter()
        .map(|&n| n * n.saturating_sub(1) / 2)
        .sum()
}

fn run(cards: &[Card]) -> Result<Option<Run>, ScoreError> {
    let counts = rank_counts(cards);

    // Maximal stretches of present ranks, as (first order, length).
    let mut runs = [(0_u8, 0_u8); 3];
    let mut found = 0;
    let mut start = None;
    for order in 1..=14_u8 {
        let present = order <= 13 && counts[usize::from(order)] > 0;
        match (present, start) {
            (true, None) => start = Some(order),
            (false, Some(first)) => {
                let length = order - first;
                if length >= 3 {
                    if found < runs.len() {
                        runs[found] = (first, length);
                    }
                    found += 1;
                }
                start = None;
            }
            _ => {}
        }
    }

    match found {
        0 => Ok(None),
        1 => {
            let (first, length) = runs[0];
            let multiplicity = (first..first + length)
                .map(|order| counts[usize::from(order)])
                .product();
            Ok(Some(Run {
                length,
                multiplicity,
            }))
        }
        _ => Err(ScoreError::CombinationCountMismatch {
            expected: 1,
            found,
        }),
    }
}

fn flushes(held: &[Card; HELD_CARDS], shared: Card, is_crib: bool) -> (bool, bool) {
    let suit = held[0].suit;
    if held.iter().any(|c| c.suit != suit) {
        return (false, false);
    }
    if shared.suit == suit {
        (false, true)
    } else {
        (!is_crib, false)
    }
}

fn nobs(held: &[Card; HELD_CARDS], shared: Card) -> u8 {
    if shared.rank == Rank::Jack {
        return 0;
    }
    u8::from(
        held.iter()
            .any(|c| c.rank == Rank::Jack && c.suit == shared.suit),
    )
}
