//! Discard selection for the computer player.
//!
//! Every way of keeping four of six dealt cards is rated by the exact
//! average score of the kept hand over all possible shared cards, plus or
//! minus the exact average score of the crib the two discards would seed.
//! A [`Difficulty`] then decides how far down the ranking the choice may
//! wander.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use tracing::{Level, event};

use crate::card::Card;
use crate::combination::{Combination, binomial, unique_combinations};
use crate::error::{DiscardError, ScoreError};
use crate::hand::Hand;
use crate::options::Difficulty;
use crate::score::{HELD_CARDS, score_cards};

/// Cards dealt to each player before the discard.
pub const DEALT_CARDS: usize = 6;

/// Number of ways to keep four of six cards.
pub const KEEP_COMBINATIONS: usize = binomial(DEALT_CARDS, HELD_CARDS);

/// One way to split a dealt hand, with its expected values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscardOption {
    /// Cards kept in hand.
    pub keep: [Card; 4],
    /// Cards thrown into the crib.
    pub discard: [Card; 2],
    /// Average score of the kept hand over every possible shared card.
    pub hand_value: f64,
    /// Average score of the crib the discards seed.
    pub crib_value: f64,
    /// `hand_value` plus the crib value when holding the crib, minus it otherwise.
    pub net_value: f64,
}

/// Rates every keep/discard split of a six-card hand, best first.
///
/// `available` is every card the player cannot see. It supplies the shared
/// card for the hand estimate and, three cards at a time, the opponent's
/// two discards plus the shared card for the crib estimate. Options with
/// equal net value keep their enumeration order.
///
/// # Errors
///
/// Returns [`DiscardError::HandSize`] unless `cards` holds six cards,
/// [`DiscardError::DeckOverlap`] if `available` contains one of them,
/// [`DiscardError::DuplicateCard`] if `available` repeats a card,
/// [`DiscardError::NotEnoughCards`] if `available` has fewer than three
/// cards, and [`DiscardError::CombinationCountMismatch`] if the six cards do
/// not yield fifteen distinct keeps.
pub fn evaluate_discards(
    cards: &[Card],
    available: &[Card],
    has_crib: bool,
) -> Result<Vec<DiscardOption>, DiscardError> {
    if cards.len() != DEALT_CARDS {
        return Err(DiscardError::HandSize(cards.len()));
    }
    if let Some(&card) = available.iter().find(|c| cards.contains(c)) {
        return Err(DiscardError::DeckOverlap(card));
    }
    let mut seen = 0_u64;
    for &card in available {
        let bit = 1_u64 << card.index();
        if seen & bit != 0 {
            return Err(DiscardError::DuplicateCard(card));
        }
        seen |= bit;
    }
    if available.len() < 3 {
        return Err(DiscardError::NotEnoughCards);
    }

    let keeps = unique_combinations(cards, HELD_CARDS, HELD_CARDS)?;
    if keeps.len() != KEEP_COMBINATIONS {
        return Err(DiscardError::CombinationCountMismatch {
            expected: KEEP_COMBINATIONS,
            found: keeps.len(),
        });
    }
    let triples = unique_combinations(available, 3, 3)?;

    #[cfg(feature = "parallel")]
    let mut options = {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        keeps
            .into_par_iter()
            .map(|keep| evaluate_keep(cards, &keep, available, &triples, has_crib))
            .collect::<Result<Vec<_>, _>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let mut options = keeps
        .iter()
        .map(|keep| evaluate_keep(cards, keep, available, &triples, has_crib))
        .collect::<Result<Vec<_>, _>>()?;

    options.sort_by(|a, b| b.net_value.total_cmp(&a.net_value));

    for (rank, option) in options.iter().enumerate() {
        event!(
            Level::TRACE,
            rank,
            keep = ?option.keep,
            discard = ?option.discard,
            hand = option.hand_value,
            crib = option.crib_value,
            net = option.net_value,
            "discard option"
        );
    }

    Ok(options)
}

fn evaluate_keep(
    cards: &[Card],
    keep: &Combination<'_>,
    available: &[Card],
    triples: &[Combination<'_>],
    has_crib: bool,
) -> Result<DiscardOption, ScoreError> {
    let keep = [keep[0], keep[1], keep[2], keep[3]];
    let mut rest = cards.iter().filter(|c| !keep.contains(c));
    let (Some(&first), Some(&second)) = (rest.next(), rest.next()) else {
        return Err(ScoreError::HandSize(cards.len()));
    };
    let discard = [first, second];

    let hand_value = expected_hand_value(&keep, available)?;
    let crib_value = expected_crib_value(discard, triples)?;
    let net_value = if has_crib {
        hand_value + crib_value
    } else {
        hand_value - crib_value
    };

    Ok(DiscardOption {
        keep,
        discard,
        hand_value,
        crib_value,
        net_value,
    })
}

fn expected_hand_value(keep: &[Card; 4], available: &[Card]) -> Result<f64, ScoreError> {
    let mut total = 0_u64;
    for &shared in available {
        total += u64::from(score_cards(keep, shared, false)?.total());
    }
    Ok(mean(total, available.len()))
}

/// Averages over every triple: the first two cards join the crib, the last
/// is the shared card.
fn expected_crib_value(
    discard: [Card; 2],
    triples: &[Combination<'_>],
) -> Result<f64, ScoreError> {
    let mut total = 0_u64;
    for triple in triples {
        let crib = [discard[0], discard[1], triple[0], triple[1]];
        total += u64::from(score_cards(&crib, triple[2], true)?.total());
    }
    Ok(mean(total, triples.len()))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for score totals and card counts"
)]
fn mean(total: u64, count: usize) -> f64 {
    total as f64 / count as f64
}

/// Picks an option uniformly among the best [`Difficulty::pool_size`]
/// entries of a ranking produced by [`evaluate_discards`].
///
/// Returns `None` if `ranked` is empty.
pub fn select_discard<'a, R: Rng + ?Sized>(
    ranked: &'a [DiscardOption],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'a DiscardOption> {
    if ranked.is_empty() {
        return None;
    }
    let pool = difficulty.pool_size().min(ranked.len());
    let index = rng.random_range(0..pool);
    event!(Level::DEBUG, %difficulty, pool, index, "selected discard option");
    ranked.get(index)
}

/// Chooses two cards to throw into the crib and removes them from `hand`.
///
/// The hand is changed only once a choice has been made; on error it is
/// left untouched.
///
/// # Errors
///
/// See [`evaluate_discards`].
///
/// # Example
///
/// ```
/// use cribrs::{Difficulty, Hand, choose_discards, remaining_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut hand: Hand = "5H 5C JD QS 2H 9C".parse().unwrap();
/// let available: Vec<_> = remaining_deck(hand.cards()).into_iter().take(12).collect();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let discards =
///     choose_discards(&mut hand, &available, Difficulty::Perfect, true, &mut rng).unwrap();
/// assert_eq!(hand.len(), 4);
/// assert!(discards.iter().all(|c| !hand.contains(c)));
/// ```
pub fn choose_discards<R: Rng + ?Sized>(
    hand: &mut Hand,
    available: &[Card],
    difficulty: Difficulty,
    has_crib: bool,
    rng: &mut R,
) -> Result<[Card; 2], DiscardError> {
    let ranked = evaluate_discards(hand.cards(), available, has_crib)?;
    let chosen = select_discard(&ranked, difficulty, rng).ok_or(
        DiscardError::CombinationCountMismatch {
            expected: KEEP_COMBINATIONS,
            found: 0,
        },
    )?;

    event!(
        Level::DEBUG,
        keep = ?chosen.keep,
        discard = ?chosen.discard,
        net = chosen.net_value,
        has_crib,
        "discarding"
    );
    hand.keep_only(&chosen.keep);
    Ok(chosen.discard)
}
