//! Show result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Seat;
use crate::score::ScoreBreakdown;

/// Score of one hand or crib at the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandScore {
    /// The seat the points go to.
    pub seat: Seat,
    /// Whether this is the crib.
    pub is_crib: bool,
    /// Points by rule.
    pub breakdown: ScoreBreakdown,
    /// Points actually added to the seat's score (capped at the winning score).
    pub points: u32,
}

/// Result of counting the hands after the cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowResult {
    /// The shared card.
    pub starter: Card,
    /// Counted hands, in counting order: pone, dealer, crib.
    ///
    /// Counting stops as soon as a seat wins, so this may be shorter.
    pub scores: Vec<HandScore>,
    /// The seat that reached the winning score, if any.
    pub winner: Option<Seat>,
}
