//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;

mod deal;
mod show;
pub mod state;

pub use state::{GameState, Seat};

/// A two-seat cribbage game: a player against the computer.
///
/// The game owns the deck, both hands, the crib and the scores, and walks
/// each hand through deal, discard, cut and show. Pegging is not played.
pub struct Game {
    /// Cards left in the deck, top first.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Hands, indexed by seat.
    pub hands: Mutex<[Hand; 2]>,
    /// The crib.
    pub crib: Mutex<Hand>,
    /// Scores, indexed by seat.
    scores: Mutex<[u16; 2]>,
    /// Seat holding the crib this hand, once chosen.
    dealer: Mutex<Option<Seat>>,
    /// Seats that have discarded this hand.
    discarded: Mutex<[bool; 2]>,
    /// Shared card, once cut.
    starter: Mutex<Option<Card>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Deck::new()),
            options,
            state: Mutex::new(GameState::WaitingForDeal),
            hands: Mutex::new([Hand::new(), Hand::new()]),
            crib: Mutex::new(Hand::crib()),
            scores: Mutex::new([0, 0]),
            dealer: Mutex::new(None),
            discarded: Mutex::new([false, false]),
            starter: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the seat holding the crib, or `None` before the first deal.
    pub fn dealer(&self) -> Option<Seat> {
        *self.dealer.lock()
    }

    /// Returns a clone of the seat's hand.
    pub fn hand(&self, seat: Seat) -> Hand {
        self.hands.lock()[seat.index()].clone()
    }

    /// Returns a clone of the crib.
    pub fn get_crib(&self) -> Hand {
        self.crib.lock().clone()
    }

    /// Returns the seat's score.
    pub fn score(&self, seat: Seat) -> u16 {
        self.scores.lock()[seat.index()]
    }

    /// Returns the seat that has reached the winning score, if any.
    pub fn winner(&self) -> Option<Seat> {
        let scores = *self.scores.lock();
        [Seat::Player, Seat::Computer]
            .into_iter()
            .find(|seat| scores[seat.index()] >= self.options.winning_score)
    }

    /// Returns the shared card, once cut.
    pub fn starter(&self) -> Option<Card> {
        *self.starter.lock()
    }

    /// Returns whether the seat has discarded this hand.
    pub fn has_discarded(&self, seat: Seat) -> bool {
        self.discarded.lock()[seat.index()]
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Adds points to a seat, never passing the winning score.
    ///
    /// Returns the points actually added.
    fn add_to_score(&self, seat: Seat, points: u32) -> u32 {
        let mut scores = self.scores.lock();
        let current = scores[seat.index()];
        let target = u32::from(current)
            .saturating_add(points)
            .min(u32::from(self.options.winning_score));
        scores[seat.index()] = target as u16;
        target.saturating_sub(u32::from(current))
    }
}
