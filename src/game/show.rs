use alloc::vec::Vec;

use tracing::{Level, event};

use crate::card::Card;
use crate::error::GameError;
use crate::result::{HandScore, ShowResult};

use super::{Game, GameState, Seat};

impl Game {
    /// Cuts the shared card from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the crib is not complete yet or the deck is empty.
    pub fn cut(&self) -> Result<Card, GameError> {
        let mut state = self.state.lock();
        if *state != GameState::Cutting {
            return Err(GameError::InvalidState);
        }

        let starter = self.deck.lock().draw().ok_or(GameError::NotEnoughCards)?;
        *self.starter.lock() = Some(starter);
        *state = GameState::Show;

        event!(Level::DEBUG, %starter, "cut");
        Ok(starter)
    }

    /// Counts the pone's hand, then the dealer's hand, then the crib for
    /// the dealer.
    ///
    /// Counting stops as soon as a seat reaches the winning score.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared card has not been cut yet or a hand
    /// cannot be scored.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the state lock is held for the entire phase change"
    )]
    pub fn show(&self) -> Result<ShowResult, GameError> {
        let mut state = self.state.lock();
        if *state != GameState::Show {
            return Err(GameError::InvalidState);
        }
        let starter = self.starter().ok_or(GameError::InvalidState)?;
        let dealer = self.dealer().ok_or(GameError::InvalidState)?;

        let counts = [
            (dealer.opponent(), self.hand(dealer.opponent())),
            (dealer, self.hand(dealer)),
            (dealer, self.get_crib()),
        ];

        let mut scores = Vec::with_capacity(counts.len());
        let mut winner = None;
        for (seat, hand) in counts {
            let breakdown = hand.score(starter)?;
            let points = self.add_to_score(seat, breakdown.total());
            event!(
                Level::DEBUG,
                ?seat,
                crib = hand.is_crib(),
                points,
                "counted"
            );
            scores.push(HandScore {
                seat,
                is_crib: hand.is_crib(),
                breakdown,
                points,
            });
            if self.score(seat) >= self.options.winning_score {
                winner = Some(seat);
                break;
            }
        }

        *state = if winner.is_some() {
            GameState::GameOver
        } else {
            GameState::HandOver
        };

        Ok(ShowResult {
            starter,
            scores,
            winner,
        })
    }

    /// Passes the crib to the other seat and waits for the next deal.
    ///
    /// # Errors
    ///
    /// Returns an error unless the previous hand has been counted and the
    /// game is not over.
    pub fn next_hand(&self) -> Result<(), GameError> {
        let mut state = self.state.lock();
        if *state != GameState::HandOver {
            return Err(GameError::InvalidState);
        }

        let mut dealer = self.dealer.lock();
        *dealer = dealer.map(Seat::opponent);
        drop(dealer);

        for hand in self.hands.lock().iter_mut() {
            hand.clear();
        }
        self.crib.lock().clear();
        *self.discarded.lock() = [false, false];
        *self.starter.lock() = None;
        *state = GameState::WaitingForDeal;
        Ok(())
    }
}
