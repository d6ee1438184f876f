use rand::Rng;
use tracing::{Level, event};

use crate::card::Card;
use crate::deck::{Deck, remaining_deck};
use crate::discard::{DEALT_CARDS, choose_discards};
use crate::error::GameError;

use super::{Game, GameState, Seat};

impl Game {
    /// Shuffles a fresh deck and deals six cards to each seat.
    ///
    /// The first dealer is chosen at random. Cards are dealt one at a time,
    /// the dealer's opponent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the state lock is held for the entire phase change"
    )]
    pub fn deal(&self) -> Result<(), GameError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForDeal {
            return Err(GameError::InvalidState);
        }

        let mut rng = self.rng.lock();
        let dealer = *self.dealer.lock().get_or_insert_with(|| {
            if rng.random_bool(0.5) {
                Seat::Player
            } else {
                Seat::Computer
            }
        });

        let mut deck = Deck::new();
        deck.shuffle(&mut *rng);
        drop(rng);

        let mut hands = self.hands.lock();
        for hand in hands.iter_mut() {
            hand.clear();
        }
        for _ in 0..DEALT_CARDS {
            for seat in [dealer.opponent(), dealer] {
                let card = deck.draw().ok_or(GameError::NotEnoughCards)?;
                hands[seat.index()]
                    .add_card(card)
                    .map_err(|_| GameError::InvalidState)?;
            }
        }
        drop(hands);

        *self.deck.lock() = deck;
        self.crib.lock().clear();
        *self.discarded.lock() = [false, false];
        *self.starter.lock() = None;
        *state = GameState::Discarding;

        event!(Level::DEBUG, ?dealer, "dealt");
        Ok(())
    }

    /// Throws two of the seat's cards into the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discard phase, the seat
    /// has already discarded, or the cards are not two distinct cards from
    /// the seat's hand.
    pub fn discard(&self, seat: Seat, cards: [Card; 2]) -> Result<(), GameError> {
        self.check_can_discard(seat)?;
        if cards[0] == cards[1] {
            return Err(GameError::InvalidDiscard);
        }

        let mut hands = self.hands.lock();
        let hand = &mut hands[seat.index()];
        if !cards.iter().all(|c| hand.contains(c)) {
            return Err(GameError::InvalidDiscard);
        }
        for card in &cards {
            hand.remove_card(card)
                .map_err(|_| GameError::InvalidDiscard)?;
        }
        drop(hands);

        self.finish_discard(seat, cards)
    }

    /// Lets the computer choose and throw its two discards.
    ///
    /// The computer searches over every card it cannot see, and values the
    /// crib positively only when it is the dealer.
    ///
    /// Returns the discarded cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discard phase, the
    /// computer has already discarded, or the search fails.
    pub fn computer_discard(&self) -> Result<[Card; 2], GameError> {
        self.check_can_discard(Seat::Computer)?;
        let has_crib = self.dealer() == Some(Seat::Computer);

        let mut hands = self.hands.lock();
        let hand = &mut hands[Seat::Computer.index()];
        let available = remaining_deck(hand.cards());
        let discards = {
            let mut rng = self.rng.lock();
            choose_discards(
                hand,
                &available,
                self.options.difficulty,
                has_crib,
                &mut *rng,
            )?
        };
        drop(hands);

        self.finish_discard(Seat::Computer, discards)?;
        Ok(discards)
    }

    fn check_can_discard(&self, seat: Seat) -> Result<(), GameError> {
        if *self.state.lock() != GameState::Discarding {
            return Err(GameError::InvalidState);
        }
        if self.has_discarded(seat) {
            return Err(GameError::AlreadyDiscarded);
        }
        Ok(())
    }

    fn finish_discard(&self, seat: Seat, cards: [Card; 2]) -> Result<(), GameError> {
        let mut crib = self.crib.lock();
        for card in cards {
            crib.add_card(card).map_err(|_| GameError::InvalidDiscard)?;
        }
        drop(crib);

        let mut discarded = self.discarded.lock();
        discarded[seat.index()] = true;
        let done = discarded.iter().all(|&d| d);
        drop(discarded);

        event!(Level::DEBUG, ?seat, "discarded");
        if done {
            *self.state.lock() = GameState::Cutting;
        }
        Ok(())
    }
}
