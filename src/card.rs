//! Card types and parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck population order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// Returns the unicode symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '\u{2665}',
            Self::Clubs => '\u{2663}',
            Self::Diamonds => '\u{2666}',
            Self::Spades => '\u{2660}',
        }
    }

    const fn ordinal(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Clubs => 1,
            Self::Diamonds => 2,
            Self::Spades => 3,
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Accepts `H`, `C`, `D`, `S` (either case) or the unicode suit symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" | "\u{2665}" => Ok(Self::Hearts),
            "C" | "c" | "\u{2663}" => Ok(Self::Clubs),
            "D" | "d" | "\u{2666}" => Ok(Self::Diamonds),
            "S" | "s" | "\u{2660}" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, ace low.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Rank order used for runs (Ace = 1, King = 13).
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// Point value used when counting fifteens.
    ///
    /// Face cards count 10, the ace counts 1.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.order(),
        }
    }

    /// Returns the display symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::Ace),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            _ => match s.parse::<u8>() {
                Ok(n @ 2..=10) => Ok(Self::ALL[usize::from(n) - 1]),
                _ => Err(CardError::InvalidRank),
            },
        }
    }
}

/// A playing card.
///
/// Ordering is by rank first, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Point value of the card (see [`Rank::value`]).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Rank order of the card (see [`Rank::order`]).
    #[must_use]
    pub const fn order(self) -> u8 {
        self.rank.order()
    }

    /// Unique identifier of the card in `0..52`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.ordinal() * 13 + self.rank.order() - 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a rank followed by a suit, e.g. `5H`, `10s` or `J♦`.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Card, Rank, Suit};
    ///
    /// let card: Card = "10S".parse().unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, _) = s.char_indices().last().ok_or(CardError::InvalidRank)?;
        let (rank, suit) = s.split_at(split);
        let rank = rank.parse()?;
        let suit = suit.parse()?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cards() {
        assert_eq!(
            "AH".parse::<Card>(),
            Ok(Card::new(Rank::Ace, Suit::Hearts))
        );
        assert_eq!(
            "10\u{2660}".parse::<Card>(),
            Ok(Card::new(Rank::Ten, Suit::Spades))
        );
        assert_eq!("qd".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));
        assert_eq!("1H".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("11H".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("5X".parse::<Card>(), Err(CardError::InvalidSuit));
        assert_eq!("".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("H".parse::<Card>(), Err(CardError::InvalidRank));
    }

    #[test]
    fn values_and_orders() {
        let values: Vec<u8> = Rank::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10]);
        let orders: Vec<u8> = Rank::ALL.iter().map(|r| r.order()).collect();
        assert_eq!(orders, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn indices_are_unique() {
        let mut seen = [false; DECK_SIZE];
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let index = usize::from(Card::new(rank, suit).index());
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Card::new(Rank::Five, Suit::Hearts).to_string(), "5\u{2665}");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10\u{2663}");
    }
}
