//! Difficulty tiers and game configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::DifficultyError;

/// How strongly the computer plays its discards.
///
/// Each tier picks uniformly among the best few discard options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Any of the ten best options.
    Easy,
    /// Any of the five best options.
    #[default]
    Standard,
    /// Any of the three best options.
    Hard,
    /// Always the best option.
    Perfect,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Standard, Self::Hard, Self::Perfect];

    /// Number of top-ranked options the selection is drawn from.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Difficulty;
    ///
    /// assert_eq!(Difficulty::Perfect.pool_size(), 1);
    /// assert_eq!(Difficulty::Easy.pool_size(), 10);
    /// ```
    #[must_use]
    pub const fn pool_size(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Standard => 5,
            Self::Hard => 3,
            Self::Perfect => 1,
        }
    }

    /// Lowercase name of the tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Standard => "standard",
            Self::Hard => "hard",
            Self::Perfect => "perfect",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parses a tier name, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Difficulty, DifficultyError};
    ///
    /// assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
    /// assert_eq!(
    ///     "expert".parse::<Difficulty>(),
    ///     Err(DifficultyError::InvalidDifficulty)
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or(DifficultyError::InvalidDifficulty)
    }
}

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_difficulty(Difficulty::Hard)
///     .with_winning_score(61);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Difficulty of the computer opponent.
    pub difficulty: Difficulty,
    /// Score that wins the game. Scores never exceed it.
    pub winning_score: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Standard,
            winning_score: 121,
        }
    }
}

impl GameOptions {
    /// Sets the computer's difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Easy);
    /// assert_eq!(options.difficulty, Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, winning_score: u16) -> Self {
        self.winning_score = winning_score;
        self
    }
}
