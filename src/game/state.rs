//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next deal.
    WaitingForDeal,
    /// Both seats hold six cards and must throw two into the crib.
    Discarding,
    /// The crib is complete and the shared card must be cut.
    Cutting,
    /// Hands and crib are ready to be counted.
    Show,
    /// The hand has been counted and nobody has won yet.
    HandOver,
    /// A seat reached the winning score.
    GameOver,
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// Position of the seat in per-seat arrays such as [`crate::Game::hands`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Computer => 1,
        }
    }
}
