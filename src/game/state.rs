//! Game state types.

use crate::card::Card;

/// Turn controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Waiting for the active player to draw.
    AwaitingDraw {
        /// Index of the active player in the roster.
        player: usize,
    },
    /// The active player has drawn and the card is face up.
    CardRevealed {
        /// Index of the active player in the roster.
        player: usize,
        /// The revealed card.
        card: Card,
    },
    /// The deck has been played out.
    Ended,
}

impl GameState {
    /// Returns the active player index, if a turn is in progress.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        match self {
            Self::AwaitingDraw { player } | Self::CardRevealed { player, .. } => Some(*player),
            Self::NotStarted | Self::Ended => None,
        }
    }

    /// Returns the revealed card, if any.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        match self {
            Self::CardRevealed { card, .. } => Some(*card),
            _ => None,
        }
    }
}
