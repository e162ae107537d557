//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while registering players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Name is empty after trimming.
    #[error("player name is empty")]
    EmptyName,
    /// Name is longer than the configured limit.
    #[error("player name is too long")]
    NameTooLong,
    /// A player with this name is already registered.
    #[error("player name is already registered")]
    DuplicatePlayerName,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Not enough players are registered.
    #[error("at least {required} players are required, {found} registered")]
    InsufficientPlayers {
        /// Minimum number of players.
        required: usize,
        /// Number of players in the roster.
        found: usize,
    },
    /// A player name is longer than the game allows.
    #[error("player {index} has a name longer than {max_len} characters")]
    NameTooLong {
        /// Position of the offending player in the roster.
        index: usize,
        /// Maximum name length of the game.
        max_len: usize,
    },
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is not waiting for a draw.
    #[error("invalid game state for drawing")]
    InvalidTransition,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when passing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// No card has been revealed this turn.
    #[error("invalid game state for advancing")]
    InvalidTransition,
}
