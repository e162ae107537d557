//! Draw outcomes and state snapshots handed to the presentation layer.

use crate::card::Card;

/// Result of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Index of the player who drew.
    pub player_index: usize,
    /// The card that was drawn.
    pub card: Card,
    /// One-shot signal: the card is a King and deserves a celebration.
    pub king: bool,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Name of the player whose turn it is.
    ///
    /// `None` before the game starts and after it ends.
    pub active_player: Option<&'a str>,
    /// The revealed card, if any.
    pub current_card: Option<Card>,
    /// Rule for the revealed card, or the draw prompt.
    pub rule: &'static str,
    /// Number of cards left in the deck.
    pub cards_remaining: usize,
    /// Whether the deck has been played out.
    pub ended: bool,
    /// Whether the revealed card is a freshly drawn King.
    pub king_drawn: bool,
}
