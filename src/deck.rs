//! Deck building and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pile of cards drawn from the top (the end of the sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, suit by suit from Ace to King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    /// Wraps cards as a deck; the last element is drawn first.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Builds an unshuffled 52-card deck.
#[must_use]
pub fn build_deck() -> Deck {
    Deck::new()
}

/// Shuffles cards with a single Fisher-Yates pass.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    log::trace!("shuffling {} cards", cards.len());
    cards.shuffle(rng);
}
