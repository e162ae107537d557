//! Card types.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::options::Locale;
use crate::rules;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the lowercase suit name used in asset names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Parses a lowercase suit name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.name() == name)
    }

    /// Returns the colour class of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

/// Colour class of a suit.
///
/// Red cards make the drawing player drink; black cards let them hand sips
/// out to others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
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
    /// All ranks from Ace to King.
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

    /// Returns the symbol printed on the card (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
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

    /// Parses a card symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Returns the colour class of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is a heart or a diamond.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.color(), Color::Red)
    }

    /// Returns whether drawing this card crowns a new king.
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns the rule triggered by drawing this card.
    #[must_use]
    pub const fn rule(&self, locale: Locale) -> &'static str {
        rules::rule_for(self.rank, self.color(), locale)
    }

    /// Returns the file name of the card face image, e.g. `"10_spades.jpg"`.
    #[must_use]
    pub fn image_name(&self) -> String {
        format!("{}_{}.jpg", self.rank.symbol(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.symbol(), self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_parsing() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
        }
        assert_eq!(Rank::from_symbol("1"), None);
        assert_eq!(Suit::from_name("Hearts"), None);
    }

    #[test]
    fn color_follows_suit() {
        assert!(Card::new(Rank::Ace, Suit::Hearts).is_red());
        assert!(Card::new(Rank::Ace, Suit::Diamonds).is_red());
        assert!(!Card::new(Rank::Ace, Suit::Clubs).is_red());
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn image_name_uses_symbol_and_suit() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).image_name(), "10_spades.jpg");
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).image_name(), "Q_hearts.jpg");
    }
}
