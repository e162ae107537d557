//! Game engine and turn management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::StartError;
use crate::options::GameOptions;
use crate::result::Snapshot;
use crate::roster::PlayerRoster;
use crate::rules;

mod actions;
pub mod state;

pub use state::GameState;

/// A King of the Beards game: a roster, a shuffled deck and whose turn it is.
///
/// Players take turns in roster order. Each turn is a [`draw`](Self::draw)
/// that reveals the top card, followed by an [`advance`](Self::advance) that
/// passes the deck to the next player, or ends the game once the last card
/// has been played.
pub struct Game {
    /// Cards left to draw; the last card is drawn first.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current turn controller state.
    state: GameState,
    /// Players in turn order.
    roster: PlayerRoster,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game that has not started yet, with the given seed.
    ///
    /// The same seed yields the same sequence of shuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use kotb::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a game seeded from the operating system's entropy source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        let roster = PlayerRoster::with_max_name_len(options.max_name_len);
        Self {
            deck: Deck::from(Vec::new()),
            options,
            state: GameState::NotStarted,
            roster,
            rng,
        }
    }

    fn ensure_playable(&self, roster: &PlayerRoster) -> Result<(), StartError> {
        let required = self.options.required_players();
        if roster.len() < required {
            log::debug!("refusing to start with {} players", roster.len());
            return Err(StartError::InsufficientPlayers {
                required,
                found: roster.len(),
            });
        }

        let max_len = self.options.max_name_len;
        if let Some(index) = roster
            .names()
            .iter()
            .position(|name| name.chars().count() > max_len)
        {
            log::debug!("refusing to start, player {index} has a name over {max_len} chars");
            return Err(StartError::NameTooLong { index, max_len });
        }

        Ok(())
    }

    fn deal_new_deck(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.state = GameState::AwaitingDraw { player: 0 };
        log::debug!(
            "new game with {} players, {} cards",
            self.roster.len(),
            self.deck.len()
        );
    }

    /// Starts a game with the given players.
    ///
    /// A fresh deck is shuffled and the first player in the roster is asked
    /// to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster has fewer players than
    /// [`GameOptions::required_players`] or a name is longer than
    /// [`GameOptions::max_name_len`]. The game is left unchanged.
    pub fn start(&mut self, roster: PlayerRoster) -> Result<(), StartError> {
        self.ensure_playable(&roster)?;
        self.roster = roster;
        self.deal_new_deck();
        Ok(())
    }

    /// Starts over with the current roster, from any state.
    ///
    /// # Errors
    ///
    /// Returns an error if no game was ever started with enough players.
    pub fn restart(&mut self) -> Result<(), StartError> {
        self.ensure_playable(&self.roster)?;
        self.deal_new_deck();
        Ok(())
    }

    /// Leaves the current game, keeping the roster.
    pub fn end(&mut self) {
        log::debug!("leaving game with {} cards left", self.deck.len());
        self.deck = Deck::from(Vec::new());
        self.state = GameState::NotStarted;
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the cards left to draw, the next card last.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the remaining cards, the last card being drawn first.
    ///
    /// Meant for tests and replays; nothing checks that the deck is complete.
    #[doc(hidden)]
    pub fn stack_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players of the current game.
    #[must_use]
    pub const fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    /// Returns the name of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Option<&str> {
        self.active_index().and_then(|index| self.roster.get(index))
    }

    /// Returns the revealed card, if any.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.state.current_card()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck has been played out.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        matches!(self.state, GameState::Ended)
    }

    /// Returns a view of the game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let current_card = self.current_card();
        Snapshot {
            active_player: self.active_player(),
            current_card,
            rule: rules::rule_text(current_card.as_ref(), self.options.locale),
            cards_remaining: self.cards_remaining(),
            ended: self.is_ended(),
            king_drawn: current_card.is_some_and(|card| card.is_king()),
        }
    }
}
