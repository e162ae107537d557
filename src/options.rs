//! Game configuration options.

/// Fewest players a game can be played with.
pub const MIN_PLAYERS: usize = 2;

/// Language used for rule texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Locale {
    /// French, the language the game was written in.
    #[default]
    French,
    /// English.
    English,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use kotb::{GameOptions, Locale};
///
/// let options = GameOptions::default()
///     .with_min_players(3)
///     .with_max_name_len(12)
///     .with_locale(Locale::English);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Minimum number of registered players required to start.
    pub min_players: usize,
    /// Maximum length of a player name, in characters.
    pub max_name_len: usize,
    /// Language of rule texts exposed through snapshots.
    pub locale: Locale,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_name_len: 20,
            locale: Locale::French,
        }
    }
}

impl GameOptions {
    /// Sets the minimum number of players.
    ///
    /// A game always needs at least two players; lower values are raised to
    /// two when a game starts (see [`required_players`](Self::required_players)).
    ///
    /// # Example
    ///
    /// ```
    /// use kotb::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(4);
    /// assert_eq!(options.min_players, 4);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Returns the number of players a game needs to start.
    ///
    /// ```
    /// use kotb::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_min_players(1).required_players(), 2);
    /// assert_eq!(GameOptions::default().with_min_players(5).required_players(), 5);
    /// ```
    #[must_use]
    pub const fn required_players(&self) -> usize {
        if self.min_players < MIN_PLAYERS {
            MIN_PLAYERS
        } else {
            self.min_players
        }
    }

    /// Sets the maximum player name length.
    ///
    /// # Example
    ///
    /// ```
    /// use kotb::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_name_len(8);
    /// assert_eq!(options.max_name_len, 8);
    /// ```
    #[must_use]
    pub const fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Sets the rule text language.
    ///
    /// # Example
    ///
    /// ```
    /// use kotb::{GameOptions, Locale};
    ///
    /// let options = GameOptions::default().with_locale(Locale::English);
    /// assert_eq!(options.locale, Locale::English);
    /// ```
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
