//! Player registration.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::RosterError;

/// Default maximum length of a player name.
pub const DEFAULT_MAX_NAME_LEN: usize = 20;

/// Ordered list of unique player names.
///
/// Names are trimmed on registration. Turn order follows registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoster {
    names: Vec<String>,
    max_name_len: usize,
}

impl PlayerRoster {
    /// Creates an empty roster with the default name length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_name_len(DEFAULT_MAX_NAME_LEN)
    }

    /// Creates an empty roster accepting names of at most `max_name_len` characters.
    #[must_use]
    pub const fn with_max_name_len(max_name_len: usize) -> Self {
        Self {
            names: Vec::new(),
            max_name_len,
        }
    }

    /// Builds a roster from names, rejecting the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is empty, too long, or repeated.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Registers a player at the end of the turn order.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty, longer than the limit,
    /// or already registered. The roster is left unchanged on error.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if name.chars().count() > self.max_name_len {
            return Err(RosterError::NameTooLong);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicatePlayerName);
        }

        self.names.push(name.to_string());
        Ok(())
    }

    /// Removes a player by name. Returns whether the player was registered.
    ///
    /// The name is trimmed the same way as in [`add`](Self::add).
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    /// Returns whether a player with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Returns the name at `index` in turn order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether no player is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in turn order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for PlayerRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_keeps_order() {
        let mut roster = PlayerRoster::new();
        roster.add("  Alice ").unwrap();
        roster.add("Bob").unwrap();

        assert_eq!(roster.names(), ["Alice", "Bob"]);
        assert_eq!(roster.get(1), Some("Bob"));
    }

    #[test]
    fn add_rejects_invalid_names() {
        let mut roster = PlayerRoster::with_max_name_len(5);
        roster.add("Alice").unwrap();

        assert_eq!(roster.add("   ").unwrap_err(), RosterError::EmptyName);
        assert_eq!(roster.add("Alicia").unwrap_err(), RosterError::NameTooLong);
        assert_eq!(
            roster.add(" Alice").unwrap_err(),
            RosterError::DuplicatePlayerName
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut roster = PlayerRoster::from_names(["A", "B", "C"]).unwrap();

        assert!(roster.remove("B"));
        assert!(!roster.remove("B"));
        assert_eq!(roster.names(), ["A", "C"]);
    }

    #[test]
    fn remove_trims_like_add() {
        let mut roster = PlayerRoster::new();
        roster.add(" Alice ").unwrap();

        assert!(roster.remove(" Alice "));
        assert!(roster.is_empty());
    }
}
