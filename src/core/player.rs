//! Player identification and balances.
//!
//! ## PlayerName
//!
//! Players are identified by name. Names are trimmed on construction and
//! compared exactly (case-sensitive).
//!
//! ## Player
//!
//! A name plus a signed cash balance. Balances may go negative.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use super::amount::parse_amount;
use super::error::InvalidInput;

/// Player identifier: non-empty, trimmed text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Parse a player name, trimming surrounding whitespace.
    ///
    /// ```
    /// use banker::core::PlayerName;
    ///
    /// let name = PlayerName::parse("  Alice ").unwrap();
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PlayerName::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidInput> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A player and their current balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub balance: f64,
}

impl Player {
    /// Create a player with a starting balance.
    #[must_use]
    pub fn new(name: PlayerName, balance: f64) -> Self {
        Self { name, balance }
    }

    /// Parse a `NAME=BALANCE` pair, as accepted on the command line.
    ///
    /// The split happens at the last `=`, so names may contain `=`.
    ///
    /// ```
    /// use banker::core::Player;
    ///
    /// let player = Player::parse_pair("Alice=1500").unwrap();
    /// assert_eq!(player.name.as_str(), "Alice");
    /// assert_eq!(player.balance, 1500.0);
    /// ```
    pub fn parse_pair(pair: &str) -> Result<Self, InvalidInput> {
        let (name, balance) = pair
            .rsplit_once('=')
            .ok_or_else(|| InvalidInput::Amount(pair.to_string()))?;
        Ok(Self::new(PlayerName::parse(name)?, parse_amount(balance)?))
    }

    /// Add a signed delta to the balance.
    pub fn post(&mut self, delta: f64) {
        self.balance += delta;
    }
}
