//! Candidate roster built while setting up a new game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, InvalidInput, Player, PlayerName};

/// Draft player list plus the setup form's pending inputs.
///
/// ## Example
///
/// ```
/// use banker::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.set_pending_balance("1500");
/// roster.set_pending_name("Alice");
/// roster.submit().unwrap();
/// roster.set_pending_name("Bob");
/// roster.submit().unwrap();
///
/// let players = roster.confirm();
/// assert_eq!(players.len(), 2);
/// assert!(players.iter().all(|p| p.balance == 1500.0));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    candidates: Vector<Player>,
    pending_name: String,
    pending_balance: String,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    #[must_use]
    pub fn candidates(&self) -> &Vector<Player> {
        &self.candidates
    }

    #[must_use]
    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }

    #[must_use]
    pub fn pending_balance(&self) -> &str {
        &self.pending_balance
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Check whether a candidate with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.candidates.iter().any(|p| p.name.as_str() == name)
    }

    // === Form inputs ===

    pub fn set_pending_name(&mut self, text: impl Into<String>) {
        self.pending_name = text.into();
    }

    pub fn set_pending_balance(&mut self, text: impl Into<String>) {
        self.pending_balance = text.into();
    }

    // === Editing ===

    /// Append a candidate.
    ///
    /// The name is trimmed and must be non-empty and not already present;
    /// the balance must parse as a finite amount. On success the pending
    /// name is cleared. On failure nothing changes.
    pub fn add(&mut self, name: &str, balance_text: &str) -> Result<(), InvalidInput> {
        let name = PlayerName::parse(name)?;
        if self.contains(name.as_str()) {
            return Err(InvalidInput::DuplicateName(name.to_string()));
        }
        let balance = parse_amount(balance_text)?;

        self.candidates.push_back(Player::new(name, balance));
        self.pending_name.clear();
        Ok(())
    }

    /// Append a candidate from a `NAME=BALANCE` pair.
    ///
    /// Same checks as [`Roster::add`]; used to seed a game from the command
    /// line.
    pub fn add_pair(&mut self, pair: &str) -> Result<(), InvalidInput> {
        let player = Player::parse_pair(pair)?;
        if self.contains(player.name.as_str()) {
            return Err(InvalidInput::DuplicateName(player.name.to_string()));
        }
        self.candidates.push_back(player);
        Ok(())
    }

    /// Add a candidate from the pending name and balance inputs.
    ///
    /// The pending balance is kept so the next player can reuse it.
    pub fn submit(&mut self) -> Result<(), InvalidInput> {
        let name = self.pending_name.clone();
        let balance = self.pending_balance.clone();
        self.add(&name, &balance)
    }

    /// Remove the candidate with this exact name.
    pub fn remove(&mut self, name: &str) -> Result<Player, InvalidInput> {
        let index = self
            .candidates
            .iter()
            .position(|p| p.name.as_str() == name)
            .ok_or_else(|| InvalidInput::UnknownPlayer(name.to_string()))?;
        Ok(self.candidates.remove(index))
    }

    /// The finalized player list, by value.
    #[must_use]
    pub fn confirm(&self) -> Vec<Player> {
        self.candidates.iter().cloned().collect()
    }
}
