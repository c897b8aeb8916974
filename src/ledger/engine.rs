//! The running ledger: players, selection, pending amount.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, InvalidInput, Player, Selection, SelectionRole};
use crate::rules::{Operation, OperationMode, Posting, Postings};

/// Authoritative player balances during play.
///
/// Uses `im` persistent vectors so whole-ledger clones are O(1).
///
/// ## Example
///
/// ```
/// use banker::core::{Player, PlayerName};
/// use banker::ledger::Ledger;
/// use banker::rules::OperationMode;
///
/// let players = vec![
///     Player::new(PlayerName::parse("Alice").unwrap(), 100.0),
///     Player::new(PlayerName::parse("Bob").unwrap(), 50.0),
/// ];
/// let mut ledger = Ledger::with_players(players, OperationMode::TwoParty);
///
/// ledger.toggle_select("Alice").unwrap();
/// ledger.toggle_select("Bob").unwrap();
/// ledger.set_pending_amount("30");
/// ledger.transfer().unwrap();
///
/// assert_eq!(ledger.balance("Alice"), Some(70.0));
/// assert_eq!(ledger.balance("Bob"), Some(80.0));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    players: Vector<Player>,
    selection: Selection,
    pending_amount: String,
    mode: OperationMode,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new(mode: OperationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create a ledger holding `players` in order.
    pub fn with_players(players: impl IntoIterator<Item = Player>, mode: OperationMode) -> Self {
        Self {
            players: players.into_iter().collect(),
            mode,
            ..Self::default()
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Get a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name.as_str() == name)
    }

    /// Get a player's balance by name.
    #[must_use]
    pub fn balance(&self, name: &str) -> Option<f64> {
        self.player(name).map(|p| p.balance)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn pending_amount(&self) -> &str {
        &self.pending_amount
    }

    #[must_use]
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.players.iter().map(|p| p.balance).sum()
    }

    // === Selection ===

    /// Select `name`, or deselect it if already selected.
    ///
    /// Unknown names and a third selection are refused.
    pub fn toggle_select(&mut self, name: &str) -> Result<(), InvalidInput> {
        let player = self
            .player(name)
            .ok_or_else(|| InvalidInput::UnknownPlayer(name.to_string()))?;
        let name = player.name.clone();
        self.selection.toggle(name)
    }

    /// Role of `name` in the current selection.
    #[must_use]
    pub fn role_of(&self, name: &str) -> SelectionRole {
        self.selection.role_of(name)
    }

    // === Amount input ===

    pub fn set_pending_amount(&mut self, text: impl Into<String>) {
        self.pending_amount = text.into();
    }

    // === Operations ===

    pub fn add(&mut self) -> Result<Postings, InvalidInput> {
        self.invoke(Operation::Add)
    }

    pub fn subtract(&mut self) -> Result<Postings, InvalidInput> {
        self.invoke(Operation::Subtract)
    }

    pub fn transfer(&mut self) -> Result<Postings, InvalidInput> {
        self.invoke(Operation::Transfer)
    }

    /// Apply `op` with the pending amount under the configured rules.
    ///
    /// On success returns the postings that were applied. On failure no
    /// balance changes; the rules' clear policy still decides whether the
    /// amount input is cleared.
    pub fn invoke(&mut self, op: Operation) -> Result<Postings, InvalidInput> {
        let rules = self.mode.rules();
        let policy = rules.clear_policy(op);

        let outcome = parse_amount(&self.pending_amount)
            .and_then(|amount| rules.postings(op, &self.selection, amount))
            .and_then(|postings| self.check_finite(&postings).map(|()| postings));

        match outcome {
            Ok(postings) => {
                for posting in &postings {
                    self.post(posting);
                }
                if policy.amount_on_success {
                    self.pending_amount.clear();
                }
                if policy.selection_on_success {
                    self.selection.clear();
                }
                Ok(postings)
            }
            Err(err) => {
                if policy.amount_on_failure {
                    self.pending_amount.clear();
                }
                Err(err)
            }
        }
    }

    /// Zero every balance and clear selection and amount input.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.balance = 0.0;
        }
        self.selection.clear();
        self.pending_amount.clear();
        log::info!("ledger reset, {} players zeroed", self.players.len());
    }

    /// Replace the player list, e.g. when a new game is confirmed.
    pub fn replace_players(&mut self, players: impl IntoIterator<Item = Player>) {
        self.players = players.into_iter().collect();
        self.selection.clear();
        self.pending_amount.clear();
    }

    /// Refuse postings that would leave any balance non-finite.
    ///
    /// Checks every player carrying a posted name, matching `post`.
    fn check_finite(&self, postings: &Postings) -> Result<(), InvalidInput> {
        let overflows = postings.iter().any(|posting| {
            self.players
                .iter()
                .filter(|p| p.name == posting.player)
                .any(|p| !(p.balance + posting.delta).is_finite())
        });
        if overflows {
            return Err(InvalidInput::Amount(self.pending_amount.clone()));
        }
        Ok(())
    }

    /// Apply one posting to every player carrying its name.
    fn post(&mut self, posting: &Posting) {
        for player in self.players.iter_mut() {
            if player.name == posting.player {
                player.post(posting.delta);
                log::trace!("posted {:+} to {}", posting.delta, player.name);
            }
        }
    }
}
