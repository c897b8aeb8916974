//! Operation rules trait.
//!
//! Rules decide what an add, subtract or transfer means for the current
//! selection:
//! - Which players' balances change, and by how much (postings)
//! - How many players must be selected
//! - Which inputs are cleared afterwards
//!
//! Rules never touch balances themselves. The ledger applies the postings
//! they return, so every implementation is a pure function of selection
//! and amount.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::{SingleParty, TwoParty};
use crate::core::{InvalidInput, PlayerName, Selection};

/// A balance-changing user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Transfer,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Transfer => "transfer",
        };
        f.write_str(name)
    }
}

/// A signed change to one player's balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub player: PlayerName,
    pub delta: f64,
}

impl Posting {
    #[must_use]
    pub fn new(player: PlayerName, delta: f64) -> Self {
        Self { player, delta }
    }
}

/// Postings produced by one operation. Never more than two.
pub type Postings = SmallVec<[Posting; 2]>;

/// Which pending inputs an operation clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearPolicy {
    /// Clear the amount input after the operation applied.
    pub amount_on_success: bool,
    /// Clear the amount input after the operation was refused.
    pub amount_on_failure: bool,
    /// Clear the selection after the operation applied.
    pub selection_on_success: bool,
}

/// Available rule sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationMode {
    /// Add and subtract act on one selected player; transfer on two.
    SingleParty,
    /// Every operation is a transfer between two selected players.
    #[default]
    TwoParty,
}

impl OperationMode {
    /// The rules implementing this mode.
    #[must_use]
    pub fn rules(self) -> &'static dyn OperationRules {
        match self {
            OperationMode::SingleParty => &SingleParty,
            OperationMode::TwoParty => &TwoParty,
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationMode::SingleParty => f.write_str("single"),
            OperationMode::TwoParty => f.write_str("two"),
        }
    }
}

impl FromStr for OperationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "single-party" => Ok(OperationMode::SingleParty),
            "two" | "two-party" => Ok(OperationMode::TwoParty),
            other => Err(format!("unknown mode '{other}', expected 'single' or 'two'")),
        }
    }
}

/// Operation rules trait.
///
/// ## Implementation Notes
///
/// - `postings`: Return `SelectionMismatch` if the selection size is wrong
/// - `postings`: Must be deterministic and side-effect free
/// - `clear_policy`: Applies whether or not `postings` succeeded
pub trait OperationRules {
    /// The mode these rules implement.
    fn mode(&self) -> OperationMode;

    /// Number of players that must be selected for `op`.
    fn required_selection(&self, op: Operation) -> usize;

    /// Balance changes for `op` with `amount` against `selection`.
    fn postings(
        &self,
        op: Operation,
        selection: &Selection,
        amount: f64,
    ) -> Result<Postings, InvalidInput>;

    /// Which inputs `op` clears.
    fn clear_policy(&self, op: Operation) -> ClearPolicy;

    // === Convenience Methods ===

    /// Selected names, checked against `required_selection`.
    fn selected<'s>(
        &self,
        op: Operation,
        selection: &'s Selection,
    ) -> Result<SmallVec<[&'s PlayerName; 2]>, InvalidInput> {
        let required = self.required_selection(op);
        let names = selection.names();
        if names.len() != required {
            return Err(InvalidInput::SelectionMismatch {
                required,
                actual: names.len(),
            });
        }
        Ok(names)
    }
}
