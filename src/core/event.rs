//! Events routed from the presentation layer into the session.
//!
//! Each user gesture (click, keystroke, form submit) maps to exactly one
//! `Event`. The session interprets them; presentation code never mutates
//! ledger or roster state directly.

use serde::{Deserialize, Serialize};

/// A discrete user action.
///
/// ## Example
///
/// ```
/// use banker::core::Event;
///
/// let events = [
///     Event::SelectPlayer("Alice".into()),
///     Event::SelectPlayer("Bob".into()),
///     Event::SetPendingAmount("30".into()),
///     Event::InvokeTransfer,
/// ];
/// assert_eq!(events[0], Event::SelectPlayer("Alice".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    // === Ledger ===
    /// Toggle a player's selection.
    SelectPlayer(String),
    /// Replace the amount input text.
    SetPendingAmount(String),
    InvokeAdd,
    InvokeSubtract,
    InvokeTransfer,
    /// Zero all balances.
    InvokeReset,

    // === Setup flow ===
    /// Show the setup flow, creating a draft if none exists.
    OpenSetup,
    /// Hide the setup flow, keeping the draft.
    CloseSetup,
    /// Replace the candidate name input text.
    SetPendingName(String),
    /// Replace the initial balance input text.
    SetPendingBalance(String),
    /// Add a candidate from the pending inputs.
    SubmitCandidate,
    /// Add a candidate from explicit values.
    AddCandidate { name: String, balance_text: String },
    RemoveCandidate(String),
    /// Hand the draft to the ledger as a new game.
    ConfirmSetup,
    /// Hide the setup flow and discard the draft.
    CancelSetup,
}
