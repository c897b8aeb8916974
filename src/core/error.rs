//! Error types.
//!
//! The ledger has exactly one domain error kind: a requested action that
//! cannot apply to the current state. `InvalidInput` carries the reason so
//! callers of the typed API can tell cases apart; the event dispatcher in
//! [`Banker`](crate::core::Banker) swallows it.

use thiserror::Error;

/// A requested mutation that was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Amount text did not parse as a finite number.
    #[error("invalid amount: {0:?}")]
    Amount(String),

    /// Player name was empty after trimming.
    #[error("player name is empty")]
    EmptyName,

    /// A candidate with this name is already on the roster.
    #[error("duplicate player name: {0}")]
    DuplicateName(String),

    /// No player with this name exists where it was looked up.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// The operation needs a different number of selected players.
    #[error("operation requires {required} selected player(s), {actual} selected")]
    SelectionMismatch { required: usize, actual: usize },

    /// Two players are already selected.
    #[error("selection is full, cannot select {0}")]
    SelectionFull(String),

    /// A roster event arrived while the setup flow is hidden.
    #[error("setup is not open")]
    SetupClosed,
}

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Locale has no formatting conventions.
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),

    /// Currency code is not three ASCII uppercase letters.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),
}
