//! # banker
//!
//! An in-memory cash ledger for the banker role of board games.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One owned session object (`Banker`) driven by
//!    events. No hidden globals; every transition is testable without a UI.
//!
//! 2. **Refuse, Don't Fail**: Invalid input (bad amounts, unknown names,
//!    wrong selection size) never changes a balance. The typed API says
//!    why; the event dispatcher stays silent.
//!
//! 3. **Rules Behind a Trait**: Add/subtract/transfer semantics live in
//!    `OperationRules` implementations, selected by configuration.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Ledger and roster use `im::Vector`,
//!   so cloning a whole session for a pure transition is O(1).
//!
//! - **Postings**: Rules return at most two signed balance changes; the
//!   ledger applies them. Transfers always sum to zero.
//!
//! ## Modules
//!
//! - `core`: Players, selection, amounts, events, session state, view model
//! - `roster`: Candidate list built during game setup
//! - `ledger`: Running balances, selection and amount input
//! - `rules`: Single-party and two-party operation semantics
//! - `currency`: Locale-aware balance formatting
//! - `cli`: Line-oriented terminal front end

pub mod core;
pub mod roster;
pub mod ledger;
pub mod rules;
pub mod currency;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    parse_amount, transition,
    Banker, BankerConfig, BankerView, Event,
    InvalidInput, ConfigError,
    Player, PlayerName, Selection, SelectionRole,
};

pub use crate::roster::Roster;

pub use crate::ledger::Ledger;

pub use crate::rules::{Operation, OperationMode, OperationRules, Posting, SingleParty, TwoParty};

pub use crate::currency::{format_balance, CurrencyConfig};
