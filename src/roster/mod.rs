//! Roster manager.
//!
//! The setup flow builds a candidate list here. Nothing in the running
//! ledger changes until the draft is confirmed.

mod manager;

pub use manager::Roster;
