//! Ledger & selection engine.
//!
//! Owns the confirmed player list for the running game, the current
//! selection and the pending amount text. Balance changes come from the
//! configured `OperationRules`.

mod engine;

pub use engine::Ledger;
