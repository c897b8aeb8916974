//! Balance-mutation rules.
//!
//! Two rule sets implement `OperationRules`:
//! - `SingleParty`: add/subtract on one player, transfer between two
//! - `TwoParty`: every operation is a payment between two players
//!
//! The ledger picks one through `OperationMode` and applies the postings
//! it returns.

pub mod engine;
mod single_party;
mod two_party;

pub use engine::{ClearPolicy, Operation, OperationMode, OperationRules, Posting, Postings};
pub use single_party::SingleParty;
pub use two_party::TwoParty;
