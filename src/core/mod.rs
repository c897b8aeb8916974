//! Core session types: players, selection, amounts, events, state, view.
//!
//! This module holds the building blocks shared by the roster, the ledger
//! and the presentation layer.

pub mod amount;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod selection;
pub mod state;
pub mod view;

pub use amount::parse_amount;
pub use config::BankerConfig;
pub use error::{ConfigError, InvalidInput};
pub use event::Event;
pub use player::{Player, PlayerName};
pub use selection::{Selection, SelectionRole};
pub use state::{transition, Banker};
pub use view::{BankerView, CandidateView, PlayerView, SetupView};
