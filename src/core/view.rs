//! Render model handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::selection::SelectionRole;
use super::state::Banker;
use crate::currency::{format_balance, CurrencyConfig};
use crate::roster::Roster;
use crate::rules::OperationMode;

/// One ledger row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub balance: f64,
    pub formatted_balance: String,
    pub selected: bool,
    pub role: SelectionRole,
}

/// One setup draft row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateView {
    pub name: String,
    pub formatted_balance: String,
}

/// The setup flow's form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupView {
    pub open: bool,
    pub candidates: Vec<CandidateView>,
    pub pending_name: String,
    pub pending_balance: String,
}

/// Everything a presentation layer needs to draw the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankerView {
    pub players: Vec<PlayerView>,
    /// Selected names in selection order.
    pub selection: Vec<String>,
    pub pending_amount: String,
    pub formatted_total: String,
    pub mode: OperationMode,
    /// Present while a setup draft exists.
    pub setup: Option<SetupView>,
}

impl BankerView {
    /// Snapshot `banker` for rendering.
    #[must_use]
    pub fn of(banker: &Banker) -> Self {
        let ledger = banker.ledger();
        let currency = &banker.config().currency;

        let players = ledger
            .players()
            .iter()
            .map(|p| {
                let role = ledger.role_of(p.name.as_str());
                PlayerView {
                    name: p.name.to_string(),
                    balance: p.balance,
                    formatted_balance: format_balance(p.balance, currency),
                    selected: role != SelectionRole::Neutral,
                    role,
                }
            })
            .collect();

        Self {
            players,
            selection: ledger.selection().names().iter().map(|n| n.to_string()).collect(),
            pending_amount: ledger.pending_amount().to_string(),
            formatted_total: format_balance(ledger.total(), currency),
            mode: ledger.mode(),
            setup: banker
                .setup()
                .map(|roster| SetupView::of(roster, banker.is_setup_open(), currency)),
        }
    }
}

impl SetupView {
    fn of(roster: &Roster, open: bool, currency: &CurrencyConfig) -> Self {
        Self {
            open,
            candidates: roster
                .candidates()
                .iter()
                .map(|p| CandidateView {
                    name: p.name.to_string(),
                    formatted_balance: format_balance(p.balance, currency),
                })
                .collect(),
            pending_name: roster.pending_name().to_string(),
            pending_balance: roster.pending_balance().to_string(),
        }
    }
}
