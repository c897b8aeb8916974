//! Session state: configuration, running ledger, setup draft.
//!
//! ## Banker
//!
//! The single owned state object for one banker session. Presentation code
//! feeds it [`Event`]s and renders its [`BankerView`].
//!
//! Two ways to drive it:
//! - [`Banker::apply`]: typed, reports why an event was refused
//! - [`Banker::dispatch`] / [`transition`]: the user-facing policy, where a
//!   refused event is a silent no-op
//!
//! Ledger and roster use persistent vectors, so [`transition`] clones the
//! whole session in O(1).

use super::config::BankerConfig;
use super::error::InvalidInput;
use super::event::Event;
use super::player::Player;
use super::view::BankerView;
use crate::ledger::Ledger;
use crate::roster::Roster;
use crate::rules::Operation;

/// One banker session.
#[derive(Clone, Debug, Default)]
pub struct Banker {
    config: BankerConfig,
    ledger: Ledger,
    /// Setup draft; survives closing the setup flow, dropped on cancel.
    setup: Option<Roster>,
    setup_open: bool,
}

impl Banker {
    /// Create a session with an empty ledger.
    #[must_use]
    pub fn new(config: BankerConfig) -> Self {
        Self {
            ledger: Ledger::new(config.mode),
            config,
            setup: None,
            setup_open: false,
        }
    }

    /// Create a session whose ledger already holds `players`.
    pub fn with_players(config: BankerConfig, players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            ledger: Ledger::with_players(players, config.mode),
            config,
            setup: None,
            setup_open: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BankerConfig {
        &self.config
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The setup draft, open or not.
    #[must_use]
    pub fn setup(&self) -> Option<&Roster> {
        self.setup.as_ref()
    }

    #[must_use]
    pub fn is_setup_open(&self) -> bool {
        self.setup_open
    }

    /// Build the render model for the current state.
    #[must_use]
    pub fn view(&self) -> BankerView {
        BankerView::of(self)
    }

    // === Event handling ===

    /// Apply one event, reporting why it was refused.
    ///
    /// A refused event leaves balances, names and selection unchanged.
    /// Some operation rules still clear the amount input on refusal.
    pub fn apply(&mut self, event: Event) -> Result<(), InvalidInput> {
        match event {
            Event::SelectPlayer(name) => self.ledger.toggle_select(&name),
            Event::SetPendingAmount(text) => {
                self.ledger.set_pending_amount(text);
                Ok(())
            }
            Event::InvokeAdd => self.ledger.invoke(Operation::Add).map(|_| ()),
            Event::InvokeSubtract => self.ledger.invoke(Operation::Subtract).map(|_| ()),
            Event::InvokeTransfer => self.ledger.invoke(Operation::Transfer).map(|_| ()),
            Event::InvokeReset => {
                self.ledger.reset();
                Ok(())
            }
            Event::OpenSetup => {
                self.setup.get_or_insert_with(Roster::new);
                self.setup_open = true;
                Ok(())
            }
            Event::CloseSetup => {
                self.setup_open = false;
                Ok(())
            }
            Event::CancelSetup => {
                self.setup = None;
                self.setup_open = false;
                Ok(())
            }
            Event::SetPendingName(text) => {
                self.draft_mut()?.set_pending_name(text);
                Ok(())
            }
            Event::SetPendingBalance(text) => {
                self.draft_mut()?.set_pending_balance(text);
                Ok(())
            }
            Event::SubmitCandidate => self.draft_mut()?.submit(),
            Event::AddCandidate { name, balance_text } => self.draft_mut()?.add(&name, &balance_text),
            Event::RemoveCandidate(name) => self.draft_mut()?.remove(&name).map(|_| ()),
            Event::ConfirmSetup => {
                let players = self.draft_mut()?.confirm();
                log::info!("new game confirmed with {} players", players.len());
                self.ledger.replace_players(players);
                self.setup_open = false;
                Ok(())
            }
        }
    }

    /// Apply one event, ignoring it if it is refused.
    ///
    /// Returns whether the event applied.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match self.apply(event) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("ignored event: {err}");
                false
            }
        }
    }

    /// The draft, if the setup flow is showing.
    fn draft_mut(&mut self) -> Result<&mut Roster, InvalidInput> {
        if !self.setup_open {
            return Err(InvalidInput::SetupClosed);
        }
        self.setup.as_mut().ok_or(InvalidInput::SetupClosed)
    }
}

/// Pure transition: the session after `event`, leaving `state` untouched.
///
/// ```
/// use banker::core::{transition, Banker, BankerConfig, Event};
///
/// let start = Banker::new(BankerConfig::default());
/// let next = transition(&start, Event::OpenSetup);
///
/// assert!(next.is_setup_open());
/// assert!(!start.is_setup_open());
/// ```
#[must_use]
pub fn transition(state: &Banker, event: Event) -> Banker {
    let mut next = state.clone();
    next.dispatch(event);
    next
}
