//! New-game setup flow tests.

use banker::core::{Banker, BankerConfig, Event, InvalidInput, Player, PlayerName};
use banker::roster::Roster;

fn seeded() -> Banker {
    Banker::with_players(
        BankerConfig::default(),
        vec![
            Player::new(PlayerName::parse("Alice").unwrap(), 100.0),
            Player::new(PlayerName::parse("Bob").unwrap(), 50.0),
        ],
    )
}

fn candidate_names(banker: &Banker) -> Vec<String> {
    banker
        .setup()
        .map(|roster| roster.candidates().iter().map(|p| p.name.to_string()).collect())
        .unwrap_or_default()
}

// =============================================================================
// Building a roster
// =============================================================================

#[test]
fn test_form_flow_reuses_balance() {
    let mut banker = Banker::new(BankerConfig::default());
    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::SetPendingBalance("1500".into()));

    for name in ["Ana", "Bia", "Caio"] {
        banker.dispatch(Event::SetPendingName(name.into()));
        assert!(banker.dispatch(Event::SubmitCandidate));
    }

    assert_eq!(candidate_names(&banker), ["Ana", "Bia", "Caio"]);
    let roster = banker.setup().unwrap();
    assert!(roster.candidates().iter().all(|p| p.balance == 1500.0));
    assert_eq!(roster.pending_name(), "");
    assert_eq!(roster.pending_balance(), "1500");
}

#[test]
fn test_duplicate_candidate_is_noop() {
    let mut banker = Banker::new(BankerConfig::default());
    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "10".into() });

    let before = candidate_names(&banker);
    assert!(!banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "99".into() }));

    assert_eq!(candidate_names(&banker), before);
    assert_eq!(banker.setup().unwrap().candidates()[0].balance, 10.0);
}

#[test]
fn test_invalid_candidates_rejected() {
    let mut banker = Banker::new(BankerConfig::default());
    banker.dispatch(Event::OpenSetup);

    assert!(!banker.dispatch(Event::AddCandidate { name: "  ".into(), balance_text: "10".into() }));
    assert!(!banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "ten".into() }));
    assert!(!banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "".into() }));

    assert!(banker.setup().unwrap().is_empty());
}

#[test]
fn test_remove_candidate() {
    let mut banker = Banker::new(BankerConfig::default());
    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "1".into() });
    banker.dispatch(Event::AddCandidate { name: "Bia".into(), balance_text: "2".into() });

    assert!(banker.dispatch(Event::RemoveCandidate("Ana".into())));
    assert!(!banker.dispatch(Event::RemoveCandidate("Zoe".into())));

    assert_eq!(candidate_names(&banker), ["Bia"]);
}

// =============================================================================
// Confirm / close / cancel
// =============================================================================

#[test]
fn test_confirm_starts_new_game() {
    let mut banker = seeded();
    banker.dispatch(Event::SelectPlayer("Alice".into()));
    banker.dispatch(Event::SetPendingAmount("5".into()));

    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "1500".into() });
    banker.dispatch(Event::AddCandidate { name: "Bia".into(), balance_text: "1500".into() });
    assert!(banker.dispatch(Event::ConfirmSetup));

    let names: Vec<_> = banker.ledger().players().iter().map(|p| p.name.to_string()).collect();
    assert_eq!(names, ["Ana", "Bia"]);
    assert!(banker.ledger().selection().is_empty());
    assert_eq!(banker.ledger().pending_amount(), "");
    assert!(!banker.is_setup_open());
}

#[test]
fn test_confirm_empty_roster_clears_ledger() {
    let mut banker = seeded();
    banker.dispatch(Event::OpenSetup);
    assert!(banker.dispatch(Event::ConfirmSetup));
    assert!(banker.ledger().is_empty());
}

#[test]
fn test_cancel_leaves_ledger_untouched() {
    let mut banker = seeded();
    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "1500".into() });
    banker.dispatch(Event::CancelSetup);

    assert_eq!(banker.ledger().len(), 2);
    assert_eq!(banker.ledger().balance("Alice"), Some(100.0));
    assert!(banker.setup().is_none());

    banker.dispatch(Event::OpenSetup);
    assert!(candidate_names(&banker).is_empty());
}

#[test]
fn test_close_keeps_draft_for_later() {
    let mut banker = seeded();
    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "1500".into() });
    banker.dispatch(Event::CloseSetup);

    assert!(!banker.dispatch(Event::AddCandidate { name: "Bia".into(), balance_text: "1".into() }));
    assert!(!banker.dispatch(Event::ConfirmSetup));
    assert_eq!(banker.ledger().len(), 2);

    banker.dispatch(Event::OpenSetup);
    assert_eq!(candidate_names(&banker), ["Ana"]);
}

#[test]
fn test_view_shows_setup_only_when_drafted() {
    let mut banker = seeded();
    assert!(banker.view().setup.is_none());

    banker.dispatch(Event::OpenSetup);
    banker.dispatch(Event::AddCandidate { name: "Ana".into(), balance_text: "1500".into() });
    let setup = banker.view().setup.unwrap();
    assert!(setup.open);
    assert_eq!(setup.candidates[0].name, "Ana");
    assert_eq!(setup.candidates[0].formatted_balance, "R$\u{a0}1.500,00");
}

// =============================================================================
// Seeding from NAME=BALANCE pairs
// =============================================================================

#[test]
fn test_seed_pairs_reject_duplicate_names() {
    let mut seed = Roster::new();
    seed.add_pair("A=1").unwrap();
    assert_eq!(seed.add_pair("A=2"), Err(InvalidInput::DuplicateName("A".into())));

    let banker = Banker::with_players(BankerConfig::default(), seed.confirm());
    assert_eq!(banker.ledger().len(), 1);
    assert_eq!(banker.ledger().balance("A"), Some(1.0));
}
