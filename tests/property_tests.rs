//! Property-based tests for ledger invariants
//!
//! - Inverse: add then subtract restores every balance
//! - Conservation: a transfer never changes the total
//! - Reset: every balance becomes zero, names and order survive
//! - Refusal: unparseable amounts never move money

use banker::core::{Banker, BankerConfig, Event, InvalidInput, Player, PlayerName};
use banker::rules::{Operation, OperationMode};
use proptest::prelude::*;

/// Whole-unit balances so sums stay exact in f64.
fn balance_strategy() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn amount_strategy() -> impl Strategy<Value = u32> {
    0u32..100_000u32
}

fn mode_strategy() -> impl Strategy<Value = OperationMode> {
    prop_oneof![Just(OperationMode::SingleParty), Just(OperationMode::TwoParty)]
}

/// Between two and six players with distinct names.
fn players_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(balance_strategy(), 2..6)
}

fn session(mode: OperationMode, balances: &[i64]) -> Banker {
    Banker::with_players(
        BankerConfig::default().with_mode(mode),
        balances.iter().enumerate().map(|(i, balance)| {
            Player::new(PlayerName::parse(&format!("P{i}")).unwrap(), *balance as f64)
        }),
    )
}

fn balances(banker: &Banker) -> Vec<f64> {
    banker.ledger().players().iter().map(|p| p.balance).collect()
}

fn select(banker: &mut Banker, indices: &[usize]) {
    for i in indices {
        banker.dispatch(Event::SelectPlayer(format!("P{i}")));
    }
}

/// Indices of the selection for `mode`: one player for single-party, two otherwise.
fn pick(mode: OperationMode, n: usize, a: usize, b: usize) -> Vec<usize> {
    let first = a % n;
    match mode {
        OperationMode::SingleParty => vec![first],
        OperationMode::TwoParty => {
            let second = (first + 1 + b % (n - 1)) % n;
            vec![first, second]
        }
    }
}

proptest! {
    #[test]
    fn prop_add_then_subtract_is_identity(
        mode in mode_strategy(),
        start in players_strategy(),
        amount in amount_strategy(),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let mut banker = session(mode, &start);
        let before = balances(&banker);
        let chosen = pick(mode, start.len(), a, b);

        select(&mut banker, &chosen);
        banker.dispatch(Event::SetPendingAmount(amount.to_string()));
        prop_assert!(banker.dispatch(Event::InvokeAdd));

        // Two-party success clears the selection.
        if banker.ledger().selection().is_empty() {
            select(&mut banker, &chosen);
        }
        banker.dispatch(Event::SetPendingAmount(amount.to_string()));
        prop_assert!(banker.dispatch(Event::InvokeSubtract));

        prop_assert_eq!(balances(&banker), before);
    }

    #[test]
    fn prop_transfer_conserves_total(
        mode in mode_strategy(),
        start in players_strategy(),
        amount in amount_strategy(),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let mut banker = session(mode, &start);
        let total = banker.ledger().total();
        let chosen = pick(OperationMode::TwoParty, start.len(), a, b);

        select(&mut banker, &chosen);
        banker.dispatch(Event::SetPendingAmount(amount.to_string()));
        prop_assert!(banker.dispatch(Event::InvokeTransfer));

        prop_assert_eq!(banker.ledger().total(), total);
        let after = balances(&banker);
        for (i, (old, new)) in start.iter().zip(&after).enumerate() {
            if !chosen.contains(&i) {
                prop_assert_eq!(*old as f64, *new);
            }
        }
    }

    #[test]
    fn prop_reset_zeroes_everything(
        mode in mode_strategy(),
        start in players_strategy(),
        a in any::<usize>(),
    ) {
        let mut banker = session(mode, &start);
        select(&mut banker, &[a % start.len()]);
        banker.dispatch(Event::SetPendingAmount("12".into()));
        let names: Vec<_> = banker.ledger().players().iter().map(|p| p.name.clone()).collect();

        prop_assert!(banker.dispatch(Event::InvokeReset));

        prop_assert!(balances(&banker).iter().all(|b| *b == 0.0));
        prop_assert!(banker.ledger().selection().is_empty());
        prop_assert_eq!(banker.ledger().pending_amount(), "");
        let after: Vec<_> = banker.ledger().players().iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(after, names);
    }

    #[test]
    fn prop_invalid_amount_moves_nothing(
        mode in mode_strategy(),
        start in players_strategy(),
        text in prop_oneof![Just("abc"), Just(""), Just("12.3.4"), Just("1,2,3"), Just("--1")],
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        // Select the right number of players so only the amount can refuse.
        let cases = [
            (Operation::Add, Event::InvokeAdd, pick(mode, start.len(), a, b)),
            (Operation::Subtract, Event::InvokeSubtract, pick(mode, start.len(), a, b)),
            (Operation::Transfer, Event::InvokeTransfer, pick(OperationMode::TwoParty, start.len(), a, b)),
        ];
        for (op, event, chosen) in cases {
            let mut banker = session(mode, &start);
            let before = balances(&banker);
            select(&mut banker, &chosen);
            banker.dispatch(Event::SetPendingAmount(text.to_string()));

            prop_assert_eq!(
                banker.ledger().clone().invoke(op).unwrap_err(),
                InvalidInput::Amount(text.to_string())
            );
            prop_assert!(!banker.dispatch(event));
            prop_assert_eq!(balances(&banker), before);
        }
    }

    #[test]
    fn prop_duplicate_candidate_is_noop(
        names in prop::collection::vec("[A-Za-z]{1,8}", 1..6),
        pick in any::<usize>(),
    ) {
        let mut banker = Banker::new(BankerConfig::default());
        banker.dispatch(Event::OpenSetup);
        for name in &names {
            banker.dispatch(Event::AddCandidate { name: name.clone(), balance_text: "1".into() });
        }
        let before = banker.setup().unwrap().confirm();

        let again = names[pick % names.len()].clone();
        let duplicate = Event::AddCandidate { name: again, balance_text: "2".into() };
        prop_assert!(!banker.dispatch(duplicate));

        prop_assert_eq!(banker.setup().unwrap().confirm(), before);
    }
}
