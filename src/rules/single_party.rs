//! Single-party rules.
//!
//! - Add / subtract: exactly one player selected, their balance changes
//! - Transfer: two players selected; the second-selected pays the
//!   first-selected
//!
//! Subtract and transfer clear the amount input even when refused; add
//! clears it only when applied. The selection is left alone.

use smallvec::smallvec;

use super::engine::{ClearPolicy, Operation, OperationMode, OperationRules, Posting, Postings};
use crate::core::{InvalidInput, Selection};

/// Rules where add and subtract act on a single player.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleParty;

impl OperationRules for SingleParty {
    fn mode(&self) -> OperationMode {
        OperationMode::SingleParty
    }

    fn required_selection(&self, op: Operation) -> usize {
        match op {
            Operation::Add | Operation::Subtract => 1,
            Operation::Transfer => 2,
        }
    }

    fn postings(
        &self,
        op: Operation,
        selection: &Selection,
        amount: f64,
    ) -> Result<Postings, InvalidInput> {
        let names = self.selected(op, selection)?;

        let postings = match op {
            Operation::Add => smallvec![Posting::new(names[0].clone(), amount)],
            Operation::Subtract => smallvec![Posting::new(names[0].clone(), -amount)],
            Operation::Transfer => smallvec![
                Posting::new(names[1].clone(), -amount),
                Posting::new(names[0].clone(), amount),
            ],
        };
        Ok(postings)
    }

    fn clear_policy(&self, op: Operation) -> ClearPolicy {
        ClearPolicy {
            amount_on_success: true,
            amount_on_failure: op != Operation::Add,
            selection_on_success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerName;

    fn name(s: &str) -> PlayerName {
        PlayerName::parse(s).unwrap()
    }

    fn pair() -> Selection {
        Selection::Two { first: name("Alice"), second: name("Bob") }
    }

    #[test]
    fn test_add_and_subtract_single_player() {
        let selection = Selection::One(name("Alice"));

        let add = SingleParty.postings(Operation::Add, &selection, 25.0).unwrap();
        assert_eq!(add.as_slice(), &[Posting::new(name("Alice"), 25.0)]);

        let sub = SingleParty.postings(Operation::Subtract, &selection, 25.0).unwrap();
        assert_eq!(sub.as_slice(), &[Posting::new(name("Alice"), -25.0)]);
    }

    #[test]
    fn test_add_needs_exactly_one() {
        assert_eq!(
            SingleParty.postings(Operation::Add, &pair(), 10.0),
            Err(InvalidInput::SelectionMismatch { required: 1, actual: 2 })
        );
        assert_eq!(
            SingleParty.postings(Operation::Subtract, &Selection::None, 10.0),
            Err(InvalidInput::SelectionMismatch { required: 1, actual: 0 })
        );
    }

    #[test]
    fn test_transfer_second_pays_first() {
        let postings = SingleParty.postings(Operation::Transfer, &pair(), 30.0).unwrap();
        assert_eq!(
            postings.as_slice(),
            &[
                Posting::new(name("Bob"), -30.0),
                Posting::new(name("Alice"), 30.0),
            ]
        );
    }

    #[test]
    fn test_transfer_needs_two() {
        let selection = Selection::One(name("Alice"));
        assert!(SingleParty.postings(Operation::Transfer, &selection, 30.0).is_err());
    }

    #[test]
    fn test_clear_policy() {
        assert!(!SingleParty.clear_policy(Operation::Add).amount_on_failure);
        assert!(SingleParty.clear_policy(Operation::Subtract).amount_on_failure);
        assert!(SingleParty.clear_policy(Operation::Transfer).amount_on_failure);
        for op in [Operation::Add, Operation::Subtract, Operation::Transfer] {
            let policy = SingleParty.clear_policy(op);
            assert!(policy.amount_on_success);
            assert!(!policy.selection_on_success);
        }
    }
}
