//! Two-party rules.
//!
//! Every operation moves money between exactly two selected players:
//! - Add / transfer: the first-selected pays, the second-selected receives
//! - Subtract: the same with the sign flipped
//!
//! An applied operation clears both the amount input and the selection. A
//! refused one clears nothing.

use smallvec::smallvec;

use super::engine::{ClearPolicy, Operation, OperationMode, OperationRules, Posting, Postings};
use crate::core::{InvalidInput, Selection};

/// Rules where every operation is a payment between two players.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoParty;

impl OperationRules for TwoParty {
    fn mode(&self) -> OperationMode {
        OperationMode::TwoParty
    }

    fn required_selection(&self, _op: Operation) -> usize {
        2
    }

    fn postings(
        &self,
        op: Operation,
        selection: &Selection,
        amount: f64,
    ) -> Result<Postings, InvalidInput> {
        let names = self.selected(op, selection)?;

        let paid = match op {
            Operation::Add | Operation::Transfer => amount,
            Operation::Subtract => -amount,
        };
        Ok(smallvec![
            Posting::new(names[0].clone(), -paid),
            Posting::new(names[1].clone(), paid),
        ])
    }

    fn clear_policy(&self, _op: Operation) -> ClearPolicy {
        ClearPolicy {
            amount_on_success: true,
            amount_on_failure: false,
            selection_on_success: true,
        }
    }
}
