//! Player selection: none, one, or an ordered pair.
//!
//! Selection is only changed through [`Selection::toggle`]. A third player
//! cannot be added; the toggle is refused and the selection stays as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::InvalidInput;
use super::player::PlayerName;

/// The players targeted by the next operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    One(PlayerName),
    /// Two players, in the order they were selected.
    Two { first: PlayerName, second: PlayerName },
}

/// Role a player plays in the current selection.
///
/// Presentation layers map these to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionRole {
    /// The only selected player.
    Primary,
    /// First of two selected players.
    Secondary,
    /// Second of two selected players.
    Tertiary,
    /// Not selected.
    Neutral,
}

impl Selection {
    /// Number of selected players.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::One(_) => 1,
            Selection::Two { .. } => 2,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Selected names in selection order.
    #[must_use]
    pub fn names(&self) -> SmallVec<[&PlayerName; 2]> {
        match self {
            Selection::None => SmallVec::new(),
            Selection::One(name) => SmallVec::from_buf_and_len([name, name], 1),
            Selection::Two { first, second } => SmallVec::from_buf([first, second]),
        }
    }

    /// Check whether a player is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n.as_str() == name)
    }

    /// Deselect `name` if selected, otherwise append it.
    ///
    /// Returns `SelectionFull` when two players are already selected and
    /// `name` is not one of them.
    ///
    /// ```
    /// use banker::core::{PlayerName, Selection};
    ///
    /// let alice = PlayerName::parse("Alice").unwrap();
    /// let bob = PlayerName::parse("Bob").unwrap();
    ///
    /// let mut selection = Selection::None;
    /// selection.toggle(alice.clone()).unwrap();
    /// selection.toggle(bob.clone()).unwrap();
    /// assert_eq!(selection, Selection::Two { first: alice.clone(), second: bob });
    ///
    /// selection.toggle(alice).unwrap();
    /// assert_eq!(selection.len(), 1);
    /// ```
    pub fn toggle(&mut self, name: PlayerName) -> Result<(), InvalidInput> {
        let next = match std::mem::take(self) {
            Selection::None => Selection::One(name),
            Selection::One(current) if current == name => Selection::None,
            Selection::One(current) => Selection::Two { first: current, second: name },
            Selection::Two { first, second } if first == name => Selection::One(second),
            Selection::Two { first, second } if second == name => Selection::One(first),
            full @ Selection::Two { .. } => {
                *self = full;
                return Err(InvalidInput::SelectionFull(name.to_string()));
            }
        };
        *self = next;
        Ok(())
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// Role of `name` in this selection.
    #[must_use]
    pub fn role_of(&self, name: &str) -> SelectionRole {
        match self {
            Selection::One(only) if only.as_str() == name => SelectionRole::Primary,
            Selection::Two { first, .. } if first.as_str() == name => SelectionRole::Secondary,
            Selection::Two { second, .. } if second.as_str() == name => SelectionRole::Tertiary,
            _ => SelectionRole::Neutral,
        }
    }
}
