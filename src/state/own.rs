//! Aggregate status of a component's own checks.

use crate::state::CheckedState;
use crate::types::StateValue;

/// Worst severity among the owning component's checks.
///
/// Purely derived from [`CheckedState`]; there is no independent mutation
/// path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwnState(StateValue);

impl OwnState {
    pub fn of(state: StateValue) -> Self {
        Self(state)
    }

    pub fn dataless() -> Self {
        Self::default()
    }

    /// Recomputes the aggregate from the current checked state.
    pub fn update_given(&mut self, checked: &CheckedState) {
        self.0 = checked.highest_state();
    }

    pub fn value(self) -> StateValue {
        self.0
    }
}
