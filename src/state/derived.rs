//! Worst status visible at a component, dependencies included.

use crate::state::OwnState;
use crate::types::StateValue;

/// Combination of a component's own state with the worst qualifying derived
/// state among its direct dependencies.
///
/// Two asymmetries are deliberate:
/// - An own state of `Clear` contributes `NoData`: "checked and healthy"
///   must not outrank a dependency alert, but remains distinct in the
///   checked/own layers.
/// - Only `Warning`/`Alert` dependency values qualify; `Clear` and `NoData`
///   dependencies never influence a dependent.
///
/// The recomputation is a full pull from current inputs, never incremental,
/// so repeating it is always safe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedState(StateValue);

impl DerivedState {
    pub fn of(state: StateValue) -> Self {
        Self(state)
    }

    pub fn dataless() -> Self {
        Self::default()
    }

    /// Recomputes from the component's current own state and its direct
    /// dependencies' current derived values.
    pub fn update_given<I>(&mut self, own: OwnState, dependency_states: I)
    where
        I: IntoIterator<Item = StateValue>,
    {
        let own_adjusted = match own.value() {
            StateValue::Clear => StateValue::NoData,
            other => other,
        };
        let worst_dependency = dependency_states
            .into_iter()
            .filter(|state| state.warning_or_higher())
            .max()
            .unwrap_or(StateValue::NoData);

        self.0 = StateValue::highest_of(own_adjusted, worst_dependency);
    }

    pub fn value(self) -> StateValue {
        self.0
    }
}
