//! Graph node wiring the three state layers to dependency edges.

use crate::state::{CheckedState, DerivedState, OwnState};
use std::collections::BTreeSet;
use std::fmt;

/// Arena handle for a component. Stable for the lifetime of the graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub usize);

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

/// A monitored component: unique string id, the three state layers, and the
/// two symmetric edge sets.
///
/// Edges are handles into the owning [`StackGraph`](crate::StackGraph)
/// arena. Equality and `Debug` cover the id and the state layers only;
/// including edges would recurse forever on cyclic graphs.
#[derive(Clone)]
pub struct Component {
    id: String,
    pub(crate) checked: CheckedState,
    pub(crate) own: OwnState,
    pub(crate) derived: DerivedState,
    pub(crate) dependencies: BTreeSet<ComponentId>,
    pub(crate) dependents: BTreeSet<ComponentId>,
}

impl Component {
    /// A dataless component tracking no checks.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_states(
            id,
            CheckedState::dataless(),
            OwnState::dataless(),
            DerivedState::dataless(),
        )
    }

    /// A component tracking the given checks, all at `NoData`.
    pub fn with_checks<I, S>(id: impl Into<String>, checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_states(
            id,
            CheckedState::tracking(checks),
            OwnState::dataless(),
            DerivedState::dataless(),
        )
    }

    /// A component with explicit initial state layers (used by the mapping
    /// layer when the input document carries pre-computed states).
    pub fn with_states(
        id: impl Into<String>,
        checked: CheckedState,
        own: OwnState,
        derived: DerivedState,
    ) -> Self {
        Self {
            id: id.into(),
            checked,
            own,
            derived,
            dependencies: BTreeSet::new(),
            dependents: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checked_state(&self) -> &CheckedState {
        &self.checked
    }

    pub fn own_state(&self) -> OwnState {
        self.own
    }

    pub fn derived_state(&self) -> DerivedState {
        self.derived
    }

    /// Handles of the components this one depends on.
    pub fn dependencies(&self) -> &BTreeSet<ComponentId> {
        &self.dependencies
    }

    /// Handles of the components that depend on this one.
    pub fn dependents(&self) -> &BTreeSet<ComponentId> {
        &self.dependents
    }
}

impl PartialEq for Component {
    /// Id plus the three state layers; edge sets are excluded.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.checked == other.checked
            && self.own == other.own
            && self.derived == other.derived
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.id)
            .field("checked", &self.checked)
            .field("own", &self.own)
            .field("derived", &self.derived)
            .finish()
    }
}
