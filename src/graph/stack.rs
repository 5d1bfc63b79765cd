//! Arena of components plus the event-application and cascade algorithms.

use crate::error::{Result, StackError};
use crate::graph::{Component, ComponentId};
use crate::types::{Event, StateValue};
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// The full topology of monitored components.
///
/// Nodes are owned by the arena and addressed by [`ComponentId`]; string-id
/// lookup goes through a side index. The graph is a general directed graph:
/// self-loops and cycles are supported, not rejected.
#[derive(Clone, Debug, Default)]
pub struct StackGraph {
    components: Vec<Component>,
    ids: HashMap<String, ComponentId>,
}

impl StackGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from unwired components.
    pub fn with_components<I>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = Component>,
    {
        let mut graph = Self::new();
        for component in components {
            graph.add_component(component)?;
        }
        Ok(graph)
    }

    /// Adds a component to the arena, handing back its handle.
    ///
    /// Ids are unique; a repeated id would silently shadow the existing
    /// node's lookup entry, so it is rejected here.
    pub fn add_component(&mut self, component: Component) -> Result<ComponentId> {
        if self.ids.contains_key(component.id()) {
            return Err(StackError::DuplicateComponent(component.id().to_string()));
        }
        let id = ComponentId(self.components.len());
        self.ids.insert(component.id().to_string(), id);
        self.components.push(component);
        Ok(id)
    }

    /// Registers `on` as a dependency of `from`, and symmetrically `from`
    /// as a dependent of `on`. There is no one-sided variant.
    pub fn add_dependency(&mut self, from: ComponentId, on: ComponentId) {
        self.components[from.0].dependencies.insert(on);
        self.components[on.0].dependents.insert(from);
    }

    /// Batch form of [`add_dependency`](Self::add_dependency).
    pub fn add_dependencies(&mut self, from: ComponentId, on: &[ComponentId]) {
        for &dependency in on {
            self.add_dependency(from, dependency);
        }
    }

    /// Looks up a component's handle by string id.
    pub fn lookup(&self, id: &str) -> Option<ComponentId> {
        self.ids.get(id).copied()
    }

    /// The component behind a handle.
    pub fn get(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    /// Looks up a component by string id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.lookup(id).map(|handle| self.get(handle))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Applies one event to its target component, updating the three state
    /// layers in order and cascading derived-state recomputation to
    /// dependents. Returns false (and changes nothing) when the target id
    /// is not part of the graph.
    pub fn apply_event(&mut self, event: &Event) -> bool {
        let Some(target) = self.lookup(&event.component) else {
            return false;
        };

        let node = &mut self.components[target.0];
        node.checked.update_given(event);
        node.own.update_given(&node.checked);
        self.recompute_derived(target);
        self.cascade_from(target);
        true
    }

    /// Recomputes one node's derived state from its current own state and
    /// its dependencies' current derived states. Returns whether the value
    /// changed.
    fn recompute_derived(&mut self, id: ComponentId) -> bool {
        let dependency_states: Vec<StateValue> = self.components[id.0]
            .dependencies
            .iter()
            .map(|&dependency| self.components[dependency.0].derived.value())
            .collect();

        let node = &mut self.components[id.0];
        let before = node.derived;
        node.derived.update_given(node.own, dependency_states);
        node.derived != before
    }

    /// Fixed-point propagation over dependents, as a worklist instead of
    /// recursion so deep graphs cannot overflow the stack.
    ///
    /// Each popped node is recomputed from current neighbor values; its own
    /// dependents are re-enqueued only when the recomputed value changed.
    /// Once every member of a cycle has settled, no node re-enqueues, which
    /// is what bounds the walk on cyclic topologies.
    fn cascade_from(&mut self, origin: ComponentId) {
        let mut dirty: VecDeque<ComponentId> =
            self.components[origin.0].dependents.iter().copied().collect();

        while let Some(id) = dirty.pop_front() {
            if self.recompute_derived(id) {
                trace!(
                    component = self.components[id.0].id(),
                    derived = %self.components[id.0].derived.value(),
                    "derived state changed, cascading to dependents"
                );
                dirty.extend(self.components[id.0].dependents.iter().copied());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DerivedState, OwnState};

    #[test]
    fn test_add_dependency_is_symmetric() {
        let mut graph = StackGraph::new();
        let app = graph.add_component(Component::new("APP")).unwrap();
        let db = graph.add_component(Component::new("DB")).unwrap();

        graph.add_dependency(app, db);

        assert!(graph.get(app).dependencies().contains(&db));
        assert!(graph.get(db).dependents().contains(&app));
        assert!(graph.get(app).dependents().is_empty());
        assert!(graph.get(db).dependencies().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut graph = StackGraph::new();
        graph.add_component(Component::new("APP")).unwrap();
        assert!(matches!(
            graph.add_component(Component::new("APP")),
            Err(StackError::DuplicateComponent(id)) if id == "APP"
        ));
    }

    #[test]
    fn test_event_updates_three_layers_in_order() {
        let mut graph = StackGraph::new();
        graph
            .add_component(Component::with_checks("APP", ["cpu"]))
            .unwrap();

        let applied = graph.apply_event(&Event::new(1, "APP", "cpu", StateValue::Warning));

        assert!(applied);
        let app = graph.component("APP").unwrap();
        assert_eq!(app.checked_state().value_of("cpu"), StateValue::Warning);
        assert_eq!(app.own_state(), OwnState::of(StateValue::Warning));
        assert_eq!(app.derived_state(), DerivedState::of(StateValue::Warning));
    }

    #[test]
    fn test_event_for_unknown_component_is_ignored() {
        let mut graph = StackGraph::new();
        graph.add_component(Component::new("APP")).unwrap();

        let applied = graph.apply_event(&Event::new(1, "QUEUE", "cpu", StateValue::Alert));

        assert!(!applied);
        assert_eq!(
            graph.component("APP").unwrap().derived_state(),
            DerivedState::dataless()
        );
    }

    #[test]
    fn test_cascade_reaches_transitive_dependents() {
        let mut graph = StackGraph::new();
        let top = graph.add_component(Component::new("TOP")).unwrap();
        let mid = graph.add_component(Component::new("MID")).unwrap();
        let bottom = graph.add_component(Component::new("BOTTOM")).unwrap();
        graph.add_dependency(top, mid);
        graph.add_dependency(mid, bottom);

        graph.apply_event(&Event::new(1, "BOTTOM", "cpu", StateValue::Alert));

        assert_eq!(
            graph.get(mid).derived_state(),
            DerivedState::of(StateValue::Alert)
        );
        assert_eq!(
            graph.get(top).derived_state(),
            DerivedState::of(StateValue::Alert)
        );
        // own states above the source are untouched
        assert_eq!(graph.get(mid).own_state(), OwnState::dataless());
        assert_eq!(graph.get(top).own_state(), OwnState::dataless());
    }

    #[test]
    fn test_self_dependency_terminates() {
        let mut graph = StackGraph::new();
        let app = graph.add_component(Component::new("APP")).unwrap();
        graph.add_dependency(app, app);

        graph.apply_event(&Event::new(1, "APP", "cpu", StateValue::Warning));

        assert_eq!(
            graph.get(app).derived_state(),
            DerivedState::of(StateValue::Warning)
        );
    }
}
