//! Ordered event application over the whole graph.

use crate::graph::StackGraph;
use crate::types::EventChain;
use tracing::debug;

/// Applies an event chain to a graph in causal (timestamp-ascending) order.
///
/// Applying a chain twice is not idempotent: every event overwrites its
/// check entry again, so callers apply each chain exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateCalculator;

impl StateCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Sorts the chain by timestamp and applies each event to its target
    /// component. Events whose target id is not in the graph are skipped;
    /// they may legitimately reference infrastructure outside the tracked
    /// topology.
    pub fn process_events(&self, mut graph: StackGraph, chain: EventChain) -> StackGraph {
        for event in chain.into_sorted() {
            let applied = graph.apply_event(&event);
            debug!(
                timestamp = event.timestamp.0,
                component = %event.component,
                check = %event.check,
                state = %event.state,
                applied,
                "processed event"
            );
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Component;
    use crate::types::{Event, StateValue};

    #[test]
    fn test_empty_chain_changes_nothing() {
        let graph = StackGraph::with_components([Component::new("APP")]).unwrap();
        let before = graph.component("APP").unwrap().clone();

        let graph = StateCalculator::new().process_events(graph, EventChain::empty());

        assert_eq!(*graph.component("APP").unwrap(), before);
    }

    #[test]
    fn test_out_of_order_chain_applies_in_timestamp_order() {
        let graph = StackGraph::with_components([Component::with_checks("APP", ["cpu"])]).unwrap();

        // Timestamps 2 then 1 arrive reversed; the later event must win.
        let chain = EventChain::new(vec![
            Event::new(2, "APP", "cpu", StateValue::Clear),
            Event::new(1, "APP", "cpu", StateValue::Alert),
        ]);

        let graph = StateCalculator::new().process_events(graph, chain);

        assert_eq!(
            graph.component("APP").unwrap().checked_state().value_of("cpu"),
            StateValue::Clear
        );
    }
}
