//! Conversion between wire DTOs and the in-memory graph and event chain.
//!
//! Mapping in rejects what the core must never see: duplicate component
//! ids, unresolvable dependency references, unknown state names, and
//! non-numeric or duplicate timestamps. These are configuration errors,
//! surfaced before a single event is applied.

use crate::error::{Result, StackError};
use crate::graph::{Component, ComponentId, StackGraph};
use crate::io::dto::{ComponentDto, EventDto, GraphDto, StackEventsDto, StackStateDto};
use crate::state::{CheckedState, DerivedState, OwnState};
use crate::types::{Event, EventChain, StateValue};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Builds a wired graph from an initial-state document.
pub fn graph_from_dto(dto: &StackStateDto) -> Result<StackGraph> {
    let mut graph = StackGraph::new();
    for component in &dto.graph.components {
        graph.add_component(map_component(component)?)?;
    }

    // Second pass: edges, now that every id resolves to a handle.
    for component in &dto.graph.components {
        let from = graph
            .lookup(&component.id)
            .expect("component added in first pass");
        for dependency in component.depends_on.iter().flatten() {
            let on = graph
                .lookup(dependency)
                .ok_or_else(|| StackError::UnknownDependency {
                    component: component.id.clone(),
                    dependency: dependency.clone(),
                })?;
            graph.add_dependency(from, on);
        }
    }

    debug!(components = graph.len(), "mapped initial state");
    Ok(graph)
}

/// Renders a computed graph back into the output document.
pub fn graph_to_dto(graph: &StackGraph) -> StackStateDto {
    let components = graph
        .iter()
        .map(|component| ComponentDto {
            id: component.id().to_string(),
            own_state: Some(component.own_state().value().to_string()),
            derived_state: Some(component.derived_state().value().to_string()),
            check_states: component
                .checked_state()
                .iter()
                .map(|(check, state)| (check.to_string(), state.to_string()))
                .collect(),
            depends_on: edge_ids(graph, component.dependencies()),
            dependency_of: edge_ids(graph, component.dependents()),
        })
        .collect();

    StackStateDto {
        graph: GraphDto { components },
    }
}

/// Builds a validated event chain from an events document.
pub fn events_from_dto(dto: &StackEventsDto) -> Result<EventChain> {
    let mut seen = HashSet::with_capacity(dto.events.len());
    let mut events = Vec::with_capacity(dto.events.len());

    for event in &dto.events {
        let timestamp = map_timestamp(event)?;
        if !seen.insert(timestamp) {
            return Err(StackError::DuplicateTimestamp(timestamp));
        }
        events.push(Event::new(
            timestamp,
            event.component.clone(),
            event.check_state.clone(),
            event.state.parse::<StateValue>()?,
        ));
    }

    debug!(events = events.len(), "mapped event chain");
    Ok(EventChain::new(events))
}

fn map_component(dto: &ComponentDto) -> Result<Component> {
    let mut checked = CheckedState::dataless();
    for (check, state) in &dto.check_states {
        checked.set(check.clone(), state.parse::<StateValue>()?);
    }

    Ok(Component::with_states(
        dto.id.clone(),
        checked,
        OwnState::of(map_optional_state(dto.own_state.as_deref())?),
        DerivedState::of(map_optional_state(dto.derived_state.as_deref())?),
    ))
}

fn map_optional_state(state: Option<&str>) -> Result<StateValue> {
    state.map_or(Ok(StateValue::NoData), str::parse)
}

fn map_timestamp(event: &EventDto) -> Result<i64> {
    event
        .timestamp
        .parse::<i64>()
        .map_err(|_| StackError::InvalidTimestamp(event.timestamp.clone()))
}

/// Edge set as a sorted id list, `None` when empty so serialization omits
/// the field entirely.
fn edge_ids(graph: &StackGraph, edges: &BTreeSet<ComponentId>) -> Option<Vec<String>> {
    if edges.is_empty() {
        return None;
    }
    let mut ids: Vec<String> = edges
        .iter()
        .map(|&edge| graph.get(edge).id().to_string())
        .collect();
    ids.sort();
    Some(ids)
}
