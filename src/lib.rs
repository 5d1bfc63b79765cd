//! # stackstate
//!
//! Health-state propagation over a dependency graph of monitored
//! components. A graph of components — each tracking named checks — absorbs
//! a chronological chain of check events; every event updates the target's
//! per-check state, its own aggregate state, and its derived state, then
//! cascades derived-state recomputation through dependents until the graph
//! reaches a fixed point. Cycles are supported: a node that recomputes to an
//! unchanged value stops the cascade.
//!
//! ## Core Concepts
//!
//! - **Checked state**: per-check severity map on a component
//! - **Own state**: worst severity among a component's own checks
//! - **Derived state**: own state combined with the worst qualifying
//!   (`warning`/`alert`) derived state among dependencies
//! - **Cascade**: worklist recomputation through dependents, stopping at
//!   unchanged nodes
//!
//! ## Example
//!
//! ```
//! use stackstate::{Component, Event, EventChain, StackGraph, StateCalculator, StateValue};
//!
//! let mut graph = StackGraph::new();
//! let app = graph.add_component(Component::with_checks("app", ["cpu"])).unwrap();
//! let db = graph.add_component(Component::with_checks("db", ["cpu"])).unwrap();
//! graph.add_dependency(app, db);
//!
//! let chain = EventChain::new(vec![Event::new(1, "db", "cpu", StateValue::Warning)]);
//! let graph = StateCalculator::new().process_events(graph, chain);
//!
//! assert_eq!(graph.component("app").unwrap().derived_state().value(), StateValue::Warning);
//! ```

pub mod calculator;
pub mod error;
pub mod graph;
pub mod io;
pub mod state;
pub mod types;

// Re-exports
pub use calculator::StateCalculator;
pub use error::{Result, StackError};
pub use graph::{Component, ComponentId, StackGraph};
pub use io::JsonFileReader;
pub use state::{CheckedState, DerivedState, OwnState};
pub use types::{Event, EventChain, StateValue, Timestamp};
