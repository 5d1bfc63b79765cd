//! The component graph and its propagation engine.
//!
//! Components live in an arena and reference each other through
//! [`ComponentId`] handles rather than shared pointers, which keeps
//! bidirectional (and cyclic) edges trivial to represent.

mod component;
mod stack;

pub use component::{Component, ComponentId};
pub use stack::StackGraph;
