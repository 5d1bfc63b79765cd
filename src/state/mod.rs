//! The three state layers of a component.
//!
//! Every applied event flows through the layers in a fixed order: the
//! checked state records the raw per-check value, the own state aggregates
//! the component's checks, and the derived state folds in what the
//! component depends on.

mod checked;
mod derived;
mod own;

pub use checked::CheckedState;
pub use derived::DerivedState;
pub use own::OwnState;
