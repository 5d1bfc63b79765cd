//! Per-check status map owned by a component.

use crate::types::{Event, StateValue};
use std::collections::BTreeMap;

/// Mapping from check name (case-sensitive) to its last observed severity.
///
/// A check absent from the map reads as [`StateValue::NoData`]; it is only
/// stored explicitly when declared up front or touched by an event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckedState {
    values: BTreeMap<String, StateValue>,
}

impl CheckedState {
    /// An empty checked state tracking no checks.
    pub fn dataless() -> Self {
        Self::default()
    }

    /// A checked state tracking the given checks, all at `NoData`.
    pub fn tracking<I, S>(checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: checks
                .into_iter()
                .map(|check| (check.into(), StateValue::NoData))
                .collect(),
        }
    }

    /// A checked state with a single known entry.
    pub fn with_just(check: impl Into<String>, state: StateValue) -> Self {
        let mut checked = Self::dataless();
        checked.set(check, state);
        checked
    }

    /// Sets or overwrites the entry for a check.
    pub fn set(&mut self, check: impl Into<String>, state: StateValue) {
        self.values.insert(check.into(), state);
    }

    /// Overwrites (or inserts) the entry named by the event with the
    /// event's severity. Last write per check wins.
    pub fn update_given(&mut self, event: &Event) {
        self.values.insert(event.check.clone(), event.state);
    }

    /// Current value of a check, `NoData` if untracked.
    pub fn value_of(&self, check: &str) -> StateValue {
        self.values.get(check).copied().unwrap_or_default()
    }

    /// Whether the check has an explicit entry.
    pub fn is_tracking(&self, check: &str) -> bool {
        self.values.contains_key(check)
    }

    /// Most severe value across all entries, `NoData` if empty.
    pub fn highest_state(&self) -> StateValue {
        self.values.values().copied().max().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Entries in check-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StateValue)> {
        self.values.iter().map(|(check, state)| (check.as_str(), *state))
    }
}
