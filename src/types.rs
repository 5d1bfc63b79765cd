//! Core value types: severity levels, timestamps, and check events.

use crate::error::StackError;
use std::fmt;
use std::str::FromStr;

/// Severity of a health signal, ordered from least to most severe.
///
/// The ordering is total and fixed: `NoData < Clear < Warning < Alert`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateValue {
    /// No check result has been observed.
    #[default]
    NoData,
    /// Checked and healthy.
    Clear,
    Warning,
    Alert,
}

impl StateValue {
    /// The more severe of the two values (either one on ties).
    pub fn highest_of(a: StateValue, b: StateValue) -> StateValue {
        a.max(b)
    }

    /// True iff this value is severe enough to propagate to dependents.
    pub fn warning_or_higher(self) -> bool {
        self >= StateValue::Warning
    }

    /// Wire-format name (lowercase snake_case).
    pub fn as_str(self) -> &'static str {
        match self {
            StateValue::NoData => "no_data",
            StateValue::Clear => "clear",
            StateValue::Warning => "warning",
            StateValue::Alert => "alert",
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateValue {
    type Err = StackError;

    /// Parses a wire-format state name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "no_data" => Ok(StateValue::NoData),
            "clear" => Ok(StateValue::Clear),
            "warning" => Ok(StateValue::Warning),
            "alert" => Ok(StateValue::Alert),
            _ => Err(StackError::UnknownState(s.to_string())),
        }
    }
}

/// Logical event time. Purely ordinal; not related to wall-clock time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single observed check result for a component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Logical time; unique across a chain (enforced by the mapping layer).
    pub timestamp: Timestamp,
    /// Id of the component the check belongs to.
    pub component: String,
    /// Name of the check (case-sensitive).
    pub check: String,
    /// Observed severity.
    pub state: StateValue,
}

impl Event {
    pub fn new(
        timestamp: i64,
        component: impl Into<String>,
        check: impl Into<String>,
        state: StateValue,
    ) -> Self {
        Self {
            timestamp: Timestamp(timestamp),
            component: component.into(),
            check: check.into(),
            state,
        }
    }
}

/// An event sequence as received, in arbitrary order.
///
/// The calculator applies chains in timestamp order regardless of input
/// order; [`EventChain::into_sorted`] produces that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventChain {
    events: Vec<Event>,
}

impl EventChain {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Consumes the chain, yielding events sorted by ascending timestamp.
    pub fn into_sorted(self) -> Vec<Event> {
        let mut events = self.events;
        events.sort_by_key(|event| event.timestamp);
        events
    }
}

impl FromIterator<Event> for EventChain {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EventChain {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
