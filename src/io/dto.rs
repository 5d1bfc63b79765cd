//! Serde structs mirroring the JSON documents, states as plain strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level initial-state / result document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackStateDto {
    pub graph: GraphDto,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDto {
    #[serde(default)]
    pub components: Vec<ComponentDto>,
}

/// One component entry.
///
/// On input, everything except `id` may be absent and defaults to dataless.
/// On output, empty edge lists are omitted rather than serialized as `null`
/// or `[]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDto {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_state: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub check_states: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_of: Option<Vec<String>>,
}

/// Top-level events document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEventsDto {
    #[serde(default)]
    pub events: Vec<EventDto>,
}

/// One event entry. The timestamp arrives as a string and is validated by
/// the mapper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDto {
    pub timestamp: String,
    pub component: String,
    pub check_state: String,
    pub state: String,
}
