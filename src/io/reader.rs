//! File-based input: the initial-state and events JSON documents.

use crate::error::Result;
use crate::graph::StackGraph;
use crate::io::dto::{StackEventsDto, StackStateDto};
use crate::io::mapper;
use crate::types::EventChain;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and maps the two input files of a run.
#[derive(Clone, Debug)]
pub struct JsonFileReader {
    state_path: PathBuf,
    events_path: PathBuf,
}

impl JsonFileReader {
    pub fn new(state_path: impl Into<PathBuf>, events_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
            events_path: events_path.into(),
        }
    }

    /// Reads, parses, and maps the initial topology.
    pub fn read_initial_state(&self) -> Result<StackGraph> {
        let dto: StackStateDto = read_json(&self.state_path)?;
        mapper::graph_from_dto(&dto)
    }

    /// Reads, parses, and maps the event chain.
    pub fn read_events(&self) -> Result<EventChain> {
        let dto: StackEventsDto = read_json(&self.events_path)?;
        mapper::events_from_dto(&dto)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
