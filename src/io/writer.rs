//! Rendering a computed graph back to the output document.

use crate::error::Result;
use crate::graph::StackGraph;
use crate::io::mapper;
use std::io::Write;

/// Serializes the graph as the pretty-printed output document.
pub fn to_string_pretty(graph: &StackGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&mapper::graph_to_dto(graph))?)
}

/// Writes the output document (plus trailing newline) to any sink.
pub fn write<W: Write>(graph: &StackGraph, mut sink: W) -> Result<()> {
    let rendered = to_string_pretty(graph)?;
    sink.write_all(rendered.as_bytes())?;
    sink.write_all(b"\n")?;
    Ok(())
}
