// src/setup.rs
// Descriptor generation for the external graph-hosting CLI. Standalone
// collaborator: nothing in the core reads this file back at runtime.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::pipeline::{ENTRY_POINT, GRAPH_NAME};

/// Default descriptor file name.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "chat_graph.json";

/// Writes the graph descriptor mapping the graph name to the pipeline entry
/// point. Regenerated from scratch on every invocation.
pub fn write_descriptor(path: &Path) -> Result<()> {
    let config = json!({
        "graphs": { GRAPH_NAME: ENTRY_POINT },
        "dependencies": [GRAPH_NAME],
    });

    let payload = serde_json::to_string_pretty(&config)?;
    fs::write(path, payload)
        .with_context(|| format!("Failed to write descriptor to {}", path.display()))?;
    Ok(())
}
