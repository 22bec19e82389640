//! IPC message protocol for Skinbox
//!
//! Defines the commands a host sends to the painting engine and the events
//! it gets back. Messages are JSON, one object per line in scripts.

mod commands;
mod error;
mod messages;

pub use commands::*;
pub use error::IpcError;
pub use messages::*;

use tracing::debug;

/// Parse a command script.
///
/// A script is either a JSON array of commands or one command object per
/// line. Blank lines and lines starting with `//` are skipped.
pub fn parse_script(source: &str) -> Result<Vec<EngineCommand>, IpcError> {
    let trimmed = source.trim_start();
    if trimmed.starts_with('[') {
        let commands: Vec<EngineCommand> = serde_json::from_str(trimmed)?;
        debug!("parse_script: {} commands (array)", commands.len());
        return Ok(commands);
    }

    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let command = serde_json::from_str(line).map_err(|source| IpcError::InvalidCommand {
            line: index + 1,
            source,
        })?;
        commands.push(command);
    }

    if commands.is_empty() && !source.trim().is_empty() {
        return Err(IpcError::InvalidFormat("script contains only comments".to_string()));
    }
    debug!("parse_script: {} commands (lines)", commands.len());
    Ok(commands)
}

/// Encode an event as a single JSON line
pub fn encode_event(event: &EngineEvent) -> Result<String, IpcError> {
    Ok(serde_json::to_string(event)?)
}
