//! Error types for IPC operations.

/// Errors that can occur while decoding or encoding protocol messages.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid command on line {line}: {source}")]
    InvalidCommand {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
}
