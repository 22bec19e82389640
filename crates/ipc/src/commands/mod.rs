//! Command types for IPC messages.

mod paint;

pub use paint::*;

use painting::{BodyPart, Layer, Tool};
use serde::{Deserialize, Serialize};

/// Commands from a host UI to the painting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineCommand {
    /// Set brush color (RGBA, 0-255)
    SetColor { color: [u8; 4] },
    /// Set brush radius in pixels
    SetRadius { radius: u32 },
    /// Set the layer strokes go to
    SetLayer { layer: Layer },
    SetTool { tool: Tool },
    /// Enable/disable left/right limb mirroring
    SetMirror { enabled: bool },
    /// Restrict edits to some parts; `None` lifts the restriction
    SetIsolation { parts: Option<Vec<BodyPart>> },
    /// Pointer down
    BeginGesture,
    /// Pointer up
    EndGesture,
    /// Gesture aborted by the host; edits stay until undone
    CancelGesture,
    /// Apply the active tool
    Apply { target: PaintTarget },
    Undo,
    Redo,
    /// Flip a whole layer left-right
    MirrorLayer { layer: Layer },
    ClearLayer { layer: Layer },
}
