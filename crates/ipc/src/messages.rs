//! Events emitted by the painting engine to its host.

use serde::{Deserialize, Serialize};

use painting::Rect;

/// Messages from the engine to the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineEvent {
    /// Undo/redo availability changed (enable/disable host controls)
    HistoryChanged { can_undo: bool, can_redo: bool },

    /// Eyedropper adopted a color
    ColorPicked { color: [u8; 4] },

    /// Region of the texture to re-upload
    TextureDirty { rect: Rect },

    /// Informational message, never a failure
    Notice { message: String },
}
