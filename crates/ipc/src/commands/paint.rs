//! Paint target types for apply commands.

use serde::{Deserialize, Serialize};

use painting::BodyPart;

/// Where an apply command lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PaintTarget {
    /// Sheet pixel from a 2D editor
    Pixel { x: i32, y: i32 },
    /// Surface hit resolved by the host, in the part's local frame
    Hit {
        part: BodyPart,
        point: [f32; 3],
        normal: [f32; 3],
    },
    /// Model-space ray for hosts without their own hit test
    Ray { origin: [f32; 3], direction: [f32; 3] },
}
