/// Side length of the skin sheet in pixels. Fixed by the skin format.
pub const SKIN_SIZE: u32 = 64;

/// Number of pixels in one layer of the sheet.
pub const SKIN_PIXELS: usize = (SKIN_SIZE * SKIN_SIZE) as usize;

/// Minimum normal component (against +/-1) for a face to be chosen.
pub const FACE_CONFIDENCE: f32 = 0.9;

/// Default maximum number of undo snapshots kept.
pub const DEFAULT_UNDO_DEPTH: usize = 64;

/// Outward inflation of the hat box per side, in model units.
pub const HAT_INFLATE: f32 = 0.5;

/// Outward inflation of the jacket box per side, in model units.
pub const JACKET_INFLATE: f32 = 0.25;
