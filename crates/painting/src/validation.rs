use thiserror::Error;

use crate::constants::SKIN_SIZE;

/// Errors at the import boundary. The paint path itself never fails.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Expected {expected} bytes of RGBA data, got {actual}")]
    ByteLength { expected: usize, actual: usize },
    #[error("Unsupported skin dimensions {width}x{height} (expected {}x{})", SKIN_SIZE, SKIN_SIZE)]
    DimensionMismatch { width: u32, height: u32 },
}

/// Check that an imported image has the 64x64 skin dimensions.
///
/// Legacy 64x32 and HD sheets are rejected.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), CanvasError> {
    if width != SKIN_SIZE || height != SKIN_SIZE {
        return Err(CanvasError::DimensionMismatch { width, height });
    }
    Ok(())
}
