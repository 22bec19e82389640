//! Two-layer skin canvas with dirty tracking

mod dirty_tracking;
mod fill;

use tracing::debug;

use crate::constants::{SKIN_PIXELS, SKIN_SIZE};
use crate::surface::PixelGrid;
use crate::types::{Layer, Pixel, Rect, Rgba};
use crate::validation::CanvasError;

/// The editable skin: a Base and an Overlay layer, both 64x64.
///
/// Dimensions never change after creation. Reads outside the sheet return
/// `Clear` and writes outside it are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredCanvas {
    pub(crate) layers: [PixelGrid; 2],
    /// Bounding rect of pixels changed since the last `take_dirty`
    pub(crate) dirty: Option<Rect>,
}

impl Default for LayeredCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredCanvas {
    /// Create a canvas with both layers entirely `Clear`
    pub fn new() -> Self {
        Self {
            layers: [PixelGrid::new(), PixelGrid::new()],
            dirty: None,
        }
    }

    /// Build a canvas whose Base layer is imported from raw RGBA bytes.
    ///
    /// `bytes` must be exactly 64 * 64 * 4 long. Fully transparent texels
    /// import as `Clear`. The Overlay layer starts empty.
    pub fn from_rgba(bytes: &[u8]) -> Result<Self, CanvasError> {
        let expected = SKIN_PIXELS * 4;
        if bytes.len() != expected {
            return Err(CanvasError::ByteLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut canvas = Self::new();
        for (dst, src) in canvas.layers[Layer::Base.index()]
            .pixels_mut()
            .iter_mut()
            .zip(bytes.chunks_exact(4))
        {
            *dst = Pixel::from_rgba(Rgba::new(src[0], src[1], src[2], src[3]));
        }
        canvas.mark_all_dirty();
        debug!("LayeredCanvas::from_rgba: imported {} bytes", bytes.len());
        Ok(canvas)
    }

    /// Sheet dimensions (always 64x64)
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (SKIN_SIZE, SKIN_SIZE)
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        PixelGrid::index(x, y).is_some()
    }

    /// Read a pixel. Out-of-range coordinates read as `Clear`.
    #[inline]
    pub fn get(&self, x: i32, y: i32, layer: Layer) -> Pixel {
        self.layers[layer.index()].get(x, y).unwrap_or(Pixel::Clear)
    }

    /// Write a pixel. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, layer: Layer, pixel: Pixel) {
        if self.layers[layer.index()].set(x, y, pixel) {
            self.mark_dirty(x, y);
        }
    }

    /// Direct read access to one layer
    #[inline]
    pub fn layer(&self, layer: Layer) -> &PixelGrid {
        &self.layers[layer.index()]
    }

    /// Reflect a whole layer left-right.
    ///
    /// This is a sheet-wide utility; per-part mirroring is a translation and
    /// lives in the brush engine.
    pub fn mirror_horizontal(&mut self, layer: Layer) {
        self.layers[layer.index()].mirror_horizontal();
        self.mark_all_dirty();
        debug!("LayeredCanvas::mirror_horizontal: layer={:?}", layer);
    }

    /// Reset a layer to `Clear`
    pub fn clear_layer(&mut self, layer: Layer) {
        self.layers[layer.index()].fill(Pixel::Clear);
        self.mark_all_dirty();
    }
}
