//! Flattening of the two canvas layers into one RGBA raster

use crate::canvas::LayeredCanvas;
use crate::constants::SKIN_SIZE;
use crate::surface::PixelGrid;
use crate::types::{Layer, Pixel, Rgba};

/// A flattened 64x64 RGBA raster, ready for texture upload or encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRaster {
    pixels: Vec<Rgba>,
}

impl FlatRaster {
    pub fn width(&self) -> u32 {
        SKIN_SIZE
    }

    pub fn height(&self) -> u32 {
        SKIN_SIZE
    }

    /// Pixel at the given coordinates, transparent black if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Rgba {
        PixelGrid::index(x, y)
            .map(|i| self.pixels[i])
            .unwrap_or_default()
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Row-major RGBA8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Composite Overlay over Base.
///
/// Each output pixel is the Overlay pixel when it is not `Clear`, otherwise
/// the Base pixel. `Clear` in both layers becomes transparent black.
pub fn render(canvas: &LayeredCanvas) -> FlatRaster {
    let base = canvas.layer(Layer::Base).pixels();
    let overlay = canvas.layer(Layer::Overlay).pixels();

    let pixels = base
        .iter()
        .zip(overlay)
        .map(|(b, o)| match o {
            Pixel::Color(c) => *c,
            Pixel::Clear => b.to_rgba(),
        })
        .collect();

    FlatRaster { pixels }
}
