//! Single-layer pixel grid backing each canvas layer

use crate::constants::{SKIN_PIXELS, SKIN_SIZE};
use crate::types::Pixel;

/// One 64x64 layer of [`Pixel`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelGrid {
    /// Create a grid with every pixel `Clear`
    pub fn new() -> Self {
        Self {
            pixels: vec![Pixel::Clear; SKIN_PIXELS],
        }
    }

    /// Row-major index, or None if out of bounds
    #[inline]
    pub fn index(x: i32, y: i32) -> Option<usize> {
        let size = SKIN_SIZE as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(y as usize * SKIN_SIZE as usize + x as usize)
    }

    /// Set every pixel to the same value
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        Self::index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel. Returns whether anything changed.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        let Some(i) = Self::index(x, y) else {
            return false;
        };
        if self.pixels[i] == pixel {
            return false;
        }
        self.pixels[i] = pixel;
        true
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Reverse every row in place.
    pub fn mirror_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(SKIN_SIZE as usize) {
            row.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    #[test]
    fn test_new_grid_is_clear() {
        let grid = PixelGrid::new();
        assert_eq!(grid.pixels().len(), 64 * 64);
        assert!(grid.pixels().iter().all(Pixel::is_clear));
    }

    #[test]
    fn test_get_set() {
        let mut grid = PixelGrid::new();
        let red = Pixel::Color(Rgba::opaque(255, 0, 0));
        assert!(grid.set(5, 7, red));
        assert_eq!(grid.get(5, 7), Some(red));
        // Same value again is not a change
        assert!(!grid.set(5, 7, red));
        assert_eq!(grid.get(64, 0), None);
        assert_eq!(grid.get(-1, 0), None);
        assert!(!grid.set(0, 64, red));
    }

    #[test]
    fn test_mirror_horizontal() {
        let mut grid = PixelGrid::new();
        let red = Pixel::Color(Rgba::opaque(255, 0, 0));
        grid.set(0, 3, red);
        grid.mirror_horizontal();
        assert_eq!(grid.get(63, 3), Some(red));
        assert_eq!(grid.get(0, 3), Some(Pixel::Clear));
    }
}
