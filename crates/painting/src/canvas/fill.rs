//! Bounded 4-connected flood fill

use tracing::debug;

use super::LayeredCanvas;
use crate::constants::{SKIN_PIXELS, SKIN_SIZE};
use crate::surface::PixelGrid;
use crate::types::{Layer, Pixel, Rect};

impl LayeredCanvas {
    /// Replace the 4-connected region of the seed's color with `pixel`.
    ///
    /// Returns the number of pixels written. Seeds outside the sheet and
    /// fills with the seed's own color do nothing.
    pub fn flood_fill(&mut self, x: i32, y: i32, layer: Layer, pixel: Pixel) -> usize {
        let size = SKIN_SIZE as i32;
        self.fill_bounded(x, y, layer, pixel, Rect::new(0, 0, size, size), |_, _| true)
    }

    /// Same as [`flood_fill`](Self::flood_fill) but never visits or writes a
    /// pixel outside `bounds`.
    ///
    /// Several parts are packed edge to edge on the sheet, so an unbounded
    /// fill of a shared background color would run across the seam.
    pub fn flood_fill_region(
        &mut self,
        x: i32,
        y: i32,
        layer: Layer,
        pixel: Pixel,
        bounds: Rect,
    ) -> usize {
        self.fill_bounded(x, y, layer, pixel, bounds, |_, _| true)
    }

    /// Bounded fill that also treats pixels rejected by `mask` as walls.
    pub fn flood_fill_masked(
        &mut self,
        x: i32,
        y: i32,
        layer: Layer,
        pixel: Pixel,
        bounds: Rect,
        mask: impl Fn(i32, i32) -> bool,
    ) -> usize {
        self.fill_bounded(x, y, layer, pixel, bounds, mask)
    }

    fn fill_bounded(
        &mut self,
        x: i32,
        y: i32,
        layer: Layer,
        pixel: Pixel,
        bounds: Rect,
        mask: impl Fn(i32, i32) -> bool,
    ) -> usize {
        if !bounds.contains(x, y) || !Self::in_bounds(x, y) || !mask(x, y) {
            return 0;
        }

        let target = self.get(x, y, layer);
        if target == pixel {
            return 0;
        }

        let grid = &mut self.layers[layer.index()];
        let mut visited = vec![false; SKIN_PIXELS];
        let mut stack = vec![(x, y)];
        let mut written = 0usize;
        let mut touched = Rect::new(x, y, 1, 1);

        while let Some((cx, cy)) = stack.pop() {
            if !bounds.contains(cx, cy) || !mask(cx, cy) {
                continue;
            }
            let Some(index) = PixelGrid::index(cx, cy) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            visited[index] = true;

            if grid.pixels()[index] != target {
                continue;
            }

            grid.pixels_mut()[index] = pixel;
            written += 1;
            touched = touched.union(&Rect::new(cx, cy, 1, 1));

            stack.push((cx - 1, cy));
            stack.push((cx + 1, cy));
            stack.push((cx, cy - 1));
            stack.push((cx, cy + 1));
        }

        self.mark_region_dirty(touched);
        debug!(
            "flood_fill: seed=({}, {}) layer={:?} bounds={:?} -> {} pixels",
            x, y, layer, bounds, written
        );
        written
    }
}
