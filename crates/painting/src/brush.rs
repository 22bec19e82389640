//! Brush engine: stamp, erase, fill, pick and mirror on a layered canvas.
//!
//! Stamps are integer disks: every pixel with `dx² + dy² <= r²` around the
//! center is touched. The default edge is hard, which matches the blocky
//! target format. [`EdgeFalloff::Linear`] instead fades the stamp toward its
//! rim with weight `1 - d / (r + 1)` and blends src-over onto what is there.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::atlas;
use crate::canvas::LayeredCanvas;
use crate::constants::SKIN_SIZE;
use crate::types::{BodyPart, Layer, ModelVariant, Pixel, Rect, Rgba};

/// Stamps wider than the sheet diagonal cover everything anyway
pub(crate) const MAX_STAMP_RADIUS: u32 = 128;

/// Edge policy for stamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeFalloff {
    /// Every covered pixel is replaced outright
    #[default]
    Hard,
    /// Linear alpha ramp from the center to one pixel past the rim
    Linear,
}

/// How far a fill may spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillScope {
    /// Whole sheet
    Sheet,
    /// Only within the footprint of one part's unwrap
    Part(BodyPart),
    /// Only within an explicit rectangle
    Rect(Rect),
}

/// Active brush settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub radius: u32,
    pub color: Rgba,
    pub layer: Layer,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            radius: 0,
            color: Rgba::opaque(0, 0, 0),
            layer: Layer::Base,
        }
    }
}

/// Weight of a stamp pixel at squared distance `dist_sq` from the center
#[inline]
pub fn falloff_weight(falloff: EdgeFalloff, dist_sq: i32, radius: u32) -> f32 {
    match falloff {
        EdgeFalloff::Hard => 1.0,
        EdgeFalloff::Linear => {
            let d = (dist_sq as f32).sqrt();
            (1.0 - d / (radius as f32 + 1.0)).clamp(0.0, 1.0)
        }
    }
}

/// Composite `src` over `dst` at `weight`.
///
/// Painting a color uses straight-alpha src-over. Painting `Clear` removes
/// `weight` of the existing alpha. A result with zero alpha is `Clear`.
pub fn blend(dst: Pixel, src: Pixel, weight: f32) -> Pixel {
    if weight >= 1.0 {
        return src;
    }
    if weight <= 0.0 {
        return dst;
    }

    match src {
        Pixel::Clear => {
            let Some(mut c) = dst.color() else {
                return Pixel::Clear;
            };
            c.a = (c.a as f32 * (1.0 - weight)).round() as u8;
            Pixel::from_rgba(c)
        }
        Pixel::Color(s) => {
            let d = dst.to_rgba();
            let sa = s.a as f32 / 255.0 * weight;
            let da = d.a as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            if out_a <= 0.0 {
                return Pixel::Clear;
            }
            let channel = |sc: u8, dc: u8| -> u8 {
                let v = (sc as f32 * sa + dc as f32 * da * (1.0 - sa)) / out_a;
                v.round().clamp(0.0, 255.0) as u8
            };
            Pixel::from_rgba(Rgba::new(
                channel(s.r, d.r),
                channel(s.g, d.g),
                channel(s.b, d.b),
                (out_a * 255.0).round() as u8,
            ))
        }
    }
}

/// Stateless paint operations for one model variant.
///
/// All operations take canvas pixel coordinates; 3D callers project first
/// with [`SurfaceProjector`](crate::projection::SurfaceProjector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrushEngine {
    variant: ModelVariant,
    falloff: EdgeFalloff,
}

impl BrushEngine {
    pub fn new(variant: ModelVariant, falloff: EdgeFalloff) -> Self {
        Self { variant, falloff }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn falloff(&self) -> EdgeFalloff {
        self.falloff
    }

    /// Stamp a disk of `color` centered on `center`.
    ///
    /// Returns the number of in-bounds pixels covered.
    pub fn paint(
        &self,
        canvas: &mut LayeredCanvas,
        center: (i32, i32),
        color: Pixel,
        radius: u32,
        layer: Layer,
    ) -> usize {
        self.stamp_masked(canvas, center, color, radius, layer, |_, _| true)
    }

    /// Stamp a disk of `Clear`
    pub fn erase(&self, canvas: &mut LayeredCanvas, center: (i32, i32), radius: u32, layer: Layer) -> usize {
        self.paint(canvas, center, Pixel::Clear, radius, layer)
    }

    /// Stamp a disk, skipping pixels for which `mask` returns false.
    pub fn stamp_masked(
        &self,
        canvas: &mut LayeredCanvas,
        center: (i32, i32),
        color: Pixel,
        radius: u32,
        layer: Layer,
        mask: impl Fn(i32, i32) -> bool,
    ) -> usize {
        let r = radius.min(MAX_STAMP_RADIUS) as i32;
        let r_sq = r * r;
        let (cx, cy) = center;
        let mut covered = 0;

        for dy in -r..=r {
            for dx in -r..=r {
                let dist_sq = dx * dx + dy * dy;
                if dist_sq > r_sq {
                    continue;
                }
                let (x, y) = (cx.saturating_add(dx), cy.saturating_add(dy));
                if !LayeredCanvas::in_bounds(x, y) || !mask(x, y) {
                    continue;
                }
                let weight = falloff_weight(self.falloff, dist_sq, r as u32);
                let out = blend(canvas.get(x, y, layer), color, weight);
                canvas.set(x, y, layer, out);
                covered += 1;
            }
        }

        debug!(
            "BrushEngine::stamp: center=({}, {}) r={} layer={:?} -> {} pixels",
            cx, cy, r, layer, covered
        );
        covered
    }

    /// Flood fill from `center` with `color`.
    ///
    /// Part-scoped fills are bounded by the part's unwrap footprint so they
    /// cannot bleed into a neighbouring part on the sheet.
    pub fn fill(
        &self,
        canvas: &mut LayeredCanvas,
        center: (i32, i32),
        color: Pixel,
        layer: Layer,
        scope: FillScope,
    ) -> usize {
        self.fill_masked(canvas, center, color, layer, scope, |_, _| true)
    }

    /// Flood fill that never writes a pixel for which `mask` returns false.
    pub fn fill_masked(
        &self,
        canvas: &mut LayeredCanvas,
        center: (i32, i32),
        color: Pixel,
        layer: Layer,
        scope: FillScope,
        mask: impl Fn(i32, i32) -> bool,
    ) -> usize {
        let size = SKIN_SIZE as i32;
        let bounds = match scope {
            FillScope::Sheet => Rect::new(0, 0, size, size),
            FillScope::Part(part) => atlas::part_bounds(part, self.variant),
            FillScope::Rect(bounds) => bounds,
        };
        canvas.flood_fill_masked(center.0, center.1, layer, color, bounds, mask)
    }

    /// Read the pixel under `center`.
    ///
    /// Callers must ignore a `Clear` result rather than adopting it as the
    /// active color.
    pub fn pick_color(&self, canvas: &LayeredCanvas, center: (i32, i32), layer: Layer) -> Pixel {
        canvas.get(center.0, center.1, layer)
    }

    /// Repeat a stamp on the mirror part of `source_part`.
    ///
    /// The mirrored center is `center` translated by the offset between the
    /// two parts' rectangles. Returns the mirrored center, or `None` if the
    /// part has no mirror.
    pub fn mirror_stroke(
        &self,
        canvas: &mut LayeredCanvas,
        center: (i32, i32),
        color: Pixel,
        radius: u32,
        layer: Layer,
        source_part: BodyPart,
    ) -> Option<(i32, i32)> {
        let (dx, dy) = atlas::mirror_offset(source_part, self.variant, false)?;
        let mirrored = (center.0.saturating_add(dx), center.1.saturating_add(dy));
        self.paint(canvas, mirrored, color, radius, layer);
        Some(mirrored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Pixel {
        Pixel::Color(Rgba::opaque(255, 0, 0))
    }

    fn painted(canvas: &LayeredCanvas, layer: Layer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..64 {
            for x in 0..64 {
                if !canvas.get(x, y, layer).is_clear() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_paint_radius_two_scenario() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        let n = engine.paint(&mut canvas, (12, 12), red(), 2, Layer::Base);
        assert_eq!(n, 13);

        let pixels = painted(&canvas, Layer::Base);
        assert_eq!(pixels.len(), 13);
        for (x, y) in pixels {
            let (dx, dy) = (x - 12, y - 12);
            assert!(dx * dx + dy * dy <= 4);
            assert_eq!(canvas.get(x, y, Layer::Base), red());
        }
    }

    #[test]
    fn test_paint_radius_zero() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        assert_eq!(engine.paint(&mut canvas, (0, 0), red(), 0, Layer::Overlay), 1);
        assert_eq!(canvas.get(0, 0, Layer::Overlay), red());
    }

    #[test]
    fn test_paint_clamped_at_sheet_edge() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        // Quarter disk of radius 2 around the corner: (0..=2, 0..=2) with d² <= 4
        assert_eq!(engine.paint(&mut canvas, (0, 0), red(), 2, Layer::Base), 6);
        assert_eq!(engine.paint(&mut canvas, (-100, -100), red(), 3, Layer::Base), 0);
    }

    #[test]
    fn test_repeated_stamp_is_idempotent() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        engine.paint(&mut canvas, (30, 30), red(), 3, Layer::Base);
        let once = canvas.clone();
        for _ in 0..10 {
            engine.paint(&mut canvas, (30, 30), red(), 3, Layer::Base);
        }
        assert_eq!(canvas.layer(Layer::Base), once.layer(Layer::Base));
    }

    #[test]
    fn test_erase() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        canvas.flood_fill(0, 0, Layer::Base, red());
        engine.erase(&mut canvas, (20, 20), 1, Layer::Base);
        assert_eq!(canvas.get(20, 20, Layer::Base), Pixel::Clear);
        assert_eq!(canvas.get(21, 20, Layer::Base), Pixel::Clear);
        assert_eq!(canvas.get(21, 21, Layer::Base), red());
    }

    #[test]
    fn test_linear_falloff_center_is_exact() {
        let engine = BrushEngine::new(ModelVariant::Standard, EdgeFalloff::Linear);
        let mut canvas = LayeredCanvas::new();
        engine.paint(&mut canvas, (10, 10), red(), 3, Layer::Base);
        assert_eq!(canvas.get(10, 10, Layer::Base), red());

        let rim = canvas.get(13, 10, Layer::Base).color().unwrap();
        assert!(rim.a > 0 && rim.a < 255);
        assert_eq!((rim.r, rim.g, rim.b), (255, 0, 0));
    }

    #[test]
    fn test_blend_rules() {
        let white = Pixel::Color(Rgba::opaque(255, 255, 255));
        // Half red over opaque white stays opaque and goes pink
        let out = blend(white, red(), 0.5).color().unwrap();
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 255);
        assert!(out.g > 100 && out.g < 160);

        // Partial erase lowers alpha, full erase clears
        let out = blend(white, Pixel::Clear, 0.5).color().unwrap();
        assert_eq!(out.a, 128);
        assert_eq!(blend(white, Pixel::Clear, 1.0), Pixel::Clear);
        assert_eq!(blend(Pixel::Clear, Pixel::Clear, 0.3), Pixel::Clear);
    }

    #[test]
    fn test_part_scoped_fill_does_not_bleed() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        // Head and hat footprints sit side by side, both Clear
        let n = engine.fill(&mut canvas, (10, 10), red(), Layer::Base, FillScope::Part(BodyPart::Head));
        assert_eq!(n, 32 * 16);
        assert_eq!(canvas.get(32, 8, Layer::Base), Pixel::Clear);
        assert_eq!(canvas.get(10, 16, Layer::Base), Pixel::Clear);
    }

    #[test]
    fn test_sheet_fill_covers_everything() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        assert_eq!(engine.fill(&mut canvas, (10, 10), red(), Layer::Base, FillScope::Sheet), 4096);
    }

    #[test]
    fn test_masked_sheet_fill() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        let n = engine.fill_masked(&mut canvas, (10, 10), red(), Layer::Base, FillScope::Sheet, |_, y| y < 16);
        assert_eq!(n, 64 * 16);
        assert_eq!(canvas.get(10, 16, Layer::Base), Pixel::Clear);
    }

    #[test]
    fn test_pick_color() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        canvas.set(3, 4, Layer::Overlay, red());
        assert_eq!(engine.pick_color(&canvas, (3, 4), Layer::Overlay), red());
        assert_eq!(engine.pick_color(&canvas, (3, 4), Layer::Base), Pixel::Clear);
        assert_eq!(engine.pick_color(&canvas, (99, 4), Layer::Base), Pixel::Clear);
    }

    #[test]
    fn test_mirror_stroke_round_trip() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        let p = (45, 25);
        engine.paint(&mut canvas, p, red(), 0, Layer::Base);
        let mirrored = engine
            .mirror_stroke(&mut canvas, p, red(), 0, Layer::Base, BodyPart::RightArm)
            .unwrap();
        assert_eq!(mirrored, (37, 57));
        assert!(Rect::new(36, 52, 4, 12).contains(mirrored.0, mirrored.1));
        assert_eq!(canvas.get(37, 57, Layer::Base), red());

        let back = engine
            .mirror_stroke(&mut canvas, mirrored, red(), 0, Layer::Base, BodyPart::LeftArm)
            .unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_mirror_stroke_far_off_sheet() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        let mirrored = engine
            .mirror_stroke(&mut canvas, (i32::MIN + 3, 0), Pixel::Clear, 0, Layer::Base, BodyPart::RightArm)
            .unwrap();
        assert_eq!(mirrored, (i32::MIN, 32));
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_mirror_stroke_without_mirror_part() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        assert!(engine
            .mirror_stroke(&mut canvas, (10, 10), red(), 1, Layer::Base, BodyPart::Head)
            .is_none());
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_masked_stamp() {
        let engine = BrushEngine::default();
        let mut canvas = LayeredCanvas::new();
        let n = engine.stamp_masked(&mut canvas, (10, 10), red(), 2, Layer::Base, |x, _| x >= 10);
        assert_eq!(n, 9);
        assert_eq!(canvas.get(9, 10, Layer::Base), Pixel::Clear);
    }
}
