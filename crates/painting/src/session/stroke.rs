//! Gesture handling for the painting session

use std::collections::HashSet;

use glam::Vec3;
use tracing::{debug, warn};

use crate::atlas::{self, SheetLocation};
use crate::brush::{FillScope, MAX_STAMP_RADIUS};
use crate::constants::SKIN_SIZE;
use crate::projection::SurfaceHit;
use crate::raycast::raycast_model;
use crate::types::{BodyPart, ModelVariant, Pixel, Rgba};

use super::{PaintingSession, StrokePoint, Tool};

/// What a single apply call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Pixels covered by stamps, mirrored stamps included
    Stamped(usize),
    /// Pixels written by a fill
    Filled(usize),
    /// Color adopted by the eyedropper
    Picked(Rgba),
    /// Nothing happened: isolated part, `Clear` pick or a miss
    Skipped,
}

/// Points of the line from `from` to `to`, excluding `from`.
///
/// Integer Bresenham, so consecutive points are 8-connected. Callers keep
/// both ends near the sheet; see [`within_reach`].
pub(crate) fn line_points(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = (i64::from(from.0), i64::from(from.1));
    let to = (i64::from(to.0), i64::from(to.1));
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut points = Vec::with_capacity(usize::try_from(dx - dy).unwrap_or(0));

    while (x, y) != to {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        // Every point lies between the two i32 endpoints
        points.push((x as i32, y as i32));
    }
    points
}

/// Whether a stamp of `radius` centered on `point` can touch the sheet.
fn within_reach(point: (i32, i32), radius: u32) -> bool {
    let reach = i64::from(radius.min(MAX_STAMP_RADIUS));
    let range = -reach..i64::from(SKIN_SIZE) + reach;
    range.contains(&i64::from(point.0)) && range.contains(&i64::from(point.1))
}

/// Where the pixels of a gesture come from
#[derive(Debug, Clone, Copy)]
enum Target {
    /// 2D input; each pixel belongs to whatever part owns it on the sheet
    Sheet,
    /// 3D input; every pixel belongs to the hit part
    Surface(SheetLocation),
}

impl Target {
    fn owner(self, (x, y): (i32, i32), variant: ModelVariant) -> Option<SheetLocation> {
        match self {
            Target::Sheet => atlas::part_at(x, y, variant),
            Target::Surface(location) => Some(location),
        }
    }
}

fn isolation_allows(isolation: Option<&HashSet<BodyPart>>, variant: ModelVariant, x: i32, y: i32) -> bool {
    match isolation {
        None => true,
        Some(parts) => atlas::part_at(x, y, variant).is_some_and(|loc| parts.contains(&loc.part)),
    }
}

impl PaintingSession {
    /// Start a gesture and snapshot the canvas for undo.
    ///
    /// An already open gesture is ended first.
    pub fn begin_gesture(&mut self) {
        if self.gesture_open {
            debug!("begin_gesture: closing previous gesture");
            self.end_gesture();
        }
        self.history.begin_gesture(&self.canvas);
        self.gesture_open = true;
        self.last_point = None;
    }

    /// End the open gesture. Returns true if it changed the canvas and was
    /// recorded in history.
    pub fn end_gesture(&mut self) -> bool {
        if !self.gesture_open {
            return false;
        }
        self.gesture_open = false;
        self.last_point = None;
        let recorded = !self.history.discard_if_unchanged(&self.canvas);
        debug!("end_gesture: recorded={}", recorded);
        recorded
    }

    /// Abort the open gesture.
    ///
    /// Edits already applied stay on the canvas; the gesture's snapshot is
    /// kept so [`undo`](Self::undo) reverts all of it.
    pub fn cancel_gesture(&mut self) {
        if !self.gesture_open {
            return;
        }
        debug!("cancel_gesture: edits kept, undo reverts them");
        self.end_gesture();
    }

    /// Check if a gesture is in progress
    pub fn is_gesturing(&self) -> bool {
        self.gesture_open
    }

    /// Apply the active tool at a sheet pixel from a 2D editor.
    ///
    /// Successive stamps of one gesture are joined with a line.
    pub fn apply_at_pixel(&mut self, x: i32, y: i32) -> ApplyOutcome {
        if !isolation_allows(self.isolation.as_ref(), self.options.variant, x, y) {
            debug!("apply_at_pixel: ({}, {}) outside isolated parts", x, y);
            return ApplyOutcome::Skipped;
        }
        let from = self.last_point.map(|p| (p.x, p.y));
        self.with_gesture(|session| {
            let outcome = session.apply_tool((x, y), Target::Sheet, from);
            session.last_point = Some(StrokePoint { x, y, surface: None });
            outcome
        })
    }

    /// Apply the active tool at a surface hit from a 3D view.
    ///
    /// Strokes are interpolated only while they stay on one face of one part,
    /// never across a seam of the sheet.
    pub fn apply_at_hit(&mut self, hit: &SurfaceHit) -> ApplyOutcome {
        if let Some(parts) = &self.isolation {
            if !parts.contains(&hit.part) {
                debug!("apply_at_hit: {:?} is not isolated", hit.part);
                return ApplyOutcome::Skipped;
            }
        }

        let projected = self.projector.project(hit);
        let surface = Some((hit.part, projected.face));
        let from = self
            .last_point
            .filter(|p| p.surface == surface)
            .map(|p| (p.x, p.y));
        let location = SheetLocation {
            part: hit.part,
            face: projected.face,
            outer: false,
        };

        self.with_gesture(|session| {
            let outcome = session.apply_tool((projected.x, projected.y), Target::Surface(location), from);
            session.last_point = Some(StrokePoint {
                x: projected.x,
                y: projected.y,
                surface,
            });
            outcome
        })
    }

    /// Cast a model-space ray and apply the active tool where it lands.
    pub fn apply_along_ray(&mut self, origin: Vec3, direction: Vec3) -> ApplyOutcome {
        match raycast_model(origin, direction, self.options.variant, self.options.include_overlays) {
            Some(hit) => self.apply_at_hit(&hit),
            None => {
                debug!("apply_along_ray: miss");
                ApplyOutcome::Skipped
            }
        }
    }

    /// Run `apply` inside the open gesture, or inside a one-shot gesture if
    /// the host forgot to open one.
    fn with_gesture(&mut self, apply: impl FnOnce(&mut Self) -> ApplyOutcome) -> ApplyOutcome {
        if self.gesture_open {
            return apply(self);
        }
        warn!("apply without an open gesture; recording it as its own gesture");
        self.begin_gesture();
        let outcome = apply(self);
        self.end_gesture();
        outcome
    }

    fn apply_tool(&mut self, center: (i32, i32), target: Target, from: Option<(i32, i32)>) -> ApplyOutcome {
        match self.tool {
            Tool::Paint => {
                let color = Pixel::from_rgba(self.brush.color);
                ApplyOutcome::Stamped(self.stroke_segment(from, center, color, target))
            }
            Tool::Erase => ApplyOutcome::Stamped(self.stroke_segment(from, center, Pixel::Clear, target)),
            Tool::Fill => ApplyOutcome::Filled(self.fill_at(center, target)),
            Tool::Pick => match self.engine.pick_color(&self.canvas, center, self.brush.layer) {
                Pixel::Color(color) => {
                    self.brush.color = color;
                    ApplyOutcome::Picked(color)
                }
                Pixel::Clear => ApplyOutcome::Skipped,
            },
        }
    }

    /// Stamp every point from `from` (exclusive) to `to`, mirroring each
    /// stamp when mirroring is on.
    fn stroke_segment(&mut self, from: Option<(i32, i32)>, to: (i32, i32), color: Pixel, target: Target) -> usize {
        let (radius, layer) = (self.brush.radius, self.brush.layer);
        let points = match from {
            Some(from) if from != to && within_reach(from, radius) && within_reach(to, radius) => {
                line_points(from, to)
            }
            _ => vec![to],
        };

        let variant = self.options.variant;
        let isolation = self.isolation.as_ref();
        let mask = |x: i32, y: i32| isolation_allows(isolation, variant, x, y);
        let mut covered = 0;

        for point in points {
            covered += self
                .engine
                .stamp_masked(&mut self.canvas, point, color, radius, layer, mask);

            if !self.mirror {
                continue;
            }
            let Some(owner) = target.owner(point, variant) else {
                continue;
            };
            if let Some((dx, dy)) = atlas::mirror_offset(owner.part, variant, owner.outer) {
                let mirrored = (point.0.saturating_add(dx), point.1.saturating_add(dy));
                covered += self
                    .engine
                    .stamp_masked(&mut self.canvas, mirrored, color, radius, layer, mask);
            }
        }
        covered
    }

    fn fill_at(&mut self, seed: (i32, i32), target: Target) -> usize {
        let variant = self.options.variant;
        let scope = match target.owner(seed, variant) {
            Some(loc) if self.options.part_scoped_fill => {
                if loc.outer {
                    match atlas::outer_regions(loc.part, variant) {
                        Some(regions) => FillScope::Rect(regions.bounds()),
                        None => FillScope::Part(loc.part),
                    }
                } else {
                    FillScope::Part(loc.part)
                }
            }
            None if self.options.part_scoped_fill => {
                debug!("fill_at: ({}, {}) is not on any part", seed.0, seed.1);
                return 0;
            }
            _ => FillScope::Sheet,
        };
        let color = Pixel::from_rgba(self.brush.color);
        let isolation = self.isolation.as_ref();
        self.engine.fill_masked(&mut self.canvas, seed, color, self.brush.layer, scope, |x, y| {
            isolation_allows(isolation, variant, x, y)
        })
    }
}
