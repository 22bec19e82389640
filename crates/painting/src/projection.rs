//! Surface projection from a 3D box hit to a sheet pixel.
//!
//! A hit arrives in the part's local frame: the box is centered on the
//! origin, +Y is up, +Z is the front and +X is the viewer's right when facing
//! the front (the character's left). Projection runs in four steps:
//!
//! 1. Resolve the face from the normal with a fixed priority order.
//! 2. Map the two in-plane coordinates to a face-local UV in [0, 1].
//! 3. Clamp the UV to absorb hit-test noise.
//! 4. Scale the UV into the face's sheet rectangle.
//!
//! Every input maps to a valid pixel of the requested part. There is no
//! failure path.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::atlas;
use crate::constants::FACE_CONFIDENCE;
use crate::types::{BodyPart, Face, ModelVariant, Rect};

/// A point and outward normal on a part box, in the part's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceHit {
    pub part: BodyPart,
    pub point: Vec3,
    pub normal: Vec3,
}

impl SurfaceHit {
    pub fn new(part: BodyPart, point: Vec3, normal: Vec3) -> Self {
        Self { part, point, normal }
    }
}

/// Result of projecting a hit onto the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedPixel {
    pub x: i32,
    pub y: i32,
    pub face: Face,
}

/// Pick the face for a normal.
///
/// Each axis is tested against +/-1 with [`FACE_CONFIDENCE`] in the order
/// +Z, -Z, +X, -X, +Y, -Y and the first match wins. This is a deterministic
/// tie-break for normals near box edges, not a geometric nearest-face
/// test. Normals that pass no test (hits on rounded edges, garbage input)
/// fall back to the dominant axis with the same priority on ties.
pub fn resolve_face(normal: Vec3) -> Face {
    let n = normal.normalize_or_zero();

    if n.z >= FACE_CONFIDENCE {
        return Face::Front;
    }
    if n.z <= -FACE_CONFIDENCE {
        return Face::Back;
    }
    if n.x >= FACE_CONFIDENCE {
        return Face::Right;
    }
    if n.x <= -FACE_CONFIDENCE {
        return Face::Left;
    }
    if n.y >= FACE_CONFIDENCE {
        return Face::Top;
    }
    if n.y <= -FACE_CONFIDENCE {
        return Face::Bottom;
    }

    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    if az >= ax && az >= ay {
        if n.z < 0.0 { Face::Back } else { Face::Front }
    } else if ax >= ay {
        if n.x < 0.0 { Face::Left } else { Face::Right }
    } else if n.y < 0.0 {
        Face::Bottom
    } else {
        Face::Top
    }
}

/// NaN-safe clamp to [0, 1]
#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Map a point on `face` to face-local UV.
///
/// U runs left to right as seen from outside the face and V runs top-down.
/// Relative to the raw axis this flips U on the back and +X faces. Top
/// and bottom are laid out with the front edge toward the torso seam.
pub fn face_uv(face: Face, point: Vec3, size: Vec3) -> Vec2 {
    let half = size * 0.5;
    // Normalized 0..1 along each axis, measured from the negative side.
    let nx = (point.x + half.x) / size.x;
    let ny = (point.y + half.y) / size.y;
    let nz = (point.z + half.z) / size.z;

    let (u, v) = match face {
        Face::Front => (nx, 1.0 - ny),
        Face::Back => (1.0 - nx, 1.0 - ny),
        Face::Right => (1.0 - nz, 1.0 - ny),
        Face::Left => (nz, 1.0 - ny),
        Face::Top => (nx, nz),
        Face::Bottom => (nx, 1.0 - nz),
    };
    Vec2::new(unit(u), unit(v))
}

/// Scale a UV into a rect, clamped to the rect's last row and column.
pub fn uv_to_pixel(uv: Vec2, rect: Rect) -> (i32, i32) {
    let px = ((unit(uv.x) * rect.w as f32).floor() as i32).clamp(0, rect.w - 1);
    let py = ((unit(uv.y) * rect.h as f32).floor() as i32).clamp(0, rect.h - 1);
    (rect.x + px, rect.y + py)
}

/// Projects surface hits for one model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceProjector {
    variant: ModelVariant,
}

impl SurfaceProjector {
    pub fn new(variant: ModelVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    /// Map a hit to its sheet pixel.
    pub fn project(&self, hit: &SurfaceHit) -> ProjectedPixel {
        let face = resolve_face(hit.normal);
        let size = atlas::extents(hit.part, self.variant);
        let uv = face_uv(face, hit.point, size);
        let rect = atlas::regions(hit.part, self.variant).get(face);
        let (x, y) = uv_to_pixel(uv, rect);
        ProjectedPixel { x, y, face }
    }

    /// Inverse of [`project`](Self::project) for a texel center.
    ///
    /// Returns `None` if `(x, y)` is not inside `face`'s rectangle.
    pub fn texel_center_hit(&self, part: BodyPart, face: Face, x: i32, y: i32) -> Option<SurfaceHit> {
        let rect = atlas::regions(part, self.variant).get(face);
        if !rect.contains(x, y) {
            return None;
        }
        let size = atlas::extents(part, self.variant);
        let half = size * 0.5;
        let u = ((x - rect.x) as f32 + 0.5) / rect.w as f32;
        let v = ((y - rect.y) as f32 + 0.5) / rect.h as f32;

        // Height is shared by the four side faces
        let side_y = (1.0 - v) * size.y - half.y;
        let (point, normal) = match face {
            Face::Front => (Vec3::new(u * size.x - half.x, side_y, half.z), Vec3::Z),
            Face::Back => (Vec3::new((1.0 - u) * size.x - half.x, side_y, -half.z), Vec3::NEG_Z),
            Face::Right => (Vec3::new(half.x, side_y, (1.0 - u) * size.z - half.z), Vec3::X),
            Face::Left => (Vec3::new(-half.x, side_y, u * size.z - half.z), Vec3::NEG_X),
            Face::Top => (Vec3::new(u * size.x - half.x, half.y, v * size.z - half.z), Vec3::Y),
            Face::Bottom => (
                Vec3::new(u * size.x - half.x, -half.y, (1.0 - v) * size.z - half.z),
                Vec3::NEG_Y,
            ),
        };
        Some(SurfaceHit::new(part, point, normal))
    }
}
