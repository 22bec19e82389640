//! Ray casting against the part boxes of the model.
//!
//! Hosts normally hand the engine a finished [`SurfaceHit`]. These helpers
//! produce one from a model-space ray for hosts without their own hit test,
//! and give tests a realistic source of hits.

use glam::Vec3;

use crate::atlas;
use crate::projection::SurfaceHit;
use crate::types::{BodyPart, ModelVariant};

/// Epsilon for floating point comparisons in ray intersection
const EPSILON: f32 = 1e-6;

/// Result of a ray-box intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    /// Distance along the ray to the entry point
    pub t: f32,
    /// Entry point in the box's local frame
    pub point: Vec3,
    /// Outward axis normal of the entered face
    pub normal: Vec3,
}

/// Slab test of a ray against an origin-centered box.
///
/// Rays starting inside the box, or pointing away from it, miss. The ray
/// direction does not need to be normalized but `t` is only a distance if
/// it is.
pub fn ray_box_intersection(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<BoxHit> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        let h = half_extents[axis];

        if d.abs() < EPSILON {
            // Parallel to this slab: must already be between the planes
            if o < -h || o > h {
                return None;
            }
            continue;
        }

        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        let (t_enter, t_exit, sign) = if t1 < t2 { (t1, t2, -1.0) } else { (t2, t1, 1.0) };

        if t_enter > t_near {
            t_near = t_enter;
            normal = Vec3::ZERO;
            normal[axis] = sign;
        }
        t_far = t_far.min(t_exit);

        if t_near > t_far {
            return None;
        }
    }

    if t_near < EPSILON || !t_near.is_finite() {
        return None;
    }

    Some(BoxHit {
        t: t_near,
        point: ray_origin + ray_dir * t_near,
        normal,
    })
}

/// Cast a model-space ray against every part box and return the nearest hit
/// in that part's local frame.
///
/// With `include_overlays` the hat and jacket shells take part, and since
/// they enclose the head and torso they win over them.
pub fn raycast_model(
    ray_origin: Vec3,
    ray_dir: Vec3,
    variant: ModelVariant,
    include_overlays: bool,
) -> Option<SurfaceHit> {
    let mut closest: Option<(BodyPart, BoxHit)> = None;

    for part in BodyPart::ALL {
        if part.is_overlay() && !include_overlays {
            continue;
        }
        let local_origin = ray_origin - atlas::placement(part, variant);
        let half = atlas::half_extents(part, variant);

        if let Some(hit) = ray_box_intersection(local_origin, ray_dir, half) {
            let dominated = match &closest {
                Some((_, prev)) => hit.t >= prev.t,
                None => false,
            };
            if !dominated {
                closest = Some((part, hit));
            }
        }
    }

    closest.map(|(part, hit)| SurfaceHit::new(part, hit.point, hit.normal))
}
