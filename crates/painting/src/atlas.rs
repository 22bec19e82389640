//! Static body part atlas for the 64x64 skin sheet.
//!
//! Every part is a box whose six faces are unwrapped onto the sheet in the
//! standard cross layout, starting at the part's texture origin `(u, v)` with
//! box size `(w, h, d)`:
//!
//! ```text
//!            u+d      u+d+w    u+d+w+w
//!     v      |  top   | bottom |
//!     v+d  left | front | right | back
//! ```
//!
//! All lookups are total. There is no mutable state.

use glam::Vec3;

use crate::constants::{HAT_INFLATE, JACKET_INFLATE};
use crate::types::{BodyPart, Face, ModelVariant, Rect};

/// The six face rectangles of one part box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegions {
    pub front: Rect,
    pub back: Rect,
    pub right: Rect,
    pub left: Rect,
    pub top: Rect,
    pub bottom: Rect,
}

impl FaceRegions {
    /// Unwrap a `w x h x d` box whose texture origin is `(u, v)`.
    const fn unwrap(u: i32, v: i32, w: i32, h: i32, d: i32) -> Self {
        Self {
            top: Rect::new(u + d, v, w, d),
            bottom: Rect::new(u + d + w, v, w, d),
            left: Rect::new(u, v + d, d, h),
            front: Rect::new(u + d, v + d, w, h),
            right: Rect::new(u + d + w, v + d, d, h),
            back: Rect::new(u + d + w + d, v + d, w, h),
        }
    }

    pub fn get(&self, face: Face) -> Rect {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Right => self.right,
            Face::Left => self.left,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }

    /// Faces in the fixed [`Face::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, Rect)> + '_ {
        Face::ALL.into_iter().map(|face| (face, self.get(face)))
    }

    /// Bounding rect of the whole unwrap.
    pub fn bounds(&self) -> Rect {
        self.iter()
            .map(|(_, rect)| rect)
            .fold(Rect::new(0, 0, 0, 0), |acc, rect| acc.union(&rect))
    }

    /// Face whose rectangle contains the pixel.
    pub fn face_at(&self, x: i32, y: i32) -> Option<Face> {
        self.iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(face, _)| face)
    }
}

/// Where a sheet pixel belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLocation {
    pub part: BodyPart,
    pub face: Face,
    /// True for the second-layer rectangles of a limb (sleeves, trouser legs)
    pub outer: bool,
}

/// Texture origin of a part's unwrap.
fn texture_origin(part: BodyPart) -> (i32, i32) {
    match part {
        BodyPart::Head => (0, 0),
        BodyPart::Torso => (16, 16),
        BodyPart::RightArm => (40, 16),
        BodyPart::LeftArm => (32, 48),
        BodyPart::RightLeg => (0, 16),
        BodyPart::LeftLeg => (16, 48),
        BodyPart::HatOverlay => (32, 0),
        BodyPart::JacketOverlay => (16, 32),
    }
}

/// Texture origin of a part's second-layer unwrap.
fn outer_texture_origin(part: BodyPart) -> Option<(i32, i32)> {
    match part {
        BodyPart::Head => Some((32, 0)),
        BodyPart::Torso => Some((16, 32)),
        BodyPart::RightArm => Some((40, 32)),
        BodyPart::LeftArm => Some((48, 48)),
        BodyPart::RightLeg => Some((0, 32)),
        BodyPart::LeftLeg => Some((0, 48)),
        BodyPart::HatOverlay | BodyPart::JacketOverlay => None,
    }
}

/// Box size in whole texels (w, h, d). This is the size of the texture
/// footprint, which for the overlay shells is the size of the part they wrap.
fn texel_size(part: BodyPart, variant: ModelVariant) -> (i32, i32, i32) {
    match part {
        BodyPart::Head | BodyPart::HatOverlay => (8, 8, 8),
        BodyPart::Torso | BodyPart::JacketOverlay => (8, 12, 4),
        BodyPart::RightArm | BodyPart::LeftArm => (variant.arm_width() as i32, 12, 4),
        BodyPart::RightLeg | BodyPart::LeftLeg => (4, 12, 4),
    }
}

/// Face rectangles for a part.
pub fn regions(part: BodyPart, variant: ModelVariant) -> FaceRegions {
    let (u, v) = texture_origin(part);
    let (w, h, d) = texel_size(part, variant);
    FaceRegions::unwrap(u, v, w, h, d)
}

/// Second skin layer rectangles (hat, jacket, sleeves, trouser legs) for a base
/// part. The overlay parts have no further layer.
pub fn outer_regions(part: BodyPart, variant: ModelVariant) -> Option<FaceRegions> {
    let (u, v) = outer_texture_origin(part)?;
    let (w, h, d) = texel_size(part, variant);
    Some(FaceRegions::unwrap(u, v, w, h, d))
}

/// Full box extents (width, height, depth) in model units.
pub fn extents(part: BodyPart, variant: ModelVariant) -> Vec3 {
    let (w, h, d) = texel_size(part, variant);
    let size = Vec3::new(w as f32, h as f32, d as f32);
    match part {
        BodyPart::HatOverlay => size + Vec3::splat(HAT_INFLATE * 2.0),
        BodyPart::JacketOverlay => size + Vec3::splat(JACKET_INFLATE * 2.0),
        _ => size,
    }
}

/// Box half-extents in model units.
pub fn half_extents(part: BodyPart, variant: ModelVariant) -> Vec3 {
    extents(part, variant) * 0.5
}

/// Left/right counterpart of a limb.
pub fn mirror_of(part: BodyPart) -> Option<BodyPart> {
    match part {
        BodyPart::RightArm => Some(BodyPart::LeftArm),
        BodyPart::LeftArm => Some(BodyPart::RightArm),
        BodyPart::RightLeg => Some(BodyPart::LeftLeg),
        BodyPart::LeftLeg => Some(BodyPart::RightLeg),
        _ => None,
    }
}

/// Sheet translation from a part's rectangles to its mirror part's rectangles.
///
/// With `outer` set, the translation between the second-layer rectangles is
/// returned instead. Mirrored limbs live in disjoint rectangles, so this is a
/// pure translation and never a reflection.
pub fn mirror_offset(part: BodyPart, variant: ModelVariant, outer: bool) -> Option<(i32, i32)> {
    let other = mirror_of(part)?;
    let (from, to) = if outer {
        (outer_regions(part, variant)?, outer_regions(other, variant)?)
    } else {
        (regions(part, variant), regions(other, variant))
    };
    Some((to.front.x - from.front.x, to.front.y - from.front.y))
}

/// Bounding rect of a part's unwrap. Used to keep part-scoped fills from
/// leaking into neighbouring parts.
pub fn part_bounds(part: BodyPart, variant: ModelVariant) -> Rect {
    regions(part, variant).bounds()
}

/// Reverse lookup: which part and face own a sheet pixel.
///
/// Pixels in the unused gutters of the sheet return `None`.
pub fn part_at(x: i32, y: i32, variant: ModelVariant) -> Option<SheetLocation> {
    let primary = BodyPart::ALL.into_iter().find_map(|part| {
        regions(part, variant).face_at(x, y).map(|face| SheetLocation {
            part,
            face,
            outer: false,
        })
    });
    if primary.is_some() {
        return primary;
    }

    // Head and torso second layers are the hat and jacket parts already
    // matched above; only the limb shells remain.
    [
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::RightLeg,
        BodyPart::LeftLeg,
    ]
    .into_iter()
    .find_map(|part| {
        outer_regions(part, variant)
            .and_then(|r| r.face_at(x, y))
            .map(|face| SheetLocation {
                part,
                face,
                outer: true,
            })
    })
}

/// Center of a part box in model space.
///
/// Model space: +Y up with the feet at 0, the character faces +Z and its
/// right side is at -X.
pub fn placement(part: BodyPart, variant: ModelVariant) -> Vec3 {
    let arm_offset = 4.0 + variant.arm_width() as f32 / 2.0;
    match part {
        BodyPart::Head | BodyPart::HatOverlay => Vec3::new(0.0, 28.0, 0.0),
        BodyPart::Torso | BodyPart::JacketOverlay => Vec3::new(0.0, 18.0, 0.0),
        BodyPart::RightArm => Vec3::new(-arm_offset, 18.0, 0.0),
        BodyPart::LeftArm => Vec3::new(arm_offset, 18.0, 0.0),
        BodyPart::RightLeg => Vec3::new(-2.0, 6.0, 0.0),
        BodyPart::LeftLeg => Vec3::new(2.0, 6.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [ModelVariant; 2] = [ModelVariant::Standard, ModelVariant::Slim];

    #[test]
    fn test_front_regions_match_skin_format() {
        let v = ModelVariant::Standard;
        assert_eq!(regions(BodyPart::Head, v).front, Rect::new(8, 8, 8, 8));
        assert_eq!(regions(BodyPart::Torso, v).front, Rect::new(20, 20, 8, 12));
        assert_eq!(regions(BodyPart::RightArm, v).front, Rect::new(44, 20, 4, 12));
        assert_eq!(regions(BodyPart::LeftArm, v).front, Rect::new(36, 52, 4, 12));
        assert_eq!(regions(BodyPart::RightLeg, v).front, Rect::new(4, 20, 4, 12));
        assert_eq!(regions(BodyPart::LeftLeg, v).front, Rect::new(20, 52, 4, 12));
        assert_eq!(regions(BodyPart::HatOverlay, v).front, Rect::new(40, 8, 8, 8));
        assert_eq!(regions(BodyPart::JacketOverlay, v).front, Rect::new(20, 36, 8, 12));
    }

    #[test]
    fn test_head_siblings() {
        let head = regions(BodyPart::Head, ModelVariant::Standard);
        assert_eq!(head.top, Rect::new(8, 0, 8, 8));
        assert_eq!(head.bottom, Rect::new(16, 0, 8, 8));
        assert_eq!(head.left, Rect::new(0, 8, 8, 8));
        assert_eq!(head.right, Rect::new(16, 8, 8, 8));
        assert_eq!(head.back, Rect::new(24, 8, 8, 8));
        assert_eq!(head.bounds(), Rect::new(0, 0, 32, 16));
    }

    #[test]
    fn test_slim_arm_regions() {
        let arm = regions(BodyPart::RightArm, ModelVariant::Slim);
        assert_eq!(arm.front, Rect::new(44, 20, 3, 12));
        assert_eq!(arm.right, Rect::new(47, 20, 4, 12));
        assert_eq!(arm.back, Rect::new(51, 20, 3, 12));
        assert_eq!(arm.top, Rect::new(44, 16, 3, 4));
        assert_eq!(arm.bottom, Rect::new(47, 16, 3, 4));
    }

    #[test]
    fn test_all_regions_inside_sheet() {
        for variant in VARIANTS {
            for part in BodyPart::ALL {
                let sets = [Some(regions(part, variant)), outer_regions(part, variant)];
                for set in sets.into_iter().flatten() {
                    for (_, rect) in set.iter() {
                        assert!(rect.x >= 0 && rect.y >= 0);
                        assert!(rect.right() <= 64 && rect.bottom() <= 64, "{part:?} {rect:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_part_footprints_disjoint() {
        for variant in VARIANTS {
            let mut footprints: Vec<Rect> = BodyPart::ALL
                .into_iter()
                .map(|p| part_bounds(p, variant))
                .collect();
            for part in [BodyPart::RightArm, BodyPart::LeftArm, BodyPart::RightLeg, BodyPart::LeftLeg] {
                footprints.push(outer_regions(part, variant).unwrap().bounds());
            }
            for (i, a) in footprints.iter().enumerate() {
                for b in footprints.iter().skip(i + 1) {
                    assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_left_limbs_are_not_reflections_of_right() {
        let v = ModelVariant::Standard;
        for (right, left) in [
            (BodyPart::RightArm, BodyPart::LeftArm),
            (BodyPart::RightLeg, BodyPart::LeftLeg),
        ] {
            let r = regions(right, v);
            let l = regions(left, v);
            assert!(!r.bounds().intersects(&l.bounds()));
            let ro = outer_regions(right, v).unwrap();
            let lo = outer_regions(left, v).unwrap();
            assert!(!ro.bounds().intersects(&lo.bounds()));
            assert!(!lo.bounds().intersects(&l.bounds()));
        }
    }

    #[test]
    fn test_mirror_of() {
        assert_eq!(mirror_of(BodyPart::RightArm), Some(BodyPart::LeftArm));
        assert_eq!(mirror_of(BodyPart::LeftArm), Some(BodyPart::RightArm));
        assert_eq!(mirror_of(BodyPart::RightLeg), Some(BodyPart::LeftLeg));
        assert_eq!(mirror_of(BodyPart::LeftLeg), Some(BodyPart::RightLeg));
        assert_eq!(mirror_of(BodyPart::Head), None);
        assert_eq!(mirror_of(BodyPart::Torso), None);
        assert_eq!(mirror_of(BodyPart::HatOverlay), None);
    }

    #[test]
    fn test_mirror_offset_round_trip() {
        let v = ModelVariant::Standard;
        assert_eq!(mirror_offset(BodyPart::RightArm, v, false), Some((-8, 32)));
        assert_eq!(mirror_offset(BodyPart::LeftArm, v, false), Some((8, -32)));
        assert_eq!(mirror_offset(BodyPart::RightLeg, v, false), Some((16, 32)));
        assert_eq!(mirror_offset(BodyPart::RightArm, v, true), Some((8, 16)));
        assert_eq!(mirror_offset(BodyPart::Head, v, false), None);
    }

    #[test]
    fn test_extents() {
        assert_eq!(extents(BodyPart::Head, ModelVariant::Standard), Vec3::new(8.0, 8.0, 8.0));
        assert_eq!(extents(BodyPart::LeftArm, ModelVariant::Slim), Vec3::new(3.0, 12.0, 4.0));
        assert_eq!(extents(BodyPart::HatOverlay, ModelVariant::Standard), Vec3::new(9.0, 9.0, 9.0));
        assert_eq!(
            half_extents(BodyPart::JacketOverlay, ModelVariant::Standard),
            Vec3::new(4.25, 6.25, 2.25)
        );
    }

    #[test]
    fn test_part_at() {
        let v = ModelVariant::Standard;
        let loc = part_at(10, 10, v).unwrap();
        assert_eq!((loc.part, loc.face, loc.outer), (BodyPart::Head, Face::Front, false));

        let loc = part_at(44, 36, v).unwrap();
        assert_eq!((loc.part, loc.face, loc.outer), (BodyPart::RightArm, Face::Front, true));

        let loc = part_at(40, 8, v).unwrap();
        assert_eq!(loc.part, BodyPart::HatOverlay);

        // Unused corner of the head unwrap
        assert_eq!(part_at(0, 0, v), None);
    }

    #[test]
    fn test_placement_symmetry() {
        for variant in VARIANTS {
            let r = placement(BodyPart::RightArm, variant);
            let l = placement(BodyPart::LeftArm, variant);
            assert_eq!(r.x, -l.x);
            assert!(r.x < 0.0);
        }
        assert_eq!(placement(BodyPart::RightArm, ModelVariant::Slim).x, -5.5);
    }
}
