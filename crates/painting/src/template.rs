//! Default skin seeded into every new document.
//!
//! Only the Base layer of the six body parts is painted. The hat and jacket
//! shells and the whole Overlay layer start `Clear`, so the model is never
//! fully transparent but the outer layer stays empty.

use tracing::debug;

use crate::atlas;
use crate::canvas::LayeredCanvas;
use crate::types::{BodyPart, Face, Layer, ModelVariant, Pixel, Rect, Rgba};

pub const SKIN_TONE: Rgba = Rgba::opaque(0xC6, 0x8E, 0x6B);
pub const HAIR: Rgba = Rgba::opaque(0x4A, 0x31, 0x1F);
pub const SHIRT: Rgba = Rgba::opaque(0x2E, 0x86, 0xC1);
pub const TROUSERS: Rgba = Rgba::opaque(0x2C, 0x3E, 0x50);
pub const SHOES: Rgba = Rgba::opaque(0x55, 0x55, 0x55);
pub const EYE_WHITE: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);
pub const EYE_IRIS: Rgba = Rgba::opaque(0x3B, 0x5B, 0x9B);

fn fill_rect(canvas: &mut LayeredCanvas, rect: Rect, color: Rgba) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            canvas.set(x, y, Layer::Base, Pixel::Color(color));
        }
    }
}

/// The first `rows` rows of a rect
fn top_rows(rect: Rect, rows: i32) -> Rect {
    Rect::new(rect.x, rect.y, rect.w, rows.min(rect.h))
}

/// The last `rows` rows of a rect
fn bottom_rows(rect: Rect, rows: i32) -> Rect {
    let rows = rows.min(rect.h);
    Rect::new(rect.x, rect.bottom() - rows, rect.w, rows)
}

const SIDES: [Face; 4] = [Face::Front, Face::Back, Face::Right, Face::Left];

/// Build a fresh canvas carrying the default skin.
pub fn default_template(variant: ModelVariant) -> LayeredCanvas {
    let mut canvas = LayeredCanvas::new();

    // Head: skin with hair on top, back and a fringe on the sides
    let head = atlas::regions(BodyPart::Head, variant);
    for (_, rect) in head.iter() {
        fill_rect(&mut canvas, rect, SKIN_TONE);
    }
    fill_rect(&mut canvas, head.top, HAIR);
    fill_rect(&mut canvas, head.back, HAIR);
    for face in [Face::Front, Face::Right, Face::Left] {
        fill_rect(&mut canvas, top_rows(head.get(face), 2), HAIR);
    }
    let eye_row = head.front.y + 4;
    for (dx, color) in [(1, EYE_WHITE), (2, EYE_IRIS), (5, EYE_IRIS), (6, EYE_WHITE)] {
        canvas.set(head.front.x + dx, eye_row, Layer::Base, Pixel::Color(color));
    }

    let torso = atlas::regions(BodyPart::Torso, variant);
    for (_, rect) in torso.iter() {
        fill_rect(&mut canvas, rect, SHIRT);
    }

    // Arms: short sleeves over bare arms
    for part in [BodyPart::RightArm, BodyPart::LeftArm] {
        let arm = atlas::regions(part, variant);
        for (_, rect) in arm.iter() {
            fill_rect(&mut canvas, rect, SKIN_TONE);
        }
        fill_rect(&mut canvas, arm.top, SHIRT);
        for face in SIDES {
            fill_rect(&mut canvas, top_rows(arm.get(face), 4), SHIRT);
        }
    }

    // Legs: trousers with shoes at the bottom
    for part in [BodyPart::RightLeg, BodyPart::LeftLeg] {
        let leg = atlas::regions(part, variant);
        for (_, rect) in leg.iter() {
            fill_rect(&mut canvas, rect, TROUSERS);
        }
        fill_rect(&mut canvas, leg.bottom, SHOES);
        for face in SIDES {
            fill_rect(&mut canvas, bottom_rows(leg.get(face), 2), SHOES);
        }
    }

    debug!("default_template: seeded {:?} skin", variant);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_base_face_is_painted() {
        for variant in [ModelVariant::Standard, ModelVariant::Slim] {
            let canvas = default_template(variant);
            for part in BodyPart::BASE {
                for (face, rect) in atlas::regions(part, variant).iter() {
                    for y in rect.y..rect.bottom() {
                        for x in rect.x..rect.right() {
                            assert!(
                                !canvas.get(x, y, Layer::Base).is_clear(),
                                "{part:?} {face:?} ({x}, {y})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_overlay_parts_and_layer_start_clear() {
        let canvas = default_template(ModelVariant::Standard);
        for part in [BodyPart::HatOverlay, BodyPart::JacketOverlay] {
            let bounds = atlas::part_bounds(part, ModelVariant::Standard);
            for y in bounds.y..bounds.bottom() {
                for x in bounds.x..bounds.right() {
                    assert!(canvas.get(x, y, Layer::Base).is_clear());
                }
            }
        }
        assert!(canvas.layer(Layer::Overlay).pixels().iter().all(Pixel::is_clear));
    }

    #[test]
    fn test_slim_gutter_stays_clear() {
        let canvas = default_template(ModelVariant::Slim);
        // Slim right arm unwrap ends at x = 54
        assert!(canvas.get(54, 25, Layer::Base).is_clear());
        assert!(!canvas.get(53, 25, Layer::Base).is_clear());
    }
}
