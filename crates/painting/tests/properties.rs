//! End-to-end properties of the painting engine

use glam::Vec3;
use painting::atlas;
use painting::{
    BodyPart, BrushEngine, Face, FillScope, LayeredCanvas, Layer, ModelVariant, PaintingSession, Pixel,
    Rect, Rgba, SessionOptions, SurfaceProjector, default_template, render,
};

const VARIANTS: [ModelVariant; 2] = [ModelVariant::Standard, ModelVariant::Slim];

fn color(i: u32) -> Pixel {
    Pixel::Color(Rgba::opaque((i * 37 % 256) as u8, (i * 11 % 256) as u8, 200))
}

#[test]
fn set_then_get_everywhere() {
    let mut canvas = LayeredCanvas::new();
    for layer in Layer::ALL {
        for y in 0..64 {
            for x in 0..64 {
                let c = color((x * 64 + y) as u32);
                canvas.set(x, y, layer, c);
                assert_eq!(canvas.get(x, y, layer), c);
            }
        }
    }
}

#[test]
fn out_of_bounds_is_inert() {
    let mut canvas = default_template(ModelVariant::Standard);
    let before = canvas.clone();
    for (x, y) in [(-1, 0), (0, -1), (64, 0), (0, 64), (i32::MIN, i32::MAX), (1000, 3)] {
        canvas.set(x, y, Layer::Base, color(1));
        assert_eq!(canvas.get(x, y, Layer::Base), Pixel::Clear);
        assert_eq!(canvas.get(x, y, Layer::Overlay), Pixel::Clear);
    }
    assert_eq!(canvas.layer(Layer::Base), before.layer(Layer::Base));
}

#[test]
fn flood_fill_is_idempotent() {
    let mut canvas = default_template(ModelVariant::Standard);
    canvas.flood_fill(20, 25, Layer::Base, color(3));
    let once = canvas.clone();
    assert_eq!(canvas.flood_fill(20, 25, Layer::Base, color(3)), 0);
    assert_eq!(canvas, once);
}

#[test]
fn bounded_fill_never_leaves_its_rect() {
    let bounds = Rect::new(13, 7, 21, 30);
    for (seed_x, seed_y) in [(13, 7), (20, 20), (33, 36), (0, 0), (40, 40)] {
        let mut canvas = default_template(ModelVariant::Slim);
        let before = canvas.clone();
        canvas.flood_fill_region(seed_x, seed_y, Layer::Base, color(9), bounds);
        for y in 0..64 {
            for x in 0..64 {
                if !bounds.contains(x, y) {
                    assert_eq!(canvas.get(x, y, Layer::Base), before.get(x, y, Layer::Base));
                }
            }
        }
    }
}

#[test]
fn face_centers_project_to_region_centers() {
    for variant in VARIANTS {
        let projector = SurfaceProjector::new(variant);
        for part in BodyPart::ALL {
            let half = atlas::half_extents(part, variant);
            let regions = atlas::regions(part, variant);
            for face in Face::ALL {
                let normal = match face {
                    Face::Front => Vec3::Z,
                    Face::Back => Vec3::NEG_Z,
                    Face::Right => Vec3::X,
                    Face::Left => Vec3::NEG_X,
                    Face::Top => Vec3::Y,
                    Face::Bottom => Vec3::NEG_Y,
                };
                let hit = painting::SurfaceHit::new(part, normal * half, normal);
                let px = projector.project(&hit);
                let rect = regions.get(face);
                let (cx, cy) = (rect.x as f32 + rect.w as f32 / 2.0, rect.y as f32 + rect.h as f32 / 2.0);
                assert_eq!(px.face, face);
                assert!(
                    (px.x as f32 - cx).abs() <= 1.0 && (px.y as f32 - cy).abs() <= 1.0,
                    "{part:?} {face:?} {variant:?}: ({}, {}) vs ({cx}, {cy})",
                    px.x,
                    px.y
                );
            }
        }
    }
}

#[test]
fn projection_is_total_under_noise() {
    let projector = SurfaceProjector::new(ModelVariant::Slim);
    let noisy = [
        (Vec3::new(100.0, -100.0, 3.0), Vec3::new(0.6, 0.6, 0.5)),
        (Vec3::splat(f32::NAN), Vec3::new(f32::NAN, 1.0, 0.0)),
        (Vec3::ZERO, Vec3::ZERO),
        (Vec3::new(1.5, 6.2, -2.1), Vec3::new(0.0, 0.0, -0.95)),
    ];
    for part in BodyPart::ALL {
        for (point, normal) in noisy {
            let px = projector.project(&painting::SurfaceHit::new(part, point, normal));
            let rect = atlas::regions(part, ModelVariant::Slim).get(px.face);
            assert!(rect.contains(px.x, px.y));
        }
    }
}

#[test]
fn mirror_round_trip_for_every_limb_pixel() {
    for variant in VARIANTS {
        let engine = BrushEngine::new(variant, Default::default());
        for part in [BodyPart::RightArm, BodyPart::RightLeg] {
            let front = atlas::regions(part, variant).front;
            let mirror_front = atlas::regions(atlas::mirror_of(part).unwrap(), variant).front;
            for y in front.y..front.bottom() {
                for x in front.x..front.right() {
                    let mut canvas = LayeredCanvas::new();
                    let red = Pixel::Color(Rgba::opaque(255, 0, 0));
                    let there = engine
                        .mirror_stroke(&mut canvas, (x, y), red, 0, Layer::Base, part)
                        .unwrap();
                    assert!(mirror_front.contains(there.0, there.1));
                    assert_eq!(canvas.get(there.0, there.1, Layer::Base), red);

                    let back = engine
                        .mirror_stroke(&mut canvas, there, red, 0, Layer::Base, atlas::mirror_of(part).unwrap())
                        .unwrap();
                    assert_eq!(back, (x, y));
                }
            }
        }
    }
}

#[test]
fn undo_redo_reproduce_states_exactly() {
    let options = SessionOptions::default();
    let mut session = PaintingSession::new(options);
    let template = default_template(options.variant);

    let n = 12;
    for i in 0..n {
        session.set_color(Rgba::opaque(i as u8 * 20, 0, 255 - i as u8 * 20));
        session.set_radius(i % 3);
        session.set_layer(if i % 2 == 0 { Layer::Base } else { Layer::Overlay });
        session.begin_gesture();
        session.apply_at_pixel(5 + i as i32 * 4, 10 + i as i32 * 3);
        session.apply_at_pixel(8 + i as i32 * 4, 14 + i as i32 * 3);
        assert!(session.end_gesture());
    }
    let painted = session.canvas().clone();

    for _ in 0..n {
        assert!(session.undo());
    }
    assert!(!session.undo());
    assert_eq!(session.canvas().layer(Layer::Base), template.layer(Layer::Base));
    assert_eq!(session.canvas().layer(Layer::Overlay), template.layer(Layer::Overlay));

    for _ in 0..n {
        assert!(session.redo());
    }
    assert!(!session.redo());
    assert_eq!(session.canvas().layer(Layer::Base), painted.layer(Layer::Base));
    assert_eq!(session.canvas().layer(Layer::Overlay), painted.layer(Layer::Overlay));
}

#[test]
fn compositor_rules() {
    let base_only = default_template(ModelVariant::Standard);
    let base: Vec<_> = base_only.layer(Layer::Base).pixels().iter().map(|p| p.to_rgba()).collect();
    assert_eq!(render(&base_only).pixels(), base.as_slice());

    let mut canvas = base_only.clone();
    let engine = BrushEngine::default();
    engine.fill(&mut canvas, (40, 10), color(5), Layer::Overlay, FillScope::Part(BodyPart::HatOverlay));
    let raster = render(&canvas);
    for y in 0..64 {
        for x in 0..64 {
            match canvas.get(x, y, Layer::Overlay) {
                Pixel::Color(c) => assert_eq!(raster.get(x, y), c),
                Pixel::Clear => assert_eq!(raster.get(x, y), canvas.get(x, y, Layer::Base).to_rgba()),
            }
        }
    }
}

#[test]
fn radius_two_scenario_paints_thirteen_pixels() {
    let engine = BrushEngine::default();
    let mut canvas = LayeredCanvas::new();
    let red = Pixel::Color(Rgba::opaque(255, 0, 0));
    engine.paint(&mut canvas, (12, 12), red, 2, Layer::Base);

    let mut count = 0;
    for y in 0..64 {
        for x in 0..64 {
            let (dx, dy) = (x - 12, y - 12);
            let inside = dx * dx + dy * dy <= 4;
            assert_eq!(canvas.get(x, y, Layer::Base) == red, inside);
            count += inside as usize;
        }
    }
    assert_eq!(count, 13);
}
