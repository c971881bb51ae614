use super::*;
use crate::{
    foundation::core::Rgba8,
    render::recording::{DrawCommand, RecordingSurface},
};

const EPS: f64 = 1e-9;

fn assert_cover_invariants(iw: u32, ih: u32, dest: Rect) {
    let src = cover_source_rect(iw, ih, dest).unwrap();
    let (iw, ih) = (f64::from(iw), f64::from(ih));
    assert!(src.x0 >= -EPS, "{src:?}");
    assert!(src.y0 >= -EPS, "{src:?}");
    assert!(src.x1 <= iw + 1e-6, "{src:?} vs {iw}");
    assert!(src.y1 <= ih + 1e-6, "{src:?} vs {ih}");
    let src_ratio = src.width() / src.height();
    let dest_ratio = dest.width() / dest.height();
    assert!(
        (src_ratio - dest_ratio).abs() <= 1e-9 * dest_ratio.max(1.0),
        "{src_ratio} vs {dest_ratio}"
    );
    // Exactly one axis keeps the full source extent.
    assert!((src.width() - iw).abs() < 1e-6 || (src.height() - ih).abs() < 1e-6);
}

#[test]
fn cover_source_rect_stays_in_bounds_and_matches_ratio() {
    let sizes = [1u32, 3, 17, 300, 400, 1280, 4000];
    let dests = [
        xywh(0.0, 0.0, 1.0, 1.0),
        xywh(20.0, 20.0, 760.0, 960.0),
        xywh(5.0, 7.0, 1000.0, 3.0),
        xywh(0.0, 0.0, 2.5, 999.5),
        xywh(10.0, 10.0, 470.0, 470.0),
    ];
    for &iw in &sizes {
        for &ih in &sizes {
            for &dest in &dests {
                assert_cover_invariants(iw, ih, dest);
            }
        }
    }
}

#[test]
fn wider_source_is_cropped_horizontally_and_centered() {
    // 400x300 (4:3) into a square: keep full height, crop 100px off each side.
    let src = cover_source_rect(400, 300, xywh(0.0, 0.0, 100.0, 100.0)).unwrap();
    assert_eq!(src, xywh(50.0, 0.0, 300.0, 300.0));
}

#[test]
fn taller_source_is_cropped_vertically_and_centered() {
    let src = cover_source_rect(300, 600, xywh(0.0, 0.0, 300.0, 300.0)).unwrap();
    assert_eq!(src, xywh(0.0, 150.0, 300.0, 300.0));
}

#[test]
fn equal_ratio_uses_whole_image() {
    let src = cover_source_rect(800, 1000, xywh(3.0, 4.0, 80.0, 100.0)).unwrap();
    assert!((src.x0).abs() < EPS && (src.y0).abs() < EPS);
    assert!((src.width() - 800.0).abs() < 1e-9);
    assert!((src.height() - 1000.0).abs() < 1e-9);
}

#[test]
fn zero_area_inputs_are_skipped() {
    assert!(cover_source_rect(10, 10, xywh(0.0, 0.0, 10.0, 0.0)).is_none());
    assert!(cover_source_rect(10, 10, xywh(0.0, 0.0, 0.0, 10.0)).is_none());
    assert!(cover_source_rect(0, 10, xywh(0.0, 0.0, 10.0, 10.0)).is_none());

    let img = RasterImage::solid(4, 4, Rgba8::WHITE).unwrap();
    let mut s = RecordingSurface::new(10, 10);
    place_cover(&mut s, &img, xywh(1.0, 1.0, 5.0, 0.0));
    assert_eq!(s.recorded().len(), 0);
}

#[test]
fn place_cover_draws_exactly_the_destination() {
    let img = RasterImage::solid(400, 300, Rgba8::rgb(255, 0, 0)).unwrap();
    let dest = xywh(20.0, 20.0, 760.0, 960.0);
    let mut s = RecordingSurface::new(800, 1000);
    place_cover(&mut s, &img, dest);
    let draws = s.image_draws();
    assert_eq!(draws.len(), 1);
    let (w, h, src, dst) = draws[0];
    assert_eq!((w, h), (400, 300));
    assert_eq!(dst, dest);
    assert!((src.height() - 300.0).abs() < EPS);
    assert!((src.x0 + src.width() / 2.0 - 200.0).abs() < 1e-9);
}

#[test]
fn contain_rect_letterboxes_and_centers() {
    let r = contain_rect(100, 50, xywh(0.0, 0.0, 40.0, 40.0)).unwrap();
    assert_eq!(r, xywh(0.0, 10.0, 40.0, 20.0));

    let img = RasterImage::solid(10, 10, Rgba8::WHITE).unwrap();
    let mut s = RecordingSurface::new(50, 50);
    place_contain(&mut s, &img, xywh(0.0, 0.0, 20.0, 10.0));
    let Some(DrawCommand::Image { src, dst, .. }) = s.commands().next().cloned() else {
        panic!("expected an image draw");
    };
    assert_eq!(src, xywh(0.0, 0.0, 10.0, 10.0));
    assert_eq!(dst, xywh(5.0, 0.0, 10.0, 10.0));
}
