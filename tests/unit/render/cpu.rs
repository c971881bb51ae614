use super::*;
use crate::foundation::core::xywh;

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn new_rejects_zero_sized_surface() {
    assert!(CpuSurface::new(0, 10).is_err());
    assert!(CpuSurface::new(10, 0).is_err());
}

#[test]
fn fill_rect_paints_exact_pixels() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.fill_rect(xywh(4.0, 4.0, 8.0, 8.0), Rgba8::rgb(255, 0, 0));
    let frame = s.finish();
    assert_eq!(frame.pixel(8, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn clear_ignores_transform() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.scale(0.25);
    s.clear(Rgba8::WHITE);
    let frame = s.finish();
    assert_eq!(frame.pixel(7, 7), Some([255, 255, 255, 255]));
}

#[test]
fn scale_and_restore_affect_only_enclosed_draws() {
    let mut s = CpuSurface::new(20, 20).unwrap();
    s.save();
    s.scale(0.5);
    s.fill_rect(xywh(0.0, 0.0, 20.0, 20.0), Rgba8::rgb(0, 255, 0));
    s.restore();
    s.fill_rect(xywh(15.0, 15.0, 5.0, 5.0), Rgba8::rgb(0, 0, 255));
    let frame = s.finish();
    assert_eq!(frame.pixel(5, 5), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(12, 12), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(17, 17), Some([0, 0, 255, 255]));
}

#[test]
fn draw_image_fills_destination_from_source_subrect() {
    // Left half red, right half blue.
    let mut bytes = Vec::new();
    for _y in 0..10 {
        for x in 0..20 {
            if x < 10 {
                bytes.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                bytes.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
    }
    let img = RasterImage::from_premul_rgba8(20, 10, bytes).unwrap();

    let mut s = CpuSurface::new(40, 40).unwrap();
    // Only the blue half, stretched to the whole surface.
    s.draw_image(&img, xywh(10.0, 0.0, 10.0, 10.0), xywh(0.0, 0.0, 40.0, 40.0));
    let frame = s.finish();
    for (x, y) in [(2, 2), (20, 20), (37, 37)] {
        let px = frame.pixel(x, y).unwrap();
        assert!(close(px, [0, 0, 255, 255], 4), "({x},{y}) = {px:?}");
    }
}

#[test]
fn degenerate_geometry_is_a_noop() {
    let img = RasterImage::solid(4, 4, Rgba8::WHITE).unwrap();
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.fill_rect(xywh(0.0, 0.0, 0.0, 8.0), Rgba8::WHITE);
    s.draw_image(&img, xywh(0.0, 0.0, 4.0, 4.0), xywh(2.0, 2.0, 4.0, 0.0));
    s.stroke_rect(xywh(0.0, 0.0, 8.0, 8.0), Rgba8::WHITE, 0.0);
    let frame = s.finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn clip_restricts_drawing() {
    let mut s = CpuSurface::new(20, 20).unwrap();
    s.push_clip(xywh(0.0, 0.0, 10.0, 20.0), 0.0);
    s.fill_rect(xywh(0.0, 0.0, 20.0, 20.0), Rgba8::WHITE);
    s.pop_clip();
    s.pop_clip();
    let frame = s.finish();
    assert_eq!(frame.pixel(5, 10), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(15, 10), Some([0, 0, 0, 0]));
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = CpuSurface::new(32, 32).unwrap().with_font(None);
    s.draw_text("hello", Point::new(0.0, 0.0), &TextStyle::new(16.0, Rgba8::WHITE));
    let frame = s.finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

fn fixture_font() -> FontAsset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("fonts")
        .join("DejaVuSans.ttf");
    FontAsset::from_bytes(std::fs::read(path).unwrap()).unwrap()
}

/// `(x0, y0, x1, y1)` of every pixel with non-zero alpha, max exclusive.
fn ink_bounds(frame: &ComposedFrame) -> Option<(u32, u32, u32, u32)> {
    let mut out: Option<(u32, u32, u32, u32)> = None;
    for y in 0..frame.height {
        for x in 0..frame.width {
            if frame.pixel(x, y).is_some_and(|p| p[3] > 0) {
                out = Some(match out {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                });
            }
        }
    }
    out
}

fn draw_aligned(align: TextAlign, scale: f64) -> ComposedFrame {
    let font = fixture_font();
    let mut s = CpuSurface::new(400, 120).unwrap().with_font(Some(&font));
    s.scale(scale);
    let style = TextStyle::new(32.0, Rgba8::BLACK).aligned(align, 300.0);
    s.draw_text("HHHH", Point::new(50.0, 30.0), &style);
    s.finish()
}

#[test]
fn text_with_font_paints_inside_its_line_box() {
    let frame = draw_aligned(TextAlign::Start, 1.0);
    let (x0, y0, x1, y1) = ink_bounds(&frame).expect("text drew no pixels");
    assert!((50..58).contains(&x0), "start ink begins at {x0}");
    assert!(x1 <= 350, "start ink ends at {x1}");
    assert!(y0 >= 30 && y1 <= 30 + 48, "ink rows {y0}..{y1}");
    assert!(x1 - x0 > 60, "ink too narrow: {x0}..{x1}");
    assert!(frame.data.chunks_exact(4).any(|p| p[3] == 255));
}

#[test]
fn centered_and_end_aligned_text_track_the_box() {
    let (cx0, _, cx1, _) = ink_bounds(&draw_aligned(TextAlign::Center, 1.0)).unwrap();
    let center = f64::from(cx0 + cx1) / 2.0;
    assert!((center - 200.0).abs() <= 3.0, "centered ink at {cx0}..{cx1}");

    let (ex0, _, ex1, _) = ink_bounds(&draw_aligned(TextAlign::End, 1.0)).unwrap();
    assert!((342..=350).contains(&ex1), "end ink ends at {ex1}");
    assert!(ex0 > cx0);
}

#[test]
fn scaled_text_shrinks_with_the_transform() {
    let (x0, y0, x1, y1) = ink_bounds(&draw_aligned(TextAlign::Center, 0.5)).unwrap();
    let center = f64::from(x0 + x1) / 2.0;
    assert!((center - 100.0).abs() <= 2.0, "scaled ink at {x0}..{x1}");
    assert!(y0 >= 15 && y1 <= 15 + 24, "scaled ink rows {y0}..{y1}");
}
