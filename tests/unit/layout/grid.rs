use super::*;
use crate::{foundation::core::Rgba8, render::recording::RecordingSurface};

const EPS: f64 = 1e-9;

fn overlap_area(a: Rect, b: Rect) -> f64 {
    let i = a.intersect(b);
    i.width().max(0.0) * i.height().max(0.0)
}

fn expected_area(count: usize, w: f64, h: f64, gap: f64) -> f64 {
    match count {
        1 => w * h,
        2 => (w - gap) * h,
        // Top row loses one gap row, bottom row loses one gap column.
        3 => w * h - gap * w - gap * (h * 0.4 - gap / 2.0),
        4 => (w - gap) * (h - gap),
        _ => 0.0,
    }
}

#[test]
fn slots_cover_bounds_minus_gaps_without_overlap() {
    let cases = [
        xywh(0.0, 0.0, 1000.0, 1000.0),
        xywh(20.0, 20.0, 760.0, 960.0),
        xywh(13.0, 7.0, 333.0, 101.0),
    ];
    for bounds in cases {
        for gap in [0.0, 10.0, 20.0] {
            for count in 1..=MAX_PHOTOS {
                let slots = grid_slots(count, bounds, gap);
                assert_eq!(slots.len(), count);

                let total: f64 = slots.iter().map(|r| r.area()).sum();
                let want = expected_area(count, bounds.width(), bounds.height(), gap);
                assert!((total - want).abs() < 1e-6, "count={count} gap={gap}");

                for (i, a) in slots.iter().enumerate() {
                    assert!(a.x0 >= bounds.x0 - EPS && a.y0 >= bounds.y0 - EPS);
                    assert!(a.x1 <= bounds.x1 + EPS && a.y1 <= bounds.y1 + EPS);
                    for b in slots.iter().skip(i + 1) {
                        assert!(overlap_area(*a, *b) < EPS, "{a:?} overlaps {b:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn single_slot_is_the_bounds() {
    let b = xywh(20.0, 20.0, 760.0, 960.0);
    assert_eq!(grid_slots(1, b, 10.0), vec![b]);
}

#[test]
fn two_slots_are_side_by_side_columns() {
    let slots = grid_slots(2, xywh(0.0, 0.0, 210.0, 100.0), 10.0);
    assert_eq!(slots[0], xywh(0.0, 0.0, 100.0, 100.0));
    assert_eq!(slots[1], xywh(110.0, 0.0, 100.0, 100.0));
}

#[test]
fn three_slots_split_sixty_forty() {
    let slots = grid_slots(3, xywh(0.0, 0.0, 210.0, 1000.0), 10.0);
    assert_eq!(slots[0], xywh(0.0, 0.0, 210.0, 595.0));
    assert_eq!(slots[1], xywh(0.0, 605.0, 100.0, 395.0));
    assert_eq!(slots[2], xywh(110.0, 605.0, 100.0, 395.0));
}

#[test]
fn four_slots_are_row_major_quadrants() {
    // 1000x1000 canvas, 20px padding, 20px gap.
    let slots = grid_slots(4, xywh(20.0, 20.0, 960.0, 960.0), 20.0);
    let origins: Vec<(f64, f64)> = slots.iter().map(|r| (r.x0, r.y0)).collect();
    assert_eq!(
        origins,
        vec![(20.0, 20.0), (510.0, 20.0), (20.0, 510.0), (510.0, 510.0)]
    );
    for r in &slots {
        assert_eq!((r.width(), r.height()), (470.0, 470.0));
    }
}

#[test]
fn unsupported_counts_yield_no_slots() {
    let b = xywh(0.0, 0.0, 10.0, 10.0);
    assert!(grid_slots(0, b, 1.0).is_empty());
    assert!(grid_slots(5, b, 1.0).is_empty());
}

#[test]
fn distribute_places_each_image_in_its_slot_and_skips_missing() {
    let imgs: Vec<RasterImage> = (0..2)
        .map(|i| RasterImage::solid(100 + i, 80, Rgba8::WHITE).unwrap())
        .collect();
    let mut s = RecordingSurface::new(1000, 1000);
    let slots = distribute(&mut s, &imgs, 4, xywh(0.0, 0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(slots.len(), 4);
    let draws = s.image_draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].0, 100);
    assert_eq!(draws[0].3, slots[0]);
    assert_eq!(draws[1].0, 101);
    assert_eq!(draws[1].3, slots[1]);
}
