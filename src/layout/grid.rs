//! Photo-count specific slot rules shared by the generic themes.

use crate::{
    assets::raster::RasterImage,
    foundation::core::{Rect, xywh},
    layout::cover::place_cover,
    render::surface::DrawingSurface,
};

/// Largest photo count any template accepts.
pub const MAX_PHOTOS: usize = 4;

/// Fraction of the bounding height given to the top slot of the 3-photo layout.
pub const TRIPLE_TOP_SHARE: f64 = 0.6;

/// Slot rectangles for `count` photos inside `bounds`, in render order.
///
/// - 1: the full bounds.
/// - 2: two equal columns separated by `gap`.
/// - 3: one full-width slot on top (60% of the height minus half the gap) above two equal
///   columns (40% minus half the gap).
/// - 4: a 2x2 grid, row-major.
///
/// Any other count yields no slots.
pub fn grid_slots(count: usize, bounds: Rect, gap: f64) -> Vec<Rect> {
    let (x, y) = (bounds.x0, bounds.y0);
    let (w, h) = (bounds.width(), bounds.height());
    let half_w = (w - gap) / 2.0;
    let half_h = (h - gap) / 2.0;

    match count {
        1 => vec![bounds],
        2 => vec![
            xywh(x, y, half_w, h),
            xywh(x + half_w + gap, y, half_w, h),
        ],
        3 => {
            let top_h = h * TRIPLE_TOP_SHARE - gap / 2.0;
            let bottom_h = h * (1.0 - TRIPLE_TOP_SHARE) - gap / 2.0;
            let bottom_y = y + top_h + gap;
            vec![
                xywh(x, y, w, top_h),
                xywh(x, bottom_y, half_w, bottom_h),
                xywh(x + half_w + gap, bottom_y, half_w, bottom_h),
            ]
        }
        4 => vec![
            xywh(x, y, half_w, half_h),
            xywh(x + half_w + gap, y, half_w, half_h),
            xywh(x, y + half_h + gap, half_w, half_h),
            xywh(x + half_w + gap, y + half_h + gap, half_w, half_h),
        ],
        _ => Vec::new(),
    }
}

/// Lay out `count` photos in `bounds` and cover-fit each one into its slot.
///
/// Slots without a matching image (`images.len() < count`) are left untouched. Returns the
/// slot rectangles that were computed.
pub fn distribute(
    surface: &mut dyn DrawingSurface,
    images: &[RasterImage],
    count: usize,
    bounds: Rect,
    gap: f64,
) -> Vec<Rect> {
    if count != images.len() {
        tracing::debug!(count, images = images.len(), "photo count differs from images");
    }
    let slots = grid_slots(count, bounds, gap);
    for (i, slot) in slots.iter().enumerate() {
        if let Some(image) = images.get(i) {
            place_cover(surface, image, *slot);
        }
    }
    slots
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
