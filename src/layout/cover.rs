//! Aspect-preserving placement of a source image into a destination rectangle.

use crate::{
    assets::raster::RasterImage,
    foundation::core::{Rect, is_degenerate, xywh},
    render::surface::DrawingSurface,
};

/// Center-crop source rectangle that fills `dest` without distortion ("object-fit: cover").
///
/// Returns `None` when either the image or `dest` has zero area.
pub fn cover_source_rect(image_width: u32, image_height: u32, dest: Rect) -> Option<Rect> {
    if image_width == 0 || image_height == 0 || is_degenerate(dest) {
        return None;
    }
    let (iw, ih) = (f64::from(image_width), f64::from(image_height));
    let img_ratio = iw / ih;
    let dest_ratio = dest.width() / dest.height();

    let src = if img_ratio > dest_ratio {
        // Source relatively wider: crop horizontally.
        let src_w = ih * dest_ratio;
        xywh((iw - src_w) / 2.0, 0.0, src_w, ih)
    } else {
        let src_h = iw / dest_ratio;
        xywh(0.0, (ih - src_h) / 2.0, iw, src_h)
    };
    Some(src)
}

/// Largest rectangle with the image's aspect ratio that fits inside `dest`, centered.
///
/// Used for icons, which must stay whole.
pub fn contain_rect(image_width: u32, image_height: u32, dest: Rect) -> Option<Rect> {
    if image_width == 0 || image_height == 0 || is_degenerate(dest) {
        return None;
    }
    let (iw, ih) = (f64::from(image_width), f64::from(image_height));
    let scale = (dest.width() / iw).min(dest.height() / ih);
    let (w, h) = (iw * scale, ih * scale);
    Some(xywh(
        dest.x0 + (dest.width() - w) / 2.0,
        dest.y0 + (dest.height() - h) / 2.0,
        w,
        h,
    ))
}

/// Draw `image` so that it completely covers `dest`, center-cropping the excess axis.
///
/// A zero-area `dest` draws nothing.
pub fn place_cover(surface: &mut dyn DrawingSurface, image: &RasterImage, dest: Rect) {
    let Some(src) = cover_source_rect(image.width(), image.height(), dest) else {
        tracing::debug!(?dest, "cover placement skipped for degenerate rect");
        return;
    };
    surface.draw_image(image, src, dest);
}

/// Draw the whole of `image` inside `dest`, letterboxed and centered.
pub fn place_contain(surface: &mut dyn DrawingSurface, image: &RasterImage, dest: Rect) {
    let Some(dst) = contain_rect(image.width(), image.height(), dest) else {
        return;
    };
    let src = xywh(
        0.0,
        0.0,
        f64::from(image.width()),
        f64::from(image.height()),
    );
    surface.draw_image(image, src, dst);
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cover.rs"]
mod tests;
