use crate::{
    assets::raster::RasterImage,
    foundation::error::{FrameError, FrameResult},
};

const MAX_DIM: u32 = 4096;

/// Rasterize an SVG tree so that its longer side is `max_side` pixels.
///
/// The aspect ratio of the SVG's intrinsic size is preserved.
pub fn rasterize_svg(tree: &usvg::Tree, max_side: u32) -> FrameResult<RasterImage> {
    let size = tree.size();
    let (sw, sh) = (size.width(), size.height());
    if !sw.is_finite() || !sh.is_finite() || sw <= 0.0 || sh <= 0.0 {
        return Err(FrameError::decode("svg has invalid width/height"));
    }
    if max_side == 0 || max_side > MAX_DIM {
        return Err(FrameError::validation(format!(
            "svg raster side must be in 1..={MAX_DIM}"
        )));
    }

    let scale = max_side as f32 / sw.max(sh);
    let width = ((sw * scale).round() as u32).max(1);
    let height = ((sh * scale).round() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FrameError::decode("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are already premultiplied RGBA8.
    RasterImage::from_premul_rgba8(width, height, pixmap.data().to_vec())
}
