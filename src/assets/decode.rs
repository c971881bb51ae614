use anyhow::Context;

use crate::{
    assets::raster::RasterImage,
    foundation::error::{FrameError, FrameResult},
};

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`RasterImage`].
pub fn decode_image(bytes: &[u8]) -> FrameResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| FrameError::decode(format!("{e:#}")))?;
    RasterImage::from_rgba_image(dyn_img.to_rgba8())
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> FrameResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_data(bytes, &opts).map_err(|e| FrameError::decode(format!("parse svg: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
