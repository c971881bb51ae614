use std::sync::Arc;

use crate::foundation::{
    core::Rgba8,
    error::{FrameError, FrameResult},
    math,
};

/// Immutable decoded bitmap in premultiplied RGBA8 form.
///
/// Cloning is cheap: pixel storage is shared. The engine never mutates a source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Wrap premultiplied RGBA8 bytes (row-major, tightly packed).
    pub fn from_premul_rgba8(width: u32, height: u32, rgba8_premul: Vec<u8>) -> FrameResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameError::validation("raster image dimensions must be > 0"));
        }
        let expected = width as usize * height as usize * 4;
        if rgba8_premul.len() != expected {
            return Err(FrameError::validation(format!(
                "raster byte length mismatch: expected {expected}, got {}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Build from straight-alpha RGBA8 bytes, premultiplying in the process.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> FrameResult<Self> {
        math::premultiply_rgba8_in_place(&mut rgba8);
        Self::from_premul_rgba8(width, height, rgba8)
    }

    /// Convert a decoded `image` buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> FrameResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_straight_rgba8(width, height, img.into_raw())
    }

    /// Single-color image, mostly useful for fixtures and placeholders.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> FrameResult<Self> {
        let px = color.to_premul();
        let bytes = px
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_premul_rgba8(width, height, bytes)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied pixel bytes.
    pub fn rgba8_premul(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
