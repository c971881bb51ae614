use crate::foundation::error::{FrameError, FrameResult};

pub use kurbo::{Affine, Point, Rect, Size};

/// Build a [`Rect`] from an origin and a size, in destination-surface pixels.
pub fn xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size((x, y), (width.max(0.0), height.max(0.0)))
}

/// Return `true` when `rect` covers no pixels.
pub fn is_degenerate(rect: Rect) -> bool {
    let (w, h) = (rect.width(), rect.height());
    w.is_nan() || h.is_nan() || w <= 0.0 || h <= 0.0
}

/// Composition surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas; both sides must be in `1..=u16::MAX`.
    pub fn new(width: u32, height: u32) -> FrameResult<Self> {
        let max = u32::from(u16::MAX);
        if width == 0 || height == 0 {
            return Err(FrameError::validation("canvas dimensions must be > 0"));
        }
        if width > max || height > max {
            return Err(FrameError::validation(format!(
                "canvas {width}x{height} exceeds {max}x{max}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Larger of the two sides.
    pub fn max_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Full canvas as a [`Rect`] at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color used for chrome fills, strokes and text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same color with alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert into premultiplied RGBA8 bytes.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            crate::foundation::math::mul_div255_u8(u16::from(self.r), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.g), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
