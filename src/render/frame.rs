use crate::foundation::math;

/// A composed frame as RGBA8 pixels, before encoding.
///
/// Pixels are **premultiplied alpha**, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl ComposedFrame {
    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha RGBA8 copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&math::unpremultiply_px([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Straight-alpha RGB8 copy, composited over black (alpha dropped).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(4) {
            // Premultiplied color over black is the premultiplied channel itself.
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}
