use std::{fmt, io::Cursor, str::FromStr};

use image::{
    ExtendedColorType, ImageEncoder,
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
};

use crate::{
    foundation::error::{FrameError, FrameResult},
    render::frame::ComposedFrame,
};

/// Default JPEG quality for exported frames.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoded output format of a composed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Baseline JPEG at the given quality (1..=100). Alpha is flattened.
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
    /// Lossless RGBA PNG.
    Png,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportFormat {
    /// Reject JPEG qualities outside `1..=100`.
    pub fn validate(self) -> FrameResult<()> {
        match self {
            Self::Jpeg { quality } if !(1..=100).contains(&quality) => Err(FrameError::validation(
                format!("jpeg quality must be in 1..=100, got {quality}"),
            )),
            _ => Ok(()),
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "jpg",
            Self::Png => "png",
        }
    }

    /// Same format, with the JPEG quality replaced when this is JPEG.
    pub fn with_quality(self, quality: u8) -> Self {
        match self {
            Self::Jpeg { .. } => Self::Jpeg { quality },
            Self::Png => Self::Png,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg { .. } => f.write_str("jpeg"),
            Self::Png => f.write_str("png"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FrameError;

    /// Parse `jpeg`/`jpg` (default quality) or `png`, case-insensitively.
    fn from_str(s: &str) -> FrameResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(Self::default()),
            "png" => Ok(Self::Png),
            other => Err(FrameError::validation(format!(
                "unknown export format '{other}' (expected jpeg or png)"
            ))),
        }
    }
}

/// Encode `frame` into an in-memory image file.
pub fn encode_frame(frame: &ComposedFrame, format: ExportFormat) -> FrameResult<Vec<u8>> {
    format.validate()?;
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.width == 0 || frame.height == 0 || frame.data.len() != expected {
        return Err(FrameError::encode(format!(
            "frame {}x{} carries {} bytes, expected {expected}",
            frame.width,
            frame.height,
            frame.data.len()
        )));
    }

    let mut buf = Vec::new();
    match format {
        ExportFormat::Jpeg { quality } => {
            let rgb = frame.to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, quality)
                .encode(&rgb, frame.width, frame.height, ExtendedColorType::Rgb8)
                .map_err(|e| FrameError::encode(format!("jpeg: {e}")))?;
        }
        ExportFormat::Png => {
            let rgba = frame.to_straight_rgba8();
            PngEncoder::new(Cursor::new(&mut buf))
                .write_image(&rgba, frame.width, frame.height, ExtendedColorType::Rgba8)
                .map_err(|e| FrameError::encode(format!("png: {e}")))?;
        }
    }
    tracing::trace!(%format, bytes = buf.len(), "frame encoded");
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
