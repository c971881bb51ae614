use crate::{
    assets::{decode::decode_image, raster::RasterImage},
    foundation::error::{FrameError, FrameResult},
    layout::grid::MAX_PHOTOS,
};

/// Longest side a photo may have; the CPU rasterizer addresses images with `u16` coordinates.
pub const MAX_PHOTO_SIDE: u32 = u16::MAX as u32;

/// Ordered set of 1..=4 decoded photos. Slot `i` renders photo `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoSet {
    photos: Vec<RasterImage>,
}

impl PhotoSet {
    /// Validate and wrap `photos`.
    pub fn new(photos: Vec<RasterImage>) -> FrameResult<Self> {
        if photos.is_empty() || photos.len() > MAX_PHOTOS {
            return Err(FrameError::validation(format!(
                "photo set must hold 1..={MAX_PHOTOS} photos, got {}",
                photos.len()
            )));
        }
        if let Some((i, p)) = photos
            .iter()
            .enumerate()
            .find(|(_, p)| p.width() > MAX_PHOTO_SIDE || p.height() > MAX_PHOTO_SIDE)
        {
            return Err(FrameError::validation(format!(
                "photo {i} is {}x{}, sides must be at most {MAX_PHOTO_SIDE}",
                p.width(),
                p.height()
            )));
        }
        Ok(Self { photos })
    }

    /// Decode encoded photos (PNG, JPEG, ...) in order.
    pub fn decode<B: AsRef<[u8]>>(encoded: &[B]) -> FrameResult<Self> {
        let photos = encoded
            .iter()
            .map(|bytes| decode_image(bytes.as_ref()))
            .collect::<FrameResult<Vec<_>>>()?;
        Self::new(photos)
    }

    /// Number of photos.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photo at slot `index`.
    pub fn get(&self, index: usize) -> Option<&RasterImage> {
        self.photos.get(index)
    }

    /// Photos in slot order.
    pub fn as_slice(&self) -> &[RasterImage] {
        &self.photos
    }

    /// Iterate photos in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, RasterImage> {
        self.photos.iter()
    }
}
