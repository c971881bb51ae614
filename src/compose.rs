//! Composition driver: validates inputs, renders a template onto a fresh surface and exports it.

use std::sync::Arc;

use tracing::debug;

use crate::{
    assets::library::AssetLibrary,
    encode::raster::{DEFAULT_JPEG_QUALITY, ExportFormat, encode_frame},
    foundation::{
        core::Rgba8,
        error::{FrameError, FrameResult},
    },
    photo::PhotoSet,
    registry::{Template, TemplateRegistry},
    render::{cpu::CpuSurface, frame::ComposedFrame, surface::DrawingSurface},
};

/// Default longest side of a preview, in pixels.
pub const DEFAULT_PREVIEW_MAX_DIMENSION: u32 = 250;

/// Export settings shared by every composition of a [`Composer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeOpts {
    /// JPEG quality used when `format` is JPEG.
    pub jpeg_quality: u8,
    /// Longest side of previews produced by [`Composer::compose_preview`].
    pub preview_max_dimension: u32,
    /// Output encoding.
    pub format: ExportFormat,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            preview_max_dimension: DEFAULT_PREVIEW_MAX_DIMENSION,
            format: ExportFormat::default(),
        }
    }
}

impl ComposeOpts {
    /// Defaults overridden by `PHOTOFRAME_JPEG_QUALITY`, `PHOTOFRAME_PREVIEW_MAX_DIM` and
    /// `PHOTOFRAME_FORMAT`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let jpeg_quality = std::env::var("PHOTOFRAME_JPEG_QUALITY")
            .ok()
            .and_then(|v| v.parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
            .unwrap_or(defaults.jpeg_quality);
        let preview_max_dimension = std::env::var("PHOTOFRAME_PREVIEW_MAX_DIM")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.preview_max_dimension);
        let format = std::env::var("PHOTOFRAME_FORMAT")
            .ok()
            .and_then(|v| v.parse::<ExportFormat>().ok())
            .unwrap_or(defaults.format);
        Self {
            jpeg_quality,
            preview_max_dimension,
            format,
        }
    }

    /// Reject out-of-range quality and a zero preview size.
    pub fn validate(&self) -> FrameResult<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(FrameError::validation(format!(
                "jpeg quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if self.preview_max_dimension == 0 {
            return Err(FrameError::validation("preview max dimension must be > 0"));
        }
        Ok(())
    }

    /// Effective output format, with the configured JPEG quality applied.
    pub fn export_format(&self) -> ExportFormat {
        self.format.with_quality(self.jpeg_quality)
    }
}

/// One entry of a preview gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    /// Identifier of the previewed template.
    pub template_id: String,
    /// Encoded preview image.
    pub bytes: Vec<u8>,
}

/// Renders templates into encoded images.
///
/// Holds the read-only registry and asset library; every call allocates its own surface, so a
/// `Composer` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Composer {
    registry: Arc<TemplateRegistry>,
    assets: Arc<AssetLibrary>,
    opts: ComposeOpts,
}

impl Composer {
    /// Build a composer after validating `opts`.
    pub fn new(
        registry: Arc<TemplateRegistry>,
        assets: Arc<AssetLibrary>,
        opts: ComposeOpts,
    ) -> FrameResult<Self> {
        opts.validate()?;
        Ok(Self {
            registry,
            assets,
            opts,
        })
    }

    /// Shared template registry.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Shared asset library.
    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    /// Export settings.
    pub fn opts(&self) -> &ComposeOpts {
        &self.opts
    }

    /// Render `template` at its native size without encoding.
    pub fn render_frame(
        &self,
        photos: &PhotoSet,
        template: &Template,
    ) -> FrameResult<ComposedFrame> {
        let template = self.dispatch(photos, template)?;
        let mut surface = self.surface(template.width(), template.height())?;
        self.registry
            .render(template, &mut surface, photos, &self.assets);
        Ok(surface.finish())
    }

    /// Render `template` scaled so its longest side is `max_dimension`, without encoding.
    ///
    /// The same render routine runs under a uniform scale transform, so the preview is a
    /// miniature of [`Composer::render_frame`].
    pub fn render_preview_frame(
        &self,
        photos: &PhotoSet,
        template: &Template,
        max_dimension: u32,
    ) -> FrameResult<ComposedFrame> {
        if max_dimension == 0 {
            return Err(FrameError::validation("preview max dimension must be > 0"));
        }
        let template = self.dispatch(photos, template)?;
        let canvas = template.canvas();
        let scale = f64::from(max_dimension) / f64::from(canvas.max_side());
        let preview_w = scaled_side(canvas.width, scale);
        let preview_h = scaled_side(canvas.height, scale);
        debug!(scale, preview_w, preview_h, "preview surface");

        let mut surface = self.surface(preview_w, preview_h)?;
        surface.scale(scale);
        self.registry
            .render(template, &mut surface, photos, &self.assets);
        Ok(surface.finish())
    }

    /// Render and encode `template` at its native size.
    #[tracing::instrument(skip(self, photos, template), fields(template = template.id()))]
    pub fn compose(&self, photos: &PhotoSet, template: &Template) -> FrameResult<Vec<u8>> {
        let frame = self.render_frame(photos, template)?;
        encode_frame(&frame, self.opts.export_format())
    }

    /// Render and encode a preview whose longest side is `max_dimension`.
    #[tracing::instrument(skip(self, photos, template), fields(template = template.id()))]
    pub fn compose_preview(
        &self,
        photos: &PhotoSet,
        template: &Template,
        max_dimension: u32,
    ) -> FrameResult<Vec<u8>> {
        let frame = self.render_preview_frame(photos, template, max_dimension)?;
        encode_frame(&frame, self.opts.export_format())
    }

    /// Resolve `(theme_id, photos.len())` and compose it.
    pub fn compose_by_id(&self, theme_id: &str, photos: &PhotoSet) -> FrameResult<Vec<u8>> {
        let template = self
            .registry
            .resolve(theme_id, photos.len())
            .ok_or_else(|| FrameError::template_not_found(theme_id, photos.len()))?;
        self.compose(photos, template)
    }

    /// One preview per template matching the set's photo count, in registry order, at the
    /// configured preview size.
    pub fn preview_gallery(&self, photos: &PhotoSet) -> FrameResult<Vec<Preview>> {
        self.registry
            .templates_for_count(photos.len())
            .map(|template| {
                let bytes =
                    self.compose_preview(photos, template, self.opts.preview_max_dimension)?;
                Ok(Preview {
                    template_id: template.id().to_owned(),
                    bytes,
                })
            })
            .collect()
    }

    // Count check happens before any surface exists so a mismatch has no drawing side effects.
    fn dispatch<'a>(&'a self, photos: &PhotoSet, template: &Template) -> FrameResult<&'a Template> {
        if photos.len() != template.photo_count() {
            return Err(FrameError::InvalidPhotoCount {
                expected: template.photo_count(),
                actual: photos.len(),
            });
        }
        let resolved = self
            .registry
            .get(template.theme(), template.photo_count())
            .ok_or_else(|| {
                FrameError::template_not_found(template.theme().as_str(), template.photo_count())
            })?;
        debug!(template = resolved.id(), photos = photos.len(), "dispatch");
        Ok(resolved)
    }

    fn surface(&self, width: u32, height: u32) -> FrameResult<CpuSurface> {
        let mut surface = CpuSurface::new(width, height)?.with_font(self.assets.font());
        surface.clear(Rgba8::WHITE);
        Ok(surface)
    }
}

fn scaled_side(side: u32, scale: f64) -> u32 {
    ((f64::from(side) * scale).round() as u32).max(1)
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
