use crate::{
    assets::raster::RasterImage,
    foundation::core::{Point, Rect, Rgba8},
};

/// Horizontal placement of a text line relative to its origin box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left edge at the origin.
    #[default]
    Start,
    /// Centered inside `max_width` (or on the origin when no width is set).
    Center,
    /// Right edge at `origin.x + max_width` (or at the origin).
    End,
}

/// Text drawing style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Alignment inside the box starting at the draw origin.
    pub align: TextAlign,
    /// Optional wrap / alignment width.
    pub max_width: Option<f64>,
}

impl TextStyle {
    /// Left-aligned, unbounded text.
    pub fn new(size_px: f32, color: Rgba8) -> Self {
        Self {
            size_px,
            color,
            align: TextAlign::Start,
            max_width: None,
        }
    }

    /// Same style with an alignment box.
    pub fn aligned(mut self, align: TextAlign, max_width: f64) -> Self {
        self.align = align;
        self.max_width = Some(max_width);
        self
    }
}

/// Write-only 2D raster sink that theme renderers draw into.
///
/// Coordinates are in template pixels; the active transform (see [`DrawingSurface::save`],
/// [`DrawingSurface::scale`], [`DrawingSurface::translate`]) maps them onto the surface. Drawing
/// operations never fail: degenerate geometry and unavailable text fonts are silent no-ops.
pub trait DrawingSurface {
    /// Surface size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Push the current transform.
    fn save(&mut self);
    /// Pop the most recently saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);
    /// Pre-multiply the current transform with a translation.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Pre-multiply the current transform with a uniform scale.
    fn scale(&mut self, s: f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8);
    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Rgba8);
    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64);
    /// Stroke the outline of the ellipse inscribed in `rect`.
    fn stroke_ellipse(&mut self, rect: Rect, color: Rgba8, width: f64);
    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba8, width: f64);

    /// Draw text with its layout box starting at `origin` (top-left).
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Draw the `src` sub-rectangle of `image` (image pixels) scaled into `dst`.
    fn draw_image(&mut self, image: &RasterImage, src: Rect, dst: Rect);

    /// Restrict subsequent drawing to a (rounded) rectangle until [`DrawingSurface::pop_clip`].
    fn push_clip(&mut self, rect: Rect, radius: f64);
    /// Remove the most recent clip.
    fn pop_clip(&mut self);
}
