use crate::{
    assets::raster::RasterImage,
    foundation::core::{Affine, Point, Rect, Rgba8},
    render::surface::{DrawingSurface, TextStyle},
};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawingSurface::fill_rect`].
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// [`DrawingSurface::fill_rounded_rect`].
    FillRoundedRect {
        /// Target rectangle.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// [`DrawingSurface::fill_ellipse`].
    FillEllipse {
        /// Bounding rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// [`DrawingSurface::stroke_rect`].
    StrokeRect {
        /// Outline rectangle.
        rect: Rect,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width.
        width: f64,
    },
    /// [`DrawingSurface::stroke_ellipse`].
    StrokeEllipse {
        /// Bounding rectangle.
        rect: Rect,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width.
        width: f64,
    },
    /// [`DrawingSurface::stroke_line`].
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width.
        width: f64,
    },
    /// [`DrawingSurface::draw_text`].
    Text {
        /// Text content.
        text: String,
        /// Layout origin.
        origin: Point,
        /// Style used.
        style: TextStyle,
    },
    /// [`DrawingSurface::draw_image`].
    Image {
        /// Source image width.
        image_width: u32,
        /// Source image height.
        image_height: u32,
        /// Source sub-rectangle in image pixels.
        src: Rect,
        /// Destination rectangle.
        dst: Rect,
    },
    /// [`DrawingSurface::push_clip`].
    PushClip {
        /// Clip rectangle.
        rect: Rect,
        /// Corner radius.
        radius: f64,
    },
    /// [`DrawingSurface::pop_clip`].
    PopClip,
}

/// A draw call together with the transform that was active when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    /// Active transform.
    pub transform: Affine,
    /// The call.
    pub command: DrawCommand,
}

/// In-memory [`DrawingSurface`] that records calls instead of rasterizing them.
///
/// Lets renderers be checked geometrically (slot rectangles, skipped assets) without pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    transform: Affine,
    saved: Vec<Affine>,
    commands: Vec<Recorded>,
}

impl RecordingSurface {
    /// Empty recording of a `width x height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Everything recorded so far, in draw order.
    pub fn recorded(&self) -> &[Recorded] {
        &self.commands
    }

    /// Recorded commands without their transforms.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().map(|r| &r.command)
    }

    /// Destination rectangles of every image draw, in draw order.
    pub fn image_draws(&self) -> Vec<(u32, u32, Rect, Rect)> {
        self.commands()
            .filter_map(|c| match c {
                DrawCommand::Image {
                    image_width,
                    image_height,
                    src,
                    dst,
                } => Some((*image_width, *image_height, *src, *dst)),
                _ => None,
            })
            .collect()
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(Recorded {
            transform: self.transform,
            command,
        });
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform *= Affine::translate((dx, dy));
    }

    fn scale(&mut self, s: f64) {
        self.transform *= Affine::scale(s);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8) {
        self.push(DrawCommand::FillRoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba8) {
        self.push(DrawCommand::FillEllipse { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64) {
        self.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Rgba8, width: f64) {
        self.push(DrawCommand::StrokeEllipse { rect, color, width });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba8, width: f64) {
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: &RasterImage, src: Rect, dst: Rect) {
        self.push(DrawCommand::Image {
            image_width: image.width(),
            image_height: image.height(),
            src,
            dst,
        });
    }

    fn push_clip(&mut self, rect: Rect, radius: f64) {
        self.push(DrawCommand::PushClip { rect, radius });
    }

    fn pop_clip(&mut self) {
        self.push(DrawCommand::PopClip);
    }
}
