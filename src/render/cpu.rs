use std::sync::Arc;

use kurbo::Shape;

use crate::{
    assets::{library::FontAsset, raster::RasterImage},
    foundation::{
        core::{Affine, Canvas, Point, Rect, Rgba8, is_degenerate},
        error::{FrameError, FrameResult},
    },
    render::{
        frame::ComposedFrame,
        surface::{DrawingSurface, TextAlign, TextStyle},
        text::TextLayoutEngine,
    },
};

const PATH_TOLERANCE: f64 = 0.1;

/// CPU raster surface powered by `vello_cpu`.
///
/// Created per composition and consumed by [`CpuSurface::finish`].
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    saved: Vec<Affine>,
    clip_depth: usize,
    text: Option<TextRenderer>,
}

struct TextRenderer {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl CpuSurface {
    /// Allocate a transparent surface of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> FrameResult<Self> {
        let canvas = Canvas::new(width, height)?;
        let width_u16: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FrameError::validation("surface width exceeds u16"))?;
        let height_u16: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FrameError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            clip_depth: 0,
            text: None,
        })
    }

    /// Enable text drawing with `font`. An unusable font leaves text disabled.
    pub fn with_font(mut self, font: Option<&FontAsset>) -> Self {
        let Some(font) = font else {
            return self;
        };
        match TextLayoutEngine::new(font.bytes()) {
            Ok(engine) => {
                tracing::debug!(family = engine.family_name(), "text font registered");
                let blob = vello_cpu::peniko::Blob::from(font.bytes().as_ref().clone());
                self.text = Some(TextRenderer {
                    engine,
                    font: vello_cpu::peniko::FontData::new(blob, 0),
                });
            }
            Err(e) => tracing::warn!(error = %e, "font unusable; text is skipped"),
        }
        self
    }

    /// Fill the whole surface in device space, ignoring the active transform.
    pub fn clear(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Rasterize everything drawn so far and read the pixels back.
    pub fn finish(mut self) -> ComposedFrame {
        while self.clip_depth > 0 {
            self.ctx.pop_layer();
            self.clip_depth -= 1;
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        ComposedFrame {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }

    fn prepare_solid(&mut self, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
    }

    fn stroke_shape(&mut self, shape: &impl Shape, color: Rgba8, width: f64) {
        if width.is_nan() || width <= 0.0 {
            return;
        }
        self.prepare_solid(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&shape_to_cpu(shape));
    }
}

impl DrawingSurface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
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
        if is_degenerate(rect) {
            return;
        }
        self.prepare_solid(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8) {
        if is_degenerate(rect) {
            return;
        }
        self.prepare_solid(color);
        self.ctx
            .fill_path(&shape_to_cpu(&rect.to_rounded_rect(radius.max(0.0))));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba8) {
        if is_degenerate(rect) {
            return;
        }
        self.prepare_solid(color);
        self.ctx
            .fill_path(&shape_to_cpu(&kurbo::Ellipse::from_rect(rect)));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64) {
        if is_degenerate(rect) {
            return;
        }
        self.stroke_shape(&rect, color, width);
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Rgba8, width: f64) {
        if is_degenerate(rect) {
            return;
        }
        self.stroke_shape(&kurbo::Ellipse::from_rect(rect), color, width);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba8, width: f64) {
        self.stroke_shape(&kurbo::Line::new(from, to), color, width);
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let Some(renderer) = self.text.as_mut() else {
            return;
        };
        let wrap = match style.align {
            TextAlign::Start => style.max_width.map(|w| w as f32),
            TextAlign::Center | TextAlign::End => None,
        };
        let layout =
            match renderer
                .engine
                .layout_plain(text, style.size_px, style.color.into(), wrap)
            {
                Ok(layout) => layout,
                Err(e) => {
                    tracing::warn!(error = %e, "text layout failed; skipped");
                    return;
                }
            };

        let text_w = f64::from(layout.width());
        let box_w = style.max_width.unwrap_or(0.0);
        let dx = match style.align {
            TextAlign::Start => 0.0,
            TextAlign::Center => (box_w - text_w) / 2.0,
            TextAlign::End => box_w - text_w,
        };

        let tr = self.transform * Affine::translate((origin.x + dx, origin.y));
        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&renderer.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    fn draw_image(&mut self, image: &RasterImage, src: Rect, dst: Rect) {
        if is_degenerate(src) || is_degenerate(dst) {
            return;
        }
        let paint = match image_paint(image) {
            Ok(paint) => paint,
            Err(e) => {
                tracing::warn!(error = %e, "image paint unavailable; skipped");
                return;
            }
        };

        // Maps source-image pixels onto the destination rectangle in template space.
        let paint_tf = Affine::translate((dst.x0, dst.y0))
            * Affine::scale_non_uniform(dst.width() / src.width(), dst.height() / src.height())
            * Affine::translate((-src.x0, -src.y0));

        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint_transform(affine_to_cpu(paint_tf));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(dst));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn push_clip(&mut self, rect: Rect, radius: f64) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        let path = if radius > 0.0 {
            shape_to_cpu(&rect.to_rounded_rect(radius))
        } else {
            shape_to_cpu(&rect)
        };
        self.ctx.push_clip_layer(&path);
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            return;
        }
        self.ctx.pop_layer();
        self.clip_depth -= 1;
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn shape_to_cpu(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_paint(image: &RasterImage) -> FrameResult<vello_cpu::Image> {
    let w: u16 = image
        .width()
        .try_into()
        .map_err(|_| FrameError::validation("image width exceeds u16"))?;
    let h: u16 = image
        .height()
        .try_into()
        .map_err(|_| FrameError::validation("image height exceeds u16"))?;

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(image.width() as usize * image.height() as usize);
    for px in image.rgba8_premul().chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
