use crate::{
    foundation::core::{Affine, BezPath, Point, Rgba8, Vec2},
    foundation::error::{CalloutError, CalloutResult},
    render::surface::{Surface, TransformStack},
    text::service::ShapedText,
};

/// Rendered pixels in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha, e.g. before writing a PNG.
    pub fn into_straight(mut self) -> Self {
        if !self.premultiplied {
            return self;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
        self
    }
}

/// [`Surface`] that rasterizes with `vello_cpu` into premultiplied RGBA8.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transforms: TransformStack,
}

impl CpuSurface {
    /// Surface of `width x height` pixels, optionally cleared to `clear`.
    pub fn new(width: u32, height: u32, clear: Option<Rgba8>) -> CalloutResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| CalloutError::evaluation("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| CalloutError::evaluation("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(CalloutError::evaluation("surface must be non-empty"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        if let Some(c) = clear {
            ctx.set_paint(color_to_cpu(c));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        Ok(Self {
            width,
            height,
            ctx,
            transforms: TransformStack::default(),
        })
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl Surface for CpuSurface {
    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) -> CalloutResult<()> {
        self.transforms.restore()
    }

    fn translate(&mut self, offset: Vec2) {
        self.transforms.translate(offset);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> CalloutResult<()> {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(affine_to_cpu(self.transforms.current()));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CalloutResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(CalloutError::evaluation(
                "stroke width must be finite and > 0",
            ));
        }
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(affine_to_cpu(self.transforms.current()));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn draw_text(&mut self, text: &ShapedText, origin: Point, color: Rgba8) -> CalloutResult<()> {
        let transform = self.transforms.current() * Affine::translate(origin.to_vec2());
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(color_to_cpu(color));

        for run in text.runs.iter().filter(|r| !r.glyphs.is_empty()) {
            if run.font.data.is_empty() {
                return Err(CalloutError::evaluation("shaped run carries no font data"));
            }
            let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            self.ctx
                .glyph_run(&run.font)
                .font_size(text.font_size)
                .fill_glyphs(glyphs);
        }
        Ok(())
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

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
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

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
