use crate::{
    foundation::core::{Affine, BezPath, Point, Rgba8, Vec2},
    foundation::error::{CalloutError, CalloutResult},
    text::service::ShapedText,
};

/// Paint target consumed by the shape primitive and the bubble renderer.
///
/// Surfaces keep a transform stack: [`Surface::save`] pushes the current transform,
/// [`Surface::restore`] pops it, and [`Surface::translate`] pre-multiplies a translation.
pub trait Surface {
    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    fn restore(&mut self) -> CalloutResult<()>;

    /// Translate subsequent drawing by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// Fill `path` with a solid color.
    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> CalloutResult<()>;

    /// Stroke `path` with a solid color.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CalloutResult<()>;

    /// Draw a shaped line with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &ShapedText, origin: Point, color: Rgba8) -> CalloutResult<()>;
}

/// Transform stack shared by the provided surfaces.
#[derive(Clone, Debug, Default)]
pub(crate) struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub(crate) fn current(&self) -> Affine {
        self.current
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) -> CalloutResult<()> {
        self.current = self
            .saved
            .pop()
            .ok_or_else(|| CalloutError::evaluation("restore without matching save"))?;
        Ok(())
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine::translate(offset);
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// A draw call captured by [`RecordingSurface`], with the transform active at the time.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Solid fill of a path.
    Fill {
        /// Outline in local coordinates.
        path: BezPath,
        /// Active transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8,
    },
    /// Solid stroke of a path.
    Stroke {
        /// Outline in local coordinates.
        path: BezPath,
        /// Active transform.
        transform: Affine,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// Text line drawn at a baseline origin.
    Text {
        /// Baseline origin in local coordinates.
        origin: Point,
        /// Active transform.
        transform: Affine,
        /// Advance width of the drawn line.
        width: f64,
        /// Number of glyphs drawn.
        glyphs: usize,
        /// Text color.
        color: Rgba8,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    transforms: TransformStack,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Empty recording with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded draw calls, in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of unmatched [`Surface::save`] calls.
    pub fn save_depth(&self) -> usize {
        self.transforms.depth()
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transforms.current()
    }
}

impl Surface for RecordingSurface {
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
        self.ops.push(SurfaceOp::Fill {
            path: path.clone(),
            transform: self.transforms.current(),
            color,
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CalloutResult<()> {
        self.ops.push(SurfaceOp::Stroke {
            path: path.clone(),
            transform: self.transforms.current(),
            width,
            color,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &ShapedText, origin: Point, color: Rgba8) -> CalloutResult<()> {
        self.ops.push(SurfaceOp::Text {
            origin,
            transform: self.transforms.current(),
            width: text.width,
            glyphs: text.glyph_count(),
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
