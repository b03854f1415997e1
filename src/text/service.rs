pub use parley::FontData;

use crate::{
    foundation::error::CalloutResult, geometry::baseline::FontMetrics,
    text::appearance::TextAppearance,
};

/// Measurement and shaping backend for bubble labels.
///
/// Implementations are free to be slow; [`crate::TextLayoutHelper`] caches widths and metrics.
pub trait TextService {
    /// Advance width of `text` as a single line.
    fn measure_width(&mut self, text: &str, appearance: &TextAppearance) -> CalloutResult<f64>;

    /// Typeface metrics for `appearance`, independent of any particular string.
    fn font_metrics(&mut self, appearance: &TextAppearance) -> CalloutResult<FontMetrics>;

    /// Shape `text` as one line with glyph positions relative to the left end of its baseline.
    fn shape_line(&mut self, text: &str, appearance: &TextAppearance)
    -> CalloutResult<ShapedText>;
}

/// A glyph positioned relative to the line's baseline origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph id in the font.
    pub id: u32,
    /// Horizontal position from the start of the line.
    pub x: f32,
    /// Vertical position from the baseline (y-down).
    pub y: f32,
}

/// Glyphs set in one font face, with the face that shaped them.
#[derive(Clone, Debug)]
pub struct ShapedRun {
    /// Face the glyph ids belong to, including its index inside a collection.
    pub font: FontData,
    /// Positioned glyphs.
    pub glyphs: Vec<ShapedGlyph>,
}

/// One shaped line ready to be drawn at a baseline origin.
#[derive(Clone)]
pub struct ShapedText {
    /// Runs in visual order.
    pub runs: Vec<ShapedRun>,
    /// Advance width of the line.
    pub width: f64,
    /// Size the glyphs were shaped at.
    pub font_size: f32,
}

impl ShapedText {
    /// Total number of glyphs across all runs.
    pub fn glyph_count(&self) -> usize {
        self.runs.iter().map(|r| r.glyphs.len()).sum()
    }
}

impl std::fmt::Debug for ShapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedText")
            .field("runs", &self.runs.len())
            .field("glyphs", &self.glyph_count())
            .field("width", &self.width)
            .field("font_size", &self.font_size)
            .finish()
    }
}
