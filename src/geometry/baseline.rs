use serde::{Deserialize, Serialize};

/// Typeface-level vertical metrics in y-down coordinates.
///
/// `ascent` is the signed distance from the baseline to the top of normal text (negative, above
/// the baseline) and `descent` the signed distance to the bottom (positive, below it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Signed baseline-to-top distance, negative for ordinary fonts.
    pub ascent: f64,
    /// Signed baseline-to-bottom distance, positive for ordinary fonts.
    pub descent: f64,
}

impl FontMetrics {
    /// Build metrics from signed y-down values.
    pub fn new(ascent: f64, descent: f64) -> Self {
        Self { ascent, descent }
    }

    /// Offset from the visual center of the text to its baseline.
    pub fn center_from_baseline(self) -> f64 {
        compute_text_center_from_baseline(self.ascent, self.descent)
    }
}

/// Offset from the visual center of a line to its baseline.
///
/// Derived from typeface metrics rather than per-string glyph extents, so every string set in the
/// same typeface and size gets the same value.
pub fn compute_text_center_from_baseline(ascent: f64, descent: f64) -> f64 {
    (descent + ascent) / 2.0
}

/// Baseline `y` that vertically centers text on `bounds_center_y`.
pub fn compute_text_draw_origin_y(bounds_center_y: f64, ascent: f64, descent: f64) -> f64 {
    bounds_center_y - compute_text_center_from_baseline(ascent, descent)
}

/// Minimum bubble width: padded text or the configured minimum, whichever is larger.
pub fn intrinsic_width(padding: f64, text_width: f64, min_width: f64) -> f64 {
    (2.0 * padding + text_width).max(min_width)
}

/// Minimum bubble height: the font size or the configured minimum, whichever is larger.
pub fn intrinsic_height(font_size: f64, min_height: f64) -> f64 {
    font_size.max(min_height)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/baseline.rs"]
mod tests;
