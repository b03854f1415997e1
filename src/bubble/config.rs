use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Rgba8,
    foundation::error::{CalloutError, CalloutResult},
    shape::primitive::ShapeStyle,
    text::appearance::TextAppearance,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Static configuration of a bubble.
///
/// Every field has a default, so `{}` is a valid configuration. Dimensions are in pixels.
pub struct BubbleConfig {
    /// Label text; `None` draws an empty bubble.
    pub text: Option<String>,
    /// Horizontal padding between the text and each side.
    pub padding: f64,
    /// Minimum bubble width.
    pub min_width: f64,
    /// Minimum bubble height.
    pub min_height: f64,
    /// Minimum gap between the bubble and the edges of the visible frame.
    pub layout_margin: f64,
    /// Side of the square whose rotated half forms the pointer.
    pub arrow_size: f64,
    /// Corner radius of the bubble body.
    pub corner_radius: f64,
    /// Body fill color.
    pub fill: Rgba8,
    /// Optional outline color.
    pub stroke: Option<Rgba8>,
    /// Outline width.
    pub stroke_width: f64,
    /// Font family of the label; `None` leaves the label unset until an appearance is applied.
    pub font_family: Option<String>,
    /// Label font size.
    pub text_size_px: f32,
    /// Label color.
    pub text_color: Rgba8,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        let style = ShapeStyle::default();
        Self {
            text: None,
            padding: 12.0,
            min_width: 32.0,
            min_height: 32.0,
            layout_margin: 8.0,
            arrow_size: 14.0,
            corner_radius: 4.0,
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
            font_family: None,
            text_size_px: 14.0,
            text_color: Rgba8::WHITE,
        }
    }
}

impl BubbleConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> CalloutResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| CalloutError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> CalloutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read bubble config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject negative or non-finite dimensions.
    pub fn validate(&self) -> CalloutResult<()> {
        let dims = [
            ("padding", self.padding),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("layout_margin", self.layout_margin),
            ("arrow_size", self.arrow_size),
            ("corner_radius", self.corner_radius),
            ("stroke_width", self.stroke_width),
        ];
        for (name, v) in dims {
            validate_dimension(name, v)?;
        }
        if !self.text_size_px.is_finite() || self.text_size_px <= 0.0 {
            return Err(CalloutError::validation(
                "text_size_px must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Fill and stroke paint.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
        }
    }

    /// Label appearance, when a family is configured.
    pub fn text_appearance(&self) -> Option<TextAppearance> {
        self.font_family.as_ref().map(|family| {
            TextAppearance::new(family.clone(), self.text_size_px).with_color(self.text_color)
        })
    }
}

/// Reject a negative or non-finite pixel dimension.
pub(crate) fn validate_dimension(name: &str, value: f64) -> CalloutResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalloutError::validation(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/bubble/config.rs"]
mod tests;
