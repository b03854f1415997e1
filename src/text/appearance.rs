use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8,
    error::{CalloutError, CalloutResult},
};

/// Typeface, size and color used to set the bubble label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAppearance {
    /// Font family name as known to the text service.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Text color.
    #[serde(default = "default_text_color")]
    pub color: Rgba8,
}

fn default_text_color() -> Rgba8 {
    Rgba8::WHITE
}

impl TextAppearance {
    /// Appearance for `family` at `size_px` in white.
    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self {
            family: family.into(),
            size_px,
            color: default_text_color(),
        }
    }

    /// Same appearance with a different color.
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Cache key for everything measurement depends on; color is excluded.
    pub fn typeface_key(&self) -> TypefaceKey {
        TypefaceKey {
            family: self.family.clone(),
            size_bits: self.size_px.to_bits(),
        }
    }

    /// Reject sizes that no shaping engine can honor.
    pub fn validate(&self) -> CalloutResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(CalloutError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if self.family.trim().is_empty() {
            return Err(CalloutError::validation("text family must be non-empty"));
        }
        Ok(())
    }
}

/// `(typeface, size)` identity used to key cached font metrics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypefaceKey {
    /// Font family name.
    pub family: String,
    /// Raw bits of the `f32` size so the key stays `Eq + Hash`.
    pub size_bits: u32,
}
