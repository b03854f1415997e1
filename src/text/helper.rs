use std::collections::HashMap;

use crate::{
    foundation::error::CalloutResult,
    geometry::baseline::FontMetrics,
    text::{
        appearance::{TextAppearance, TypefaceKey},
        service::{ShapedText, TextService},
    },
};

/// Caching front for a [`TextService`].
///
/// Text width is cached until [`TextLayoutHelper::mark_text_width_dirty`] or an appearance change.
/// Font metrics are cached per [`TypefaceKey`]; replacing the appearance evicts the old key.
pub struct TextLayoutHelper {
    service: Box<dyn TextService>,
    appearance: Option<TextAppearance>,
    metrics: HashMap<TypefaceKey, FontMetrics>,
    text_width: Option<f64>,
}

impl std::fmt::Debug for TextLayoutHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutHelper")
            .field("appearance", &self.appearance)
            .field("cached_metrics", &self.metrics.len())
            .field("text_width", &self.text_width)
            .finish_non_exhaustive()
    }
}

impl TextLayoutHelper {
    /// Wrap `service` with empty caches and no appearance.
    pub fn new(service: Box<dyn TextService>) -> Self {
        Self {
            service,
            appearance: None,
            metrics: HashMap::new(),
            text_width: None,
        }
    }

    /// Current appearance, if one was set.
    pub fn appearance(&self) -> Option<&TextAppearance> {
        self.appearance.as_ref()
    }

    /// Replace the appearance. Returns `false` (and keeps caches) when nothing changed.
    pub fn set_appearance(&mut self, appearance: Option<TextAppearance>) -> bool {
        if self.appearance == appearance {
            return false;
        }
        if let Some(old) = self.appearance.take() {
            let old_key = old.typeface_key();
            if appearance.as_ref().map(TextAppearance::typeface_key) != Some(old_key.clone()) {
                self.metrics.remove(&old_key);
            }
        }
        self.appearance = appearance;
        self.text_width = None;
        true
    }

    /// Force the next [`TextLayoutHelper::text_width`] call to re-measure.
    pub fn mark_text_width_dirty(&mut self) {
        self.text_width = None;
    }

    /// Drop every cached metrics entry, e.g. after fonts were re-registered in the service.
    pub fn invalidate_metrics(&mut self) {
        self.metrics.clear();
        self.text_width = None;
    }

    /// Font size of the current appearance, `0` without one.
    pub fn font_size(&self) -> f64 {
        self.appearance
            .as_ref()
            .map_or(0.0, |a| f64::from(a.size_px))
    }

    /// Width of `text`; absent text, or text without an appearance, measures `0`.
    pub fn text_width(&mut self, text: Option<&str>) -> CalloutResult<f64> {
        let (Some(text), Some(appearance)) = (text, self.appearance.as_ref()) else {
            return Ok(0.0);
        };
        if let Some(width) = self.text_width {
            return Ok(width);
        }
        let width = self.service.measure_width(text, appearance)?;
        self.text_width = Some(width);
        Ok(width)
    }

    /// Typeface metrics for the current appearance.
    pub fn font_metrics(&mut self) -> CalloutResult<Option<FontMetrics>> {
        let Some(appearance) = self.appearance.as_ref() else {
            return Ok(None);
        };
        let key = appearance.typeface_key();
        if let Some(m) = self.metrics.get(&key) {
            return Ok(Some(*m));
        }
        let m = self.service.font_metrics(appearance)?;
        self.metrics.insert(key, m);
        Ok(Some(m))
    }

    /// Shape `text` with the current appearance; `None` without one.
    pub fn shape(&mut self, text: &str) -> CalloutResult<Option<ShapedText>> {
        let Some(appearance) = self.appearance.as_ref() else {
            return Ok(None);
        };
        self.service.shape_line(text, appearance).map(Some)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/helper.rs"]
mod tests;
