use std::{borrow::Cow, collections::HashSet, path::Path};

use anyhow::Context;

use crate::{
    foundation::error::{CalloutError, CalloutResult},
    geometry::baseline::FontMetrics,
    text::{
        appearance::TextAppearance,
        service::{ShapedGlyph, ShapedRun, ShapedText, TextService},
    },
};

// Metrics come from line metrics, which parley derives from the font tables; the probe content
// only has to produce a line.
const METRICS_PROBE: &str = "x";

/// [`TextService`] backed by Parley, using fonts registered from raw bytes.
pub struct ParleyTextService {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashSet<String>,
}

impl Default for ParleyTextService {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyTextService {
    /// Construct a service with fresh Parley contexts and no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashSet::new(),
        }
    }

    /// Register font bytes and return the primary family name they provide.
    ///
    /// Several faces of one family (e.g. regular and bold) may be registered; Parley picks the
    /// face per run and [`ShapedText`] carries whichever face it picked.
    pub fn register_font(&mut self, font_bytes: Vec<u8>) -> CalloutResult<String> {
        let blob = parley::fontique::Blob::from(font_bytes);
        let bytes = blob.len();
        let families = self.font_ctx.collection.register_fonts(blob, None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CalloutError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CalloutError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, bytes, "registered font");
        self.families.insert(family_name.clone());
        Ok(family_name)
    }

    /// Read a font file and register it.
    pub fn register_font_file(&mut self, path: impl AsRef<Path>) -> CalloutResult<String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;
        self.register_font(bytes)
    }

    /// Whether `family` was registered with this service.
    pub fn has_family(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    fn layout_line(
        &mut self,
        text: &str,
        appearance: &TextAppearance,
    ) -> CalloutResult<parley::Layout<()>> {
        appearance.validate()?;
        if !self.has_family(&appearance.family) {
            return Err(CalloutError::validation(format!(
                "font family '{}' is not registered",
                appearance.family
            )));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(appearance.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(appearance.size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextService for ParleyTextService {
    fn measure_width(&mut self, text: &str, appearance: &TextAppearance) -> CalloutResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(text, appearance)?;
        Ok(f64::from(layout.width()))
    }

    fn font_metrics(&mut self, appearance: &TextAppearance) -> CalloutResult<FontMetrics> {
        let layout = self.layout_line(METRICS_PROBE, appearance)?;
        let line = layout.lines().next().ok_or_else(|| {
            CalloutError::measurement(format!(
                "no line produced for family '{}'",
                appearance.family
            ))
        })?;
        let m = line.metrics();
        Ok(FontMetrics::new(-f64::from(m.ascent), f64::from(m.descent)))
    }

    fn shape_line(
        &mut self,
        text: &str,
        appearance: &TextAppearance,
    ) -> CalloutResult<ShapedText> {
        let layout = self.layout_line(text, appearance)?;

        let mut runs = Vec::new();
        if let Some(line) = layout.lines().next() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let baseline = run.baseline();
                runs.push(ShapedRun {
                    font: run.run().font().clone(),
                    glyphs: run
                        .positioned_glyphs()
                        .map(|g| ShapedGlyph {
                            id: g.id,
                            x: g.x,
                            y: g.y - baseline,
                        })
                        .collect(),
                });
            }
        }

        Ok(ShapedText {
            runs,
            width: f64::from(layout.width()),
            font_size: appearance.size_px,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
