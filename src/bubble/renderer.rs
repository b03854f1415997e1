use std::rc::Rc;

use crate::{
    anchor::{
        tracker::{ScreenLocationTracker, ScreenSample},
        view::AnchorView,
    },
    bubble::config::{BubbleConfig, validate_dimension},
    foundation::core::{Point, Rect, Vec2},
    foundation::error::CalloutResult,
    geometry::{
        baseline,
        pointer::{compute_clamped_edge_offset, compute_pointer_offset, notch_protrusion},
    },
    render::surface::Surface,
    shape::{
        edge::{MarkerEdge, OffsetEdge},
        primitive::ShapePrimitive,
    },
    text::{appearance::TextAppearance, helper::TextLayoutHelper, service::TextService},
};

/// Counts repaint requests and forwards them to an optional host callback.
#[derive(Default)]
struct Invalidator {
    requests: u64,
    callback: Option<Box<dyn FnMut()>>,
}

impl Invalidator {
    fn request(&mut self, reason: &'static str) {
        self.requests += 1;
        tracing::debug!(reason, requests = self.requests, "repaint requested");
        if let Some(cb) = self.callback.as_mut() {
            cb();
        }
    }
}

/// A tooltip bubble: a [`ShapePrimitive`] body with a pointer notch plus a centered label.
///
/// The pointer keeps aiming at the attached anchor while the body slides to stay
/// `layout_margin` inside the anchor's visible display frame.
pub struct BubbleRenderer {
    shape: ShapePrimitive,
    text_helper: TextLayoutHelper,
    tracker: Rc<ScreenLocationTracker>,
    invalidator: Invalidator,
    text: Option<String>,
    padding: f64,
    min_width: f64,
    min_height: f64,
    layout_margin: f64,
    arrow_size: f64,
    bounds: Rect,
}

impl std::fmt::Debug for BubbleRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubbleRenderer")
            .field("text", &self.text)
            .field("bounds", &self.bounds)
            .field("padding", &self.padding)
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("layout_margin", &self.layout_margin)
            .field("arrow_size", &self.arrow_size)
            .field("sample", &self.tracker.sample())
            .finish_non_exhaustive()
    }
}

impl BubbleRenderer {
    /// Build a bubble from a validated `config`, measuring text with `service`.
    pub fn new(service: Box<dyn TextService>, config: &BubbleConfig) -> CalloutResult<Self> {
        config.validate()?;

        let mut text_helper = TextLayoutHelper::new(service);
        text_helper.set_appearance(config.text_appearance());

        let mut out = Self {
            shape: ShapePrimitive::new(config.corner_radius, config.shape_style()),
            text_helper,
            tracker: ScreenLocationTracker::new(),
            invalidator: Invalidator::default(),
            text: config.text.clone(),
            padding: config.padding,
            min_width: config.min_width,
            min_height: config.min_height,
            layout_margin: config.layout_margin,
            arrow_size: config.arrow_size,
            bounds: Rect::ZERO,
        };
        out.refresh_marker_edge();
        Ok(out)
    }

    /// Call `callback` on every repaint request.
    pub fn set_invalidate_callback(&mut self, callback: impl FnMut() + 'static) {
        self.invalidator.callback = Some(Box::new(callback));
    }

    /// Number of repaint requests issued so far.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidator.requests
    }

    /// Current label.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the label. No-op when unchanged.
    pub fn set_text(&mut self, text: Option<&str>) {
        if self.text.as_deref() == text {
            return;
        }
        self.text = text.map(str::to_owned);
        self.text_helper.mark_text_width_dirty();
        self.invalidator.request("text");
    }

    /// Current label appearance.
    pub fn text_appearance(&self) -> Option<&TextAppearance> {
        self.text_helper.appearance()
    }

    /// Set the label appearance. No-op when unchanged; invalid sizes or families are rejected.
    pub fn set_text_appearance(
        &mut self,
        appearance: Option<TextAppearance>,
    ) -> CalloutResult<()> {
        if let Some(a) = &appearance {
            a.validate()?;
        }
        if self.text_helper.set_appearance(appearance) {
            self.invalidator.request("text_appearance");
        }
        Ok(())
    }

    /// Configured minimum width.
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Make the bubble at least `min_width` wide. No-op when unchanged.
    ///
    /// Negative or non-finite values are rejected and leave the bubble untouched.
    pub fn set_min_width(&mut self, min_width: f64) -> CalloutResult<()> {
        validate_dimension("min_width", min_width)?;
        if replace_if_changed(&mut self.min_width, min_width) {
            self.invalidator.request("min_width");
        }
        Ok(())
    }

    /// Configured minimum height.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Make the bubble at least `min_height` tall. No-op when unchanged.
    pub fn set_min_height(&mut self, min_height: f64) -> CalloutResult<()> {
        validate_dimension("min_height", min_height)?;
        if replace_if_changed(&mut self.min_height, min_height) {
            self.invalidator.request("min_height");
        }
        Ok(())
    }

    /// Padding between the label and each side.
    pub fn text_padding(&self) -> f64 {
        self.padding
    }

    /// Set the label padding. No-op when unchanged.
    pub fn set_text_padding(&mut self, padding: f64) -> CalloutResult<()> {
        validate_dimension("padding", padding)?;
        if replace_if_changed(&mut self.padding, padding) {
            self.invalidator.request("padding");
        }
        Ok(())
    }

    /// Minimum gap to the visible frame edges.
    pub fn layout_margin(&self) -> f64 {
        self.layout_margin
    }

    /// Set the visible frame margin. No-op when unchanged.
    pub fn set_layout_margin(&mut self, layout_margin: f64) -> CalloutResult<()> {
        validate_dimension("layout_margin", layout_margin)?;
        if replace_if_changed(&mut self.layout_margin, layout_margin) {
            self.refresh_marker_edge();
            self.invalidator.request("layout_margin");
        }
        Ok(())
    }

    /// Pointer size, fixed at construction.
    pub fn arrow_size(&self) -> f64 {
        self.arrow_size
    }

    /// Body shape, including the current notch.
    pub fn shape(&self) -> &ShapePrimitive {
        &self.shape
    }

    /// Current bounds in local drawing coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize or move the bubble in local drawing coordinates.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        // The notch clamp depends on the width.
        self.refresh_marker_edge();
    }

    /// Latest anchor sample, `None` before the first attach.
    pub fn screen_sample(&self) -> Option<ScreenSample> {
        self.tracker.sample()
    }

    /// Start following `anchor`'s screen location and visible frame.
    pub fn attach(&mut self, anchor: &mut dyn AnchorView) {
        self.tracker.attach(anchor);
        tracing::debug!(sample = ?self.tracker.sample(), "attached to anchor");
    }

    /// Stop following `anchor`. Detaching an anchor that is not followed is ignored.
    pub fn detach(&mut self, anchor: &mut dyn AnchorView) {
        let removed = self.tracker.detach(anchor);
        tracing::debug!(removed, "detached from anchor");
    }

    /// Width the host layout should reserve for the bubble.
    pub fn intrinsic_width(&mut self) -> CalloutResult<f64> {
        let text_width = self.text_helper.text_width(self.text.as_deref())?;
        Ok(baseline::intrinsic_width(
            self.padding,
            text_width,
            self.min_width,
        ))
    }

    /// Height the host layout should reserve for the bubble.
    pub fn intrinsic_height(&self) -> f64 {
        baseline::intrinsic_height(self.text_helper.font_size(), self.min_height)
    }

    /// Horizontal translation applied to the whole bubble for the current sample.
    ///
    /// Without a sample, or with an empty visible frame, the bubble is not moved.
    pub fn pointer_offset(&self) -> f64 {
        match self.tracker.sample() {
            Some(s) if s.visible_frame.width() > 0.0 && s.visible_frame.height() > 0.0 => {
                compute_pointer_offset(
                    self.bounds,
                    s.visible_frame,
                    s.location.x,
                    self.layout_margin,
                )
            }
            _ => 0.0,
        }
    }

    /// Notch shift along the bottom edge, opposite to the pointer offset and kept in the body.
    pub fn edge_offset(&self) -> f64 {
        compute_clamped_edge_offset(-self.pointer_offset(), self.bounds.width(), self.arrow_size)
    }

    /// Paint the bubble into `surface`.
    ///
    /// The notch is rebuilt first so it reflects the latest bounds and anchor sample; the surface
    /// transform is restored even when painting fails.
    #[tracing::instrument(level = "debug", skip(self, surface), fields(bounds = ?self.bounds))]
    pub fn render(&mut self, surface: &mut dyn Surface) -> CalloutResult<()> {
        self.refresh_marker_edge();

        let translate = Vec2::new(self.pointer_offset(), -notch_protrusion(self.arrow_size));
        surface.save();
        surface.translate(translate);
        let painted = self.paint_contents(surface);
        surface.restore()?;
        painted
    }

    fn paint_contents(&mut self, surface: &mut dyn Surface) -> CalloutResult<()> {
        self.shape.paint(surface, self.bounds)?;
        self.draw_text(surface)
    }

    fn draw_text(&mut self, surface: &mut dyn Surface) -> CalloutResult<()> {
        let Some(text) = self.text.as_deref() else {
            return Ok(());
        };
        let Some(metrics) = self.text_helper.font_metrics()? else {
            return Ok(());
        };
        let Some(shaped) = self.text_helper.shape(text)? else {
            return Ok(());
        };
        let Some(color) = self.text_helper.appearance().map(|a| a.color) else {
            return Ok(());
        };

        let center = self.bounds.center();
        let origin = Point::new(
            center.x - shaped.width / 2.0,
            baseline::compute_text_draw_origin_y(center.y, metrics.ascent, metrics.descent),
        );
        surface.draw_text(&shaped, origin, color)
    }

    fn refresh_marker_edge(&mut self) {
        let offset = self.edge_offset();
        self.shape
            .set_bottom_edge(OffsetEdge::new(MarkerEdge::new(self.arrow_size), offset));
    }
}

fn replace_if_changed(slot: &mut f64, value: f64) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
#[path = "../../tests/unit/bubble/renderer.rs"]
mod tests;
