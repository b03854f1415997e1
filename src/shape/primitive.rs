use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{BezPath, Point, Rect, Rgba8},
    foundation::error::CalloutResult,
    render::surface::Surface,
    shape::edge::{EdgeTreatment, StraightEdge},
};

// Cubic control-point distance approximating a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Fill and stroke paint for a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Rgba8,
    /// Optional stroke color; `None` skips the stroke pass.
    #[serde(default)]
    pub stroke: Option<Rgba8>,
    /// Stroke width in pixels.
    #[serde(default)]
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Rgba8::rgba(0x61, 0x61, 0x61, 0xe6),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

/// Rounded rectangle with a replaceable bottom edge.
#[derive(Debug)]
pub struct ShapePrimitive {
    corner_radius: f64,
    bottom_edge: Box<dyn EdgeTreatment>,
    style: ShapeStyle,
}

impl Default for ShapePrimitive {
    fn default() -> Self {
        Self::new(0.0, ShapeStyle::default())
    }
}

impl ShapePrimitive {
    /// Shape with straight edges.
    pub fn new(corner_radius: f64, style: ShapeStyle) -> Self {
        Self {
            corner_radius,
            bottom_edge: Box::new(StraightEdge),
            style,
        }
    }

    /// Configured corner radius (before clamping to the bounds).
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Paint style.
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Replace the paint style.
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    /// Current bottom-edge treatment.
    pub fn bottom_edge(&self) -> &dyn EdgeTreatment {
        self.bottom_edge.as_ref()
    }

    /// Replace the bottom-edge treatment.
    pub fn set_bottom_edge(&mut self, edge: impl EdgeTreatment + 'static) {
        self.bottom_edge = Box::new(edge);
    }

    /// Closed outline for `bounds`, clockwise in y-down space starting at the top-left corner.
    pub fn outline(&self, bounds: Rect) -> BezPath {
        let Rect { x0, y0, x1, y1 } = bounds;
        let r = self
            .corner_radius
            .min(bounds.width() / 2.0)
            .min(bounds.height() / 2.0)
            .max(0.0);
        let k = r * KAPPA;

        let mut path = BezPath::new();
        path.move_to((x0 + r, y0));
        path.line_to((x1 - r, y0));
        if r > 0.0 {
            path.curve_to((x1 - r + k, y0), (x1, y0 + r - k), (x1, y0 + r));
        }
        path.line_to((x1, y1 - r));
        if r > 0.0 {
            path.curve_to((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));
        }

        // Edge-local x runs left to right along the bottom and y points down (outward); the
        // outline walks the bottom edge right to left.
        let mut edge = Vec::new();
        self.bottom_edge
            .edge_points(bounds.width(), bounds.width() / 2.0, &mut edge);
        for p in edge.iter().rev() {
            path.line_to(Point::new(x0 + p.x, y1 + p.y));
        }

        path.line_to((x0 + r, y1));
        if r > 0.0 {
            path.curve_to((x0 + r - k, y1), (x0, y1 - r + k), (x0, y1 - r));
        }
        path.line_to((x0, y0 + r));
        if r > 0.0 {
            path.curve_to((x0, y0 + r - k), (x0 + r - k, y0), (x0 + r, y0));
        }
        path.close_path();
        path
    }

    /// Fill, then stroke when a stroke color and a positive width are configured.
    pub fn paint(&self, surface: &mut dyn Surface, bounds: Rect) -> CalloutResult<()> {
        let path = self.outline(bounds);
        surface.fill_path(&path, self.style.fill)?;
        if let Some(stroke) = self.style.stroke
            && self.style.stroke_width > 0.0
        {
            surface.stroke_path(&path, self.style.stroke_width, stroke)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/primitive.rs"]
mod tests;
