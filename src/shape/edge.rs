use std::f64::consts::SQRT_2;

use crate::{foundation::core::Point, geometry::pointer::notch_protrusion};

/// Geometry generator for one side of a shape outline.
///
/// Implementations push the points strictly between the edge's start and end, in edge-local
/// coordinates: `x` runs along the edge from `0` to `length` and `y` grows outward, away from the
/// shape body. Points must be emitted in increasing `x`.
pub trait EdgeTreatment: std::fmt::Debug {
    /// Emit interior edge points for an edge of `length` whose feature is centered on `center`.
    fn edge_points(&self, length: f64, center: f64, out: &mut Vec<Point>);
}

/// A plain straight edge with no interior points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StraightEdge;

impl EdgeTreatment for StraightEdge {
    fn edge_points(&self, _length: f64, _center: f64, _out: &mut Vec<Point>) {}
}

/// Triangular pointer: the outer half of a square of side `size` rotated by 45 degrees.
///
/// The tip protrudes `size * sqrt(2) - size` past the edge; the two base corners sit inside the
/// body so the base spans `size * sqrt(2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerEdge {
    size: f64,
}

impl MarkerEdge {
    /// Marker for an arrow of `size` pixels.
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl EdgeTreatment for MarkerEdge {
    fn edge_points(&self, _length: f64, center: f64, out: &mut Vec<Point>) {
        if self.size <= 0.0 {
            return;
        }
        let half_base = self.size * SQRT_2 / 2.0;
        let tip = notch_protrusion(self.size);
        let base = tip - half_base;
        out.push(Point::new(center - half_base, base));
        out.push(Point::new(center, tip));
        out.push(Point::new(center + half_base, base));
    }
}

/// Shifts the feature of an inner treatment along the edge.
#[derive(Debug)]
pub struct OffsetEdge {
    inner: Box<dyn EdgeTreatment>,
    offset: f64,
}

impl OffsetEdge {
    /// Wrap `inner`, moving its center by `offset` along the edge.
    pub fn new(inner: impl EdgeTreatment + 'static, offset: f64) -> Self {
        Self {
            inner: Box::new(inner),
            offset,
        }
    }

    /// Applied shift along the edge.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl EdgeTreatment for OffsetEdge {
    fn edge_points(&self, length: f64, center: f64, out: &mut Vec<Point>) {
        self.inner.edge_points(length, center + self.offset, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/edge.rs"]
mod tests;
