use kurbo::Shape;

use super::*;
use crate::{
    geometry::pointer::notch_protrusion,
    render::surface::{RecordingSurface, SurfaceOp},
    shape::edge::{MarkerEdge, OffsetEdge},
};

fn bounds() -> Rect {
    Rect::new(10.0, 20.0, 110.0, 60.0)
}

#[test]
fn straight_outline_fills_the_bounds() {
    let shape = ShapePrimitive::new(4.0, ShapeStyle::default());
    let bbox = shape.outline(bounds()).bounding_box();
    assert!((bbox.x0 - 10.0).abs() < 1e-9);
    assert!((bbox.y0 - 20.0).abs() < 1e-9);
    assert!((bbox.x1 - 110.0).abs() < 1e-9);
    assert!((bbox.y1 - 60.0).abs() < 1e-9);
}

#[test]
fn rounded_corners_cut_into_the_rect_area() {
    let square = ShapePrimitive::new(0.0, ShapeStyle::default());
    let rounded = ShapePrimitive::new(10.0, ShapeStyle::default());
    let a = square.outline(bounds()).area().abs();
    let b = rounded.outline(bounds()).area().abs();
    assert!((a - 4000.0).abs() < 1e-6);
    assert!(b < a);
}

#[test]
fn oversized_radius_is_clamped_to_half_the_short_side() {
    let shape = ShapePrimitive::new(1000.0, ShapeStyle::default());
    let bbox = shape.outline(bounds()).bounding_box();
    assert!((bbox.height() - 40.0).abs() < 1e-9);
    assert!((bbox.width() - 100.0).abs() < 1e-9);
}

#[test]
fn marker_edge_protrudes_below_the_bounds_at_its_offset() {
    let mut shape = ShapePrimitive::new(4.0, ShapeStyle::default());
    shape.set_bottom_edge(OffsetEdge::new(MarkerEdge::new(10.0), -20.0));
    let path = shape.outline(bounds());
    let bbox = path.bounding_box();
    assert!((bbox.y1 - (60.0 + notch_protrusion(10.0))).abs() < 1e-9);

    let tip = path
        .elements()
        .iter()
        .filter_map(|el| match el {
            kurbo::PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .unwrap();
    assert!((tip.x - (60.0 - 20.0)).abs() < 1e-9);
}

#[test]
fn paint_fills_then_strokes() {
    let style = ShapeStyle {
        fill: Rgba8::rgba(1, 2, 3, 255),
        stroke: Some(Rgba8::rgba(9, 9, 9, 255)),
        stroke_width: 1.5,
    };
    let shape = ShapePrimitive::new(2.0, style);
    let mut surface = RecordingSurface::new();
    shape.paint(&mut surface, bounds()).unwrap();

    let ops = surface.ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], SurfaceOp::Fill { color, .. } if color == style.fill));
    assert!(matches!(
        ops[1],
        SurfaceOp::Stroke { width, color, .. } if width == 1.5 && color == Rgba8::rgba(9, 9, 9, 255)
    ));
}

#[test]
fn stroke_is_skipped_without_color_or_width() {
    let mut shape = ShapePrimitive::default();
    let mut surface = RecordingSurface::new();
    shape.paint(&mut surface, bounds()).unwrap();
    assert_eq!(surface.ops().len(), 1);

    shape.set_style(ShapeStyle {
        stroke: Some(Rgba8::WHITE),
        stroke_width: 0.0,
        ..ShapeStyle::default()
    });
    let mut surface = RecordingSurface::new();
    shape.paint(&mut surface, bounds()).unwrap();
    assert_eq!(surface.ops().len(), 1);
}
