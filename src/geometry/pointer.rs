//! Horizontal pointer placement against the visible display frame.
//!
//! The bubble body is translated to stay inside the visible frame, while the notch on its bottom
//! edge is shifted the opposite way so the tip keeps pointing at the anchor.

use std::f64::consts::SQRT_2;

use crate::foundation::core::Rect;

/// Horizontal translation that keeps the bubble `layout_margin` away from the visible frame.
///
/// `bounds` are local drawing coordinates; `anchor_screen_x` maps them to screen space. A negative
/// result means the bubble overflowed on the right, a positive one that it fell short on the left.
/// Right overflow is checked first, so a bubble wider than the frame is pushed left.
pub fn compute_pointer_offset(
    bounds: Rect,
    visible_frame: Rect,
    anchor_screen_x: f64,
    layout_margin: f64,
) -> f64 {
    let overflow = visible_frame.x1 - bounds.x1 - anchor_screen_x - layout_margin;
    if overflow < 0.0 {
        return overflow;
    }

    let shortfall = visible_frame.x0 - bounds.x0 - anchor_screen_x + layout_margin;
    if shortfall > 0.0 {
        return shortfall;
    }

    0.0
}

/// Largest distance the notch may travel from the edge center before leaving the body.
///
/// The notch base spans `arrow_size * sqrt(2)`. Bubbles narrower than that yield 0.
pub fn max_arrow_offset(bubble_width: f64, arrow_size: f64) -> f64 {
    ((bubble_width - arrow_size * SQRT_2) / 2.0).max(0.0)
}

/// Clamp a raw notch offset (the negated pointer offset) to the bubble's physical extent.
pub fn compute_clamped_edge_offset(raw_offset: f64, bubble_width: f64, arrow_size: f64) -> f64 {
    let max = max_arrow_offset(bubble_width, arrow_size);
    raw_offset.clamp(-max, max)
}

/// Distance the notch tip protrudes past the bottom edge of the body.
///
/// Render passes lift the surface by this amount so the tip lands on the bottom of the bounds.
pub fn notch_protrusion(arrow_size: f64) -> f64 {
    arrow_size * SQRT_2 - arrow_size
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/pointer.rs"]
mod tests;
