use super::*;

fn frame(left: f64, right: f64) -> Rect {
    Rect::new(left, 0.0, right, 800.0)
}

fn bubble(left: f64, right: f64) -> Rect {
    Rect::new(left, 0.0, right, 40.0)
}

#[test]
fn right_overflow_pushes_bubble_left() {
    let off = compute_pointer_offset(bubble(0.0, 100.0), frame(0.0, 1000.0), 950.0, 8.0);
    assert_eq!(off, -58.0);
}

#[test]
fn left_underflow_pushes_bubble_right() {
    let off = compute_pointer_offset(bubble(0.0, 100.0), frame(0.0, 1000.0), -50.0, 8.0);
    assert_eq!(off, 58.0);
}

#[test]
fn bubble_inside_margins_is_not_moved() {
    for anchor_x in [8.0, 100.0, 500.0, 892.0] {
        let off = compute_pointer_offset(bubble(0.0, 100.0), frame(0.0, 1000.0), anchor_x, 8.0);
        assert_eq!(off, 0.0, "anchor_x={anchor_x}");
    }
}

#[test]
fn exact_margin_contact_counts_as_fitting() {
    let off = compute_pointer_offset(bubble(0.0, 100.0), frame(0.0, 1000.0), 892.0, 8.0);
    assert_eq!(off, 0.0);
    let off = compute_pointer_offset(bubble(0.0, 100.0), frame(0.0, 1000.0), 8.0, 8.0);
    assert_eq!(off, 0.0);
}

#[test]
fn right_overflow_wins_when_bubble_is_wider_than_frame() {
    let off = compute_pointer_offset(bubble(0.0, 300.0), frame(0.0, 200.0), 0.0, 10.0);
    assert_eq!(off, 200.0 - 300.0 - 10.0);
}

#[test]
fn offset_frame_origin_is_respected() {
    // Visible frame starting below a 24px system bar on the left.
    let off = compute_pointer_offset(bubble(-50.0, 50.0), frame(24.0, 1000.0), 40.0, 0.0);
    assert_eq!(off, 24.0 + 50.0 - 40.0);
}

#[test]
fn clamped_edge_offset_never_leaves_the_body() {
    for width in [20.0, 57.0, 100.0, 333.0] {
        for arrow in [0.0, 4.0, 14.0] {
            let arrow: f64 = arrow;
            if arrow * std::f64::consts::SQRT_2 > width {
                continue;
            }
            let bound = (width - arrow * std::f64::consts::SQRT_2) / 2.0;
            for raw in [-1e6, -120.0, -3.5, 0.0, 7.25, 58.0, 1e6] {
                let out = compute_clamped_edge_offset(raw, width, arrow);
                assert!(out.abs() <= bound + 1e-9, "w={width} a={arrow} raw={raw}");
            }
        }
    }
}

#[test]
fn clamped_edge_offset_passes_small_offsets_through() {
    assert_eq!(compute_clamped_edge_offset(12.0, 200.0, 10.0), 12.0);
    assert_eq!(compute_clamped_edge_offset(-12.0, 200.0, 10.0), -12.0);
}

#[test]
fn notch_wider_than_bubble_pins_to_center() {
    assert_eq!(max_arrow_offset(10.0, 14.0), 0.0);
    assert_eq!(compute_clamped_edge_offset(30.0, 10.0, 14.0), 0.0);
    assert_eq!(compute_clamped_edge_offset(-30.0, 10.0, 14.0), 0.0);
}

#[test]
fn notch_protrusion_matches_rotated_square() {
    assert_eq!(notch_protrusion(0.0), 0.0);
    let p = notch_protrusion(10.0);
    assert!((p - (10.0 * std::f64::consts::SQRT_2 - 10.0)).abs() < 1e-12);
}
