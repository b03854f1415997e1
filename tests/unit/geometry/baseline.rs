use super::*;

#[test]
fn center_from_baseline_averages_signed_metrics() {
    assert_eq!(compute_text_center_from_baseline(-20.0, 5.0), -7.5);
    assert_eq!(FontMetrics::new(-20.0, 5.0).center_from_baseline(), -7.5);
}

#[test]
fn draw_origin_moves_baseline_below_center() {
    assert_eq!(compute_text_draw_origin_y(50.0, -20.0, 5.0), 57.5);
}

#[test]
fn symmetric_metrics_put_baseline_on_center() {
    assert_eq!(compute_text_draw_origin_y(12.0, -6.0, 6.0), 12.0);
}

#[test]
fn intrinsic_width_uses_padding_on_both_sides() {
    assert_eq!(intrinsic_width(12.0, 40.0, 32.0), 64.0);
    assert_eq!(intrinsic_width(0.0, 10.0, 32.0), 32.0);
    assert_eq!(intrinsic_width(4.0, 0.0, 0.0), 8.0);
}

#[test]
fn intrinsic_height_falls_back_to_font_size() {
    assert_eq!(intrinsic_height(14.0, 32.0), 32.0);
    assert_eq!(intrinsic_height(40.0, 32.0), 40.0);
}
