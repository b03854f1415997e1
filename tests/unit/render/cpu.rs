use super::*;

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn oversized_or_empty_surfaces_are_rejected() {
    assert!(CpuSurface::new(70_000, 4, None).is_err());
    assert!(CpuSurface::new(4, 0, None).is_err());
}

#[test]
fn clear_color_fills_every_pixel() {
    let s = CpuSurface::new(4, 4, Some(Rgba8::rgba(0, 0, 255, 255))).unwrap();
    let frame = s.finish();
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    assert!(frame.premultiplied);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(px(&frame, x, y), [0, 0, 255, 255]);
        }
    }
}

#[test]
fn translated_fill_lands_where_expected() {
    let mut s = CpuSurface::new(16, 16, None).unwrap();
    s.save();
    s.translate(Vec2::new(8.0, 0.0));
    s.fill_path(&rect_path(0.0, 0.0, 8.0, 8.0), Rgba8::rgba(255, 0, 0, 255))
        .unwrap();
    s.restore().unwrap();
    let frame = s.finish();

    assert_eq!(px(&frame, 12, 4), [255, 0, 0, 255]);
    assert_eq!(px(&frame, 3, 4)[3], 0);
    assert_eq!(px(&frame, 12, 12)[3], 0);
}

#[test]
fn stroke_rejects_non_positive_width() {
    let mut s = CpuSurface::new(8, 8, None).unwrap();
    assert!(
        s.stroke_path(&rect_path(1.0, 1.0, 7.0, 7.0), 0.0, Rgba8::WHITE)
            .is_err()
    );
    s.stroke_path(&rect_path(1.0, 1.0, 7.0, 7.0), 2.0, Rgba8::WHITE)
        .unwrap();
    let frame = s.finish();
    assert_eq!(px(&frame, 1, 4)[3], 255);
    assert_eq!(px(&frame, 4, 4)[3], 0);
}

#[test]
fn empty_runs_are_skipped_and_fontless_runs_are_an_error() {
    let mut s = CpuSurface::new(8, 8, None).unwrap();
    let mut text = ShapedText {
        runs: vec![crate::ShapedRun {
            font: crate::FontData::new(parley::fontique::Blob::from(Vec::new()), 0),
            glyphs: Vec::new(),
        }],
        width: 0.0,
        font_size: 12.0,
    };
    s.draw_text(&text, Point::new(0.0, 6.0), Rgba8::WHITE)
        .unwrap();

    text.runs[0].glyphs.push(crate::ShapedGlyph {
        id: 3,
        x: 0.0,
        y: 0.0,
    });
    assert!(
        s.draw_text(&text, Point::new(0.0, 6.0), Rgba8::WHITE)
            .is_err()
    );
}

#[test]
fn into_straight_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 1,
        height: 2,
        data: vec![128, 0, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let straight = frame.into_straight();
    assert!(!straight.premultiplied);
    assert_eq!(&straight.data[..4], &[255, 0, 0, 128]);
    assert_eq!(&straight.data[4..], &[10, 20, 30, 255]);
}
