use super::*;

fn square() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((10.0, 0.0));
    p.line_to((10.0, 10.0));
    p.close_path();
    p
}

#[test]
fn save_restore_scopes_translation() {
    let mut s = RecordingSurface::new();
    s.save();
    s.translate(Vec2::new(5.0, -2.0));
    s.fill_path(&square(), Rgba8::WHITE).unwrap();
    s.restore().unwrap();
    s.fill_path(&square(), Rgba8::WHITE).unwrap();

    let ops = s.ops();
    assert_eq!(ops.len(), 2);
    let SurfaceOp::Fill { transform, .. } = &ops[0] else {
        panic!("expected fill");
    };
    assert_eq!(*transform, Affine::translate(Vec2::new(5.0, -2.0)));
    let SurfaceOp::Fill { transform, .. } = &ops[1] else {
        panic!("expected fill");
    };
    assert_eq!(*transform, Affine::IDENTITY);
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn translations_accumulate() {
    let mut s = RecordingSurface::new();
    s.translate(Vec2::new(1.0, 2.0));
    s.translate(Vec2::new(3.0, 4.0));
    assert_eq!(s.transform(), Affine::translate(Vec2::new(4.0, 6.0)));
}

#[test]
fn unbalanced_restore_is_an_error() {
    let mut s = RecordingSurface::new();
    let err = s.restore().unwrap_err();
    assert!(err.to_string().contains("restore without matching save"));
}

#[test]
fn text_records_width_and_glyph_count() {
    let mut s = RecordingSurface::new();
    let run = crate::ShapedRun {
        font: crate::FontData::new(parley::fontique::Blob::from(Vec::new()), 0),
        glyphs: vec![
            crate::ShapedGlyph {
                id: 1,
                x: 0.0,
                y: 0.0,
            };
            2
        ],
    };
    let mut second = run.clone();
    second.glyphs.truncate(1);
    let text = ShapedText {
        runs: vec![run, second],
        width: 21.0,
        font_size: 12.0,
    };
    s.draw_text(&text, Point::new(4.0, 9.0), Rgba8::WHITE)
        .unwrap();
    assert_eq!(
        s.ops()[0],
        SurfaceOp::Text {
            origin: Point::new(4.0, 9.0),
            transform: Affine::IDENTITY,
            width: 21.0,
            glyphs: 3,
            color: Rgba8::WHITE,
        }
    );
}
