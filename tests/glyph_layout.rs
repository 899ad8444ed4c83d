//! Layout contract tests — public API only.

use glyphlib::{
    AccidentalGlyph, AccidentalType, ChineseCymbalGlyph, Duration, Glyph, GlyphBase, GlyphError,
    MusicFontSymbol, NoteHeadGlyph, SizingConstants,
};
use pretty_assertions::assert_eq;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Grace scale 0.7, note head height 10.
fn test_constants() -> SizingConstants {
    SizingConstants::from_json(r#"{ "graceScale": 0.7, "noteHeadHeight": 10 }"#)
        .expect("valid constants")
}

fn laid_out(is_grace: bool, base_scale: f64, constants: &SizingConstants) -> ChineseCymbalGlyph {
    let mut g = ChineseCymbalGlyph::with_scale(0.0, 0.0, is_grace, base_scale, constants)
        .expect("valid cymbal");
    g.do_layout();
    g
}

// ─── Concrete scenario ──────────────────────────────────────────────

#[test]
fn cymbal_normal_mode() {
    let g = laid_out(false, 1.0, &test_constants());
    assert!(approx(g.width(), 9.0), "width {}", g.width());
    assert!(approx(g.height(), 10.0), "height {}", g.height());
}

#[test]
fn cymbal_grace_mode() {
    let g = laid_out(true, 1.0, &test_constants());
    assert!(approx(g.width(), 4.41), "width {}", g.width());
    assert!(approx(g.height(), 7.0), "height {}", g.height());
}

// ─── Properties ─────────────────────────────────────────────────────

#[test]
fn layout_is_idempotent() {
    let c = test_constants();
    for is_grace in [false, true] {
        for scale in [0.25, 1.0, 3.5] {
            let mut g = laid_out(is_grace, scale, &c);
            let before = (g.position(), g.scale(), g.width(), g.height());
            g.do_layout();
            g.do_layout();
            assert_eq!((g.position(), g.scale(), g.width(), g.height()), before);
        }
    }
}

#[test]
fn height_scales_linearly() {
    let c = test_constants();
    for is_grace in [false, true] {
        for k in [0.5, 1.0, 2.25] {
            let single = laid_out(is_grace, k, &c);
            let double = laid_out(is_grace, 2.0 * k, &c);
            assert!(approx(double.height(), 2.0 * single.height()));
        }
    }
}

#[test]
fn grace_width_is_smaller() {
    for c in [test_constants(), SizingConstants::standard()] {
        for scale in [0.5, 1.0, 4.0] {
            let grace = laid_out(true, scale, &c);
            let normal = laid_out(false, scale, &c);
            assert!(grace.width() < normal.width());
        }
    }
}

#[test]
fn non_positive_scale_is_invalid_argument() {
    for scale in [0.0, -1.0, -0.001] {
        let base = GlyphBase::new(0.0, 0.0, scale, MusicFontSymbol::NoteHarmonic);
        assert!(matches!(base, Err(GlyphError::InvalidArgument { .. })));

        let cymbal = ChineseCymbalGlyph::with_scale(0.0, 0.0, false, scale, &test_constants());
        assert!(matches!(cymbal, Err(GlyphError::InvalidArgument { .. })));
    }
}

#[test]
fn unknown_constant_is_an_error() {
    let c = test_constants();
    assert_eq!(
        c.get("beamThickness"),
        Err(GlyphError::UnknownConstant("beamThickness".to_string()))
    );
}

#[test]
fn missing_note_head_height_fails_construction() {
    let c = SizingConstants::from_entries([("graceScale", 0.7)]).unwrap();
    assert_eq!(
        NoteHeadGlyph::new(0.0, 0.0, Duration::Quarter, false, &c).unwrap_err(),
        GlyphError::UnknownConstant("noteHeadHeight".to_string())
    );
}

// ─── Glyph family alignment ─────────────────────────────────────────

#[test]
fn heights_align_across_glyph_family() {
    let c = test_constants();
    for is_grace in [false, true] {
        let mut glyphs: Vec<Box<dyn Glyph>> = vec![
            Box::new(ChineseCymbalGlyph::new(0.0, 0.0, is_grace, &c).unwrap()),
            Box::new(NoteHeadGlyph::new(0.0, 0.0, Duration::Quarter, is_grace, &c).unwrap()),
            Box::new(NoteHeadGlyph::new(0.0, 0.0, Duration::Whole, is_grace, &c).unwrap()),
            Box::new(
                AccidentalGlyph::new(0.0, 0.0, AccidentalType::Sharp, is_grace, &c).unwrap(),
            ),
        ];
        for g in glyphs.iter_mut() {
            g.do_layout();
        }
        let h = glyphs[0].height();
        assert!(glyphs.iter().all(|g| approx(g.height(), h)));
        assert!(glyphs.iter().all(|g| g.width() > 0.0));
    }
}

#[test]
fn placement_may_move_a_glyph() {
    let c = SizingConstants::standard();
    let mut g = NoteHeadGlyph::new(0.0, 0.0, Duration::Half, false, &c).unwrap();
    g.do_layout();
    let size = (g.width(), g.height());
    g.translate(15.0, -4.0);
    assert_eq!(g.position(), (15.0, -4.0));
    g.do_layout();
    assert_eq!((g.width(), g.height()), size);
}

#[test]
fn placement_keeps_scale_and_symbol() {
    let c = test_constants();
    let mut glyphs: Vec<Box<dyn Glyph>> = vec![
        Box::new(ChineseCymbalGlyph::new(0.0, 0.0, true, &c).unwrap()),
        Box::new(NoteHeadGlyph::new(0.0, 0.0, Duration::Quarter, false, &c).unwrap()),
    ];
    for g in glyphs.iter_mut() {
        g.do_layout();
        let before = (g.scale(), g.symbol(), g.width(), g.height());
        g.move_to(100.0, 50.0);
        g.translate(-10.0, 5.0);
        g.do_layout();
        assert_eq!(g.position(), (90.0, 55.0));
        assert_eq!((g.scale(), g.symbol(), g.width(), g.height()), before);
    }
    assert_eq!(glyphs[0].symbol(), MusicFontSymbol::NoteHarmonic);
    assert!(approx(glyphs[0].width(), 4.41));
}
