//! SVG builder — accumulates SVG elements and produces the final string.

use super::constants::*;
use crate::catalog::FontCatalog;
use crate::error::GlyphResult;
use crate::glyph::Glyph;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    /// A builder whose viewBox starts at (`origin_x`, `origin_y`), so glyphs
    /// can be painted in their own coordinates.
    pub(super) fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            origin_x,
            origin_y,
            width: width.max(MIN_CANVAS_SIZE),
            height: height.max(MIN_CANVAS_SIZE),
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}" width="{:.3}" height="{:.3}">"#,
            self.origin_x, self.origin_y, self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, fill, stroke, stroke_width
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    /// Paint a laid-out glyph as music-font text.
    ///
    /// The glyph's `x` is its left edge and `y` its vertical center (the
    /// SMuFL baseline). When layout compacted the glyph relative to the
    /// font's own advance, the text is stretched horizontally to match.
    pub(super) fn glyph(&mut self, glyph: &dyn Glyph, catalog: &dyn FontCatalog) -> GlyphResult<()> {
        let metrics = catalog.resolve(glyph.symbol())?;
        let font_size = MUSIC_FONT_SIZE * glyph.scale();
        let natural_width = metrics.advance_units * glyph.scale();
        let sx = if natural_width > 0.0 {
            glyph.width() / natural_width
        } else {
            1.0
        };

        let text = format!(
            r#"font-family="{}" font-size="{:.3}" fill="{}">&#x{:X};</text>"#,
            MUSIC_FONT_FAMILY,
            font_size,
            NOTE_COLOR,
            glyph.symbol().code_point()
        );
        if (sx - 1.0).abs() > 1e-6 {
            self.elements.push(format!(
                r#"<text transform="translate({:.1},{:.1}) scale({:.3},1)" {}"#,
                glyph.x(),
                glyph.y(),
                sx,
                text
            ));
        } else {
            self.elements.push(format!(
                r#"<text x="{:.1}" y="{:.1}" {}"#,
                glyph.x(),
                glyph.y(),
                text
            ));
        }
        Ok(())
    }

    /// Stand-in for a glyph whose symbol could not be resolved.
    pub(super) fn placeholder(&mut self, glyph: &dyn Glyph) {
        let (x, y, w, h) = glyph_box(glyph);
        self.rect(x, y, w, h, "none", PLACEHOLDER_COLOR, BOUNDS_STROKE_WIDTH);
    }

    pub(super) fn bounds(&mut self, glyph: &dyn Glyph) {
        let (x, y, w, h) = glyph_box(glyph);
        self.rect(x, y, w, h, "none", BOUNDS_COLOR, BOUNDS_STROKE_WIDTH);
    }
}

/// Bounding box `(x, y, width, height)` of a laid-out glyph.
pub(super) fn glyph_box(glyph: &dyn Glyph) -> (f64, f64, f64, f64) {
    (
        glyph.x(),
        glyph.y() - glyph.height() / 2.0,
        glyph.width(),
        glyph.height(),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        message
    )
}
