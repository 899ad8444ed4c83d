//! Glyph renderer — lays out glyphs and paints them into SVG.
//!
//! This is a reference paint stage: it gives every glyph its layout pass,
//! sizes the canvas to fit, and draws each glyph as music-font text. Symbols
//! the catalog cannot resolve are replaced by an outlined placeholder box.

mod constants;
mod svg_builder;

use serde::{Deserialize, Serialize};

use crate::catalog::FontCatalog;
use crate::error::{GlyphError, GlyphResult};
use crate::glyph::Glyph;
use constants::*;
use svg_builder::{empty_svg, glyph_box, SvgBuilder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Space around the glyphs' combined bounding box.
    pub padding: f64,
    /// Outline every glyph's layout box.
    pub show_bounds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            show_bounds: false,
        }
    }
}

/// Lay out and paint `glyphs` into a self-contained SVG string.
///
/// Fails only on invalid options; unresolved symbols are drawn as
/// placeholders.
#[tracing::instrument(skip_all, fields(glyphs = glyphs.len()))]
pub fn render_glyphs_to_svg(
    glyphs: &mut [Box<dyn Glyph>],
    catalog: &dyn FontCatalog,
    options: &RenderOptions,
) -> GlyphResult<String> {
    if !options.padding.is_finite() || options.padding < 0.0 {
        return Err(GlyphError::invalid_argument("padding", options.padding));
    }
    if glyphs.is_empty() {
        return Ok(empty_svg("No glyphs"));
    }

    for glyph in glyphs.iter_mut() {
        glyph.do_layout();
    }

    let (min_x, min_y, max_x, max_y) = glyphs.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), g| {
            let (x, y, w, h) = glyph_box(g.as_ref());
            (x0.min(x), y0.min(y), x1.max(x + w), y1.max(y + h))
        },
    );
    let pad = options.padding;
    let mut svg = SvgBuilder::new(
        min_x - pad,
        min_y - pad,
        max_x - min_x + 2.0 * pad,
        max_y - min_y + 2.0 * pad,
    );

    for glyph in glyphs.iter() {
        let glyph = glyph.as_ref();
        match svg.glyph(glyph, catalog) {
            Ok(()) => {}
            Err(GlyphError::UnresolvedSymbol(symbol)) => {
                tracing::warn!(%symbol, x = glyph.x(), y = glyph.y(), "unresolved symbol, drawing placeholder");
                svg.placeholder(glyph);
            }
            Err(e) => return Err(e),
        }
        if options.show_bounds {
            svg.bounds(glyph);
        }
    }

    Ok(svg.build())
}
