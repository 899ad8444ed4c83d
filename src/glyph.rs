//! Base glyph — position, scale and symbol shared by every glyph variant.
//!
//! A glyph is built by the layout stage, asked to compute its size with
//! [`Glyph::do_layout`], then read by placement and paint. Scale and symbol
//! are fixed for the lifetime of the glyph; a different rendering mode means
//! a new glyph.

use serde::Serialize;

use crate::error::{GlyphError, GlyphResult};
use crate::symbol::MusicFontSymbol;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphBase {
    x: f64,
    y: f64,
    scale: f64,
    symbol: MusicFontSymbol,
    width: f64,
    height: f64,
}

impl GlyphBase {
    /// Fails with [`GlyphError::InvalidArgument`] unless `scale` is finite
    /// and positive. The symbol is only checked when painted.
    pub fn new(x: f64, y: f64, scale: f64, symbol: MusicFontSymbol) -> GlyphResult<Self> {
        check_scale(scale)?;
        Ok(Self {
            x,
            y,
            scale,
            symbol,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Reposition the glyph. Used by placement; layout never moves a glyph.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn symbol(&self) -> MusicFontSymbol {
        self.symbol
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn set_size(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }
}

pub(crate) fn check_scale(scale: f64) -> GlyphResult<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(GlyphError::invalid_argument("scale", scale))
    }
}

pub(crate) mod sealed {
    use super::GlyphBase;

    /// Mutable access to a glyph's base. Not nameable outside this crate.
    pub trait Sealed {
        fn base_mut(&mut self) -> &mut GlyphBase;
    }
}

/// A font-backed glyph that knows how to size itself.
///
/// Sealed: the variants live in [`crate::glyphs`]. Callers may move a glyph
/// but never change its scale or symbol.
pub trait Glyph: sealed::Sealed {
    fn base(&self) -> &GlyphBase;

    /// Compute `width` and `height`. Idempotent; touches nothing else.
    fn do_layout(&mut self);

    /// Reposition the glyph. Size, scale and symbol are untouched.
    fn move_to(&mut self, x: f64, y: f64) {
        self.base_mut().move_to(x, y);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.base_mut().translate(dx, dy);
    }

    fn x(&self) -> f64 {
        self.base().x()
    }

    fn y(&self) -> f64 {
        self.base().y()
    }

    fn position(&self) -> (f64, f64) {
        (self.base().x(), self.base().y())
    }

    fn scale(&self) -> f64 {
        self.base().scale()
    }

    fn symbol(&self) -> MusicFontSymbol {
        self.base().symbol()
    }

    /// Zero until [`Glyph::do_layout`] runs.
    fn width(&self) -> f64 {
        self.base().width()
    }

    fn height(&self) -> f64 {
        self.base().height()
    }
}
