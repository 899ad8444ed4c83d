//! Chinese cymbal glyph for percussion staves.

use crate::error::GlyphResult;
use crate::glyph::{check_scale, sealed::Sealed, Glyph, GlyphBase};
use crate::sizing::SizingConstants;
use crate::symbol::MusicFontSymbol;

/// Advance of the cymbal head at scale 1; wider than a black note head.
const CYMBAL_ADVANCE: f64 = 9.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChineseCymbalGlyph {
    base: GlyphBase,
    is_grace: bool,
    grace_factor: f64,
    note_head_height: f64,
}

impl ChineseCymbalGlyph {
    pub fn new(x: f64, y: f64, is_grace: bool, constants: &SizingConstants) -> GlyphResult<Self> {
        Self::with_scale(x, y, is_grace, 1.0, constants)
    }

    /// Like [`ChineseCymbalGlyph::new`] with an extra renderer scale folded
    /// into the instance scale.
    pub fn with_scale(
        x: f64,
        y: f64,
        is_grace: bool,
        base_scale: f64,
        constants: &SizingConstants,
    ) -> GlyphResult<Self> {
        check_scale(base_scale)?;
        let grace_factor = constants.grace_factor(is_grace)?;
        let note_head_height = constants.note_head_height()?;
        let base = GlyphBase::new(x, y, base_scale * grace_factor, MusicFontSymbol::NoteHarmonic)?;
        Ok(Self {
            base,
            is_grace,
            grace_factor,
            note_head_height,
        })
    }

    pub fn is_grace(&self) -> bool {
        self.is_grace
    }
}

impl Sealed for ChineseCymbalGlyph {
    fn base_mut(&mut self) -> &mut GlyphBase {
        &mut self.base
    }
}

impl Glyph for ChineseCymbalGlyph {
    fn base(&self) -> &GlyphBase {
        &self.base
    }

    fn do_layout(&mut self) {
        // The grace factor applies to the width twice: once through the
        // instance scale and once more here. Height tracks the note head
        // reference height and is scaled once.
        let scale = self.base.scale();
        let width = CYMBAL_ADVANCE * self.grace_factor * scale;
        let height = self.note_head_height * scale;
        self.base.set_size(width, height);
    }
}
