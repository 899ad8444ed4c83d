//! Accidental glyph.

use serde::{Deserialize, Serialize};

use crate::error::GlyphResult;
use crate::glyph::{sealed::Sealed, Glyph, GlyphBase};
use crate::sizing::SizingConstants;
use crate::symbol::MusicFontSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccidentalType {
    Sharp,
    Flat,
    Natural,
    DoubleSharp,
    #[serde(rename = "flat-flat")]
    DoubleFlat,
}

impl AccidentalType {
    /// Parse a MusicXML `<accidental>` value.
    pub fn from_musicxml(name: &str) -> Option<Self> {
        Some(match name {
            "sharp" => Self::Sharp,
            "flat" => Self::Flat,
            "natural" => Self::Natural,
            "double-sharp" | "sharp-sharp" => Self::DoubleSharp,
            "flat-flat" => Self::DoubleFlat,
            _ => return None,
        })
    }

    fn symbol(self) -> MusicFontSymbol {
        match self {
            Self::Sharp => MusicFontSymbol::AccidentalSharp,
            Self::Flat => MusicFontSymbol::AccidentalFlat,
            Self::Natural => MusicFontSymbol::AccidentalNatural,
            Self::DoubleSharp => MusicFontSymbol::AccidentalDoubleSharp,
            Self::DoubleFlat => MusicFontSymbol::AccidentalDoubleFlat,
        }
    }

    fn advance(self) -> f64 {
        match self {
            Self::Sharp => 8.0,
            Self::Flat => 7.0,
            Self::Natural => 6.0,
            Self::DoubleSharp => 8.0,
            Self::DoubleFlat => 13.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccidentalGlyph {
    base: GlyphBase,
    accidental: AccidentalType,
    note_head_height: f64,
}

impl AccidentalGlyph {
    pub fn new(
        x: f64,
        y: f64,
        accidental: AccidentalType,
        is_grace: bool,
        constants: &SizingConstants,
    ) -> GlyphResult<Self> {
        let scale = constants.grace_factor(is_grace)?;
        let note_head_height = constants.note_head_height()?;
        Ok(Self {
            base: GlyphBase::new(x, y, scale, accidental.symbol())?,
            accidental,
            note_head_height,
        })
    }

    pub fn accidental(&self) -> AccidentalType {
        self.accidental
    }
}

impl Sealed for AccidentalGlyph {
    fn base_mut(&mut self) -> &mut GlyphBase {
        &mut self.base
    }
}

impl Glyph for AccidentalGlyph {
    fn base(&self) -> &GlyphBase {
        &self.base
    }

    fn do_layout(&mut self) {
        let scale = self.base.scale();
        self.base
            .set_size(self.accidental.advance() * scale, self.note_head_height * scale);
    }
}
