//! Note head glyph.

use serde::{Deserialize, Serialize};

use crate::error::GlyphResult;
use crate::glyph::{sealed::Sealed, Glyph, GlyphBase};
use crate::sizing::SizingConstants;
use crate::symbol::MusicFontSymbol;

const DOUBLE_WHOLE_WIDTH: f64 = 16.0;
const WHOLE_WIDTH: f64 = 14.0;
const QUARTER_NOTE_HEAD_WIDTH: f64 = 8.0;

/// Written note value, using MusicXML `<type>` names for (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "breve")]
    DoubleWhole,
    #[serde(rename = "whole")]
    Whole,
    #[serde(rename = "half")]
    Half,
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "eighth")]
    Eighth,
    #[serde(rename = "16th")]
    Sixteenth,
    #[serde(rename = "32nd")]
    ThirtySecond,
    #[serde(rename = "64th")]
    SixtyFourth,
}

impl Duration {
    /// Parse a MusicXML note type.
    pub fn from_musicxml(note_type: &str) -> Option<Self> {
        Some(match note_type {
            "breve" => Self::DoubleWhole,
            "whole" => Self::Whole,
            "half" => Self::Half,
            "quarter" => Self::Quarter,
            "eighth" => Self::Eighth,
            "16th" => Self::Sixteenth,
            "32nd" => Self::ThirtySecond,
            "64th" => Self::SixtyFourth,
            _ => return None,
        })
    }

    fn note_head(self) -> MusicFontSymbol {
        match self {
            Self::DoubleWhole => MusicFontSymbol::NoteheadDoubleWhole,
            Self::Whole => MusicFontSymbol::NoteheadWhole,
            Self::Half => MusicFontSymbol::NoteheadHalf,
            _ => MusicFontSymbol::NoteheadBlack,
        }
    }

    fn note_head_width(self) -> f64 {
        match self {
            Self::DoubleWhole => DOUBLE_WHOLE_WIDTH,
            Self::Whole => WHOLE_WIDTH,
            _ => QUARTER_NOTE_HEAD_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteHeadGlyph {
    base: GlyphBase,
    duration: Duration,
    is_grace: bool,
    note_head_height: f64,
}

impl NoteHeadGlyph {
    pub fn new(
        x: f64,
        y: f64,
        duration: Duration,
        is_grace: bool,
        constants: &SizingConstants,
    ) -> GlyphResult<Self> {
        let scale = constants.grace_factor(is_grace)?;
        let note_head_height = constants.note_head_height()?;
        Ok(Self {
            base: GlyphBase::new(x, y, scale, duration.note_head())?,
            duration,
            is_grace,
            note_head_height,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_grace(&self) -> bool {
        self.is_grace
    }
}

impl Sealed for NoteHeadGlyph {
    fn base_mut(&mut self) -> &mut GlyphBase {
        &mut self.base
    }
}

impl Glyph for NoteHeadGlyph {
    fn base(&self) -> &GlyphBase {
        &self.base
    }

    fn do_layout(&mut self) {
        let scale = self.base.scale();
        let width = self.duration.note_head_width() * scale;
        self.base.set_size(width, self.note_head_height * scale);
    }
}
