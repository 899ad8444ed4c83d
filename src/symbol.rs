//! Music font symbol identifiers.
//!
//! Each symbol carries its SMuFL glyph name and private-use code point. The
//! name doubles as the key used by font catalogs (see [`crate::catalog`]).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MusicFontSymbol {
    #[serde(rename = "noteheadDoubleWhole")]
    NoteheadDoubleWhole,
    #[serde(rename = "noteheadWhole")]
    NoteheadWhole,
    #[serde(rename = "noteheadHalf")]
    NoteheadHalf,
    #[serde(rename = "noteheadBlack")]
    NoteheadBlack,
    /// Diamond note head, also used for cymbals on percussion staves.
    #[serde(rename = "noteheadDiamondHalf")]
    NoteHarmonic,
    #[serde(rename = "accidentalFlat")]
    AccidentalFlat,
    #[serde(rename = "accidentalNatural")]
    AccidentalNatural,
    #[serde(rename = "accidentalSharp")]
    AccidentalSharp,
    #[serde(rename = "accidentalDoubleSharp")]
    AccidentalDoubleSharp,
    #[serde(rename = "accidentalDoubleFlat")]
    AccidentalDoubleFlat,
}

impl MusicFontSymbol {
    pub const ALL: [MusicFontSymbol; 10] = [
        Self::NoteheadDoubleWhole,
        Self::NoteheadWhole,
        Self::NoteheadHalf,
        Self::NoteheadBlack,
        Self::NoteHarmonic,
        Self::AccidentalFlat,
        Self::AccidentalNatural,
        Self::AccidentalSharp,
        Self::AccidentalDoubleSharp,
        Self::AccidentalDoubleFlat,
    ];

    /// SMuFL glyph name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoteheadDoubleWhole => "noteheadDoubleWhole",
            Self::NoteheadWhole => "noteheadWhole",
            Self::NoteheadHalf => "noteheadHalf",
            Self::NoteheadBlack => "noteheadBlack",
            Self::NoteHarmonic => "noteheadDiamondHalf",
            Self::AccidentalFlat => "accidentalFlat",
            Self::AccidentalNatural => "accidentalNatural",
            Self::AccidentalSharp => "accidentalSharp",
            Self::AccidentalDoubleSharp => "accidentalDoubleSharp",
            Self::AccidentalDoubleFlat => "accidentalDoubleFlat",
        }
    }

    /// SMuFL code point (Private Use Area).
    pub fn code_point(self) -> u32 {
        match self {
            Self::NoteheadDoubleWhole => 0xE0A0,
            Self::NoteheadWhole => 0xE0A2,
            Self::NoteheadHalf => 0xE0A3,
            Self::NoteheadBlack => 0xE0A4,
            Self::NoteHarmonic => 0xE0D9,
            Self::AccidentalFlat => 0xE260,
            Self::AccidentalNatural => 0xE261,
            Self::AccidentalSharp => 0xE262,
            Self::AccidentalDoubleSharp => 0xE263,
            Self::AccidentalDoubleFlat => 0xE264,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for MusicFontSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
