//! Concrete glyph variants.

mod accidental;
mod cymbal;
mod note_head;

pub use accidental::{AccidentalGlyph, AccidentalType};
pub use cymbal::ChineseCymbalGlyph;
pub use note_head::{Duration, NoteHeadGlyph};

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
