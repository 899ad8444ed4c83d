//! glyphlib — music-font glyph layout for the SoloBand Ultra score renderer.
//!
//! Glyphs are small value objects: construct one with a position and a grace
//! flag, call [`Glyph::do_layout`], then read `width`/`height` for placement.
//! Font-proportional constants come from an injected [`SizingConstants`].
//!
//! # Example
//! ```
//! use glyphlib::{ChineseCymbalGlyph, Glyph, SizingConstants};
//!
//! let constants = SizingConstants::standard();
//! let mut cymbal = ChineseCymbalGlyph::new(10.0, 20.0, false, &constants).unwrap();
//! cymbal.do_layout();
//! assert_eq!(cymbal.width(), 9.0);
//! assert_eq!(cymbal.height(), 8.0);
//! ```

pub mod catalog;
pub mod error;
pub mod glyph;
pub mod glyphs;
pub mod renderer;
pub mod sizing;
pub mod symbol;

pub use catalog::{FontCatalog, StaticCatalog, SymbolMetrics};
pub use error::{GlyphError, GlyphResult};
pub use glyph::{Glyph, GlyphBase};
pub use glyphs::*;
pub use renderer::{render_glyphs_to_svg, RenderOptions};
pub use sizing::SizingConstants;
pub use symbol::MusicFontSymbol;

// ═══════════════════════════════════════════════════════════════════════
// C FFI — plain C entry points for the static/dynamic library builds
// ═══════════════════════════════════════════════════════════════════════

/// Lay out a Chinese cymbal glyph with the standard sizing constants and
/// write its size to `out_width` / `out_height`.
///
/// Returns `false` if either out-pointer is null.
///
/// # Safety
/// `out_width` and `out_height` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn glyphlib_cymbal_layout(
    x: f64,
    y: f64,
    is_grace: bool,
    out_width: *mut f64,
    out_height: *mut f64,
) -> bool {
    if out_width.is_null() || out_height.is_null() {
        return false;
    }
    let mut glyph = match ChineseCymbalGlyph::new(x, y, is_grace, SizingConstants::shared()) {
        Ok(g) => g,
        Err(_) => return false,
    };
    glyph.do_layout();
    unsafe {
        *out_width = glyph.width();
        *out_height = glyph.height();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_cymbal_layout() {
        let (mut w, mut h) = (0.0, 0.0);
        let ok = unsafe { glyphlib_cymbal_layout(0.0, 0.0, true, &mut w, &mut h) };
        assert!(ok);
        assert!((w - 9.0 * 0.75 * 0.75).abs() < 1e-9);
        assert!((h - 6.0).abs() < 1e-9);
    }

    #[test]
    fn ffi_rejects_null() {
        let mut w = 0.0;
        let ok = unsafe { glyphlib_cymbal_layout(0.0, 0.0, false, &mut w, std::ptr::null_mut()) };
        assert!(!ok);
    }
}
