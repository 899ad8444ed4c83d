//! Shared constants for the glyph paint stage (all in SVG user units).

// ── Music font ──────────────────────────────────────────────────────
pub(super) const MUSIC_FONT_FAMILY: &str = "Bravura";
pub(super) const MUSIC_FONT_SIZE: f64 = 32.0; // one staff height at glyph scale 1

// ── Page ────────────────────────────────────────────────────────────
pub(super) const DEFAULT_PADDING: f64 = 10.0;
pub(super) const MIN_CANVAS_SIZE: f64 = 0.001; // smallest width/height written to the SVG

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const NOTE_COLOR: &str = "#1a1a1a";
pub(super) const BOUNDS_COLOR: &str = "#4a4a9a";
pub(super) const PLACEHOLDER_COLOR: &str = "#cc3333";
pub(super) const BOUNDS_STROKE_WIDTH: f64 = 0.5;
