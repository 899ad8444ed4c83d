//! Sizing constants registry.
//!
//! Font-proportional constants shared by every glyph variant. A registry is
//! immutable once built; glyph constructors take it by reference so tests can
//! substitute alternate sets.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{GlyphError, GlyphResult};

/// Multiplier (< 1) for miniature grace/cue renderings.
pub const GRACE_SCALE: &str = "graceScale";
/// Reference height of a note head, used by every glyph that must align
/// vertically with note heads.
pub const NOTE_HEAD_HEIGHT: &str = "noteHeadHeight";

const STANDARD: [(&str, f64); 2] = [(GRACE_SCALE, 0.75), (NOTE_HEAD_HEIGHT, 8.0)];

#[derive(Debug, Clone, PartialEq)]
pub struct SizingConstants {
    values: BTreeMap<String, f64>,
}

impl SizingConstants {
    /// The standard notation proportions.
    pub fn standard() -> Self {
        Self {
            values: STANDARD
                .iter()
                .map(|&(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Process-wide standard set, built on first use.
    pub fn shared() -> &'static SizingConstants {
        static SHARED: OnceLock<SizingConstants> = OnceLock::new();
        SHARED.get_or_init(Self::standard)
    }

    /// Build a registry from explicit entries. Every value must be finite and
    /// positive; the grace scale must also be below 1.
    pub fn from_entries<I, K>(entries: I) -> GlyphResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (name, value) in entries {
            let name = name.into();
            if !value.is_finite() || value <= 0.0 {
                return Err(GlyphError::invalid_argument(name, value));
            }
            if name == GRACE_SCALE && value >= 1.0 {
                return Err(GlyphError::invalid_argument(name, value));
            }
            values.insert(name, value);
        }
        Ok(Self { values })
    }

    /// Parse a flat JSON object of `name: number` pairs.
    pub fn from_json(json: &str) -> GlyphResult<Self> {
        let entries: BTreeMap<String, f64> = serde_json::from_str(json)?;
        let constants = Self::from_entries(entries)?;
        tracing::debug!(count = constants.values.len(), "loaded sizing constants");
        Ok(constants)
    }

    pub fn get(&self, name: &str) -> GlyphResult<f64> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| GlyphError::UnknownConstant(name.to_string()))
    }

    pub fn grace_scale(&self) -> GlyphResult<f64> {
        self.get(GRACE_SCALE)
    }

    pub fn note_head_height(&self) -> GlyphResult<f64> {
        self.get(NOTE_HEAD_HEIGHT)
    }

    /// Instance scale for a glyph: the grace scale in grace mode, else 1.
    pub(crate) fn grace_factor(&self, is_grace: bool) -> GlyphResult<f64> {
        if is_grace {
            self.grace_scale()
        } else {
            Ok(1.0)
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Default for SizingConstants {
    fn default() -> Self {
        Self::standard()
    }
}
