//! Font symbol catalog — maps symbols to font metrics.
//!
//! Layout never consults the catalog; the paint stage does, which is where an
//! unknown symbol surfaces as [`GlyphError::UnresolvedSymbol`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{GlyphError, GlyphResult};
use crate::symbol::MusicFontSymbol;

/// Metrics of a single font glyph, in layout units at scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMetrics {
    pub advance_units: f64,
    pub natural_height: f64,
}

pub trait FontCatalog {
    fn resolve(&self, symbol: MusicFontSymbol) -> GlyphResult<SymbolMetrics>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    metrics: HashMap<MusicFontSymbol, SymbolMetrics>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics for every symbol this crate knows, matching the Bravura font.
    pub fn bravura_subset() -> Self {
        use MusicFontSymbol::*;
        let table = [
            (NoteheadDoubleWhole, 16.0, 8.0),
            (NoteheadWhole, 14.0, 8.0),
            (NoteheadHalf, 8.0, 8.0),
            (NoteheadBlack, 8.0, 8.0),
            (NoteHarmonic, 9.0, 9.0),
            (AccidentalFlat, 7.0, 14.0),
            (AccidentalNatural, 6.0, 20.0),
            (AccidentalSharp, 8.0, 20.0),
            (AccidentalDoubleSharp, 8.0, 8.0),
            (AccidentalDoubleFlat, 13.0, 14.0),
        ];
        let mut catalog = Self::new();
        for (symbol, advance_units, natural_height) in table {
            catalog.metrics.insert(
                symbol,
                SymbolMetrics {
                    advance_units,
                    natural_height,
                },
            );
        }
        catalog
    }

    pub fn insert(&mut self, symbol: MusicFontSymbol, metrics: SymbolMetrics) -> GlyphResult<()> {
        validate(symbol, &metrics)?;
        self.metrics.insert(symbol, metrics);
        Ok(())
    }

    /// Load a catalog from a JSON object keyed by SMuFL glyph name:
    ///
    /// ```json
    /// { "noteheadBlack": { "advanceUnits": 8, "naturalHeight": 8 } }
    /// ```
    ///
    /// Names this crate has no symbol for are skipped.
    pub fn from_json(json: &str) -> GlyphResult<Self> {
        let raw: BTreeMap<String, SymbolMetrics> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (name, metrics) in raw {
            match MusicFontSymbol::from_name(&name) {
                Some(symbol) => catalog.insert(symbol, metrics)?,
                None => tracing::debug!(%name, "skipping unknown glyph name"),
            }
        }
        tracing::debug!(count = catalog.len(), "loaded font catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl FontCatalog for StaticCatalog {
    fn resolve(&self, symbol: MusicFontSymbol) -> GlyphResult<SymbolMetrics> {
        self.metrics
            .get(&symbol)
            .copied()
            .ok_or(GlyphError::UnresolvedSymbol(symbol))
    }
}

fn validate(symbol: MusicFontSymbol, metrics: &SymbolMetrics) -> GlyphResult<()> {
    let checks = [
        ("advanceUnits", metrics.advance_units),
        ("naturalHeight", metrics.natural_height),
    ];
    for (field, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(GlyphError::invalid_argument(format!("{symbol}.{field}"), value));
        }
    }
    Ok(())
}
