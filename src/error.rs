//! Error taxonomy shared by the glyph layout core.

use crate::symbol::MusicFontSymbol;

pub type GlyphResult<T> = Result<T, GlyphError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GlyphError {
    /// A construction parameter is out of range (e.g. a non-positive scale).
    #[error("invalid argument: {name} = {value}")]
    InvalidArgument { name: String, value: f64 },

    /// The font catalog has no metrics for this symbol. Raised at paint time.
    #[error("unresolved symbol: {0}")]
    UnresolvedSymbol(MusicFontSymbol),

    /// A sizing constant was requested that the registry does not hold.
    #[error("unknown constant: {0}")]
    UnknownConstant(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GlyphError {
    pub fn invalid_argument(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            value,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for GlyphError {
    fn from(e: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(GlyphError::invalid_argument("scale", 0.0)
            .to_string()
            .starts_with("invalid argument: scale"));
        assert!(GlyphError::UnresolvedSymbol(MusicFontSymbol::NoteHarmonic)
            .to_string()
            .contains("noteheadDiamondHalf"));
        assert!(GlyphError::UnknownConstant("x".into())
            .to_string()
            .contains("unknown constant: x"));
        assert!(GlyphError::config("x")
            .to_string()
            .contains("configuration error:"));
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: GlyphError = serde_json::from_str::<f64>("nope").unwrap_err().into();
        assert!(matches!(err, GlyphError::Config(_)));
    }
}
