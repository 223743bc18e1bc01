use color_math::ParseColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RampError {
    #[error("Palette index {index} out of range (palette has {len} colors)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Ramp table has {actual} entries, palette has {expected} colors")]
    RampTableLength { expected: usize, actual: usize },

    #[error("Ramp row {index} has base {base}; the base slot must be the entry itself")]
    RampBaseMismatch { index: usize, base: usize },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for RampError {
    fn from(e: serde_yaml::Error) -> Self {
        RampError::Config(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("Palette cannot be empty")]
    Empty,

    #[error("Palette too large: {len} colors (max 65536)")]
    TooManyColors { len: usize },

    #[error("Invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
