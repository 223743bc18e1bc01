//! Hex color parse failures.

use std::fmt;

/// Why a string did not parse as an [`Rgba`](super::Rgba).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count (after stripping `#`) was not 3, 6 or 8
    InvalidLength(usize),
    /// Character at `position` among the digits is not hexadecimal
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "expected 3, 6 or 8 hex digits, got {len}")
            }
            ParseColorError::InvalidDigit { position, found } => {
                write!(f, "{found:?} at position {position} is not a hex digit")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
