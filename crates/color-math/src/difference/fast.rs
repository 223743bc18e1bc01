//! Integer luma/chroma transform for coarse matching
//!
//! A YCoCg-like split of an 8-bit color into one luma and two chroma axes,
//! all integers. The luma discounts highly saturated colors so that two very
//! different hues at the same apparent brightness land on similar luma.

use crate::color::Rgba;

/// Fast luma/chroma triple.
///
/// - `luma`: 0..=62 for any 8-bit color
/// - `warm`: `r - b`, -255..=255
/// - `mild`: `g - (b + warm / 2)`, -255..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LumaChroma {
    pub luma: i32,
    pub warm: i32,
    pub mild: i32,
}

impl LumaChroma {
    #[inline]
    pub const fn new(luma: i32, warm: i32, mild: i32) -> Self {
        Self { luma, warm, mild }
    }

    /// [`fast_difference`] between two triples.
    #[inline]
    pub fn difference(self, other: LumaChroma) -> i32 {
        fast_difference(
            self.luma, self.warm, self.mild, other.luma, other.warm, other.mild,
        )
    }
}

impl From<Rgba> for LumaChroma {
    /// Alpha is ignored.
    #[inline]
    fn from(color: Rgba) -> Self {
        fast_luma_chroma(color.r(), color.g(), color.b())
    }
}

/// Split an 8-bit color into the fast luma/chroma triple.
///
/// # Example
///
/// ```
/// use color_math::fast_luma_chroma;
///
/// let white = fast_luma_chroma(255, 255, 255);
/// assert_eq!((white.luma, white.warm, white.mild), (62, 0, 0));
/// ```
#[inline]
pub fn fast_luma_chroma(r: u8, g: u8, b: u8) -> LumaChroma {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let warm = r - b;
    let mild = g - (b + warm / 2);
    let spread = r.max(g).max(b) - r.min(g).min(b);
    let luma = (r * 0x9C + g * 0xF6 + b * 0x65 + 0x18 - spread * 0x19) >> 11;
    LumaChroma { luma, warm, mild }
}

/// Squared difference weighting luma against chroma 4:3.
///
/// Formula: `4 * dLuma² + 3 * (dWarm² + dMild²)`
#[inline]
pub fn fast_difference(
    luma1: i32,
    warm1: i32,
    mild1: i32,
    luma2: i32,
    warm2: i32,
    mild2: i32,
) -> i32 {
    let dy = luma1 - luma2;
    let dw = warm1 - warm2;
    let dm = mild1 - mild2;
    4 * dy * dy + 3 * (dw * dw + dm * dm)
}
