//! Packed 32-bit RGBA color
//!
//! Palettes are plain sequences of these. The byte layout is R, G, B, A from
//! most to least significant byte, so `0xAABBCCDD` is R=0xAA, G=0xBB,
//! B=0xCC, A=0xDD.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A packed 8-bit-per-channel sRGB color with alpha.
///
/// A color with alpha 0 is transparent. Transparent colors never take part
/// in nearest-color matching or ramp building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(u32);

impl Rgba {
    /// Fully transparent black, conventionally palette index 0.
    pub const TRANSPARENT: Rgba = Rgba(0);

    /// Wrap a packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Build a color from its four channels.
    ///
    /// # Example
    /// ```
    /// use color_math::Rgba;
    /// let c = Rgba::from_channels(0xAA, 0xBB, 0xCC, 0xDD);
    /// assert_eq!(c.packed(), 0xAABBCCDD);
    /// ```
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Build a color from float channels in 0.0..=1.0.
    ///
    /// Channels are rounded and clamped; NaN becomes 0.
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// The packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The channels as `[R, G, B, A]`.
    #[inline]
    pub const fn to_channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// True when alpha is 0.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// The same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self(self.0 & 0xFFFF_FF00 | alpha as u32)
    }
}

fn unit_to_u8(x: f32) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RGB` - shorthand, each digit doubled, alpha 0xFF
    /// - `#RRGGBB` - opaque color
    /// - `#RRGGBBAA` - color with explicit alpha
    ///
    /// The `#` is optional. Parsing is case-insensitive and surrounding
    /// whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_math::Rgba;
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red.packed(), 0xFF0000FF);
    ///
    /// let clear: Rgba = "00000000".parse().unwrap();
    /// assert!(clear.is_transparent());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let len = s.chars().count();
        if !matches!(len, 3 | 6 | 8) {
            return Err(ParseColorError::InvalidLength(len));
        }

        let mut value: u32 = 0;
        for (position, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(16)
                .ok_or(ParseColorError::InvalidDigit { position, found })?;
            value = value << 4 | digit;
        }

        match len {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = (value >> 8 & 0xF) as u8 * 17;
                let g = (value >> 4 & 0xF) as u8 * 17;
                let b = (value & 0xF) as u8 * 17;
                Ok(Self::from_channels(r, g, b, 0xFF))
            }
            6 => Ok(Self(value << 8 | 0xFF)),
            _ => Ok(Self(value)),
        }
    }
}
