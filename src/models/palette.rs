use color_math::{Lab, Rgba};
use serde::Deserialize;

use crate::error::{PaletteError, RampError};

/// Largest palette the 16-bit lookup grid can address
pub const MAX_PALETTE_LEN: usize = 1 << 16;

/// An ordered, immutable list of colors.
///
/// Index 0 is conventionally the transparent background slot, but nothing
/// enforces that: any entry with alpha 0 is treated as transparent and every
/// other entry as opaque. Duplicate colors are allowed.
///
/// Deserializes from a list of hex strings (`"#RRGGBB"` or `"#RRGGBBAA"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Create a palette from packed `0xRRGGBBAA` values.
    pub fn from_packed(colors: &[u32]) -> Result<Self, PaletteError> {
        Self::new(colors.iter().map(|&c| Rgba::new(c)).collect())
    }

    /// Create a palette from hex color strings.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| s.parse::<Rgba>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The color at `index`.
    pub fn get(&self, index: usize) -> Result<Rgba, RampError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(RampError::InvalidIndex {
                index,
                len: self.colors.len(),
            })
    }

    /// Check that `index` addresses a palette entry.
    pub fn check_index(&self, index: usize) -> Result<(), RampError> {
        self.get(index).map(|_| ())
    }

    /// Indices of all entries with non-zero alpha, in palette order.
    pub fn opaque_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_transparent())
            .map(|(i, _)| i)
    }

    pub fn opaque_count(&self) -> usize {
        self.opaque_indices().count()
    }

    /// True when no entry is opaque.
    ///
    /// Such a palette is valid: every lookup reduces to index 0 and every
    /// ramp points back at its own index.
    pub fn is_degenerate(&self) -> bool {
        self.opaque_count() == 0
    }

    /// A copy with every opaque color's hue rotated by `degrees` in Lab.
    ///
    /// Lightness, chroma and alpha are kept; transparent entries are copied
    /// as they are. Colors pushed out of gamut are clamped.
    pub fn hue_shifted(&self, degrees: f32) -> Palette {
        let colors = self
            .colors
            .iter()
            .map(|&c| {
                if c.is_transparent() {
                    c
                } else {
                    Rgba::from(Lab::from(c).rotate_hue(degrees))
                }
            })
            .collect();
        Palette { colors }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        let colors = colors
            .iter()
            .map(|s| s.parse::<Rgba>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }
}
