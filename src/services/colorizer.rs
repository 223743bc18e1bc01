use color_math::Rgba;

use crate::error::RampError;
use crate::models::{Palette, Ramp, RampOptions, Shade};
use crate::services::mapping::PaletteMapping;
use crate::services::ramp_builder::build_ramps;

/// Palette reduction plus brightness shading.
///
/// Slot convention for every ramp: 0 darkest, 1 dim, 2 the entry itself,
/// 3 bright. `brighten` moves to slot 3, `darken` to slot 1.
pub trait Colorize {
    fn palette(&self) -> &Palette;

    /// Nearest palette index for an arbitrary color.
    fn reduce(&self, color: Rgba) -> usize;

    /// The ramp of palette entry `index`.
    fn ramp(&self, index: usize) -> Result<Ramp, RampError>;

    fn brighten(&self, index: usize) -> Result<usize, RampError> {
        Ok(self.ramp(index)?.bright)
    }

    fn darken(&self, index: usize) -> Result<usize, RampError> {
        Ok(self.ramp(index)?.dim)
    }

    fn darkest(&self, index: usize) -> Result<usize, RampError> {
        Ok(self.ramp(index)?.darkest)
    }

    /// Palette index at `brightness` (0..=3, clamped) on `index`'s ramp.
    fn shade_index_at(&self, brightness: i32, index: usize) -> Result<usize, RampError> {
        Ok(self
            .ramp(index)?
            .shade(Shade::from_brightness(brightness)))
    }

    /// Color at `brightness` (0..=3, clamped) on `index`'s ramp.
    fn shade_at(&self, brightness: i32, index: usize) -> Result<Rgba, RampError> {
        let shaded = self.shade_index_at(brightness, index)?;
        self.palette().get(shaded)
    }

    /// Reduce `color` to the palette, then shade it.
    fn colorize(&self, color: Rgba, brightness: i32) -> Result<Rgba, RampError> {
        self.shade_at(brightness, self.reduce(color))
    }
}

/// Where a colorizer's ramps came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RampSet {
    /// Synthesized from the mapping grid
    Generated(Vec<Ramp>),
    /// Supplied as a pre-computed table
    Literal(Vec<Ramp>),
}

impl RampSet {
    pub fn ramps(&self) -> &[Ramp] {
        match self {
            RampSet::Generated(ramps) | RampSet::Literal(ramps) => ramps,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, RampSet::Generated(_))
    }
}

/// A palette with its reduction grid and ramp table.
///
/// Owns everything it reads; independent instances can be built and queried
/// from different threads.
#[derive(Debug, Clone)]
pub struct Colorizer {
    palette: Palette,
    mapping: PaletteMapping,
    ramps: RampSet,
}

impl Colorizer {
    /// Build the grid and synthesize ramps for `palette`.
    pub fn build(palette: Palette, options: &RampOptions) -> Result<Self, RampError> {
        options.validate()?;
        let mapping = PaletteMapping::build(&palette, options);
        let ramps = build_ramps(&palette, &mapping, options)?;

        tracing::info!(
            colors = palette.len(),
            opaque = mapping.opaque().len(),
            "Built colorizer"
        );

        Ok(Self {
            palette,
            mapping,
            ramps: RampSet::Generated(ramps),
        })
    }

    /// Use a pre-computed `[darkest, dim, base, bright]` table instead of
    /// synthesized ramps. The grid is still built for [`Colorize::reduce`].
    ///
    /// Every index must be in range and row `i` must have `i` in its base slot.
    pub fn with_literal_ramps(
        palette: Palette,
        table: Vec<[usize; 4]>,
        options: &RampOptions,
    ) -> Result<Self, RampError> {
        options.validate()?;
        if table.len() != palette.len() {
            return Err(RampError::RampTableLength {
                expected: palette.len(),
                actual: table.len(),
            });
        }
        for (index, row) in table.iter().enumerate() {
            for &slot in row {
                palette.check_index(slot)?;
            }
            let base = Ramp::from(*row).base;
            if base != index {
                return Err(RampError::RampBaseMismatch { index, base });
            }
        }

        let mapping = PaletteMapping::build(&palette, options);
        let ramps = table.into_iter().map(Ramp::from).collect();

        tracing::info!(
            colors = palette.len(),
            opaque = mapping.opaque().len(),
            "Built colorizer from literal ramps"
        );

        Ok(Self {
            palette,
            mapping,
            ramps: RampSet::Literal(ramps),
        })
    }

    pub fn mapping(&self) -> &PaletteMapping {
        &self.mapping
    }

    pub fn ramps(&self) -> &RampSet {
        &self.ramps
    }
}

impl Colorize for Colorizer {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn reduce(&self, color: Rgba) -> usize {
        self.mapping.reduce(color)
    }

    fn ramp(&self, index: usize) -> Result<Ramp, RampError> {
        self.ramps
            .ramps()
            .get(index)
            .copied()
            .ok_or(RampError::InvalidIndex {
                index,
                len: self.palette.len(),
            })
    }
}

/// Build a colorizer for `palette` with generated ramps.
pub fn build(palette: Palette, options: &RampOptions) -> Result<Colorizer, RampError> {
    Colorizer::build(palette, options)
}
