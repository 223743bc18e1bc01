//! Palette reduction grid
//!
//! Every color hashes to one cell of a 64 x 32 x 32 luma/chroma grid via the
//! fast integer transform. Each cell stores the palette index that owns it,
//! so reducing an arbitrary color to the palette is a single lookup.

use color_math::{fast_difference, LumaChroma, Rgba};

use crate::models::{Palette, RampOptions};

/// Luma levels on the grid
pub const LUMA_LEVELS: usize = 64;
/// Levels on each chroma axis
pub const CHROMA_LEVELS: usize = 32;
/// Total cells: 64 * 32 * 32
pub const GRID_CELLS: usize = LUMA_LEVELS * CHROMA_LEVELS * CHROMA_LEVELS;

/// Chroma bucket holding warm == 0 / mild == 0
const NEUTRAL: i32 = 16;
const MAX_LUMA: i32 = LUMA_LEVELS as i32 - 1;
const MAX_CHROMA: i32 = CHROMA_LEVELS as i32 - 1;

/// Quantized grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub luma: u8,
    pub warm: u8,
    pub mild: u8,
}

impl Cell {
    /// Cell from raw grid coordinates; each axis is clamped into range.
    pub fn new(luma: i32, warm: i32, mild: i32) -> Self {
        Self {
            luma: luma.clamp(0, MAX_LUMA) as u8,
            warm: warm.clamp(0, MAX_CHROMA) as u8,
            mild: mild.clamp(0, MAX_CHROMA) as u8,
        }
    }

    /// The fully neutral cell at the given luma.
    pub fn neutral(luma: i32) -> Self {
        Self::new(luma, NEUTRAL, NEUTRAL)
    }

    /// Cell from chroma offsets relative to the neutral bucket.
    pub fn from_offsets(luma: i32, warm: f32, mild: f32) -> Self {
        Self::new(
            luma,
            NEUTRAL + warm.round() as i32,
            NEUTRAL + mild.round() as i32,
        )
    }

    /// Inverse of [`Cell::index`].
    pub fn from_index(index: usize) -> Self {
        Self {
            luma: (index >> 10 & 0x3F) as u8,
            warm: (index >> 5 & 0x1F) as u8,
            mild: (index & 0x1F) as u8,
        }
    }

    /// Position in the flattened grid.
    #[inline]
    pub fn index(self) -> usize {
        (self.luma as usize) << 10 | (self.warm as usize) << 5 | self.mild as usize
    }

    #[inline]
    pub fn warm_offset(self) -> f32 {
        (self.warm as i32 - NEUTRAL) as f32
    }

    #[inline]
    pub fn mild_offset(self) -> f32 {
        (self.mild as i32 - NEUTRAL) as f32
    }

    /// Fast difference measured in grid units.
    #[inline]
    pub fn difference(self, other: Cell) -> i32 {
        fast_difference(
            self.luma as i32,
            self.warm as i32,
            self.mild as i32,
            other.luma as i32,
            other.warm as i32,
            other.mild as i32,
        )
    }

    /// Chroma part of [`Cell::difference`].
    #[inline]
    pub fn chroma_difference(self, other: Cell) -> i32 {
        fast_difference(
            0,
            self.warm as i32,
            self.mild as i32,
            0,
            other.warm as i32,
            other.mild as i32,
        )
    }
}

impl From<LumaChroma> for Cell {
    /// Luma already spans 0..=62; each ±255 chroma axis splits into 32 buckets.
    fn from(lc: LumaChroma) -> Self {
        Self::new(lc.luma, chroma_bucket(lc.warm), chroma_bucket(lc.mild))
    }
}

impl From<Rgba> for Cell {
    fn from(color: Rgba) -> Self {
        Self::from(LumaChroma::from(color))
    }
}

#[inline]
fn chroma_bucket(value: i32) -> i32 {
    (value.clamp(-256, 255) + 256) >> 4
}

/// Nearest-palette-index lookup over the whole grid.
///
/// Built once per palette. After [`PaletteMapping::build`] every cell holds an
/// opaque palette index, or 0 everywhere for a palette without opaque colors.
#[derive(Debug, Clone)]
pub struct PaletteMapping {
    grid: Vec<u16>,
    cells: Vec<Cell>,
    opaque: Vec<usize>,
}

impl PaletteMapping {
    pub fn build(palette: &Palette, options: &RampOptions) -> Self {
        let cells: Vec<Cell> = palette.colors().iter().map(|&c| Cell::from(c)).collect();
        let opaque: Vec<usize> = palette.opaque_indices().collect();

        if opaque.is_empty() {
            tracing::debug!(
                colors = palette.len(),
                "Palette has no opaque colors, every cell maps to index 0"
            );
            return Self {
                grid: vec![0; GRID_CELLS],
                cells,
                opaque,
            };
        }

        let mut grid: Vec<Option<u16>> = vec![None; GRID_CELLS];

        // Exact hits first; the earliest palette index keeps a shared cell
        let mut direct = 0usize;
        for &i in &opaque {
            let slot = &mut grid[cells[i].index()];
            if slot.is_none() {
                *slot = Some(i as u16);
                direct += 1;
            }
        }

        let mut unbounded = 0usize;
        for (index, slot) in grid.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let cell = Cell::from_index(index);
            let nearest = nearest(cell, &opaque, &cells, Some(options.luma_search_radius))
                .or_else(|| {
                    unbounded += 1;
                    nearest(cell, &opaque, &cells, None)
                });
            *slot = nearest.map(|i| i as u16);
        }

        tracing::debug!(
            colors = palette.len(),
            opaque = opaque.len(),
            direct,
            searched = GRID_CELLS - direct,
            unbounded,
            "Built palette mapping"
        );

        Self {
            grid: grid.into_iter().map(|slot| slot.unwrap_or(0)).collect(),
            cells,
            opaque,
        }
    }

    /// Palette index owning `cell`.
    #[inline]
    pub fn resident(&self, cell: Cell) -> usize {
        self.grid[cell.index()] as usize
    }

    /// Reduce an arbitrary color to the palette. Alpha is ignored.
    #[inline]
    pub fn reduce(&self, color: Rgba) -> usize {
        self.resident(Cell::from(color))
    }

    /// Grid cell of palette entry `index`.
    #[inline]
    pub fn cell_of(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Opaque palette indices in palette order.
    #[inline]
    pub fn opaque(&self) -> &[usize] {
        &self.opaque
    }

    /// The flattened grid, indexed by [`Cell::index`].
    #[inline]
    pub fn grid(&self) -> &[u16] {
        &self.grid
    }
}

/// Linear scan for the opaque entry closest to `cell`; ties go to the
/// earliest index. With a radius, entries whose luma is `radius` or more
/// away are not considered.
fn nearest(cell: Cell, opaque: &[usize], cells: &[Cell], radius: Option<i32>) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for &i in opaque {
        let candidate = cells[i];
        if let Some(radius) = radius {
            if (candidate.luma as i32 - cell.luma as i32).abs() >= radius {
                continue;
            }
        }
        let dist = cell.difference(candidate);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
