//! Ramp synthesis
//!
//! For each opaque entry, walk the luma axis of the mapping grid away from the
//! entry's own cell until a resident turns up that is distinct enough to serve
//! as a lighter or darker rung. Chroma shrinks toward neutral as the walk goes,
//! so light and dark rungs drift toward grays the way real materials do.

use crate::error::RampError;
use crate::models::{Palette, Ramp, RampOptions};
use crate::services::mapping::{Cell, PaletteMapping, LUMA_LEVELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lighter,
    Darker,
}

/// Walks one palette's grid with fixed options.
struct Walker<'a> {
    mapping: &'a PaletteMapping,
    options: &'a RampOptions,
}

impl Walker<'_> {
    /// Walk from `center`'s cell. A resident qualifies when it is neither
    /// `center` nor `origin`, lies strictly beyond `center` on the luma axis
    /// in the walk direction, differs from `center` by more than the distinct
    /// threshold, and sits close enough to the walk's current chroma.
    fn search(&self, center: usize, origin: usize, direction: Direction) -> Option<usize> {
        let start = self.mapping.cell_of(center);
        let (step, shrink): (i32, _) = match direction {
            Direction::Lighter => (1, self.options.lighten_chroma_shrink),
            Direction::Darker => (-1, self.options.darken_chroma_shrink),
        };

        let offset = step.saturating_mul(self.options.first_step);
        let mut luma = (start.luma as i32).saturating_add(offset);
        let mut warm = start.warm_offset();
        let mut mild = start.mild_offset();

        while (0..LUMA_LEVELS as i32).contains(&luma) {
            warm *= shrink;
            mild *= shrink;
            let probe = Cell::from_offsets(luma, warm, mild);
            let resident = self.mapping.resident(probe);

            if resident != center && resident != origin {
                let resident_cell = self.mapping.cell_of(resident);
                // The fill pass may hand a cell to an entry on the wrong side of the walk
                let beyond = match direction {
                    Direction::Lighter => resident_cell.luma > start.luma,
                    Direction::Darker => resident_cell.luma < start.luma,
                };
                if beyond
                    && resident_cell.difference(start) > self.options.distinct_threshold
                    && resident_cell.chroma_difference(probe) <= self.options.max_chroma_drift
                {
                    return Some(resident);
                }
            }
            luma += step;
        }
        None
    }
}

/// Entries that stand in when a walk runs off the end of the luma axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallbacks {
    pub near_white: usize,
    pub near_black: usize,
}

impl Fallbacks {
    /// Explicit indices from the options win; otherwise the residents of the
    /// lightest and darkest neutral cells.
    pub fn resolve(
        palette: &Palette,
        mapping: &PaletteMapping,
        options: &RampOptions,
    ) -> Result<Self, RampError> {
        let near_white = match options.near_white {
            Some(index) => {
                palette.check_index(index)?;
                index
            }
            None => mapping.resident(Cell::neutral(LUMA_LEVELS as i32 - 1)),
        };
        let near_black = match options.near_black {
            Some(index) => {
                palette.check_index(index)?;
                index
            }
            None => mapping.resident(Cell::neutral(0)),
        };
        Ok(Self {
            near_white,
            near_black,
        })
    }

    /// Near-white, unless it is darker than `index`; then `index` itself.
    pub fn lighter_than(&self, mapping: &PaletteMapping, index: usize) -> usize {
        if mapping.cell_of(self.near_white).luma >= mapping.cell_of(index).luma {
            self.near_white
        } else {
            index
        }
    }

    /// Near-black, unless it is lighter than `index`; then `index` itself.
    pub fn darker_than(&self, mapping: &PaletteMapping, index: usize) -> usize {
        if mapping.cell_of(self.near_black).luma <= mapping.cell_of(index).luma {
            self.near_black
        } else {
            index
        }
    }
}

/// Build the `(darkest, dim, base, bright)` ramp of every palette entry.
///
/// Grid luma never decreases along a ramp: a found dim rung is strictly
/// darker than its entry, a found darkest rung strictly darker than dim, and
/// a found bright rung strictly lighter. Transparent entries get a ramp that
/// points only at themselves.
pub fn build_ramps(
    palette: &Palette,
    mapping: &PaletteMapping,
    options: &RampOptions,
) -> Result<Vec<Ramp>, RampError> {
    let fallbacks = Fallbacks::resolve(palette, mapping, options)?;
    let walker = Walker { mapping, options };

    let mut bright_defaults = 0usize;
    let mut dim_defaults = 0usize;
    let mut darkest_defaults = 0usize;

    let ramps = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, color)| {
            if color.is_transparent() {
                return Ramp::uniform(i);
            }

            let bright = walker
                .search(i, i, Direction::Lighter)
                .unwrap_or_else(|| {
                    bright_defaults += 1;
                    fallbacks.lighter_than(mapping, i)
                });

            let dim_match = walker.search(i, i, Direction::Darker);
            let dim = dim_match.unwrap_or_else(|| {
                dim_defaults += 1;
                fallbacks.darker_than(mapping, i)
            });

            // Second pass continues from the dim rung's own cell
            let darkest = dim_match
                .and_then(|m| walker.search(m, i, Direction::Darker))
                .unwrap_or_else(|| {
                    darkest_defaults += 1;
                    fallbacks.darker_than(mapping, dim)
                });

            Ramp {
                darkest,
                dim,
                base: i,
                bright,
            }
        })
        .collect();

    tracing::debug!(
        colors = palette.len(),
        near_white = fallbacks.near_white,
        near_black = fallbacks.near_black,
        bright_defaults,
        dim_defaults,
        darkest_defaults,
        "Built ramps"
    );

    Ok(ramps)
}
