//! Assertion helpers for tests.

use palette_ramp::services::{Cell, GRID_CELLS};
use palette_ramp::{Colorize, Colorizer};
use pretty_assertions::assert_eq;

/// Assert every grid cell holds an opaque palette index.
///
/// For a degenerate palette every cell must hold 0 instead.
pub fn assert_grid_total(colorizer: &Colorizer) {
    let palette = colorizer.palette();
    let grid = colorizer.mapping().grid();
    assert_eq!(grid.len(), GRID_CELLS, "grid size");

    if palette.is_degenerate() {
        assert!(
            grid.iter().all(|&i| i == 0),
            "degenerate palette must map every cell to 0"
        );
        return;
    }

    for (cell, &index) in grid.iter().enumerate() {
        let index = index as usize;
        assert!(
            index < palette.len(),
            "cell {cell} holds {index}, palette has {} entries",
            palette.len()
        );
        assert!(
            !palette.colors()[index].is_transparent(),
            "cell {cell} holds transparent entry {index}"
        );
    }
}

/// Assert every entry has a ramp whose slots are valid, whose base is itself,
/// and, for opaque entries, whose neighbors are opaque.
pub fn assert_ramps_total(colorizer: &Colorizer) {
    let palette = colorizer.palette();
    for i in 0..palette.len() {
        let ramp = colorizer
            .ramp(i)
            .unwrap_or_else(|e| panic!("entry {i} has no ramp: {e}"));
        assert_eq!(ramp.base, i, "base slot of entry {i}");

        let color = palette.colors()[i];
        for slot in ramp.to_array() {
            assert!(slot < palette.len(), "entry {i} ramp {ramp:?} out of range");
            if !color.is_transparent() && !palette.is_degenerate() {
                assert!(
                    !palette.colors()[slot].is_transparent(),
                    "opaque entry {i} ramps to transparent {slot}: {ramp:?}"
                );
            }
        }
        if color.is_transparent() {
            assert_eq!(ramp.to_array(), [i; 4], "transparent entry {i}");
        }
    }
}

/// Assert that, measured in grid luma, every ramp climbs from darkest to bright.
pub fn assert_luma_ordered(colorizer: &Colorizer) {
    let palette = colorizer.palette();
    let luma = |i: usize| Cell::from(palette.colors()[i]).luma;
    for i in palette.opaque_indices() {
        let ramp = colorizer.ramp(i).unwrap();
        let [darkest, dim, base, bright] = ramp.to_array().map(luma);
        assert!(
            darkest <= dim && dim <= base && base <= bright,
            "entry {i} ({}) ramp {ramp:?} has lumas {darkest} {dim} {base} {bright}",
            palette.colors()[i]
        );
    }
}
