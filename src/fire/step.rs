//! Per-tick propagation rule.
//!
//! Each cell takes the heat of the cell below it, minus a random decay of
//! 0 or 1, and is written one column to the left whenever the decay is 1.
//! The leftward shift is what makes the flames lean and flicker.

use super::entropy::Entropy;
use super::grid::FireGrid;
use serde::Deserialize;

/// Where a leftward write from column 0 lands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Stay in column 0 of the same row
    #[default]
    Clamp,
    /// Flat-buffer behavior: land on the last column of the row above,
    /// dropped when there is no row above
    Wrap,
}

/// Advance `grid` by one tick.
///
/// `scratch` receives a copy of the grid as it stood at the start of the
/// tick; every read comes from that copy so a cell written earlier in the
/// pass is never read back. The bottom row is never written.
///
/// Cells the leftward drift skips are first set to the cell below minus one;
/// without that they would keep stale heat and an extinguished fire would
/// not reliably go cold within `height` ticks.
pub fn tick(grid: &mut FireGrid, scratch: &mut Vec<u8>, entropy: &mut impl Entropy, edge: EdgePolicy) {
    let width = grid.width();
    let height = grid.height();

    scratch.clear();
    scratch.extend_from_slice(grid.cells());
    let cells = grid.cells_mut();

    // A cell no shifted write reaches this tick cools from the cell below it,
    // so heat cannot linger once the source is out
    let above_source = width * (height - 1);
    for (cell, &below) in cells[..above_source].iter_mut().zip(&scratch[width..]) {
        *cell = below.saturating_sub(1);
    }

    for x in 0..width {
        for y in 0..height - 1 {
            let i = x + width * y;
            let decay = entropy.decay();
            let heat = scratch[i + width].saturating_sub(decay);

            if let Some(target) = target_index(i, x, decay as usize, edge) {
                cells[target] = heat;
            }
        }
    }
}

fn target_index(i: usize, x: usize, decay: usize, edge: EdgePolicy) -> Option<usize> {
    if decay <= x {
        return Some(i - decay);
    }
    match edge {
        EdgePolicy::Clamp => Some(i - x),
        EdgePolicy::Wrap => i.checked_sub(decay),
    }
}
