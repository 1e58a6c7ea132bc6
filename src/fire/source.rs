//! Control of the heat-emitting bottom row

use super::entropy::Entropy;
use super::grid::FireGrid;
use super::MAX_INTENSITY;

/// Tracks whether the fire source is lit and applies source row changes.
///
/// Every operation touches exactly the `width` cells of the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceController {
    burning: bool,
}

impl SourceController {
    pub fn new(burning: bool) -> Self {
        Self { burning }
    }

    pub fn is_burning(&self) -> bool {
        self.burning
    }

    /// Bottom row to full heat
    pub fn ignite(&mut self, grid: &mut FireGrid) {
        self.burning = true;
        let y = grid.source_row();
        grid.row_mut(y).fill(MAX_INTENSITY);
    }

    /// Bottom row to zero
    pub fn extinguish(&mut self, grid: &mut FireGrid) {
        self.burning = false;
        let y = grid.source_row();
        grid.row_mut(y).fill(0);
    }

    /// Raise each source cell below maximum by a random step, saturating
    pub fn strengthen(&mut self, grid: &mut FireGrid, entropy: &mut impl Entropy) {
        let y = grid.source_row();
        for cell in grid.row_mut(y).iter_mut().filter(|c| **c < MAX_INTENSITY) {
            *cell = cell.saturating_add(entropy.source_step()).min(MAX_INTENSITY);
        }
    }

    /// Lower each lit source cell by a random step, saturating at zero
    pub fn weaken(&mut self, grid: &mut FireGrid, entropy: &mut impl Entropy) {
        let y = grid.source_row();
        for cell in grid.row_mut(y).iter_mut().filter(|c| **c > 0) {
            *cell = cell.saturating_sub(entropy.source_step());
        }
    }

    /// Flip the burning flag, igniting or extinguishing to match
    pub fn toggle(&mut self, grid: &mut FireGrid) {
        if self.burning {
            self.extinguish(grid);
        } else {
            self.ignite(grid);
        }
    }
}

impl Default for SourceController {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::entropy::SeededEntropy;
    use crate::fire::testing::FixedEntropy;

    fn grid() -> FireGrid {
        FireGrid::new(4, 3).unwrap()
    }

    #[test]
    fn ignite_fills_only_the_bottom_row() {
        let mut grid = grid();
        let mut source = SourceController::default();
        source.ignite(&mut grid);

        assert!(source.is_burning());
        assert_eq!(grid.row(2), &[35, 35, 35, 35]);
        assert_eq!(grid.row(1), &[0, 0, 0, 0]);
        assert_eq!(grid.row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn extinguish_zeroes_the_bottom_row() {
        let mut grid = grid();
        let mut source = SourceController::default();
        source.ignite(&mut grid);
        grid.set(2, 1, 20);
        source.extinguish(&mut grid);

        assert!(!source.is_burning());
        assert_eq!(grid.row(2), &[0, 0, 0, 0]);
        // Rows above are left to cool on their own
        assert_eq!(grid.get(2, 1), 20);
    }

    #[test]
    fn toggle_alternates() {
        let mut grid = grid();
        let mut source = SourceController::new(true);
        source.toggle(&mut grid);
        assert!(!source.is_burning());
        assert_eq!(grid.row(2), &[0; 4]);

        source.toggle(&mut grid);
        assert!(source.is_burning());
        assert_eq!(grid.row(2), &[35; 4]);
    }

    #[test]
    fn strengthen_saturates_and_skips_full_cells() {
        let mut grid = grid();
        grid.row_mut(2).copy_from_slice(&[0, 30, 35, 22]);
        let mut entropy = FixedEntropy::new(0.0, 13);
        SourceController::default().strengthen(&mut grid, &mut entropy);

        assert_eq!(grid.row(2), &[13, 35, 35, 35]);
        // the full cell consumed no draw
        assert_eq!(entropy.below_calls, 3);
    }

    #[test]
    fn weaken_saturates_and_skips_cold_cells() {
        let mut grid = grid();
        grid.row_mut(2).copy_from_slice(&[0, 5, 35, 13]);
        let mut entropy = FixedEntropy::new(0.0, 13);
        SourceController::default().weaken(&mut grid, &mut entropy);

        assert_eq!(grid.row(2), &[0, 0, 22, 0]);
        assert_eq!(entropy.below_calls, 3);
    }

    #[test]
    fn random_steps_stay_in_range() {
        let mut grid = grid();
        let mut source = SourceController::default();
        let mut entropy = SeededEntropy::from_seed(3);
        for round in 0..50 {
            if round % 3 == 0 {
                source.weaken(&mut grid, &mut entropy);
            } else {
                source.strengthen(&mut grid, &mut entropy);
            }
            assert!(grid.cells().iter().all(|&c| c <= MAX_INTENSITY));
        }
    }
}
