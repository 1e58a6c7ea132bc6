//! Intensity buffer and its indexing

use super::MAX_INTENSITY;
use crate::error::FireError;
use std::ops::Range;

/// Dense `width * height` field of intensities, `y = 0` at the top.
///
/// Cells are stored row after row, so `(x, y)` lives at `x + width * y`.
/// The bottom row (`height - 1`) is the fire source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl FireGrid {
    /// Allocate a cold grid. Needs at least one column and two rows so the
    /// source row has something above it.
    pub fn new(width: usize, height: usize) -> Result<Self, FireError> {
        let len = width.checked_mul(height);
        match len {
            Some(len) if width >= 1 && height >= 2 => Ok(Self {
                width,
                height,
                cells: vec![0; len],
            }),
            _ => Err(FireError::InvalidDimensions { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Row index of the heat-emitting bottom row
    pub fn source_row(&self) -> usize {
        self.height - 1
    }

    /// Flat index of `(x, y)`. Panics when out of bounds.
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        x + self.width * y
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Store an intensity the caller has already clamped
    pub fn set(&mut self, x: usize, y: usize, intensity: u8) {
        debug_assert!(intensity <= MAX_INTENSITY, "intensity {intensity} above maximum");
        let i = self.index(x, y);
        self.cells[i] = intensity;
    }

    /// Flat `[start, end)` span covering row `y`
    pub fn row_range(&self, y: usize) -> Range<usize> {
        assert!(y < self.height, "row {y} outside grid of height {}", self.height);
        let start = self.width * y;
        start..start + self.width
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[self.row_range(y)]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let range = self.row_range(y);
        &mut self.cells[range]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// True when every cell is zero
    pub fn is_cold(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }
}
