//! Translates grid state into draw calls

use crate::fire::grid::FireGrid;
use crate::fire::palette::{Palette, Rgb};

/// A surface that can fill a `size` x `size` square with a color
pub trait Canvas {
    fn draw_cell(&mut self, screen_x: u32, screen_y: u32, size: u32, color: Rgb);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_cell(&mut self, screen_x: u32, screen_y: u32, size: u32, color: Rgb) {
        (**self).draw_cell(screen_x, screen_y, size, color);
    }
}

/// Paints one square per grid cell, scaled by `pixel_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRenderer {
    pixel_size: u32,
}

impl FrameRenderer {
    pub fn new(pixel_size: u32) -> Self {
        debug_assert!(pixel_size > 0, "pixel size must be positive");
        Self { pixel_size }
    }

    /// Issue one draw per cell, row by row from the top
    pub fn render(&self, grid: &FireGrid, palette: &Palette, canvas: &mut impl Canvas) {
        let size = self.pixel_size;
        for (y, row) in grid.rows().enumerate() {
            for (x, &heat) in row.iter().enumerate() {
                canvas.draw_cell(x as u32 * size, y as u32 * size, size, palette[heat]);
            }
        }
    }
}
