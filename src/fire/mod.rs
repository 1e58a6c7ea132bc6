//! Fire simulation core
//!
//! [`FireSim`] owns everything one running fire needs: the intensity grid,
//! the palette, the source row state and the random source.

pub mod entropy;
pub mod grid;
pub mod palette;
pub mod source;
pub mod step;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::FireConfig;
use crate::render::{Canvas, FrameRenderer};
use entropy::{Entropy, SeededEntropy};
use grid::FireGrid;
use palette::Palette;
use source::SourceController;
use step::EdgePolicy;
use tracing::{debug, trace};

/// Hottest intensity a cell can hold
pub const MAX_INTENSITY: u8 = 35;

/// A running fire: grid, palette, source state and entropy
pub struct FireSim<E: Entropy = SeededEntropy> {
    grid: FireGrid,
    scratch: Vec<u8>,
    palette: Palette,
    source: SourceController,
    entropy: E,
    edge: EdgePolicy,
    renderer: FrameRenderer,
    ticks: u64,
}

impl FireSim<SeededEntropy> {
    /// Build from configuration, seeding entropy from `config.seed`
    pub fn from_config(config: &FireConfig) -> Result<Self, crate::FireError> {
        Self::with_entropy(config, SeededEntropy::new(config.seed))
    }
}

impl<E: Entropy> FireSim<E> {
    /// Build from configuration with a caller-supplied random source.
    /// The fire starts lit.
    pub fn with_entropy(config: &FireConfig, entropy: E) -> Result<Self, crate::FireError> {
        config.validate()?;
        let grid = FireGrid::new(config.width, config.height)?;
        let mut sim = Self {
            scratch: Vec::with_capacity(grid.cells().len()),
            grid,
            palette: config.palette.clone(),
            source: SourceController::default(),
            entropy,
            edge: config.edge,
            renderer: FrameRenderer::new(config.pixel_size),
            ticks: 0,
        };
        sim.ignite();
        Ok(sim)
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) {
        step::tick(&mut self.grid, &mut self.scratch, &mut self.entropy, self.edge);
        self.ticks += 1;
        trace!(tick = self.ticks, "fire tick");
    }

    /// Paint the current grid onto `canvas`
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.renderer.render(&self.grid, &self.palette, canvas);
    }

    pub fn ignite(&mut self) {
        self.source.ignite(&mut self.grid);
        debug!("fire source ignited");
    }

    pub fn extinguish(&mut self) {
        self.source.extinguish(&mut self.grid);
        debug!("fire source extinguished");
    }

    /// Light the source if it is out, put it out otherwise
    pub fn toggle_source(&mut self) {
        self.source.toggle(&mut self.grid);
        debug!(burning = self.source.is_burning(), "fire source toggled");
    }

    pub fn increase_source(&mut self) {
        self.source.strengthen(&mut self.grid, &mut self.entropy);
        debug!(mean = self.source_mean(), "fire source strengthened");
    }

    pub fn decrease_source(&mut self) {
        self.source.weaken(&mut self.grid, &mut self.entropy);
        debug!(mean = self.source_mean(), "fire source weakened");
    }

    pub fn is_burning(&self) -> bool {
        self.source.is_burning()
    }

    pub fn grid(&self) -> &FireGrid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    /// Ticks run since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn source_mean(&self) -> f32 {
        let row = self.grid.row(self.grid.source_row());
        row.iter().map(|&c| c as f32).sum::<f32>() / row.len() as f32
    }
}
