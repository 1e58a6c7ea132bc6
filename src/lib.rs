//! Doom-style fire effect.
//!
//! The simulation core lives in [`fire`]: an intensity grid, the source row
//! controller, the per-tick propagation rule and the color palette. The
//! [`render`] module turns grid state into draw calls on any [`render::Canvas`].
//! The remaining modules are the terminal shell used by the binary.

pub mod app;
pub mod config;
pub mod error;
pub mod fire;
pub mod help;
pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
pub mod terminal;

pub use error::FireError;
pub use fire::{FireSim, MAX_INTENSITY};
