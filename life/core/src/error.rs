//! Error types shared across the engine

use thiserror::Error;

use crate::config::ConfigError;
use crate::grid::GridError;

/// Anything that can stop a simulation run
#[derive(Debug, Error)]
pub enum LifeError {
    /// Bad grid dimensions or placement
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The display sink failed to present a frame
    #[error("Failed to present frame: {0}")]
    Display(#[from] std::io::Error),
}
