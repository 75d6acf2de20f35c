//! Chroma Life Core - Headless Game of Life with colour inheritance
//!
//! This crate holds the whole simulation, independent of any terminal or UI
//! framework. A surface only has to implement [`DisplaySink`] to show it.
//!
//! # Rules
//!
//! Classic B3/S23 on a bounded grid (no wrap-around). A cell born from three
//! live neighbours inherits their majority colour; survivors keep their own.
//!
//! # Architecture
//!
//! ```text
//!  ┌─────────────┐   step()   ┌─────────────┐
//!  │  Grid (N)   │──────────▶│ Grid (N+1)  │   neighbours::analyze per cell
//!  └─────────────┘            └──────┬──────┘
//!                                    │ render()
//!                             ┌──────▼──────┐
//!                             │ DisplaySink │   terminal, memory, ...
//!                             └─────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use chroma_life_core::{Generations, MemorySurface, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     width: 16,
//!     height: 8,
//!     seed: Some(7),
//!     ..SimulationConfig::default()
//! };
//! let mut simulation = Simulation::new(&config).unwrap();
//! let mut surface = MemorySurface::new();
//! simulation.run(&mut surface, &mut Generations::new(10)).unwrap();
//! assert_eq!(simulation.generation(), 10);
//! ```
//!
//! # Module Overview
//!
//! - [`cell`]: Cell state and colour tags
//! - [`grid`]: Fixed-size cell storage
//! - [`neighbours`]: Neighbour counting and colour majority vote
//! - [`stepper`]: Generation transition
//! - [`render`]: Drawing onto a display sink
//! - [`seed`]: Random initial population
//! - [`driver`]: Run loop and lifecycle
//! - [`config`]: TOML + environment configuration
//! - [`error`]: Error types
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cell;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod neighbours;
pub mod render;
pub mod seed;
pub mod stepper;

// Re-exports for convenience
pub use cell::{Cell, CellState, Channel, Colour};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with, ConfigError,
    ConfigSource, LifeToml, SimulationConfig, MAX_CELLS,
};
pub use driver::{Forever, Generations, Phase, RunControl, Simulation};
pub use error::LifeError;
pub use grid::{Grid, GridError};
pub use neighbours::{analyze, candidates, NeighbourResult};
pub use render::{
    render, status_line, DisplaySink, Glyph, MemorySurface, ALIVE_GLYPH, DEAD_GLYPH,
    MAX_STATUS_WIDTH, NEUTRAL,
};
pub use seed::{random_colour, seed_grid};
pub use stepper::{next_cell, step};
