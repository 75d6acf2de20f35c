//! Simulation Driver
//!
//! Owns the current grid and the generation counter, and runs the
//! step → render → pause loop.
//!
//! ```text
//! Initializing ──run()──▶ Running ──(control says stop)──▶ returns
//! ```
//!
//! The loop itself never decides to stop. A [`RunControl`] is asked between
//! generations whether to go on; production uses [`Forever`].

use std::ops::ControlFlow;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::LifeError;
use crate::grid::Grid;
use crate::render::{render, DisplaySink};
use crate::seed::seed_grid;
use crate::stepper::step;

/// Driver lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Grid allocated and seeded, nothing drawn yet
    Initializing,
    /// Inside the run loop
    Running,
}

/// Decides how long to wait between generations and when to stop
pub trait RunControl {
    /// Wait out `interval`, then say whether to run another generation
    fn pause(&mut self, interval: Duration) -> ControlFlow<()>;
}

/// Sleep for the interval and never stop
#[derive(Clone, Copy, Debug, Default)]
pub struct Forever;

impl RunControl for Forever {
    fn pause(&mut self, interval: Duration) -> ControlFlow<()> {
        std::thread::sleep(interval);
        ControlFlow::Continue(())
    }
}

/// Run a fixed number of generations without waiting
#[derive(Clone, Copy, Debug)]
pub struct Generations {
    remaining: u64,
}

impl Generations {
    /// Allow `count` more steps
    #[must_use]
    pub fn new(count: u64) -> Self {
        Self { remaining: count }
    }
}

impl RunControl for Generations {
    fn pause(&mut self, _interval: Duration) -> ControlFlow<()> {
        if self.remaining == 0 {
            return ControlFlow::Break(());
        }
        self.remaining -= 1;
        ControlFlow::Continue(())
    }
}

/// The running automaton
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    interval: Duration,
    phase: Phase,
}

impl Simulation {
    /// Allocate and randomly populate a grid as described by `config`
    ///
    /// Uses `config.seed` when set, otherwise a clock-derived seed. The seed is
    /// logged either way so a run can be replayed.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::Config`] if the configuration is invalid.
    pub fn new(config: &SimulationConfig) -> Result<Self, LifeError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(clock_seed);
        info!(
            seed,
            width = config.width,
            height = config.height,
            "Initializing simulation"
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let grid = seed_grid(config.width, config.height, &mut rng)?;
        Ok(Self::with_grid(grid, config.interval))
    }

    /// Start from a caller-supplied grid at generation 0
    #[must_use]
    pub fn with_grid(grid: Grid, interval: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            interval,
            phase: Phase::Initializing,
        }
    }

    /// Current grid
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Completed steps so far
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay between generations
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Lifecycle phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the grid with its successor and bump the counter
    pub fn advance(&mut self) -> &Grid {
        self.grid = step(&self.grid);
        self.generation += 1;
        &self.grid
    }

    /// Draw the current generation and present it
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::Display`] if the sink fails to present.
    pub fn draw<S: DisplaySink + ?Sized>(&self, sink: &mut S) -> Result<(), LifeError> {
        render(&self.grid, self.generation, sink);
        sink.present()?;
        Ok(())
    }

    /// Draw generation 0, then step and draw until `control` breaks
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::Display`] if the sink fails to present a frame.
    pub fn run<S, C>(&mut self, sink: &mut S, control: &mut C) -> Result<(), LifeError>
    where
        S: DisplaySink + ?Sized,
        C: RunControl + ?Sized,
    {
        self.phase = Phase::Running;
        self.draw(sink)?;

        while control.pause(self.interval).is_continue() {
            self.advance();
            self.draw(sink)?;
            debug!(
                generation = self.generation,
                population = self.grid.population(),
                "Generation rendered"
            );
        }

        info!(generation = self.generation, "Simulation stopped");
        Ok(())
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    // Fold the high bits in so nearby start times still differ.
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
