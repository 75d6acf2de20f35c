//! Renderer
//!
//! Draws a grid and its status line onto a [`DisplaySink`]. The sink is the
//! only thing the renderer knows about the screen; production code binds it to
//! the terminal, tests bind it to a [`MemorySurface`].

use std::io;

use crate::cell::Colour;
use crate::grid::Grid;

/// Glyph for a live cell
pub const ALIVE_GLYPH: char = 'x';

/// Glyph for a dead cell
pub const DEAD_GLYPH: char = '.';

/// Attribute used for uncoloured cells and the status line
pub const NEUTRAL: Colour = Colour::WHITE;

const STATUS_PREFIX: &str = "Generation: ";
const STATUS_SEPARATOR: &str = " | Alive: ";

/// Widest possible [`status_line`], with both counters at 20 digits
pub const MAX_STATUS_WIDTH: usize = STATUS_PREFIX.len() + 20 + STATUS_SEPARATOR.len() + 20;

/// Character + attribute display surface
pub trait DisplaySink {
    /// Put `ch` at column `x`, row `y`
    fn write_char(&mut self, x: usize, y: usize, ch: char);

    /// Set the colour attribute at column `x`, row `y`
    fn write_attribute(&mut self, x: usize, y: usize, colour: Colour);

    /// Flush a completed frame
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the frame could not be shown.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Status text shown under the grid
#[must_use]
pub fn status_line(grid: &Grid, generation: u64) -> String {
    format!(
        "{STATUS_PREFIX}{generation}{STATUS_SEPARATOR}{}",
        grid.population()
    )
}

/// Draw `grid` and the status line for `generation`
pub fn render<S: DisplaySink + ?Sized>(grid: &Grid, generation: u64, sink: &mut S) {
    for ((x, y), cell) in grid.iter() {
        let (glyph, colour) = if cell.is_alive() {
            (ALIVE_GLYPH, cell.colour().unwrap_or(NEUTRAL))
        } else {
            (DEAD_GLYPH, NEUTRAL)
        };
        sink.write_attribute(x, y, colour);
        sink.write_char(x, y, glyph);
    }

    let row = grid.height();
    for (x, ch) in status_line(grid, generation).chars().enumerate() {
        sink.write_attribute(x, row, NEUTRAL);
        sink.write_char(x, row, ch);
    }
}

// ============================================================================
// In-memory surface
// ============================================================================

/// One position on a [`MemorySurface`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Last character written
    pub ch: char,
    /// Last attribute written
    pub colour: Colour,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            colour: NEUTRAL,
        }
    }
}

/// Display sink that keeps everything in memory
///
/// Rows grow on demand, so the status line may be wider than the grid.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    rows: Vec<Vec<Glyph>>,
    frames: usize,
}

impl MemorySurface {
    /// Empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph at `(x, y)`, if anything was written there
    #[must_use]
    pub fn glyph(&self, x: usize, y: usize) -> Option<Glyph> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Characters of row `y`, unwritten gaps shown as spaces
    #[must_use]
    pub fn line(&self, y: usize) -> String {
        self.rows
            .get(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }

    /// All rows as text
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows.len()).map(|y| self.line(y)).collect()
    }

    /// Number of frames presented so far
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn slot(&mut self, x: usize, y: usize) -> &mut Glyph {
        if self.rows.len() <= y {
            self.rows.resize_with(y + 1, Vec::new);
        }
        let row = &mut self.rows[y];
        if row.len() <= x {
            row.resize(x + 1, Glyph::default());
        }
        &mut row[x]
    }
}

impl DisplaySink for MemorySurface {
    fn write_char(&mut self, x: usize, y: usize, ch: char) {
        self.slot(x, y).ch = ch;
    }

    fn write_attribute(&mut self, x: usize, y: usize, colour: Colour) {
        self.slot(x, y).colour = colour;
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
