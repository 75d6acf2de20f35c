//! Grid
//!
//! Fixed-size, row-major store of [`Cell`]s. A grid's dimensions never change
//! after construction; each generation produces a brand new grid.

use std::ops::Index;

use thiserror::Error;

use crate::cell::Cell;

/// Errors from building or editing a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// `width * height` does not fit in memory addressing
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// A coordinate fell outside the grid
    #[error("cell ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
}

/// A `width × height` board of cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if either dimension is zero and
    /// [`GridError::TooLarge`] if the cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::dead(); len],
        })
    }

    /// Create a dead grid and place the given cells on it
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or if any placement is out of bounds.
    pub fn with_cells<I>(width: usize, height: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = ((usize, usize), Cell)>,
    {
        let mut grid = Self::new(width, height)?;
        for ((x, y), cell) in cells {
            grid.set(x, y, cell)?;
        }
        Ok(grid)
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(x, y)` lies on the grid
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at `(x, y)`, or `None` off the grid
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.contains(x, y) {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Replace the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is off the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.cells[y * self.width + x] = cell;
        Ok(())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Iterate every cell with its coordinate, row by row
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width, i / width), cell))
    }

    /// Number of live cells, summed row by row
    #[must_use]
    pub fn population(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    /// Build a grid of the same size from a per-coordinate function
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics if `(x, y)` is off the grid.
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellState, Colour};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.population(), 0);
        assert!(grid.iter().all(|(_, cell)| *cell == CellState::Dead));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::EmptyDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let side = usize::MAX / 2 + 1;
        assert_eq!(
            Grid::new(side, 2),
            Err(GridError::TooLarge {
                width: side,
                height: 2
            })
        );
        assert!(matches!(
            Grid::with_cells(usize::MAX, usize::MAX, std::iter::empty()),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 1, Cell::alive(Colour::RED)).unwrap();

        assert_eq!(grid.get(2, 1), Some(&Cell::alive(Colour::RED)));
        assert_eq!(grid[(2, 1)].colour(), Some(Colour::RED));
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = grid.set(2, 0, Cell::alive(None)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cell (2, 0) is outside a 2x2 grid"
        );
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2).unwrap();
        let _ = grid[(0, 2)];
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let coords: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_with_cells_counts_duplicates_once() {
        let grid = Grid::with_cells(
            3,
            3,
            [
                ((0, 0), Cell::alive(Colour::BLUE)),
                ((0, 0), Cell::alive(Colour::GREEN)),
                ((2, 2), Cell::alive(None)),
            ],
        )
        .unwrap();
        assert_eq!(grid.population(), 2);
        assert_eq!(grid[(0, 0)].colour(), Some(Colour::GREEN));
    }
}
