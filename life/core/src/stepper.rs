//! Generation Stepper
//!
//! Applies B3/S23 with colour inheritance on birth. The old grid is only ever
//! read; every call allocates the next generation from scratch.

use crate::cell::Cell;
use crate::grid::Grid;
use crate::neighbours::{analyze, NeighbourResult, BIRTH_COUNT};

/// Next state of one cell given its neighbourhood
///
/// Survivors keep their exact cell (colour included); births take the
/// neighbourhood's majority tag; everything else dies uncoloured.
#[must_use]
pub fn next_cell(cell: &Cell, neighbours: &NeighbourResult) -> Cell {
    let count = neighbours.count();

    if cell.is_alive() {
        match count {
            2..=BIRTH_COUNT => *cell,
            _ => Cell::dead(),
        }
    } else {
        match neighbours.majority() {
            Some(tag) if count == BIRTH_COUNT => Cell::alive(tag),
            _ => Cell::dead(),
        }
    }
}

/// Compute the next generation of `grid`
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    let mut births = 0usize;
    let mut deaths = 0usize;

    let next = Grid::from_fn(grid.width(), grid.height(), |x, y| {
        let cell = &grid[(x, y)];
        let next = next_cell(cell, &analyze(grid, x, y));
        match (cell.is_alive(), next.is_alive()) {
            (false, true) => births += 1,
            (true, false) => deaths += 1,
            _ => {}
        }
        next
    });

    tracing::trace!(births, deaths, population = next.population(), "Stepped grid");
    next
}
