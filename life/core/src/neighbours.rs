//! Neighbour Analyzer
//!
//! Counts the live Moore neighbours of a cell and, when exactly three of them
//! are alive, votes on the colour a newborn cell should inherit.
//!
//! # Edge policy
//!
//! The grid does not wrap. Neighbour positions that fall off the grid are
//! skipped, so corner cells have three candidates and edge cells five.
//!
//! # Tie-break
//!
//! Live neighbours are tallied per colour tag in an ordered map. The majority
//! is found by walking the tally in ascending tag order and keeping the first
//! tag whose count is strictly greater than every count before it. A tie is
//! therefore won by the lowest tag (`None` first, then colours by bit value),
//! regardless of where those neighbours sit around the cell.

use std::collections::BTreeMap;

use crate::cell::Colour;
use crate::grid::Grid;

/// Live-neighbour count that triggers a birth
pub const BIRTH_COUNT: u8 = 3;

/// Neighbour offsets in scan order: the row below in grid coordinates
/// (`y + 1`), then the row above (`y - 1`), then right and left.
pub const SCAN_ORDER: [(isize, isize); 8] = [
    (0, 1),
    (-1, 1),
    (1, 1),
    (0, -1),
    (-1, -1),
    (1, -1),
    (1, 0),
    (-1, 0),
];

/// What a cell's neighbourhood looks like this generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighbourResult {
    count: u8,
    majority: Option<Option<Colour>>,
}

impl NeighbourResult {
    /// Number of live neighbours (0..=8)
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Winning colour tag, present only when [`count`](Self::count) is 3
    ///
    /// The inner `None` means the majority of live neighbours were uncoloured.
    #[must_use]
    pub fn majority(&self) -> Option<Option<Colour>> {
        self.majority
    }
}

/// In-bounds neighbour coordinates of `(x, y)`, in scan order
pub fn candidates(grid: &Grid, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    SCAN_ORDER.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        grid.contains(nx, ny).then_some((nx, ny))
    })
}

/// Analyze the neighbourhood of `(x, y)`
#[must_use]
pub fn analyze(grid: &Grid, x: usize, y: usize) -> NeighbourResult {
    let mut count = 0u8;
    let mut tally: BTreeMap<Option<Colour>, u8> = BTreeMap::new();

    for (nx, ny) in candidates(grid, x, y) {
        let neighbour = &grid[(nx, ny)];
        if neighbour.is_alive() {
            count += 1;
            *tally.entry(neighbour.colour()).or_insert(0) += 1;
        }
    }

    let majority = (count == BIRTH_COUNT).then(|| majority_tag(&tally));

    NeighbourResult { count, majority }
}

/// First tag (in key order) holding the strictly highest tally
fn majority_tag(tally: &BTreeMap<Option<Colour>, u8>) -> Option<Colour> {
    let mut best: Option<(Option<Colour>, u8)> = None;
    for (&tag, &n) in tally {
        match best {
            Some((_, top)) if n <= top => {}
            _ => best = Some((tag, n)),
        }
    }
    best.and_then(|(tag, _)| tag)
}
