//! Random initial population
//!
//! Scatters `(width × height) / 2` live cells over an empty grid. Positions are
//! drawn with replacement, so the real population is usually lower. A cell
//! picked again keeps its colour and gains the new channels.

use rand::Rng;

use crate::cell::{Cell, Channel, Colour};
use crate::grid::{Grid, GridError};

/// Colour made of 1–3 randomly drawn channels (repeats allowed)
pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    let draws = rng.gen_range(1..=3);
    let mut colour = pick_channel(rng).colour();
    for _ in 1..draws {
        colour |= pick_channel(rng);
    }
    colour
}

fn pick_channel<R: Rng + ?Sized>(rng: &mut R) -> Channel {
    Channel::ALL[rng.gen_range(0..Channel::ALL.len())]
}

/// Make `(x, y)` alive, OR-ing `colour` into any colour already there
fn plant(grid: &mut Grid, x: usize, y: usize, colour: Colour) -> Result<(), GridError> {
    let mixed = match grid.get(x, y).and_then(|cell| cell.colour()) {
        Some(existing) => existing | colour,
        None => colour,
    };
    grid.set(x, y, Cell::alive(mixed))
}

/// Build a randomly populated grid
///
/// # Errors
///
/// Returns [`GridError::EmptyDimensions`] if either dimension is zero.
pub fn seed_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    let target = grid.cell_count() / 2;

    for _ in 0..target {
        let y = rng.gen_range(0..height);
        let x = rng.gen_range(0..width);
        let colour = random_colour(rng);
        plant(&mut grid, x, y, colour)?;
    }

    tracing::debug!(
        width,
        height,
        target,
        population = grid.population(),
        "Seeded initial grid"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_grid() {
        let a = seed_grid(20, 10, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = seed_grid(20, 10, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_population_bounded_by_target() {
        let grid = seed_grid(30, 8, &mut StdRng::seed_from_u64(1)).unwrap();
        let population = grid.population();
        assert!(population > 0);
        assert!(population <= 30 * 8 / 2);
    }

    #[test]
    fn test_every_seeded_cell_is_coloured() {
        let grid = seed_grid(16, 16, &mut StdRng::seed_from_u64(99)).unwrap();
        for (_, cell) in grid.iter().filter(|(_, cell)| cell.is_alive()) {
            assert!(cell.colour().is_some());
        }
    }

    #[test]
    fn test_random_colour_is_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let colour = random_colour(&mut rng);
            assert!(Colour::from_bits(colour.bits()).is_some());
        }
    }

    #[test]
    fn test_replanting_mixes_colours() {
        let mut grid = Grid::new(2, 1).unwrap();
        plant(&mut grid, 0, 0, Colour::RED).unwrap();
        plant(&mut grid, 0, 0, Colour::BLUE).unwrap();
        plant(&mut grid, 1, 0, Colour::GREEN).unwrap();

        assert_eq!(grid[(0, 0)], Cell::alive(Colour::MAGENTA));
        assert_eq!(grid[(1, 0)], Cell::alive(Colour::GREEN));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_plant_off_grid_fails() {
        let mut grid = Grid::new(2, 1).unwrap();
        assert!(plant(&mut grid, 2, 0, Colour::RED).is_err());
    }

    #[test]
    fn test_single_cell_grid_seeds_nothing() {
        // (1 * 1) / 2 == 0 placements
        let grid = seed_grid(1, 1, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(seed_grid(0, 4, &mut StdRng::seed_from_u64(5)).is_err());
    }
}
