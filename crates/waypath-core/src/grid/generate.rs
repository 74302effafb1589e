//! Random grid generation.
//!
//! Picks two distinct endpoints, then scatters a random number of obstacles
//! (up to `ratio` of all cells) that never cover either endpoint. Used to
//! regenerate a grid between searches.

use std::collections::HashSet;

use rand::Rng;

use super::{build_grid, Cell, Grid};
use crate::bail_invalid;
use crate::error::Result;

/// A freshly generated grid and its endpoints
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

fn random_cell(rng: &mut impl Rng, rows: usize, cols: usize) -> Cell {
    Cell::new(rng.random_range(0..rows), rng.random_range(0..cols))
}

/// Generate a `rows x cols` grid with random endpoints and obstacles
pub fn generate_grid(rng: &mut impl Rng, rows: usize, cols: usize, ratio: f64) -> Result<GeneratedGrid> {
    let Some(cells) = rows.checked_mul(cols) else {
        bail_invalid!("grid dimensions", format!("{}x{} (too many cells)", rows, cols));
    };
    if cells < 2 {
        bail_invalid!("grid dimensions", format!("{}x{} (need at least 2 cells)", rows, cols));
    }
    if !(0.0..1.0).contains(&ratio) {
        bail_invalid!("obstacle ratio", ratio);
    }

    let start = random_cell(rng, rows, cols);
    let mut goal = random_cell(rng, rows, cols);
    while goal == start {
        goal = random_cell(rng, rows, cols);
    }

    let mut grid = build_grid((rows, cols), [])?;
    regenerate_obstacles(&mut grid, rng, start, goal, ratio)?;

    Ok(GeneratedGrid { grid, start, goal })
}

/// Replace the grid's obstacles with a random set avoiding `start` and `goal`.
///
/// Returns the number of obstacles placed.
pub fn regenerate_obstacles(
    grid: &mut Grid,
    rng: &mut impl Rng,
    start: Cell,
    goal: Cell,
    ratio: f64,
) -> Result<usize> {
    // `build_grid` guarantees the product fits
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = rows * cols;
    let reserved = if start == goal { 1 } else { 2 };
    let max_obstacles = ((cells as f64 * ratio) as usize).min(cells.saturating_sub(reserved));
    let count = rng.random_range(0..=max_obstacles);

    let mut positions = HashSet::with_capacity(count);
    while positions.len() < count {
        let cell = random_cell(rng, rows, cols);
        if cell != start && cell != goal {
            positions.insert(cell);
        }
    }

    grid.set_obstacles(positions)?;
    tracing::debug!(rows, cols, obstacles = count, "regenerated obstacles");
    Ok(count)
}
