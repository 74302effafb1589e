//! Uniform grid with blocking obstacles.
//!
//! A cell's neighbors are the four axis-aligned cells inside the grid that
//! are not obstacles, each at unit cost. Neighbors are derived from the
//! obstacle set on demand rather than stored. Searches borrow the grid
//! immutably, so obstacles can only be regenerated between searches.

pub mod generate;
pub mod map;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};
use crate::graph::{Cost, GraphProvider};

pub use generate::{generate_grid, regenerate_obstacles, GeneratedGrid};
pub use map::{parse_map, render_map, ParsedMap};

/// A `(row, column)` grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// L1 distance to `other`
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl std::str::FromStr for Cell {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| WaypathError::malformed("cell", format!("expected ROW,COL, got '{}'", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| WaypathError::malformed("cell", format!("'{}': {}", s, e)))
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}

/// Rectangular grid of `rows x cols` cells with a fixed obstacle set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    obstacles: HashSet<Cell>,
}

/// Build a grid of the given `(rows, cols)` dimensions
pub fn build_grid(dimensions: (usize, usize), obstacles: impl IntoIterator<Item = Cell>) -> Result<Grid> {
    let (rows, cols) = dimensions;
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        bail_invalid!("grid dimensions", format!("{}x{}", rows, cols));
    }
    let mut grid = Grid {
        rows,
        cols,
        obstacles: HashSet::new(),
    };
    for cell in obstacles {
        grid.check_cell(&cell)?;
        grid.obstacles.insert(cell);
    }
    Ok(grid)
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_obstacle(&self, cell: &Cell) -> bool {
        self.obstacles.contains(cell)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Obstacles in row-major order
    pub fn obstacles(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.obstacles.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Error unless `cell` lies inside the grid
    pub fn check_cell(&self, cell: &Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(WaypathError::invalid_value(
                "cell",
                format!("{} outside {}x{} grid", cell, self.rows, self.cols),
            ))
        }
    }

    /// Both endpoints must lie inside the grid, and the start must be free
    pub fn check_endpoints(&self, start: &Cell, goal: &Cell) -> Result<()> {
        if !self.in_bounds(start) || self.is_obstacle(start) {
            return Err(WaypathError::invalid_start(start));
        }
        if !self.in_bounds(goal) {
            return Err(WaypathError::invalid_goal(goal));
        }
        Ok(())
    }

    /// Replace the obstacle set. Requires exclusive access, so it cannot
    /// race with a search borrowing the grid.
    pub fn set_obstacles(&mut self, obstacles: impl IntoIterator<Item = Cell>) -> Result<()> {
        let mut next = HashSet::new();
        for cell in obstacles {
            self.check_cell(&cell)?;
            next.insert(cell);
        }
        self.obstacles = next;
        Ok(())
    }

    /// Orthogonal in-bounds neighbors: up, down, left, right
    fn adjacent(&self, cell: &Cell) -> impl Iterator<Item = Cell> + '_ {
        let Cell { row, col } = *cell;
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            Some(Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            Some(Cell::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| self.in_bounds(c))
    }
}

impl GraphProvider for Grid {
    type Node = Cell;

    fn contains(&self, node: &Cell) -> bool {
        self.in_bounds(node)
    }

    fn neighbors(&self, node: &Cell, out: &mut Vec<(Cell, Cost)>) {
        if !self.in_bounds(node) {
            return;
        }
        out.extend(
            self.adjacent(node)
                .filter(|c| !self.is_obstacle(c))
                .map(|c| (c, Cost::ONE)),
        );
    }

    fn is_blocked(&self, node: &Cell) -> bool {
        self.is_obstacle(node)
    }
}
